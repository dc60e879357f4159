//! Loader utilities for building a [`HomieWorld`] from serialized data.
//!
//! World content comes from the RON `WorldDef`; settings and help text are TOML-backed and
//! fall back to built-in defaults when missing.

pub mod help;
pub mod settings;
pub mod worlddef;

use std::path::PathBuf;

use anyhow::{Context, Result};
use homie_data::ValidationError;
use log::info;
use thiserror::Error;

use crate::data_paths::data_path;
use crate::loader::worlddef::{build_world_from_def, load_worlddef};
use crate::world::HomieWorld;

/// Defects in the supplied world data. These stop the game before the first turn.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("could not read '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse world RON from '{path}'")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("world definition failed validation:\n{}", format_validation(.0))]
    Validation(Vec<ValidationError>),
    #[error("world definition is missing {0}")]
    Incomplete(String),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Load the `HomieWorld` from `world.ron` in the data directory.
///
/// # Errors
/// Errors bubble up from file IO, RON parsing, or validation of the definition.
pub fn load_world() -> Result<HomieWorld> {
    let world_ron_path = data_path("world.ron");
    let def = load_worlddef(&world_ron_path).context("while loading worlddef from file")?;
    let world = build_world_from_def(&def).context("while building world from worlddef")?;
    info!("{} rooms added to HomieWorld", world.rooms().len());
    info!("{} things added to HomieWorld", world.things().len());
    info!("{} goals added to HomieWorld", world.goals().len());
    Ok(world)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_lists_every_problem() {
        let err = LoadError::Validation(vec![
            ValidationError::MissingDefinition {
                kind: "room",
                id: "Scullery".into(),
            },
            ValidationError::InvalidValue {
                context: "thing 'Mop' has a blank name".into(),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("- room 'Scullery' is never defined"));
        assert!(text.contains("- invalid value (thing 'Mop' has a blank name)"));
    }

    #[test]
    fn incomplete_names_missing_entry() {
        let err = LoadError::Incomplete("goal ShowerTaken".into());
        assert_eq!(err.to_string(), "world definition is missing goal ShowerTaken");
    }
}
