//! WorldDef loader and conversion.

use std::fs;
use std::path::Path;

use homie_data::{WorldDef, validate_world};
use log::{info, warn};

use crate::loader::LoadError;
use crate::world::HomieWorld;

/// Load a `WorldDef` from a RON file.
///
/// # Errors
/// - `LoadError::Io` if the file can't be read
/// - `LoadError::Parse` if the contents aren't a valid `WorldDef`
pub fn load_worlddef(path: &Path) -> Result<WorldDef, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let def = ron::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!("worlddef read from '{}'", path.display());
    Ok(def)
}

/// Validate a `WorldDef` and convert it into the immutable world catalog.
///
/// # Errors
/// - `LoadError::Validation` with every problem found, if the definition is malformed
pub fn build_world_from_def(def: &WorldDef) -> Result<HomieWorld, LoadError> {
    let errors = validate_world(def);
    if !errors.is_empty() {
        for err in &errors {
            warn!("worlddef: {err}");
        }
        return Err(LoadError::Validation(errors));
    }
    HomieWorld::from_def(def)
}
