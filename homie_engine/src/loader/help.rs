//! module `loader::help`

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// A single command in the help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Loads help commands from a TOML file
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let wrapper: HelpCommandFile =
        toml::from_str(&help_file).with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!(
        "{} help commands loaded from '{}'",
        wrapper.commands.len(),
        toml_path.display()
    );

    Ok(wrapper.commands)
}

/// Loads help commands, or the built-in list if the file is unusable.
pub fn load_help_or_default(toml_path: &Path) -> Vec<HelpCommand> {
    load_help_commands(toml_path).unwrap_or_else(|e| {
        warn!("{e:#}; using built-in help");
        default_help()
    })
}

fn entry(command: &str, description: &str) -> HelpCommand {
    HelpCommand {
        command: command.to_string(),
        description: description.to_string(),
    }
}

/// Built-in help listing.
pub fn default_help() -> Vec<HelpCommand> {
    vec![
        entry("north, south, east, west, up, down (n, s, e, w, u, d ...)", "Walk in a direction."),
        entry("look [thing]", "Describe the room again, or look at something."),
        entry("get / drop <things | everything>", "Pick things up or put them down."),
        entry("inventory (i)", "List what you are carrying."),
        entry("checklist", "Review what you have to do today."),
        entry("quit", "Leave the game."),
    ]
}
