//! Presentation settings loaded from `settings.toml`.
//!
//! Settings are cosmetic, so a missing or broken file is never fatal: the defaults are used
//! and a warning is logged.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{info, warn};
use serde::{Deserialize, Serialize};

/// How the output sink paces and formats text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Delay after each printed line, in milliseconds.
    pub print_pause_ms: u64,
    /// Wrap column. `None` (or 0) follows the terminal width.
    pub wrap_width: Option<usize>,
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            print_pause_ms: 50,
            wrap_width: None,
            color: true,
        }
    }
}

impl Settings {
    /// Settings for tests and piped output: no pauses, fixed width, no color.
    pub fn plain() -> Self {
        Self {
            print_pause_ms: 0,
            wrap_width: Some(80),
            color: false,
        }
    }

    /// Effective wrap width.
    pub fn width(&self) -> usize {
        match self.wrap_width {
            Some(width) if width > 0 => width,
            _ => textwrap::termwidth().saturating_sub(1).max(20),
        }
    }
}

/// Loads settings from a TOML file, falling back to defaults on error.
///
/// This function never fails.
pub fn load_settings(toml_path: &Path) -> Settings {
    match try_load_settings(toml_path) {
        Ok(settings) => {
            info!("settings loaded from '{}'", toml_path.display());
            settings
        },
        Err(e) => {
            warn!(
                "Could not load settings from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            Settings::default()
        },
    }
}

fn try_load_settings(toml_path: &Path) -> Result<Settings> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading settings from '{}'", toml_path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing settings from '{}'", toml_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_gives_defaults() {
        let settings = load_settings(Path::new("no/such/settings.toml"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.print_pause_ms, 50);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "color = false").unwrap();
        let settings = load_settings(file.path());
        assert!(!settings.color);
        assert_eq!(settings.print_pause_ms, 50);
        assert_eq!(settings.wrap_width, None);
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "print_pause_ms = \"slow\"").unwrap();
        assert_eq!(load_settings(file.path()), Settings::default());
    }

    #[test]
    fn zero_width_follows_terminal() {
        let settings = Settings {
            wrap_width: Some(0),
            ..Settings::plain()
        };
        assert!(settings.width() >= 20);
        assert_eq!(Settings::plain().width(), 80);
    }

    #[test]
    fn shipped_settings_parse() {
        let settings = try_load_settings(Path::new("data/settings.toml")).expect("shipped settings should parse");
        assert!(settings.print_pause_ms <= 1000);
    }
}
