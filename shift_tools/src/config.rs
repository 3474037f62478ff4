use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Settings read from `shift_tools.toml`. Every field is optional.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ToolsConfig {
    /// SQLite file holding the preferences.
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Colour the month grid.
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_database() -> PathBuf {
    PathBuf::from("shift_calendar.db")
}
fn default_true() -> bool {
    true
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            color: true,
        }
    }
}

impl ToolsConfig {
    /// Reads `path`, or returns the defaults when the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("failed to parse config {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: ToolsConfig = toml::from_str("").unwrap();
        assert_eq!(config, ToolsConfig::default());
    }

    #[test]
    fn reads_all_fields() {
        let config: ToolsConfig = toml::from_str(
            r#"
            database = "/tmp/shifts.db"
            color = false
            "#,
        )
        .unwrap();
        assert_eq!(config.database, PathBuf::from("/tmp/shifts.db"));
        assert!(!config.color);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<ToolsConfig>("colour = true").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = ToolsConfig::load(Path::new("definitely/not/here.toml")).unwrap();
        assert_eq!(config, ToolsConfig::default());
    }
}
