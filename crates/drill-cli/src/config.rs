//! Optional JSON configuration for the `drill` binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// How answers are printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputFormat,
    /// `tracing` filter directive used when neither `RUST_LOG` nor `-v` is given
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output: OutputFormat::Text,
            log_filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Per-user config location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("drill").join("config.json"))
    }

    /// Load from an explicit path, or fall back to the per-user file.
    ///
    /// An explicit path must exist and parse. The per-user file is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: Self = serde_json::from_str(&json)
            .with_context(|| format!("parsing config {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_full_config() {
        let file = write_config(r#"{"output": "json", "log_filter": "drill_core=trace"}"#);
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "drill_core=trace");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let file = write_config(r#"{"output": "json"}"#);
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.log_filter, "warn");

        let file = write_config("{}");
        assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.json"))).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let file = write_config(r#"{"output": "yaml"}"#);
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }
}
