//! TOML configuration file support for the dump command.
//!
//! Instead of repeating CLI flags, defaults can live in a config file:
//!
//! ```toml
//! # pawxml.toml
//! [dump]
//! format = "json"
//! threshold = 200
//! edge_items = 5
//! pretty = true
//! ```
//!
//! Flags given on the command line take precedence over the file.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use super::OutputFormat;

/// Root configuration structure for pawxml.toml files.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Dump-specific settings.
    #[serde(default)]
    pub dump: DumpConfig,
}

/// Configuration for the dump command.
#[derive(Debug, Default, Deserialize)]
pub struct DumpConfig {
    /// Output format (text or json).
    pub format: Option<OutputFormat>,

    /// Arrays longer than this are summarized in text output.
    pub threshold: Option<usize>,

    /// Values kept at each end of a summarized array.
    pub edge_items: Option<usize>,

    /// Indent JSON output.
    pub pretty: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [dump]
            format = "json"
            threshold = 200
            edge_items = 5
            pretty = false
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.dump.format, Some(OutputFormat::Json));
        assert_eq!(config.dump.threshold, Some(200));
        assert_eq!(config.dump.edge_items, Some(5));
        assert_eq!(config.dump.pretty, Some(false));
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [dump]
            format = "text"
        "#;

        let config = Config::from_str(toml).unwrap();
        assert_eq!(config.dump.format, Some(OutputFormat::Text));
        assert_eq!(config.dump.threshold, None);
    }

    #[test]
    fn test_empty_config() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.dump.format, None);
    }

    #[test]
    fn test_unknown_format_rejected() {
        let toml = r#"
            [dump]
            format = "yaml"
        "#;
        assert!(Config::from_str(toml).is_err());
    }
}
