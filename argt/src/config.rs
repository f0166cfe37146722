//! Configuration module for the argt CLI.
//!
//! Settings come from an `argt.toml` file; command-line flags override them.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{ArgtError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "argt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lex-specific configuration.
    #[serde(default)]
    pub lex: LexConfig,
}

/// Lex-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LexConfig {
    /// How tokens are printed.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print line and column with each token.
    #[serde(default = "default_true")]
    pub show_positions: bool,

    /// Leave comment tokens out of the output.
    #[serde(default)]
    pub skip_comments: bool,

    /// Fail when an input has unknown tokens or lexical errors.
    #[serde(default)]
    pub deny_unknown: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LexConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_positions: true,
            skip_comments: false,
            deny_unknown: false,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/argt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ArgtError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            ArgtError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("argt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("argt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.lex.format, OutputFormat::Text);
        assert!(config.lex.show_positions);
        assert!(!config.lex.skip_comments);
        assert!(!config.lex.deny_unknown);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(
            &config_path,
            "verbose = true\n\n[lex]\nformat = \"json\"\nshow_positions = false\nskip_comments = true\ndeny_unknown = true\n",
        )
        .unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.verbose);
        assert_eq!(config.lex.format, OutputFormat::Json);
        assert!(!config.lex.show_positions);
        assert!(config.lex.skip_comments);
        assert!(config.lex.deny_unknown);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lex]\nskip_comments = true\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert!(!config.verbose);
        assert!(config.lex.show_positions);
        assert!(config.lex.skip_comments);
        assert_eq!(config.lex.format, OutputFormat::Text);
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = Config::default();
        config.lex.format = OutputFormat::Json;
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_invalid_format_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[lex]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, ArgtError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/argt.toml"));
        assert!(matches!(result, Err(ArgtError::Config(_))));
    }
}
