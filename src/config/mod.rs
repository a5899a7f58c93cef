//! Configuration system for parsequill.
//!
//! This module provides the configuration structure for parsequill with
//! sensible defaults and support for serialization/deserialization via
//! serde. Configuration can be loaded from TOML files and merged with
//! command-line arguments.
//!
//! # Example
//!
//! ```
//! use parsequill::config::Config;
//!
//! // Use default configuration
//! let config = Config::default();
//! assert_eq!(config.max_key_length, 50);
//! assert_eq!(config.target, "df");
//!
//! // Create custom configuration
//! let custom = Config {
//!     indent_size: 4,
//!     ..Config::default()
//! };
//! ```

use crate::codegen::GeneratorMode;
use serde::{Deserialize, Serialize};

/// Configuration for the parsequill application.
///
/// # Fields
///
/// * `max_key_length` - Maximum printed length of an object key (default: 50)
/// * `max_value_length` - Maximum printed length of a scalar value (default: 50)
/// * `indent_size` - Number of spaces per indentation level (default: 2)
/// * `source` - Default source series expression (default: "df['log']")
/// * `target` - Default target dataframe expression (default: "df")
/// * `root_name` - Default root column name, empty for the raw source (default: "")
/// * `mode` - Default generation mode (default: deduplicated)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Maximum printed length of an object key
    #[serde(default = "default_max_key_length")]
    pub max_key_length: usize,

    /// Maximum printed length of a scalar value
    #[serde(default = "default_max_value_length")]
    pub max_value_length: usize,

    /// Number of spaces per indentation level
    #[serde(default = "default_indent_size")]
    pub indent_size: usize,

    /// Expression for the series holding the raw data
    #[serde(default = "default_source")]
    pub source: String,

    /// Expression for the dataframe receiving extracted columns
    #[serde(default = "default_target")]
    pub target: String,

    /// Root column name; empty means extract from the raw source
    #[serde(default)]
    pub root_name: String,

    /// Generation mode
    #[serde(default)]
    pub mode: GeneratorMode,
}

/// Returns the default maximum key length.
fn default_max_key_length() -> usize {
    50
}

/// Returns the default maximum value length.
fn default_max_value_length() -> usize {
    50
}

/// Returns the default indentation size.
fn default_indent_size() -> usize {
    2
}

/// Returns the default source series expression.
fn default_source() -> String {
    "df['log']".to_string()
}

/// Returns the default target dataframe expression.
fn default_target() -> String {
    "df".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_key_length: default_max_key_length(),
            max_value_length: default_max_value_length(),
            indent_size: default_indent_size(),
            source: default_source(),
            target: default_target(),
            root_name: String::new(),
            mode: GeneratorMode::default(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/parsequill/config.toml` on all platforms.
    pub fn config_path() -> Option<std::path::PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("parsequill");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't
    /// be read.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from_path(&path),
            None => Self::default(),
        }
    }

    /// Loads configuration from a specific TOML file.
    ///
    /// Missing or unreadable files yield the default configuration.
    pub fn load_from_path(path: &std::path::Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(contents) => toml::from_str(&contents).unwrap_or_else(|_| Self::default()),
            Err(_) => Self::default(),
        }
    }

    /// Saves configuration to the default config file.
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        self.save_to_path(&config_path)
    }

    /// Saves configuration to a specific TOML file, creating parent
    /// directories as needed.
    pub fn save_to_path(&self, path: &std::path::Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml_string = toml::to_string_pretty(self)?;
        std::fs::write(path, toml_string)?;

        Ok(())
    }
}
