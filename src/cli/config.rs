//! Configuration management for medaltally
//!
//! Provides TOML-based configuration with defaults and validation.
//! Location: ~/.medaltally/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::errors::{MedalError, Result};
use crate::reference::ReferenceSets;

/// Complete configuration for medaltally
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Input, table and export locations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub input_file: String,
    pub table_file: String,
    pub export_dir: String,
}

/// Optional replacements for the built-in name lists
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceConfig {
    pub countries_file: Option<String>,
    pub sports_file: Option<String>,
}

/// Terminal output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub color_output: bool,
    pub show_progress: bool,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            input_file: "olympics2024_data.txt".to_string(),
            table_file: "olympics2024.csv".to_string(),
            export_dir: ".".to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_output: true,
            show_progress: true,
        }
    }
}

impl Config {
    /// Load configuration from file or use defaults
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        if let Some(config_path) = path {
            Self::load_from_file(&config_path)
        } else {
            Self::load_default()
        }
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| MedalError::ConfigError(format!("Failed to read config: {}", e)))?;

        let config: Config = toml::from_str(&contents)
            .map_err(|e| MedalError::ConfigError(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load from ~/.medaltally/config.toml when present, else built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Some(config_path) = Self::default_path() {
            if config_path.exists() {
                return Self::load_from_file(&config_path);
            }
        }

        Ok(Config::default())
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".medaltally").join("config.toml"))
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("paths.input_file", &self.paths.input_file),
            ("paths.table_file", &self.paths.table_file),
            ("paths.export_dir", &self.paths.export_dir),
        ] {
            if value.trim().is_empty() {
                return Err(MedalError::ConfigError(format!("{} must not be empty", key)));
            }
        }

        for (key, value) in [
            ("reference.countries_file", &self.reference.countries_file),
            ("reference.sports_file", &self.reference.sports_file),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(MedalError::ConfigError(format!(
                    "{} must not be empty when set",
                    key
                )));
            }
        }

        Ok(())
    }

    /// Save configuration to file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                MedalError::ConfigError(format!("Failed to create config dir: {}", e))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| MedalError::ConfigError(format!("Failed to write config: {}", e)))?;

        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| MedalError::ConfigError(format!("Failed to serialize config: {}", e)))
    }

    /// Expand tilde in paths
    pub fn expand_path(path: &str) -> PathBuf {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        PathBuf::from(path)
    }

    pub fn input_file(&self) -> PathBuf {
        Self::expand_path(&self.paths.input_file)
    }

    pub fn table_file(&self) -> PathBuf {
        Self::expand_path(&self.paths.table_file)
    }

    pub fn export_dir(&self) -> PathBuf {
        Self::expand_path(&self.paths.export_dir)
    }

    /// Build the reference sets this configuration points at
    pub fn reference_sets(&self) -> Result<ReferenceSets> {
        let countries = self.reference.countries_file.as_deref().map(Self::expand_path);
        let sports = self.reference.sports_file.as_deref().map(Self::expand_path);
        ReferenceSets::load(countries.as_deref(), sports.as_deref())
    }
}
