//! Configuration file support for Stride.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/stride/config.toml`. Every
//! table is optional.

use crate::calculator::DEFAULT_STEP_LENGTH_M;
use crate::{Calculator, Error, Result, UserProfile};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Stored biometrics; command-line flags take precedence
    #[serde(default)]
    pub profile: Option<ProfileConfig>,

    #[serde(default)]
    pub calculator: CalculatorConfig,
}

/// User biometrics
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub weight_kg: f64,
    pub height_m: f64,
}

/// Formula parameters
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default = "default_step_length_m")]
    pub step_length_m: f64,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            step_length_m: default_step_length_m(),
        }
    }
}

fn default_step_length_m() -> f64 {
    DEFAULT_STEP_LENGTH_M
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        match Self::default_config_path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            Some(config_path) => {
                tracing::debug!(
                    "No config file found at {:?}, using defaults",
                    config_path
                );
                Ok(Self::default())
            }
            None => {
                tracing::debug!("No config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path, if the platform has a config directory
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|base| base.join("stride").join("config.toml"))
    }

    /// Save the configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Build a calculator from the configured step length
    pub fn calculator(&self) -> Result<Calculator> {
        Calculator::new(self.calculator.step_length_m)
    }

    /// Validated profile, if one is configured
    pub fn profile(&self) -> Option<Result<UserProfile>> {
        self.profile
            .as_ref()
            .map(|p| UserProfile::new(p.weight_kg, p.height_m))
    }
}
