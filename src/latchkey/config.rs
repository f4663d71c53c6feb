use crate::error::{LatchkeyError, Result};
use crate::model::Theme;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Configuration for latchkey, stored in `<data-dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LatchkeyConfig {
    /// Base URL that confirmation links are built on
    #[serde(default = "default_origin")]
    pub origin: String,

    /// Minimum password length enforced by the registration form
    #[serde(default = "default_min_password_length")]
    pub min_password_length: usize,

    /// Theme used when no preference has been stored yet
    #[serde(default)]
    pub default_theme: Theme,
}

fn default_origin() -> String {
    DEFAULT_ORIGIN.to_string()
}

fn default_min_password_length() -> usize {
    DEFAULT_MIN_PASSWORD_LENGTH
}

impl Default for LatchkeyConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            default_theme: Theme::default(),
        }
    }
}

impl LatchkeyConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LatchkeyError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            LatchkeyError::Config(format!("{}: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LatchkeyError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LatchkeyError::Serialization)?;
        fs::write(config_path, content).map_err(LatchkeyError::Io)?;
        Ok(())
    }

    /// Set the origin, dropping any trailing slash so links join cleanly
    pub fn set_origin(&mut self, origin: &str) {
        self.origin = origin.trim_end_matches('/').to_string();
    }
}
