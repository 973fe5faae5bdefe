use crate::error::{QuotezError, Result};
use crate::model::MAX_QUOTE_LENGTH;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILENAME: &str = "config.json";

/// Configuration for quotez, stored as JSON
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotezConfig {
    /// Longest quote accepted, in characters, before and after transformation
    #[serde(default = "default_max_quote_length")]
    pub max_quote_length: usize,

    /// Quotes preloaded into every session as Normal quotes
    #[serde(default)]
    pub seed_quotes: Vec<String>,
}

fn default_max_quote_length() -> usize {
    MAX_QUOTE_LENGTH
}

impl Default for QuotezConfig {
    fn default() -> Self {
        Self {
            max_quote_length: MAX_QUOTE_LENGTH,
            seed_quotes: Vec::new(),
        }
    }
}

impl QuotezConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(config_path: P) -> Result<Self> {
        let config_path = config_path.as_ref();

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path)?;
        let config: QuotezConfig = serde_json::from_str(&content)?;
        config.validate()?;
        debug!(path = %config_path.display(), "loaded config");
        Ok(config)
    }

    /// Save config to the given file, creating parent directories as needed
    pub fn save<P: AsRef<Path>>(&self, config_path: P) -> Result<()> {
        let config_path = config_path.as_ref();

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_quote_length == 0 {
            return Err(QuotezError::Config(
                "max_quote_length must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Platform default location, e.g. `~/.config/quotez/config.json` on Linux
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "quotez", "quotez")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
    }
}
