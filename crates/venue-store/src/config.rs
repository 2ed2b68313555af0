use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::access::DEFAULT_ACCESS_CODE;
use crate::Result;

/// Workspace configuration stored as `config.toml` in the data dir.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Access code attendees enter to open the companion. Falls back to
    /// the shipped default when unset.
    #[serde(default)]
    pub access_code: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn path_in(data_dir: &Path) -> PathBuf {
        data_dir.join("config.toml")
    }

    /// Configured access code, or the shipped default.
    pub fn access_code(&self) -> &str {
        self.access_code.as_deref().unwrap_or(DEFAULT_ACCESS_CODE)
    }
}
