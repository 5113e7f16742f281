//! Path resolution for journal files

use migracheck_core::{Config, DEFAULT_STORAGE_KEY};
use std::path::{Path, PathBuf};

use crate::io::read_if_exists;
use crate::kv::FileStore;

/// Resolves standard paths under the data directory
#[derive(Debug, Clone)]
pub struct Paths {
    pub data_dir: PathBuf,
}

impl Paths {
    /// Resolve `~/.migracheck`
    pub fn new() -> std::io::Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "home directory not found")
        })?;

        Ok(Self {
            data_dir: home.join(".migracheck"),
        })
    }

    /// Use an explicit data directory
    pub fn with_data_dir(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Get migracheck.json path
    pub fn config_file(&self) -> PathBuf {
        self.data_dir.join("migracheck.json")
    }

    /// Directory holding one file per storage key
    pub fn store_dir(&self) -> PathBuf {
        self.data_dir.join("store")
    }

    /// Load migracheck.json, falling back to defaults
    pub fn load_config(&self) -> Config {
        load_config(&self.config_file())
    }
}

fn load_config(config_path: &Path) -> Config {
    let content = match read_if_exists(config_path) {
        Ok(Some(c)) => c,
        Ok(None) => return Config::new(),
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "unreadable config, using defaults");
            return Config::new();
        }
    };

    match serde_json::from_str::<Config>(&content) {
        Ok(mut config) => {
            if !FileStore::is_valid_key(&config.storage_key) {
                tracing::warn!(
                    path = %config_path.display(),
                    key = %config.storage_key,
                    fallback = DEFAULT_STORAGE_KEY,
                    "invalid storage key in config"
                );
                config.storage_key = DEFAULT_STORAGE_KEY.to_string();
            }
            config
        }
        Err(e) => {
            tracing::warn!(path = %config_path.display(), error = %e, "malformed config, using defaults");
            Config::new()
        }
    }
}
