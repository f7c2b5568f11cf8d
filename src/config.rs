//! Store configuration.
//!
//! Loading flow:
//! 1. Start with compiled [`StoreConfig::default()`]
//! 2. If a JSON config file exists, its keys override the defaults
//! 3. `TASKBOARD_*` environment variables override both
//!
//! Invalid environment values are ignored and fall back to the file/default.

use crate::{
    error::{BoardError, Result},
    storage::FileStorage,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_DATA_DIR: &str = "TASKBOARD_DATA_DIR";
pub const ENV_STATE_FILE: &str = "TASKBOARD_STATE_FILE";
pub const ENV_SEED: &str = "TASKBOARD_SEED";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreConfig {
    /// Directory holding the persisted snapshot
    pub data_dir: PathBuf,
    /// File name of the snapshot inside `data_dir`
    pub state_file: String,
    /// Seed demo boards when the loaded snapshot is empty
    pub seed_sample_data: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(FileStorage::DATA_DIR),
            state_file: FileStorage::STATE_FILE.to_string(),
            seed_sample_data: false,
        }
    }
}

impl StoreConfig {
    /// Default configuration with the data directory placed under `root`
    pub fn for_root(root: impl AsRef<Path>) -> Self {
        Self {
            data_dir: root.as_ref().join(FileStorage::DATA_DIR),
            ..Self::default()
        }
    }

    /// Loads defaults plus environment overrides
    pub fn load() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides();
        config
    }

    /// Loads a JSON config file over the defaults, then applies environment overrides.
    ///
    /// A missing file yields the defaults; malformed JSON is an error.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let mut config = if path.exists() {
            debug!(?path, "loading store config from file");
            let contents = std::fs::read_to_string(path)?;
            serde_json::from_str(&contents)
                .map_err(|e| BoardError::ConfigError(format!("{}: {}", path.display(), e)))?
        } else {
            debug!(?path, "store config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let read = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        if let Some(dir) = read(ENV_DATA_DIR) {
            self.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = read(ENV_STATE_FILE) {
            self.state_file = file;
        }
        if let Some(seed) = read(ENV_SEED).as_deref().and_then(parse_bool) {
            self.seed_sample_data = seed;
        }
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir.join(&self.state_file)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
