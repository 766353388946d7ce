use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::app_dirs::AppDirs;
use crate::session::DEFAULT_COUNTDOWN;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("initial countdown must be at least 1 second, got {0}")]
    InvalidCountdown(u32),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// seconds on the clock at the start of a round
    pub initial_countdown: u32,
    /// score blink and button pulse on every tap
    pub animations: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_countdown: DEFAULT_COUNTDOWN,
            animations: true,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.initial_countdown == 0 {
            return Err(ConfigError::InvalidCountdown(self.initial_countdown));
        }
        Ok(())
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> Result<(), ConfigError>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self {
            path: AppDirs::config_path(),
        }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    /// Missing or unreadable files fall back to defaults
    fn load(&self) -> Config {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(_) => return Config::default(),
        };
        match serde_json::from_slice::<Config>(&bytes) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring malformed config");
                Config::default()
            }
        }
    }

    fn save(&self, cfg: &Config) -> Result<(), ConfigError> {
        cfg.validate()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("dir").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            initial_countdown: 3,
            animations: false,
        };
        store.save(&cfg).unwrap();
        assert!(path.exists());
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "initial_countdown": 3 }"#).unwrap();
        let cfg = FileConfigStore::with_path(&path).load();
        assert_eq!(cfg.initial_countdown, 3);
        assert!(cfg.animations);
    }

    #[test]
    fn zero_countdown_is_rejected() {
        let cfg = Config {
            initial_countdown: 0,
            ..Config::default()
        };
        assert_matches!(cfg.validate(), Err(ConfigError::InvalidCountdown(0)));

        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("config.json"));
        assert_matches!(store.save(&cfg), Err(ConfigError::InvalidCountdown(0)));
    }

    #[test]
    fn invalid_countdown_message() {
        let err = ConfigError::InvalidCountdown(0);
        assert_eq!(
            err.to_string(),
            "initial countdown must be at least 1 second, got 0"
        );
    }
}
