use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> PathBuf {
        ProjectDirs::from("", "", "time-fighter")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
            .unwrap_or_else(|| PathBuf::from("time_fighter_config.json"))
    }

    pub fn log_path() -> PathBuf {
        if let Ok(home) = std::env::var("HOME") {
            PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("time-fighter")
                .join("time-fighter.log")
        } else {
            ProjectDirs::from("", "", "time-fighter")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("time-fighter.log"))
                .unwrap_or_else(|| PathBuf::from("time-fighter.log"))
        }
    }
}
