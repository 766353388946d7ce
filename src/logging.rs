use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Env var that enables logging without the CLI flag, e.g. `TIME_FIGHTER_LOG=debug`
pub const LOG_ENV: &str = "TIME_FIGHTER_LOG";

/// Resolve the filter from the CLI level first, then the env var. None keeps logging off.
pub fn filter_from(level: Option<&str>) -> Option<EnvFilter> {
    match level {
        Some(level) => Some(EnvFilter::new(format!("time_fighter={level}"))),
        None => EnvFilter::try_from_env(LOG_ENV).ok(),
    }
}

/// Install a subscriber that appends to `path`.
/// The terminal belongs to the game, so nothing is ever written to stdout.
pub fn init(filter: EnvFilter, path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_level_wins() {
        let filter = filter_from(Some("debug")).unwrap();
        assert_eq!(filter.to_string(), "time_fighter=debug");
    }
}
