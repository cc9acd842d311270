//! Where inplace keeps its files
//!
//! Everything lives in one directory: `~/.config/inplace/` on Unix and macOS
//! (honouring `XDG_CONFIG_HOME`), the roaming app data folder on Windows.

use std::{env, fs, path::PathBuf};

const APP_DIR: &str = "inplace";

/// Log file prefix; daily rotation appends `.YYYY-MM-DD`
pub const LOG_FILE_PREFIX: &str = "inplace.log";

pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(target_os = "windows") {
        dirs::config_dir()
    } else {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    };
    base.map(|base| base.join(APP_DIR))
}

/// Widget config read by `WidgetConfig::load`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Newest rotated log, or the unrotated name when none exists yet
pub fn log_file() -> Option<PathBuf> {
    let logs = logs_dir()?;
    let newest = fs::read_dir(&logs)
        .ok()
        .into_iter()
        .flatten()
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOG_FILE_PREFIX))
        })
        // Date suffixes order lexically
        .max();
    Some(newest.unwrap_or_else(|| logs.join(LOG_FILE_PREFIX)))
}

/// Create the logs directory (and the config directory above it)
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    fs::create_dir_all(&logs)
        .map_err(|e| format!("Failed to create {}: {}", logs.display(), e))?;
    Ok(logs)
}
