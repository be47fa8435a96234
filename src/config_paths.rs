//! Centralized configuration paths for curate
//!
//! All config and state files live under:
//! - Unix/macOS: `~/.config/curate/`
//! - Windows: `%APPDATA%\curate\`
//!
//! This module is the single source of truth for config paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "curate";

/// Base config directory for curate
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/curate`
///   - Else: `~/.config/curate`
///
/// Windows:
///   - `%APPDATA%\curate`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/curate/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/curate/dataset.json`
///
/// The fixed storage key for the persisted collection.
pub fn store_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("dataset.json"))
}

/// `~/.config/curate/session.json`
pub fn session_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("session.json"))
}

/// `~/.config/curate/preview.html`
pub fn preview_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("preview.html"))
}

/// `~/.config/curate/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Ensure the base config dir exists, returning it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Ensure logs dir exists, returning it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let config = ensure_config_dir()?;
    let logs = config.join("logs");
    ensure_dir(&logs)?;
    Ok(logs)
}
