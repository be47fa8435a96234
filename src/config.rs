//! Curator configuration persistence
//!
//! Stores user preferences in `~/.config/curate/config.yaml`

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Curator configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuratorConfig {
    /// Where the curated collection is persisted (defaults to `~/.config/curate/dataset.json`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_path: Option<PathBuf>,
    /// Directory exports are written into (defaults to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Render the output markup beneath the editor
    #[serde(default = "default_show_preview")]
    pub show_preview: bool,
}

fn default_show_preview() -> bool {
    true
}

impl Default for CuratorConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            export_dir: None,
            show_preview: default_show_preview(),
        }
    }
}

impl CuratorConfig {
    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load config from a specific file, falling back to defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Resolved store path: configured value, else the default under the config dir
    pub fn resolved_store_path(&self) -> Option<PathBuf> {
        self.store_path
            .clone()
            .or_else(crate::config_paths::store_file)
    }

    /// Resolved export directory: configured value, else the current directory
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
