//! Persistent navigation state
//!
//! Remembers which record was on screen so a restart resumes in place.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Navigation state that survives restarts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Index of the displayed record
    #[serde(default)]
    pub data_idx: usize,
    /// Layout spacing toggle
    #[serde(default)]
    pub upper_space: bool,
}

impl Session {
    /// Load the session from the default location
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::session_file() else {
            return Self::default();
        };
        Self::load_from(&path)
    }

    /// Load the session from `path`; a missing or unreadable file starts fresh
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable session at {}: {}", path.display(), e);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Save the session to `path`
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Session::load_from(&dir.path().join("session.json")),
            Session::default()
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("session.json");
        let session = Session {
            data_idx: 12,
            upper_space: true,
        };
        session.save_to(&path).unwrap();
        assert_eq!(Session::load_from(&path), session);
    }

    #[test]
    fn test_wire_names() {
        let text = serde_json::to_string(&Session {
            data_idx: 3,
            upper_space: false,
        })
        .unwrap();
        assert_eq!(text, r#"{"dataIdx":3,"upperSpace":false}"#);
    }

    #[test]
    fn test_corrupt_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{{{").unwrap();
        assert_eq!(Session::load_from(&path), Session::default());
    }
}
