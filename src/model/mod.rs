//! Application model - the complete state of the curator
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod dataset;
pub mod editor;
pub mod record;
pub mod ui;

pub use dataset::{Dataset, DatasetError};
pub use editor::{EditorState, ViewPhase};
pub use record::{default_weight, CurationStatus, Record, Weight};
pub use ui::UiState;

use crate::config::CuratorConfig;
use crate::session::Session;

/// The complete application model
#[derive(Debug, Clone, Default)]
pub struct AppModel {
    /// In-memory mirror of the persisted collection (`None` until loaded)
    pub dataset: Option<Dataset>,
    /// Current index and working copy
    pub editor: EditorState,
    /// Status line and layout state
    pub ui: UiState,
    /// Persisted configuration
    pub config: CuratorConfig,
}

impl AppModel {
    /// Create a model from config and the restored session
    ///
    /// `stored` is whatever the store held at startup; the session index is
    /// clamped into range once the collection is known.
    pub fn new(config: CuratorConfig, session: Session, stored: Option<Dataset>) -> Self {
        let mut model = Self {
            dataset: None,
            editor: EditorState::at(session.data_idx),
            ui: UiState {
                upper_space: session.upper_space,
                ..UiState::new()
            },
            config,
        };
        if let Some(dataset) = stored.filter(|d| !d.is_empty()) {
            model.editor.reload(&dataset, session.data_idx);
            model.dataset = Some(dataset);
        }
        model
    }

    pub fn record_count(&self) -> usize {
        self.dataset.as_ref().map_or(0, Dataset::len)
    }

    pub fn phase(&self) -> ViewPhase {
        self.editor.phase()
    }

    /// Whether "Prev" is available
    pub fn can_go_prev(&self) -> bool {
        self.editor.working.is_some() && self.editor.index > 0
    }

    /// Whether "Next" is available
    pub fn can_go_next(&self) -> bool {
        self.editor.working.is_some() && self.editor.index + 1 < self.record_count()
    }

    /// Reload the working copy from the dataset mirror at `index`
    pub fn reload_at(&mut self, index: usize) {
        if let Some(dataset) = self.dataset.as_ref() {
            self.editor.reload(dataset, index);
        }
    }

    /// Navigation state worth persisting across restarts
    pub fn session(&self) -> Session {
        Session {
            data_idx: self.editor.index,
            upper_space: self.ui.upper_space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(n: usize) -> Dataset {
        Dataset::new(
            (0..n)
                .map(|i| Record::new(format!("q{}", i), format!("a{}", i)))
                .collect(),
        )
    }

    #[test]
    fn test_new_without_store_is_empty() {
        let model = AppModel::new(CuratorConfig::default(), Session::default(), None);
        assert_eq!(model.phase(), ViewPhase::Empty);
        assert!(!model.can_go_prev());
        assert!(!model.can_go_next());
    }

    #[test]
    fn test_new_clamps_session_index() {
        let session = Session {
            data_idx: 10,
            upper_space: true,
        };
        let model = AppModel::new(CuratorConfig::default(), session, Some(dataset(3)));
        assert_eq!(model.editor.index, 2);
        assert!(model.ui.upper_space);
        assert!(model.can_go_prev());
        assert!(!model.can_go_next());
    }

    #[test]
    fn test_empty_store_stays_empty() {
        let model = AppModel::new(
            CuratorConfig::default(),
            Session::default(),
            Some(Dataset::default()),
        );
        assert_eq!(model.phase(), ViewPhase::Empty);
        assert!(model.dataset.is_none());
    }
}
