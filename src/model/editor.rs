//! Editor state - the current index and the working copy being edited

use super::dataset::Dataset;
use super::record::Record;

/// Whether a record is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    /// Nothing loaded yet; the user is asked to upload a dataset
    Empty,
    /// A record is displayed and editable
    Editing,
}

/// Position in the dataset plus the possibly-edited snapshot of that record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorState {
    /// Index of the displayed record
    pub index: usize,
    /// Working copy; diverges from the store until saved
    pub working: Option<Record>,
    /// Unsaved edits exist
    pub is_changed: bool,
    /// The working copy's `p` is the display default, not a stored or typed value
    pub weight_defaulted: bool,
}

impl EditorState {
    /// Start at a given index (e.g. restored from the session)
    pub fn at(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ViewPhase {
        if self.working.is_some() {
            ViewPhase::Editing
        } else {
            ViewPhase::Empty
        }
    }

    /// Reload the working copy from `dataset` at `index`, discarding edits
    ///
    /// The index is clamped into range first.
    pub fn reload(&mut self, dataset: &Dataset, index: usize) {
        let clamped = dataset.clamp_index(index);
        if clamped != index {
            tracing::debug!(requested = index, clamped, "index clamped into range");
        }
        self.index = clamped;
        self.working = dataset.working_copy(clamped);
        self.weight_defaulted = dataset.get(clamped).is_some_and(Record::weight_is_unset);
        self.is_changed = false;
    }

    /// Apply an edit to the working copy and mark the view dirty
    ///
    /// Returns false when no record is loaded.
    pub fn edit(&mut self, f: impl FnOnce(&mut Record)) -> bool {
        match self.working.as_mut() {
            Some(record) => {
                f(record);
                self.is_changed = true;
                true
            }
            None => false,
        }
    }

    /// Whether the displayed record is soft-deleted
    pub fn is_deleted(&self) -> bool {
        self.working
            .as_ref()
            .is_some_and(|r| r.curation_status.is_deleted())
    }
}
