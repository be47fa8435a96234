//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::model::Dataset;

/// Field edits on the working copy
///
/// One variant per record attribute; edits never touch the store.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldMsg {
    SetInstruction(String),
    SetOutput(String),
    SetCurationStatus(i64),
    SetCurationMessage(String),
    /// Raw text; numeric input is stored as a number, anything else verbatim
    SetP(String),
}

/// Navigation between records
#[derive(Debug, Clone, PartialEq)]
pub enum NavMsg {
    /// Previous record (no-op at the first record)
    Prev,
    /// Next record (no-op at the last record)
    Next,
    /// Jump to an index, asking first if there are unsaved edits
    GoTo(usize),
    /// Jump without asking (after confirmation or when clean)
    Commit(usize),
}

/// Review actions that write the working copy back to the store
#[derive(Debug, Clone, PartialEq)]
pub enum CurationMsg {
    /// Save, asking first if there are unsaved edits
    Save { advance: bool },
    /// Save without asking
    CommitSave { advance: bool },
    /// Soft-delete, always asking first
    Delete,
    /// Soft-delete without asking
    CommitDelete,
    /// Reset the status to unreviewed and persist
    Recover,
    /// A write-back finished; carries the collection as stored
    Written {
        index: usize,
        advance: bool,
        result: Result<Dataset, String>,
    },
}

/// Application-level messages (file I/O, persistence, export)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Upload a dataset file
    LoadFile(PathBuf),
    /// Upload file was read
    FileLoaded {
        path: PathBuf,
        result: Result<String, String>,
    },
    /// Re-read the store, discarding unsaved edits
    ReloadStore,
    /// Store was read
    StoreLoaded(Result<Option<Dataset>, String>),
    /// A persist finished
    Persisted(Result<(), String>),
    /// Export the stored collection
    Export,
    /// Export finished with the written path
    Exported(Result<PathBuf, String>),
    /// Open the rendered output in the browser
    OpenPreview,
}

/// UI-specific messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// Toggle the extra spacing above the navigation bar
    ToggleUpperSpace,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    Field(FieldMsg),
    Nav(NavMsg),
    Curation(CurationMsg),
    App(AppMsg),
    Ui(UiMsg),
}

impl From<FieldMsg> for Msg {
    fn from(msg: FieldMsg) -> Self {
        Msg::Field(msg)
    }
}

impl From<NavMsg> for Msg {
    fn from(msg: NavMsg) -> Self {
        Msg::Nav(msg)
    }
}

impl From<CurationMsg> for Msg {
    fn from(msg: CurationMsg) -> Self {
        Msg::Curation(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}

impl From<UiMsg> for Msg {
    fn from(msg: UiMsg) -> Self {
        Msg::Ui(msg)
    }
}
