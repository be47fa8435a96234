//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::messages::Msg;
use crate::model::{Dataset, Record};
use crate::session::Session;

/// Side effects requested by `update`
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Re-render the view
    Redraw,
    /// Read an uploaded file; replies with `AppMsg::FileLoaded`
    ReadFile { path: PathBuf },
    /// Read the store; replies with `AppMsg::StoreLoaded`
    LoadStore,
    /// Overwrite the store with the whole collection; replies with `AppMsg::Persisted`
    Persist(Dataset),
    /// Write one record back at `index`; replies with `CurationMsg::Written`,
    /// or alerts when nothing is stored
    WriteRecord {
        index: usize,
        record: Record,
        advance: bool,
    },
    /// Write the navigation state
    SaveSession(Session),
    /// Ask the user; dispatch `on_accept` if they agree, otherwise show `on_decline`
    Confirm {
        prompt: String,
        on_accept: Box<Msg>,
        on_decline: String,
    },
    /// Blocking notice to the user
    Alert(String),
    /// Export the stored collection; replies with `AppMsg::Exported`
    Export,
    /// Write the preview document and open it in the browser
    OpenPreview { html: String },
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Ask before dispatching `on_accept`
    pub fn confirm(
        prompt: impl Into<String>,
        on_accept: impl Into<Msg>,
        on_decline: impl Into<String>,
    ) -> Self {
        Cmd::Confirm {
            prompt: prompt.into(),
            on_accept: Box::new(on_accept.into()),
            on_decline: on_decline.into(),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::NavMsg;

    #[test]
    fn test_none_needs_no_redraw() {
        assert!(!Cmd::None.needs_redraw());
        assert!(!Cmd::batch(vec![Cmd::None, Cmd::None]).needs_redraw());
    }

    #[test]
    fn test_batch_with_redraw() {
        assert!(Cmd::batch(vec![Cmd::None, Cmd::Redraw]).needs_redraw());
    }

    #[test]
    fn test_confirm_boxes_message() {
        let cmd = Cmd::confirm("sure?", NavMsg::Commit(3), "cancelled");
        match cmd {
            Cmd::Confirm {
                prompt,
                on_accept,
                on_decline,
            } => {
                assert_eq!(prompt, "sure?");
                assert!(matches!(*on_accept, Msg::Nav(NavMsg::Commit(3))));
                assert_eq!(on_decline, "cancelled");
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
