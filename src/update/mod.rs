//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod curation;
mod field;
mod nav;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::EditorSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use curation::update_curation;
pub use field::update_field;
pub use nav::update_nav;
pub use ui::update_ui;

/// Shown when a write-back or export finds nothing in storage
pub const MISSING_STORAGE: &str = "Dataset does not exist in storage.";

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Field(m) => field::update_field(model, m),
        Msg::Nav(m) => nav::update_nav(model, m),
        Msg::Curation(m) => curation::update_curation(model, m),
        Msg::App(m) => app::update_app(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after editor position and logs the diff.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    let msg_name = msg_type_name(&msg);
    let _span = span!(Level::DEBUG, "update", msg = %msg_name).entered();

    let before = EditorSnapshot::from_model(model);
    debug!(target: "message", msg = %msg_name, "processing");

    let result = update_inner(model, msg);

    let after = EditorSnapshot::from_model(model);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "editor", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Large payloads (file contents, whole datasets) are summarized.
/// Example outputs:
/// - `Nav::GoTo(3)`
/// - `Field::SetCurationStatus(-1)`
/// - `App::FileLoaded(data.json)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, CurationMsg};

    match msg {
        Msg::Field(m) => format!("Field::{:?}", m),
        Msg::Nav(m) => format!("Nav::{:?}", m),
        Msg::Curation(CurationMsg::Written {
            index,
            advance,
            result,
        }) => format!(
            "Curation::Written({}, advance={}, ok={})",
            index,
            advance,
            result.is_ok()
        ),
        Msg::Curation(m) => format!("Curation::{:?}", m),
        Msg::App(AppMsg::FileLoaded { path, .. }) => {
            format!("App::FileLoaded({})", path.display())
        }
        Msg::App(AppMsg::StoreLoaded(_)) => "App::StoreLoaded".to_string(),
        Msg::App(m) => format!("App::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
    }
}
