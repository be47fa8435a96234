//! Navigation tests
//!
//! Prev/Next boundaries, direct jumps, dirty-state confirmation and the
//! persisted session.

mod common;

use common::{dataset, runtime_with, ScriptedPrompter};

use curate::config::CuratorConfig;
use curate::messages::{FieldMsg, NavMsg, UiMsg};
use curate::model::AppModel;
use curate::runtime::{Runtime, RuntimeOptions};
use curate::session::Session;
use curate::store::{DatasetStore, MemoryStore};

// ========================================================================
// Boundaries
// ========================================================================

#[test]
fn test_prev_at_first_record_is_noop() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 0);
    assert!(!runtime.model().can_go_prev());

    let redraw = runtime.dispatch(NavMsg::Prev);

    assert!(!redraw);
    assert_eq!(runtime.model().editor.index, 0);
}

#[test]
fn test_next_at_last_record_is_noop() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 2);
    assert!(!runtime.model().can_go_next());

    runtime.dispatch(NavMsg::Next);

    assert_eq!(runtime.model().editor.index, 2);
}

#[test]
fn test_next_and_prev_move_one() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 0);

    runtime.dispatch(NavMsg::Next);
    assert_eq!(runtime.model().editor.index, 1);
    assert_eq!(
        runtime.model().editor.working.as_ref().unwrap().instruction,
        "q1"
    );

    runtime.dispatch(NavMsg::Prev);
    assert_eq!(runtime.model().editor.index, 0);
}

#[test]
fn test_goto_out_of_range_is_clamped() {
    let (mut runtime, _store) = runtime_with(&dataset(4), 0);

    runtime.dispatch(NavMsg::GoTo(100));

    assert_eq!(runtime.model().editor.index, 3);
    assert_eq!(
        runtime.model().editor.working.as_ref().unwrap().instruction,
        "q3"
    );
}

// ========================================================================
// Dirty confirmation
// ========================================================================

#[test]
fn test_dirty_navigation_declined_keeps_position_and_edits() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 1);
    runtime.dispatch(FieldMsg::SetOutput("draft".to_string()));

    runtime.prompter_mut().push(false);
    runtime.dispatch(NavMsg::Next);

    assert_eq!(
        runtime.prompter().confirms,
        vec!["Are you sure you want to go next without saving the changes?".to_string()]
    );
    assert_eq!(
        runtime.prompter().alerts,
        vec!["Navigate cancelled.".to_string()]
    );
    assert_eq!(runtime.model().editor.index, 1);
    assert!(runtime.model().editor.is_changed);
    assert_eq!(
        runtime.model().editor.working.as_ref().unwrap().output,
        "draft"
    );
}

#[test]
fn test_dirty_navigation_accepted_discards_edits() {
    let (mut runtime, store) = runtime_with(&dataset(3), 1);
    let before = store.raw();
    runtime.dispatch(FieldMsg::SetOutput("draft".to_string()));

    runtime.prompter_mut().push(true);
    runtime.dispatch(NavMsg::Prev);

    assert_eq!(
        runtime.prompter().confirms,
        vec!["Are you sure you want to go previous without saving the changes?".to_string()]
    );
    assert_eq!(runtime.model().editor.index, 0);
    assert!(!runtime.model().editor.is_changed);
    assert_eq!(store.raw(), before);

    // Coming back shows the stored version, not the draft
    runtime.dispatch(NavMsg::Next);
    assert_eq!(runtime.model().editor.working.as_ref().unwrap().output, "a1");
}

#[test]
fn test_clean_navigation_does_not_prompt() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 0);

    runtime.dispatch(NavMsg::GoTo(2));

    assert!(runtime.prompter().confirms.is_empty());
    assert_eq!(runtime.model().editor.index, 2);
}

#[test]
fn test_goto_current_index_keeps_edits() {
    let (mut runtime, _store) = runtime_with(&dataset(3), 1);
    runtime.dispatch(FieldMsg::SetOutput("draft".to_string()));

    runtime.dispatch(NavMsg::GoTo(1));

    assert!(runtime.prompter().confirms.is_empty());
    assert!(runtime.model().editor.is_changed);
}

// ========================================================================
// Session
// ========================================================================

#[test]
fn test_navigation_writes_session() {
    let dir = tempfile::tempdir().unwrap();
    let session_path = dir.path().join("session.json");
    let store = MemoryStore::with_dataset(&dataset(5)).unwrap();
    let model = AppModel::new(
        CuratorConfig::default(),
        Session::default(),
        store.load().unwrap(),
    );
    let options = RuntimeOptions {
        session_path: Some(session_path.clone()),
        ..RuntimeOptions::default()
    };
    let mut runtime = Runtime::new(model, store, ScriptedPrompter::default(), options);

    runtime.dispatch(NavMsg::GoTo(3));
    assert_eq!(Session::load_from(&session_path).data_idx, 3);

    runtime.dispatch(UiMsg::ToggleUpperSpace);
    assert_eq!(
        Session::load_from(&session_path),
        Session {
            data_idx: 3,
            upper_space: true
        }
    );
}

#[test]
fn test_restored_session_index_is_clamped() {
    let store = MemoryStore::with_dataset(&dataset(2)).unwrap();
    let session = Session {
        data_idx: 9,
        upper_space: false,
    };
    let model = AppModel::new(CuratorConfig::default(), session, store.load().unwrap());

    assert_eq!(model.editor.index, 1);
    assert_eq!(model.editor.working.as_ref().unwrap().instruction, "q1");
}
