//! Curation tests
//!
//! Save, delete and recover through the runtime with a scripted prompter.

mod common;

use common::{dataset, empty_runtime, runtime_with, stored, temp_file, ScriptedPrompter};

use curate::config::CuratorConfig;
use curate::messages::{AppMsg, CurationMsg, FieldMsg, NavMsg};
use curate::model::{AppModel, CurationStatus, Weight};
use curate::runtime::{Runtime, RuntimeOptions};
use curate::session::Session;
use curate::store::{DatasetStore, FileStore};

// ========================================================================
// Save
// ========================================================================

#[test]
fn test_edit_message_then_save_approves() {
    let (mut runtime, store) = empty_runtime();
    let (_dir, path) = temp_file(r#"[{"instruction":"a","output":"b"}]"#);
    runtime.dispatch(AppMsg::LoadFile(path));

    runtime.dispatch(FieldMsg::SetCurationMessage("ok".to_string()));
    assert!(runtime.model().editor.is_changed);

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    let record = &stored(&store).records[0];
    assert_eq!(record.curation_status, CurationStatus::Approved);
    assert_eq!(record.curation_message, "ok");
    assert_eq!(record.p, None);
    assert_eq!(
        runtime.prompter().confirms,
        vec!["Are you sure you want to save the data?".to_string()]
    );
    assert!(!runtime.model().editor.is_changed);
    let working = runtime.model().editor.working.as_ref().unwrap();
    assert_eq!(working.curation_status, CurationStatus::Approved);
    assert_eq!(working.p, Some(Weight::number(1.0)));
}

#[test]
fn test_clean_save_does_not_prompt() {
    let (mut runtime, store) = runtime_with(&dataset(2), 0);

    runtime.dispatch(CurationMsg::Save { advance: false });

    assert!(runtime.prompter().confirms.is_empty());
    assert_eq!(
        stored(&store).records[0].curation_status,
        CurationStatus::Approved
    );
}

#[test]
fn test_declined_save_leaves_store_and_edits() {
    let (mut runtime, store) = runtime_with(&dataset(2), 0);
    let before = store.raw();
    runtime.dispatch(FieldMsg::SetOutput("rewritten".to_string()));

    runtime.prompter_mut().push(false);
    runtime.dispatch(CurationMsg::Save { advance: true });

    assert_eq!(store.raw(), before);
    assert_eq!(runtime.prompter().alerts, vec!["Save cancelled.".to_string()]);
    assert_eq!(runtime.model().editor.index, 0);
    assert!(runtime.model().editor.is_changed);
    assert_eq!(
        runtime.model().editor.working.as_ref().unwrap().output,
        "rewritten"
    );
}

#[test]
fn test_save_and_next_advances_without_second_prompt() {
    let (mut runtime, store) = runtime_with(&dataset(3), 0);
    runtime.dispatch(FieldMsg::SetInstruction("fixed".to_string()));

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: true });

    assert_eq!(runtime.prompter().confirms.len(), 1);
    assert_eq!(runtime.model().editor.index, 1);
    assert!(!runtime.model().editor.is_changed);
    let persisted = stored(&store);
    assert_eq!(persisted.records[0].instruction, "fixed");
    assert_eq!(persisted.records[0].curation_status, CurationStatus::Approved);
    assert_eq!(
        persisted.records[1].curation_status,
        CurationStatus::Unreviewed
    );
}

#[test]
fn test_save_and_next_on_last_record_stays() {
    let (mut runtime, store) = runtime_with(&dataset(2), 1);

    runtime.dispatch(CurationMsg::Save { advance: true });

    assert_eq!(runtime.model().editor.index, 1);
    assert_eq!(
        stored(&store).records[1].curation_status,
        CurationStatus::Approved
    );
}

#[test]
fn test_save_replaces_only_current_record() {
    let (mut runtime, store) = runtime_with(&dataset(3), 1);
    runtime.dispatch(FieldMsg::SetOutput("changed".to_string()));
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    let persisted = stored(&store);
    assert_eq!(persisted.records[0], dataset(3).records[0]);
    assert_eq!(persisted.records[2], dataset(3).records[2]);
    assert_eq!(persisted.records[1].output, "changed");
}

#[test]
fn test_save_keeps_text_weight() {
    let (mut runtime, store) = runtime_with(&dataset(1), 0);
    runtime.dispatch(FieldMsg::SetP("heavy".to_string()));
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    assert_eq!(
        stored(&store).records[0].p,
        Some(Weight::Text("heavy".to_string()))
    );
    assert!(store.raw().unwrap().contains(r#""p":"heavy""#));
}

#[test]
fn test_typed_weight_is_written() {
    let (mut runtime, store) = runtime_with(&dataset(2), 0);
    runtime.dispatch(FieldMsg::SetP("3".to_string()));
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    assert_eq!(stored(&store).records[0].p, Some(Weight::Number(3.into())));
    assert!(store.raw().unwrap().contains(r#""p":3}"#));
}

/// Runtime over a file store whose file is removed after startup
fn runtime_with_vanished_store() -> (
    tempfile::TempDir,
    std::path::PathBuf,
    Runtime<FileStore, ScriptedPrompter>,
) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dataset.json");
    let mut store = FileStore::new(&path);
    store.replace_all(&dataset(2)).unwrap();
    let model = AppModel::new(
        CuratorConfig::default(),
        Session::default(),
        store.load().unwrap(),
    );
    let runtime = Runtime::new(
        model,
        store,
        ScriptedPrompter::default(),
        RuntimeOptions::default(),
    );
    std::fs::remove_file(&path).unwrap();
    (dir, path, runtime)
}

#[test]
fn test_save_with_missing_storage_alerts() {
    let (_dir, path, mut runtime) = runtime_with_vanished_store();

    runtime.dispatch(CurationMsg::Save { advance: true });

    assert_eq!(
        runtime.prompter().alerts,
        vec!["Dataset does not exist in storage.".to_string()]
    );
    assert!(!path.exists());
    assert_eq!(runtime.model().editor.index, 0);
}

#[test]
fn test_missing_storage_keeps_unsaved_edits() {
    let (_dir, path, mut runtime) = runtime_with_vanished_store();
    runtime.dispatch(FieldMsg::SetOutput("draft".to_string()));

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    assert_eq!(runtime.prompter().confirms.len(), 1);
    assert_eq!(
        runtime.prompter().alerts,
        vec!["Dataset does not exist in storage.".to_string()]
    );
    assert!(!path.exists());
    assert!(runtime.model().editor.is_changed);
    assert_eq!(
        runtime.model().editor.working.as_ref().unwrap().output,
        "draft"
    );
}

#[test]
fn test_delete_and_recover_with_missing_storage_alert() {
    let (_dir, path, mut runtime) = runtime_with_vanished_store();

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);
    runtime.dispatch(CurationMsg::Recover);

    assert_eq!(runtime.prompter().alerts.len(), 2);
    assert!(!path.exists());
    assert!(!runtime.model().editor.is_deleted());
}

// ========================================================================
// Delete / Recover
// ========================================================================

#[test]
fn test_delete_accepted_then_navigate_without_prompt() {
    let (mut runtime, store) = runtime_with(&dataset(2), 0);

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);

    assert_eq!(
        stored(&store).records[0].curation_status,
        CurationStatus::Deleted
    );
    assert_eq!(
        runtime.prompter().confirms,
        vec!["Are you sure you want to delete the data?".to_string()]
    );
    assert!(!runtime.model().editor.is_changed);

    runtime.dispatch(NavMsg::GoTo(1));

    assert_eq!(runtime.model().editor.index, 1);
    assert_eq!(runtime.prompter().confirms.len(), 1);
}

#[test]
fn test_delete_declined() {
    let (mut runtime, store) = runtime_with(&dataset(2), 0);
    let before = store.raw();

    runtime.prompter_mut().push(false);
    runtime.dispatch(CurationMsg::Delete);

    assert_eq!(store.raw(), before);
    assert_eq!(runtime.prompter().alerts, vec!["Delete cancelled.".to_string()]);
}

#[test]
fn test_delete_keeps_unsaved_edits() {
    let (mut runtime, store) = runtime_with(&dataset(1), 0);
    runtime.dispatch(FieldMsg::SetCurationMessage("duplicate".to_string()));

    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);

    // One prompt only: delete skips the unsaved-changes question
    assert_eq!(runtime.prompter().confirms.len(), 1);
    let record = &stored(&store).records[0];
    assert_eq!(record.curation_status, CurationStatus::Deleted);
    assert_eq!(record.curation_message, "duplicate");
}

#[test]
fn test_deletion_is_sticky_across_save() {
    let (mut runtime, store) = runtime_with(&dataset(1), 0);
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);

    runtime.dispatch(FieldMsg::SetCurationMessage("still bad".to_string()));
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Save { advance: false });

    let record = &stored(&store).records[0];
    assert_eq!(record.curation_status, CurationStatus::Deleted);
    assert_eq!(record.curation_message, "still bad");
}

#[test]
fn test_recover_resets_status_without_prompt() {
    let (mut runtime, store) = runtime_with(&dataset(1), 0);
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);

    runtime.dispatch(CurationMsg::Recover);

    assert_eq!(runtime.prompter().confirms.len(), 1);
    assert_eq!(
        stored(&store).records[0].curation_status,
        CurationStatus::Unreviewed
    );
    assert!(!runtime.model().editor.is_deleted());
}

#[test]
fn test_recover_is_idempotent() {
    let (mut runtime, store) = runtime_with(&dataset(2), 1);
    let before = store.raw();

    runtime.dispatch(CurationMsg::Recover);
    assert_eq!(store.raw(), before);

    runtime.dispatch(CurationMsg::Recover);
    assert_eq!(store.raw(), before);
}

#[test]
fn test_recover_keeps_stored_integer_weight() {
    let mut weighted = dataset(1);
    weighted.records[0].p = Some(Weight::Number(1.into()));
    let (mut runtime, store) = runtime_with(&weighted, 0);
    let before = store.raw();

    runtime.dispatch(CurationMsg::Recover);

    assert_eq!(store.raw(), before);
    assert!(before.unwrap().contains(r#""p":1}"#));
}

#[test]
fn test_recover_then_save_approves() {
    let (mut runtime, store) = runtime_with(&dataset(1), 0);
    runtime.prompter_mut().push(true);
    runtime.dispatch(CurationMsg::Delete);
    runtime.dispatch(CurationMsg::Recover);
    runtime.dispatch(CurationMsg::Save { advance: false });

    assert_eq!(
        stored(&store).records[0].curation_status,
        CurationStatus::Approved
    );
}

#[test]
fn test_actions_without_record_do_nothing() {
    let (mut runtime, store) = empty_runtime();

    runtime.dispatch(CurationMsg::Save { advance: false });
    runtime.dispatch(CurationMsg::Delete);
    runtime.dispatch(CurationMsg::Recover);
    runtime.dispatch(FieldMsg::SetOutput("x".to_string()));

    assert!(store.raw().is_none());
    assert!(runtime.prompter().confirms.is_empty());
    assert!(!runtime.model().editor.is_changed);
}
