//! Save / delete / recover - the paths that write the working copy back

use crate::commands::Cmd;
use crate::messages::CurationMsg;
use crate::model::{AppModel, CurationStatus, Dataset};

use super::nav::commit_navigation;

/// Handle curation messages
pub fn update_curation(model: &mut AppModel, msg: CurationMsg) -> Option<Cmd> {
    match msg {
        CurationMsg::Save { advance } => {
            model.editor.working.as_ref()?;
            if model.editor.is_changed {
                return Some(Cmd::confirm(
                    "Are you sure you want to save the data?",
                    CurationMsg::CommitSave { advance },
                    "Save cancelled.",
                ));
            }
            commit_save(model, advance)
        }

        CurationMsg::CommitSave { advance } => commit_save(model, advance),

        CurationMsg::Delete => {
            model.editor.working.as_ref()?;
            Some(Cmd::confirm(
                "Are you sure you want to delete the data?",
                CurationMsg::CommitDelete,
                "Delete cancelled.",
            ))
        }

        CurationMsg::CommitDelete => write_back(model, CurationStatus::Deleted, false),

        CurationMsg::Recover => write_back(model, CurationStatus::Unreviewed, false),

        CurationMsg::Written {
            index,
            advance,
            result,
        } => written(model, index, advance, result),
    }
}

/// Approve the working copy unless it is deleted, then write it back
fn commit_save(model: &AppModel, advance: bool) -> Option<Cmd> {
    let status = model.editor.working.as_ref()?.curation_status.saved();
    write_back(model, status, advance)
}

/// Ask the runtime to write the working copy with `status` back to the
/// store. The follow-up (advance or reload) happens once `Written` arrives,
/// so a missing store leaves the view and its edits as they are.
fn write_back(model: &AppModel, status: CurationStatus, advance: bool) -> Option<Cmd> {
    let mut record = model.editor.working.clone()?;
    record.curation_status = status;

    let index = model.editor.index;
    if model.editor.weight_defaulted {
        // Only a typed weight is written; the 1/len default is display-only
        record.p = model
            .dataset
            .as_ref()
            .and_then(|d| d.get(index))
            .and_then(|r| r.p.clone());
    }

    Some(Cmd::WriteRecord {
        index,
        record,
        advance,
    })
}

/// Adopt the collection as written, then advance or reload the current record
fn written(
    model: &mut AppModel,
    index: usize,
    advance: bool,
    result: Result<Dataset, String>,
) -> Option<Cmd> {
    let dataset = match result {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!(index, "Failed to write record back: {}", e);
            model.ui.set_status(format!("Save failed: {}", e));
            return Some(Cmd::Redraw);
        }
    };

    if let Some(record) = dataset.get(index) {
        tracing::info!(index, status = %record.curation_status, "Record written back");
    }
    model.dataset = Some(dataset);

    if advance {
        Some(commit_navigation(model, index + 1))
    } else {
        model.reload_at(index);
        Some(Cmd::Redraw)
    }
}
