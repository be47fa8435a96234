//! Field edits on the working copy

use crate::commands::Cmd;
use crate::messages::FieldMsg;
use crate::model::{AppModel, CurationStatus, Weight};

/// Handle field edits; the store is untouched until a save
pub fn update_field(model: &mut AppModel, msg: FieldMsg) -> Option<Cmd> {
    let sets_weight = matches!(msg, FieldMsg::SetP(_));
    let applied = model.editor.edit(|record| match msg {
        FieldMsg::SetInstruction(text) => record.instruction = text,
        FieldMsg::SetOutput(text) => record.output = text,
        FieldMsg::SetCurationStatus(value) => {
            record.curation_status = CurationStatus::from(value)
        }
        FieldMsg::SetCurationMessage(text) => record.curation_message = text,
        FieldMsg::SetP(text) => record.p = Some(Weight::parse(&text)),
    });

    if !applied {
        tracing::debug!("Field edit ignored, no record loaded");
        return None;
    }
    if sets_weight {
        model.editor.weight_defaulted = false;
    }
    Some(Cmd::Redraw)
}
