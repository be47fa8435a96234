//! Navigation between records

use crate::commands::Cmd;
use crate::messages::NavMsg;
use crate::model::AppModel;

/// Handle navigation messages
pub fn update_nav(model: &mut AppModel, msg: NavMsg) -> Option<Cmd> {
    match msg {
        NavMsg::Prev => {
            if !model.can_go_prev() {
                return None;
            }
            let target = model.editor.index - 1;
            request_navigation(model, target)
        }

        NavMsg::Next => {
            if !model.can_go_next() {
                return None;
            }
            let target = model.editor.index + 1;
            request_navigation(model, target)
        }

        NavMsg::GoTo(target) => request_navigation(model, target),

        NavMsg::Commit(target) => {
            model.dataset.as_ref()?;
            Some(commit_navigation(model, target))
        }
    }
}

/// Navigate to `target`, asking first when the working copy has unsaved edits
///
/// Out-of-range targets are clamped into the collection.
fn request_navigation(model: &mut AppModel, target: usize) -> Option<Cmd> {
    let target = model.dataset.as_ref()?.clamp_index(target);
    if target == model.editor.index && model.editor.working.is_some() {
        return None;
    }

    if model.editor.is_changed {
        let direction = if target > model.editor.index {
            "next"
        } else {
            "previous"
        };
        return Some(Cmd::confirm(
            format!(
                "Are you sure you want to go {} without saving the changes?",
                direction
            ),
            NavMsg::Commit(target),
            "Navigate cancelled.",
        ));
    }

    Some(commit_navigation(model, target))
}

/// Move to `target` and reload the working copy from the dataset
pub(super) fn commit_navigation(model: &mut AppModel, target: usize) -> Cmd {
    model.reload_at(target);
    Cmd::batch(vec![Cmd::SaveSession(model.session()), Cmd::Redraw])
}
