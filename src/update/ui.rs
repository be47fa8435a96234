//! UI message handlers

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::ToggleUpperSpace => {
            model.ui.upper_space = !model.ui.upper_space;
            Some(Cmd::batch(vec![
                Cmd::SaveSession(model.session()),
                Cmd::Redraw,
            ]))
        }
    }
}
