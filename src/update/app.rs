//! App message handlers (uploads, persistence, export, preview)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Dataset};
use crate::preview;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::LoadFile(path) => {
            if model.ui.is_loading {
                tracing::debug!("Upload ignored, another read is outstanding");
                return None;
            }
            model.ui.is_loading = true;
            Some(Cmd::ReadFile { path })
        }

        AppMsg::FileLoaded { path, result } => {
            model.ui.is_loading = false;
            let content = match result {
                Ok(content) => content,
                Err(e) => {
                    tracing::error!("Error reading {}: {}", path.display(), e);
                    return None;
                }
            };
            let dataset = match Dataset::parse(&content) {
                Ok(dataset) => dataset,
                Err(e) => {
                    tracing::error!("Error parsing dataset {}: {}", path.display(), e);
                    return None;
                }
            };

            tracing::info!(
                records = dataset.len(),
                "Loaded dataset from {}",
                path.display()
            );
            model.editor.reload(&dataset, model.editor.index);
            model
                .ui
                .set_status(format!("Loaded {} records", dataset.len()));
            model.dataset = Some(dataset.clone());

            Some(Cmd::batch(vec![
                Cmd::Persist(dataset),
                Cmd::SaveSession(model.session()),
                Cmd::Redraw,
            ]))
        }

        AppMsg::ReloadStore => Some(Cmd::LoadStore),

        AppMsg::StoreLoaded(result) => match result {
            Ok(Some(dataset)) if !dataset.is_empty() => {
                model.editor.reload(&dataset, model.editor.index);
                model.dataset = Some(dataset);
                Some(Cmd::batch(vec![
                    Cmd::SaveSession(model.session()),
                    Cmd::Redraw,
                ]))
            }
            Ok(_) => {
                tracing::debug!("Store holds no dataset");
                None
            }
            Err(e) => {
                tracing::error!("Error parsing stored dataset: {}", e);
                None
            }
        },

        AppMsg::Persisted(result) => {
            if let Err(e) = result {
                tracing::error!("Failed to persist dataset: {}", e);
                model.ui.set_status(format!("Save failed: {}", e));
                return Some(Cmd::Redraw);
            }
            None
        }

        AppMsg::Export => Some(Cmd::Export),

        AppMsg::Exported(result) => {
            match result {
                Ok(path) => model.ui.set_status(format!("Exported {}", path.display())),
                Err(e) => {
                    tracing::error!("Export failed: {}", e);
                    model.ui.set_status(format!("Export failed: {}", e));
                }
            }
            Some(Cmd::Redraw)
        }

        AppMsg::OpenPreview => {
            let record = model.editor.working.as_ref()?;
            Some(Cmd::OpenPreview {
                html: preview::output_to_html(&record.output),
            })
        }
    }
}
