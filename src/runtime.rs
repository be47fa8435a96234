//! Command execution
//!
//! Drains messages through `update` and performs the side effects the
//! reducer asks for. Everything runs on the caller's thread: a dispatch
//! returns only once every follow-up message has been handled.

use std::collections::VecDeque;
use std::path::PathBuf;

use crate::commands::Cmd;
use crate::export::{export_to_dir, ExportError};
use crate::messages::{AppMsg, CurationMsg, Msg};
use crate::model::AppModel;
use crate::prompt::Prompter;
use crate::store::DatasetStore;
use crate::update::{update, MISSING_STORAGE};

/// Where the runtime writes its side files
#[derive(Debug, Clone)]
pub struct RuntimeOptions {
    /// Session file; `None` disables session persistence
    pub session_path: Option<PathBuf>,
    /// Directory for exports
    pub export_dir: PathBuf,
    /// Preview document; `None` disables previews
    pub preview_path: Option<PathBuf>,
    /// Open the preview in the default browser after writing it
    pub open_browser: bool,
}

impl Default for RuntimeOptions {
    fn default() -> Self {
        Self {
            session_path: None,
            export_dir: PathBuf::from("."),
            preview_path: None,
            open_browser: false,
        }
    }
}

/// Owns the model and the injected store / prompter
pub struct Runtime<S: DatasetStore, P: Prompter> {
    model: AppModel,
    store: S,
    prompter: P,
    options: RuntimeOptions,
    queue: VecDeque<Msg>,
}

impl<S: DatasetStore, P: Prompter> Runtime<S, P> {
    pub fn new(model: AppModel, store: S, prompter: P, options: RuntimeOptions) -> Self {
        Self {
            model,
            store,
            prompter,
            options,
            queue: VecDeque::new(),
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn prompter_mut(&mut self) -> &mut P {
        &mut self.prompter
    }

    /// Handle `msg` and every message it triggers
    ///
    /// Returns whether the view needs to be re-rendered.
    pub fn dispatch(&mut self, msg: impl Into<Msg>) -> bool {
        self.queue.push_back(msg.into());
        let mut needs_redraw = false;
        while let Some(msg) = self.queue.pop_front() {
            if let Some(cmd) = update(&mut self.model, msg) {
                needs_redraw |= cmd.needs_redraw();
                self.process_cmd(cmd);
            }
        }
        needs_redraw
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => {}
            Cmd::ReadFile { path } => {
                let result = std::fs::read_to_string(&path).map_err(|e| e.to_string());
                self.queue
                    .push_back(Msg::App(AppMsg::FileLoaded { path, result }));
            }
            Cmd::LoadStore => {
                let result = self.store.load().map_err(|e| e.to_string());
                self.queue.push_back(Msg::App(AppMsg::StoreLoaded(result)));
            }
            Cmd::Persist(dataset) => {
                let result = self
                    .store
                    .replace_all(&dataset)
                    .map_err(|e| e.to_string());
                self.queue.push_back(Msg::App(AppMsg::Persisted(result)));
            }
            Cmd::WriteRecord {
                index,
                record,
                advance,
            } => match self.store.replace_record(index, record) {
                Ok(Some(dataset)) => self.queue.push_back(Msg::Curation(CurationMsg::Written {
                    index,
                    advance,
                    result: Ok(dataset),
                })),
                Ok(None) => self.prompter.alert(MISSING_STORAGE),
                Err(e) => self.queue.push_back(Msg::Curation(CurationMsg::Written {
                    index,
                    advance,
                    result: Err(e.to_string()),
                })),
            },
            Cmd::SaveSession(session) => {
                if let Some(path) = &self.options.session_path {
                    if let Err(e) = session.save_to(path) {
                        tracing::warn!("Failed to save session to {}: {}", path.display(), e);
                    }
                }
            }
            Cmd::Confirm {
                prompt,
                on_accept,
                on_decline,
            } => {
                if self.prompter.confirm(&prompt) {
                    self.queue.push_back(*on_accept);
                } else {
                    self.prompter.alert(&on_decline);
                }
            }
            Cmd::Alert(message) => self.prompter.alert(&message),
            Cmd::Export => match export_to_dir(&self.store, &self.options.export_dir) {
                Ok(path) => self.queue.push_back(Msg::App(AppMsg::Exported(Ok(path)))),
                Err(ExportError::Missing) => self.prompter.alert(MISSING_STORAGE),
                Err(e) => self
                    .queue
                    .push_back(Msg::App(AppMsg::Exported(Err(e.to_string())))),
            },
            Cmd::OpenPreview { html } => self.open_preview(html),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }
        }
    }

    fn open_preview(&mut self, html: String) {
        let Some(path) = self.options.preview_path.clone() else {
            tracing::debug!("Preview disabled, no preview path");
            return;
        };
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create {}: {}", parent.display(), e);
                return;
            }
        }
        if let Err(e) = std::fs::write(&path, html) {
            tracing::warn!("Failed to write preview {}: {}", path.display(), e);
            return;
        }
        if self.options.open_browser {
            if let Err(e) = open::that(&path) {
                tracing::warn!("Failed to open preview {}: {}", path.display(), e);
            }
        }
        self.model
            .ui
            .set_status(format!("Preview written to {}", path.display()));
    }
}
