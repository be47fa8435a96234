//! Tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering. Malformed uploads and
//! stored data are reported here and nowhere else.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=curate::update=debug` - reducer transitions only
//!
//! # Log Files
//!
//! Logs are written to `~/.config/curate/logs/curate.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output goes to stderr so it does not interleave with the
/// rendered record on stdout.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "curate.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the editor position for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSnapshot {
    pub index: usize,
    pub is_changed: bool,
    pub has_record: bool,
    pub record_count: usize,
}

impl EditorSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            index: model.editor.index,
            is_changed: model.editor.is_changed,
            has_record: model.editor.working.is_some(),
            record_count: model.record_count(),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &EditorSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.index != other.index {
            changes.push(format!("index: {} → {}", self.index, other.index));
        }
        if self.is_changed != other.is_changed {
            changes.push(format!("dirty: {} → {}", self.is_changed, other.is_changed));
        }
        if self.has_record != other.has_record {
            changes.push(format!(
                "record loaded: {} → {}",
                self.has_record, other.has_record
            ));
        }
        if self.record_count != other.record_count {
            changes.push(format!(
                "records: {} → {}",
                self.record_count, other.record_count
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
