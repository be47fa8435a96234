//! Export of the stored collection to a timestamped JSON file

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::store::{DatasetStore, StoreError};

/// Export failures
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no dataset in storage")]
    Missing,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// `dataset-curated-<unixTimestampMillis>.json`
pub fn export_file_name(timestamp_millis: u128) -> String {
    format!("dataset-curated-{}.json", timestamp_millis)
}

fn now_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

/// Export the stored collection into `dir`, named with the current time
pub fn export_to_dir(store: &dyn DatasetStore, dir: &Path) -> Result<PathBuf, ExportError> {
    export_to_dir_at(store, dir, now_millis())
}

/// Export the stored collection into `dir` with an explicit timestamp
///
/// Records are written exactly as stored, soft-deleted ones included.
pub fn export_to_dir_at(
    store: &dyn DatasetStore,
    dir: &Path,
    timestamp_millis: u128,
) -> Result<PathBuf, ExportError> {
    let dataset = store.load()?.ok_or(ExportError::Missing)?;
    let content = dataset.to_pretty_json()?;

    let io_error = |path: &Path, source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
    let path = dir.join(export_file_name(timestamp_millis));
    std::fs::write(&path, content).map_err(|e| io_error(&path, e))?;

    tracing::info!(
        records = dataset.len(),
        "Exported dataset to {}",
        path.display()
    );
    Ok(path)
}
