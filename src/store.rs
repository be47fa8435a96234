//! Durable storage for the curated collection
//!
//! The whole collection lives under one fixed key and is rewritten on every
//! save; there are no partial writes.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use thiserror::Error;

use crate::model::{Dataset, DatasetError, Record};

/// Storage failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stored dataset is malformed: {0}")]
    Malformed(#[from] DatasetError),
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("record {index} is out of range for {len} stored records")]
    OutOfRange { index: usize, len: usize },
}

/// Persistent holder of the full record collection
pub trait DatasetStore {
    /// Read the persisted collection; `Ok(None)` if never initialized
    fn load(&self) -> Result<Option<Dataset>, StoreError>;

    /// Overwrite the whole persisted collection
    fn replace_all(&mut self, dataset: &Dataset) -> Result<(), StoreError>;

    /// Number of persisted records (zero if never initialized)
    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.load()?.map_or(0, |d| d.len()))
    }

    /// Replace the record at `index` and rewrite the whole collection
    ///
    /// Returns the collection as written, or `Ok(None)` without writing
    /// anything when the store was never initialized.
    fn replace_record(
        &mut self,
        index: usize,
        record: Record,
    ) -> Result<Option<Dataset>, StoreError> {
        let Some(mut dataset) = self.load()? else {
            return Ok(None);
        };
        let len = dataset.len();
        if !dataset.replace(index, record) {
            return Err(StoreError::OutOfRange { index, len });
        }
        self.replace_all(&dataset)?;
        Ok(Some(dataset))
    }
}

/// JSON file store at a fixed path
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl DatasetStore for FileStore {
    fn load(&self) -> Result<Option<Dataset>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };
        let dataset: Dataset =
            serde_json::from_str(&content).map_err(|e| StoreError::Malformed(e.into()))?;
        Ok(Some(dataset))
    }

    /// Writes a temporary sibling and renames it over the store, so readers
    /// never observe a half-written collection.
    fn replace_all(&mut self, dataset: &Dataset) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let content = dataset.to_json()?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, content).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;
        tracing::debug!(
            records = dataset.len(),
            "Persisted dataset to {}",
            self.path.display()
        );
        Ok(())
    }
}

/// In-process store holding the serialized collection
///
/// Clones share the same slot, so a test can keep a handle while the
/// runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `dataset`
    pub fn with_dataset(dataset: &Dataset) -> Result<Self, StoreError> {
        let mut store = Self::new();
        store.replace_all(dataset)?;
        Ok(store)
    }

    /// Store pre-seeded with raw text, which need not parse
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    /// The serialized collection as last written
    pub fn raw(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl DatasetStore for MemoryStore {
    fn load(&self) -> Result<Option<Dataset>, StoreError> {
        match self.slot.borrow().as_deref() {
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| StoreError::Malformed(e.into())),
            None => Ok(None),
        }
    }

    fn replace_all(&mut self, dataset: &Dataset) -> Result<(), StoreError> {
        let content = dataset.to_json()?;
        *self.slot.borrow_mut() = Some(content);
        Ok(())
    }
}
