//! The ordered record collection

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::record::Record;

/// Reasons an upload or stored payload cannot become a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("invalid dataset JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("dataset contains no records")]
    Empty,
}

/// Ordered collection of records; order defines navigation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records
    ///
    /// Every element needs `instruction` and `output`; a collection with no
    /// records is rejected since there would be nothing to review.
    pub fn parse(content: &str) -> Result<Self, DatasetError> {
        let dataset: Dataset = serde_json::from_str(content)?;
        if dataset.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(dataset)
    }

    /// Compact serialization used for the store
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Two-space pretty serialization used for exports
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Replace the record at `index`, returning false when out of range
    pub fn replace(&mut self, index: usize, record: Record) -> bool {
        match self.records.get_mut(index) {
            Some(slot) => {
                *slot = record;
                true
            }
            None => false,
        }
    }

    /// Clamp an index into `[0, len - 1]`
    pub fn clamp_index(&self, index: usize) -> usize {
        index.min(self.len().saturating_sub(1))
    }

    /// Working copy of the record at `index` with display defaults applied
    pub fn working_copy(&self, index: usize) -> Option<Record> {
        self.get(index).map(|r| r.working_copy(self.len()))
    }
}
