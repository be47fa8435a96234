//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::collections::VecDeque;

use curate::config::CuratorConfig;
use curate::model::{AppModel, Dataset, Record};
use curate::prompt::Prompter;
use curate::runtime::{Runtime, RuntimeOptions};
use curate::session::Session;
use curate::store::{DatasetStore, MemoryStore};

/// Prompter that answers from a script and records everything it was asked
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    /// Answers handed out in order; an exhausted script declines
    pub answers: VecDeque<bool>,
    /// Every confirmation prompt shown
    pub confirms: Vec<String>,
    /// Every alert shown
    pub alerts: Vec<String>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: answers.iter().copied().collect(),
            ..Self::default()
        }
    }

    /// Queue more answers
    pub fn push(&mut self, answer: bool) {
        self.answers.push_back(answer);
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirms.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub type TestRuntime = Runtime<MemoryStore, ScriptedPrompter>;

/// Record with the given instruction/output and no metadata
pub fn record(instruction: &str, output: &str) -> Record {
    Record::new(instruction, output)
}

/// `n` records `q0/a0`, `q1/a1`, ...
pub fn dataset(n: usize) -> Dataset {
    Dataset::new(
        (0..n)
            .map(|i| record(&format!("q{}", i), &format!("a{}", i)))
            .collect(),
    )
}

/// Runtime over an empty store
pub fn empty_runtime() -> (TestRuntime, MemoryStore) {
    let store = MemoryStore::new();
    let model = AppModel::new(CuratorConfig::default(), Session::default(), None);
    let runtime = Runtime::new(
        model,
        store.clone(),
        ScriptedPrompter::default(),
        RuntimeOptions::default(),
    );
    (runtime, store)
}

/// Runtime whose store already holds `dataset`, starting at `index`
pub fn runtime_with(dataset: &Dataset, index: usize) -> (TestRuntime, MemoryStore) {
    let store = MemoryStore::with_dataset(dataset).unwrap();
    let session = Session {
        data_idx: index,
        upper_space: false,
    };
    let model = AppModel::new(CuratorConfig::default(), session, store.load().unwrap());
    let runtime = Runtime::new(
        model,
        store.clone(),
        ScriptedPrompter::default(),
        RuntimeOptions::default(),
    );
    (runtime, store)
}

/// The collection currently in the store
pub fn stored(store: &MemoryStore) -> Dataset {
    store.load().unwrap().expect("store should hold a dataset")
}

/// Write `content` to a temp file and return the dir guard with the path
pub fn temp_file(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("upload.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
