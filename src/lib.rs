//! Curate - Elm-style dataset curation tool
//!
//! This crate provides the core types and logic for reviewing instruction /
//! output pairs one record at a time, implementing the Elm Architecture
//! pattern: messages go through `update`, side effects come back as `Cmd`s
//! and the `Runtime` executes them against an injected store and prompter.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod export;
pub mod input;
pub mod messages;
pub mod model;
pub mod preview;
pub mod prompt;
pub mod runtime;
pub mod session;
pub mod store;
pub mod tracing;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::CuratorConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use runtime::Runtime;
