//! Command-line argument parsing
//!
//! Supports:
//! - Uploading a dataset at startup
//! - Resuming at a specific record
//! - Overriding the store and export locations
//! - Non-interactive confirmation

use clap::Parser;
use std::path::PathBuf;

use crate::config::CuratorConfig;

/// Review and curate instruction/output datasets
#[derive(Parser, Debug)]
#[command(
    name = "curate",
    version,
    about = "Review and curate instruction/output datasets"
)]
pub struct CliArgs {
    /// Dataset JSON to upload (replaces the stored collection)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Start at record N (overrides the saved session)
    #[arg(short = 'i', long, value_name = "N")]
    pub index: Option<usize>,

    /// Store file for the curated collection
    #[arg(long, value_name = "PATH")]
    pub store: Option<PathBuf>,

    /// Directory exports are written to
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Answer yes to every confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Write the effective configuration to the config file and exit
    #[arg(long)]
    pub init_config: bool,
}

/// Configuration derived from CLI arguments and the config file
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// Dataset to upload once the runtime is up
    pub upload: Option<PathBuf>,
    /// Index override
    pub index: Option<usize>,
    /// Auto-accept confirmations
    pub assume_yes: bool,
    /// Effective configuration
    pub config: CuratorConfig,
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded configuration
    pub fn into_config(self, mut config: CuratorConfig) -> StartupConfig {
        if let Some(store) = self.store {
            config.store_path = Some(store);
        }
        if let Some(dir) = self.export_dir {
            config.export_dir = Some(dir);
        }
        StartupConfig {
            upload: self.file,
            index: self.index,
            assume_yes: self.yes,
            config,
        }
    }
}
