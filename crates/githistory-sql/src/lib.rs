// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! githistory-sql library
//!
//! Extracts the non-merge history of a git repository and renders it as a
//! `DELETE` + `INSERT` pair for a tracking table. The binary is a thin
//! wrapper around [`run`].

use std::io::Write;

use thiserror::Error;
use tracing::{info, warn};

use githistory_git::{GitError, HistoryCommand};

pub mod config;
pub mod render;

pub use config::{Config, ConfigError};
pub use render::SqlRenderer;

/// Errors that abort a run
#[derive(Debug, Error)]
pub enum RunError {
    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The history command failed
    #[error("Extraction error: {0}")]
    Git(#[from] GitError),

    /// Writing the SQL failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Outcome of a successful run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records extracted, including errored ones
    pub records: usize,
    /// Rows written to the insert statement
    pub rows: usize,
}

/// Validate the configuration, extract history and write the SQL to `out`
///
/// Nothing is written unless extraction succeeds.
///
/// # Errors
///
/// Returns `RunError::Config` before running git if a required field is
/// missing, `RunError::Git` if the history command fails, and
/// `RunError::Io` if writing fails.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<RunSummary, RunError> {
    run_with(config, HistoryCommand::new(), out)
}

/// Like [`run`], with a preconfigured history command
///
/// The configured project directory, if any, overrides the command's
/// working directory.
///
/// # Errors
///
/// See [`run`].
pub fn run_with<W: Write>(
    config: &Config,
    command: HistoryCommand,
    out: &mut W,
) -> Result<RunSummary, RunError> {
    config.validate()?;

    if let Some(ref file) = config.output_file_name {
        warn!(file = %file, "Output file is not supported, writing to stdout");
    }

    let command = match config.project_dir {
        Some(ref dir) => command.workdir(dir),
        None => command,
    };
    info!(
        table = config.table_name(),
        service = config.service(),
        repo = config.repo(),
        "Fetching git history"
    );

    let commits = command.commits()?;
    let rows = SqlRenderer::from_config(config).write_to(out, &commits)?;

    info!(records = commits.len(), rows, "SQL written");
    Ok(RunSummary {
        records: commits.len(),
        rows,
    })
}
