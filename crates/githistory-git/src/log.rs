// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History command execution
//!
//! Runs `git log` over the non-merge history of a working tree and hands
//! its output to the line decoder.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::{debug, info, warn};

use crate::commit::CommitRecord;
use crate::error::GitError;
use crate::parser::{FIELD_PLACEHOLDERS, FIELD_SEPARATOR, parse_log_output};

/// Builder for the external history command
#[derive(Debug, Clone)]
pub struct HistoryCommand {
    program: String,
    workdir: Option<PathBuf>,
}

impl Default for HistoryCommand {
    fn default() -> Self {
        Self {
            program: "git".to_string(),
            workdir: None,
        }
    }
}

impl HistoryCommand {
    /// Create a command that runs `git` in the inherited directory
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different executable in place of `git`
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Run the command inside `dir` when it is an existing directory
    ///
    /// A path that is not a directory is ignored and the command keeps
    /// the inherited working directory.
    #[must_use]
    pub fn workdir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        if dir.is_dir() {
            self.workdir = Some(dir.to_path_buf());
        } else {
            warn!(path = %dir.display(), "Working directory not found, using current directory");
        }
        self
    }

    /// The directory the command will run in, if overridden
    #[must_use]
    pub fn current_dir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    /// The `--pretty` format string requesting separator-delimited fields
    #[must_use]
    pub fn pretty_format() -> String {
        let separator = format!("%x{:02x}", FIELD_SEPARATOR as u32);
        format!("format:{}", FIELD_PLACEHOLDERS.join(&separator))
    }

    /// Arguments passed to the program
    #[must_use]
    pub fn args() -> Vec<String> {
        vec![
            "log".to_string(),
            "--no-merges".to_string(),
            "--date=short".to_string(),
            format!("--pretty={}", Self::pretty_format()),
        ]
    }

    fn build(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(Self::args())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(ref dir) = self.workdir {
            cmd.current_dir(dir);
        }
        cmd
    }

    /// Run the command and return its standard output
    ///
    /// # Errors
    ///
    /// Returns `GitError::Spawn` if the program cannot be started and
    /// `GitError::CommandFailed` if it exits with a non-zero status.
    pub fn output(&self) -> Result<String, GitError> {
        debug!(program = %self.program, args = ?Self::args(), "Running history command");

        let output = self.build().output().map_err(|source| GitError::Spawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                status: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run the command and decode every output line into a record
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`HistoryCommand::output`]. Lines that fail
    /// to decode do not error; they become errored records.
    pub fn commits(&self) -> Result<Vec<CommitRecord>, GitError> {
        let output = self.output()?;
        let records = parse_log_output(&output);
        let errored = records.iter().filter(|r| r.is_errored()).count();

        info!(
            commits = records.len() - errored,
            errored, "Extracted commit history"
        );

        Ok(records)
    }
}
