// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for githistory-git

use thiserror::Error;

/// Errors that abort history extraction
#[derive(Debug, Error)]
pub enum GitError {
    /// The history command could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        /// Program that was invoked
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The history command exited with a non-zero status
    #[error("Wrong exec status {status}{}", format_stderr(.stderr))]
    CommandFailed {
        /// Exit code, or -1 when the process was killed by a signal
        status: i32,
        /// Trimmed standard error of the command
        stderr: String,
    },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {stderr}")
    }
}

/// Reasons a single history line fails to decode
///
/// These never abort extraction; they end up as the message of an
/// errored [`CommitRecord`](crate::CommitRecord).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The line did not split into the expected number of fields
    #[error("expected {expected} fields, found {found}")]
    FieldCount {
        /// Number of fields the format produces
        expected: usize,
        /// Number of fields actually present
        found: usize,
    },

    /// The hash field was empty
    #[error("empty commit hash")]
    EmptyHash,

    /// The author date was not a short `YYYY-MM-DD` date
    #[error("invalid author date {value:?}: {reason}")]
    InvalidDate {
        /// The raw date field
        value: String,
        /// Parser failure description
        reason: String,
    },
}
