// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! githistory-git: Git history extraction for githistory-sql
//!
//! This library crate runs `git log` over the non-merge history of a
//! repository and decodes each line into a [`CommitRecord`].

#![warn(missing_docs)]

//! # Example
//!
//! ```no_run
//! use githistory_git::HistoryCommand;
//!
//! let commits = HistoryCommand::new()
//!     .workdir(".")
//!     .commits()
//!     .expect("run git log");
//!
//! for c in commits.iter().filter(|c| !c.is_errored()) {
//!     println!("{} - {}", c.sha1(), c.subject());
//! }
//! ```

pub mod commit;
pub mod error;
pub mod log;
pub mod parser;

pub use commit::CommitRecord;
pub use error::{DecodeError, GitError};
pub use log::HistoryCommand;
pub use parser::{decode_line, parse_log_output};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::commit::CommitRecord;
    pub use crate::error::{DecodeError, GitError};
    pub use crate::log::HistoryCommand;
}
