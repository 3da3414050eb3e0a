// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! SQL rendering
//!
//! Turns extracted commit records into a `DELETE` statement scoped to one
//! service/repo pair followed by a single multi-row `INSERT`.
//!
//! # Example
//!
//! ```
//! use githistory_sql::render::SqlRenderer;
//!
//! let renderer = SqlRenderer::new("git_history", "svc1", "repoA");
//! assert_eq!(
//!     renderer.delete_statement(),
//!     "DELETE FROM `git_history` WHERE `service` = 'svc1' AND `repo` = 'repoA';\n\n"
//! );
//! ```

use std::io::{self, Write};

use githistory_git::CommitRecord;
use tracing::debug;

use crate::config::Config;

/// Column projection of the insert statement
pub const COLUMNS: [&str; 6] = ["service", "repo", "hash", "date", "message", "author"];

/// Escape a value for use inside a single-quoted SQL string literal
///
/// Backslash-escapes `'`, `"`, `\` and NUL (as `\0`).
#[must_use]
pub fn escape_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\'' | '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            '\0' => escaped.push_str("\\0"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Backtick-quote an identifier, doubling embedded backticks
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn quote_literal(value: &str) -> String {
    format!("'{}'", escape_string(value))
}

/// Renders commit records for one table and service/repo pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlRenderer {
    table: String,
    service: String,
    repo: String,
}

impl SqlRenderer {
    /// Create a renderer for the given table, service and repo
    #[must_use]
    pub fn new(
        table: impl Into<String>,
        service: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            table: table.into(),
            service: service.into(),
            repo: repo.into(),
        }
    }

    /// Create a renderer from a validated configuration
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.table_name(), config.service(), config.repo())
    }

    /// `DELETE` of all rows for this service and repo, followed by a blank line
    #[must_use]
    pub fn delete_statement(&self) -> String {
        format!(
            "DELETE FROM {} WHERE `service` = {} AND `repo` = {};\n\n",
            quote_identifier(&self.table),
            quote_literal(&self.service),
            quote_literal(&self.repo),
        )
    }

    /// `INSERT ... VALUES` header line
    #[must_use]
    pub fn insert_header(&self) -> String {
        let columns = COLUMNS
            .iter()
            .map(|c| quote_identifier(c))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {}({columns}) VALUES\n",
            quote_identifier(&self.table)
        )
    }

    /// Value tuple for one record, or `None` if the record has no subject
    ///
    /// Errored records never have a subject and are always skipped.
    #[must_use]
    pub fn row(&self, commit: &CommitRecord) -> Option<String> {
        if commit.subject().is_empty() {
            return None;
        }
        let values = [
            quote_literal(&self.service),
            quote_literal(&self.repo),
            quote_literal(commit.sha1()),
            quote_literal(&commit.short_date()),
            quote_literal(commit.subject()),
            quote_literal(commit.author_name()),
        ];
        Some(format!("({})", values.join(", ")))
    }

    /// Render the full SQL text
    ///
    /// Returns an empty string when there are no records. When records
    /// exist but none has a subject, only the `DELETE` is rendered.
    #[must_use]
    pub fn render(&self, commits: &[CommitRecord]) -> String {
        if commits.is_empty() {
            return String::new();
        }

        let mut sql = self.delete_statement();
        let rows: Vec<String> = commits.iter().filter_map(|c| self.row(c)).collect();
        debug!(
            records = commits.len(),
            rows = rows.len(),
            "Rendering insert statement"
        );

        if !rows.is_empty() {
            sql.push_str(&self.insert_header());
            sql.push_str(&rows.join(",\n"));
            sql.push_str(";\n");
        }
        sql
    }

    /// Render and write the SQL text, returning the number of rows written
    ///
    /// # Errors
    ///
    /// Returns any I/O error from the writer.
    pub fn write_to<W: Write>(&self, out: &mut W, commits: &[CommitRecord]) -> io::Result<usize> {
        let sql = self.render(commits);
        out.write_all(sql.as_bytes())?;
        out.flush()?;
        Ok(commits.iter().filter(|c| !c.subject().is_empty()).count())
    }
}
