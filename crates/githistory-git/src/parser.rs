// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! History line decoding
//!
//! The history command prints one commit per line with the fields
//! separated by [`FIELD_SEPARATOR`]. Lines that do not decode become
//! errored records instead of failing the whole extraction.

use chrono::NaiveDate;
use tracing::debug;

use crate::commit::{CommitRecord, SHORT_DATE_FORMAT};
use crate::error::DecodeError;

/// ASCII unit separator placed between fields of a history line
pub const FIELD_SEPARATOR: char = '\x1f';

/// Pretty-format placeholders in output order: hash, author email,
/// author name, author date, subject
pub const FIELD_PLACEHOLDERS: [&str; 5] = ["%H", "%ae", "%an", "%ad", "%s"];

/// Decode a single history line
///
/// # Errors
///
/// Returns a [`DecodeError`] if the line has fewer than five fields, the
/// hash is empty, or the date is not `YYYY-MM-DD`. The subject is the last
/// field and keeps any separator bytes it contains.
pub fn decode_line(line: &str) -> Result<CommitRecord, DecodeError> {
    let line = line.strip_suffix('\r').unwrap_or(line);
    let fields: Vec<&str> = line
        .splitn(FIELD_PLACEHOLDERS.len(), FIELD_SEPARATOR)
        .collect();
    let [sha1, email, name, date, subject] = fields.as_slice() else {
        return Err(DecodeError::FieldCount {
            expected: FIELD_PLACEHOLDERS.len(),
            found: fields.len(),
        });
    };

    if sha1.is_empty() {
        return Err(DecodeError::EmptyHash);
    }

    let author_date =
        NaiveDate::parse_from_str(date, SHORT_DATE_FORMAT).map_err(|e| {
            DecodeError::InvalidDate {
                value: (*date).to_string(),
                reason: e.to_string(),
            }
        })?;

    Ok(CommitRecord::valid(*sha1, *name, *email, author_date, *subject))
}

/// Decode the full output of the history command
///
/// Every line yields exactly one record, in order. A line that fails to
/// decode yields an errored record whose message starts with the
/// zero-based line index.
#[must_use]
pub fn parse_log_output(output: &str) -> Vec<CommitRecord> {
    output
        .lines()
        .enumerate()
        .map(|(index, line)| match decode_line(line) {
            Ok(record) => record,
            Err(e) => {
                debug!(line = index, error = %e, "Failed to decode history line");
                CommitRecord::errored(format!("{index} decode failed: {e}"))
            }
        })
        .collect()
}
