//! Commit record types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Short date format produced by `git log --date=short`
pub const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// One entry of extracted history
///
/// A record is either valid (all commit fields set, `error` absent) or
/// errored (only `error` set). Use [`CommitRecord::valid`] and
/// [`CommitRecord::errored`] to build one.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CommitRecord {
    /// Full commit hash
    pub sha1: Option<String>,
    /// Author name
    pub author_name: Option<String>,
    /// Author email
    pub author_email: Option<String>,
    /// Author date (day precision)
    pub author_date: Option<NaiveDate>,
    /// First line of the commit message
    pub subject: Option<String>,
    /// Decode failure description, only set for errored records
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommitRecord {
    /// Build a valid record from decoded fields
    #[must_use]
    pub fn valid(
        sha1: impl Into<String>,
        author_name: impl Into<String>,
        author_email: impl Into<String>,
        author_date: NaiveDate,
        subject: impl Into<String>,
    ) -> Self {
        Self {
            sha1: Some(sha1.into()),
            author_name: Some(author_name.into()),
            author_email: Some(author_email.into()),
            author_date: Some(author_date),
            subject: Some(subject.into()),
            error: None,
        }
    }

    /// Build an errored record carrying only a diagnostic message
    #[must_use]
    pub fn errored(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Default::default()
        }
    }

    /// Whether this record came from a line that failed to decode
    #[must_use]
    pub fn is_errored(&self) -> bool {
        self.error.is_some()
    }

    /// Subject line, empty for errored records
    #[must_use]
    pub fn subject(&self) -> &str {
        self.subject.as_deref().unwrap_or("")
    }

    /// Hash, empty for errored records
    #[must_use]
    pub fn sha1(&self) -> &str {
        self.sha1.as_deref().unwrap_or("")
    }

    /// Author name, empty for errored records
    #[must_use]
    pub fn author_name(&self) -> &str {
        self.author_name.as_deref().unwrap_or("")
    }

    /// Author email, empty for errored records
    #[must_use]
    pub fn author_email(&self) -> &str {
        self.author_email.as_deref().unwrap_or("")
    }

    /// Author date in `YYYY-MM-DD` form, empty for errored records
    #[must_use]
    pub fn short_date(&self) -> String {
        self.author_date
            .map(|d| d.format(SHORT_DATE_FORMAT).to_string())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> CommitRecord {
        CommitRecord::valid(
            "1945ab9c752534e733c38ba0109dc3b741f0a6eb",
            "Test Author",
            "test@example.com",
            NaiveDate::from_ymd_opt(2026, 1, 17).unwrap(),
            "feat(skills): add milestone-creator",
        )
    }

    #[test]
    fn test_valid_record_has_no_error() {
        let record = sample_record();
        assert!(!record.is_errored());
        assert_eq!(record.subject(), "feat(skills): add milestone-creator");
        assert_eq!(record.author_name(), "Test Author");
        assert_eq!(record.author_email(), "test@example.com");
    }

    #[test]
    fn test_errored_record_has_no_fields() {
        let record = CommitRecord::errored("3 decode failed: empty commit hash");
        assert!(record.is_errored());
        assert!(record.sha1.is_none());
        assert!(record.author_date.is_none());
        assert_eq!(record.subject(), "");
        assert_eq!(record.short_date(), "");
    }

    #[test]
    fn test_short_date_round_trips_git_format() {
        assert_eq!(sample_record().short_date(), "2026-01-17");
    }

    #[test]
    fn test_record_serialization_roundtrip() {
        let record = sample_record();
        let json = serde_json::to_string(&record).expect("serialize");
        let deserialized: CommitRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(record, deserialized);
    }

    #[test]
    fn test_valid_record_json_omits_error() {
        let json = serde_json::to_string(&sample_record()).expect("serialize");
        assert!(!json.contains("\"error\""));
        assert!(json.contains("\"author_date\":\"2026-01-17\""));
    }
}
