// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for githistory-sql
//!
//! Arguments use a loose `--key=value` / `--key` syntax. Each token is
//! first mapped through a fixed key table (unknown keys are dropped) and
//! the normalized vector is then parsed by clap.

use std::ffi::{OsStr, OsString};
use std::path::PathBuf;

use clap::Parser;

/// Name used as `argv[0]` when handing normalized arguments to clap
pub const PROGRAM_NAME: &str = "githistory-sql";

/// Value assigned to a value key given without `=value`
pub const BARE_KEY_VALUE: &str = "1";

/// Render the non-merge git history of a repository as SQL
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "githistory-sql")]
#[command(version, about, long_about = None)]
#[command(args_override_self = true)]
pub struct Config {
    /// Table to delete from and insert into
    #[arg(long = "table", value_name = "NAME", env = "GITHISTORY_TABLE")]
    pub table_name: Option<String>,

    /// Service identifier written to every row
    #[arg(long, env = "GITHISTORY_SERVICE")]
    pub service: Option<String>,

    /// Repository identifier written to every row
    #[arg(long, env = "GITHISTORY_REPO")]
    pub repo: Option<String>,

    /// Directory to run git in
    ///
    /// Ignored when it does not exist. Defaults to the current directory.
    #[arg(long = "dir", value_name = "PATH", env = "GITHISTORY_DIR")]
    pub project_dir: Option<PathBuf>,

    /// Output file name (accepted, SQL is always written to stdout)
    #[arg(long = "o", value_name = "FILE")]
    pub output_file_name: Option<String>,

    /// Enable verbose logging (debug level)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(long, default_value = "false")]
    pub quiet: bool,
}

/// How a recognized key is forwarded to clap
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyKind {
    /// `--long=value`
    Value(&'static str),
    /// `--long`
    Flag(&'static str),
}

fn lookup_key(key: &str) -> Option<KeyKind> {
    let kind = match key {
        "table" => KeyKind::Value("table"),
        "repo" => KeyKind::Value("repo"),
        "service" => KeyKind::Value("service"),
        "dir" => KeyKind::Value("dir"),
        "o" => KeyKind::Value("o"),
        "verbose" | "v" => KeyKind::Flag("verbose"),
        "quiet" | "q" => KeyKind::Flag("quiet"),
        "help" | "h" => KeyKind::Flag("help"),
        "version" | "V" => KeyKind::Flag("version"),
        _ => return None,
    };
    Some(kind)
}

fn is_truthy(value: &str) -> bool {
    !matches!(value, "" | "0" | "false")
}

/// Split a token into its key and optional value at the first `=`
///
/// The value keeps its raw bytes when the token is not valid UTF-8, so a
/// directory name survives unchanged.
fn split_token(token: &OsStr) -> (String, Option<OsString>) {
    match token.to_str() {
        Some(token) => match token.split_once('=') {
            Some((key, value)) => (key.to_string(), Some(OsString::from(value.trim()))),
            None => (token.to_string(), None),
        },
        None => split_raw_token(token),
    }
}

#[cfg(unix)]
fn split_raw_token(token: &OsStr) -> (String, Option<OsString>) {
    use std::os::unix::ffi::OsStrExt;

    let bytes = token.as_bytes();
    match bytes.iter().position(|&b| b == b'=') {
        Some(pos) => (
            String::from_utf8_lossy(&bytes[..pos]).into_owned(),
            Some(OsStr::from_bytes(bytes[pos + 1..].trim_ascii()).to_os_string()),
        ),
        None => (String::from_utf8_lossy(bytes).into_owned(), None),
    }
}

#[cfg(not(unix))]
fn split_raw_token(token: &OsStr) -> (String, Option<OsString>) {
    let token = token.to_string_lossy();
    match token.split_once('=') {
        Some((key, value)) => (key.to_string(), Some(OsString::from(value.trim()))),
        None => (token.into_owned(), None),
    }
}

/// Map raw tokens to clap-style arguments
///
/// The key is the part before the first `=` with surrounding spaces and
/// dashes removed; the value is the trimmed remainder. Tokens whose key is
/// not in the key table are dropped. Values need not be valid UTF-8.
#[must_use]
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: AsRef<OsStr>,
{
    args.into_iter()
        .filter_map(|token| {
            let (raw_key, value) = split_token(token.as_ref());
            let key = raw_key.trim_matches(|c| c == ' ' || c == '-');

            match (lookup_key(key)?, value) {
                (KeyKind::Value(long), Some(value)) => {
                    let mut arg = OsString::from(format!("--{long}="));
                    arg.push(value);
                    Some(arg)
                }
                (KeyKind::Value(long), None) => {
                    Some(OsString::from(format!("--{long}={BARE_KEY_VALUE}")))
                }
                (KeyKind::Flag(_), Some(value))
                    if value.to_str().is_some_and(|v| !is_truthy(v)) =>
                {
                    None
                }
                (KeyKind::Flag(long), _) => Some(OsString::from(format!("--{long}"))),
            }
        })
        .collect()
}

impl Config {
    /// Parse arguments (without the program name)
    ///
    /// # Errors
    ///
    /// Returns clap's error for `--help`, `--version`, and values clap
    /// rejects, including non-UTF-8 text for the string options. Missing
    /// required fields are not checked here; see [`Config::validate`].
    pub fn parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: AsRef<OsStr>,
    {
        let argv = std::iter::once(OsString::from(PROGRAM_NAME)).chain(normalize_args(args));
        Self::try_parse_from(argv)
    }

    /// Check that repo, service and table name are all non-empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first empty field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("repo", &self.repo),
            ("service", &self.service),
            ("table name", &self.table_name),
        ];
        for (field, value) in required {
            if value.as_deref().is_none_or(str::is_empty) {
                return Err(ConfigError::MissingField(field));
            }
        }
        Ok(())
    }

    /// Table name, empty if unset
    #[must_use]
    pub fn table_name(&self) -> &str {
        self.table_name.as_deref().unwrap_or("")
    }

    /// Service identifier, empty if unset
    #[must_use]
    pub fn service(&self) -> &str {
        self.service.as_deref().unwrap_or("")
    }

    /// Repository identifier, empty if unset
    #[must_use]
    pub fn repo(&self) -> &str {
        self.repo.as_deref().unwrap_or("")
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required field is missing or empty
    #[error("Empty {0}")]
    MissingField(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_value_keys() {
        let args = normalize_args(["--table=git_history", "--repo=repoA", "--service=svc1"]);
        assert_eq!(
            args,
            vec!["--table=git_history", "--repo=repoA", "--service=svc1"]
        );
    }

    #[test]
    fn test_normalize_trims_dashes_and_spaces() {
        let args = normalize_args(["-table= git_history ", "service=svc1", " --repo =repoA"]);
        assert_eq!(
            args,
            vec!["--table=git_history", "--service=svc1", "--repo=repoA"]
        );
    }

    #[test]
    fn test_normalize_drops_unknown_keys() {
        let args = normalize_args(["--colour=red", "--table=t", "positional", "--"]);
        assert_eq!(args, vec!["--table=t"]);
    }

    #[test]
    fn test_normalize_bare_value_key() {
        assert_eq!(normalize_args(["--table"]), vec!["--table=1"]);
    }

    #[test]
    fn test_normalize_keeps_equals_in_value() {
        assert_eq!(normalize_args(["--repo=a=b"]), vec!["--repo=a=b"]);
    }

    #[test]
    fn test_normalize_flags() {
        assert_eq!(
            normalize_args(["-v", "--quiet", "--verbose=false", "--q=0"]),
            vec!["--verbose", "--quiet"]
        );
    }

    #[test]
    fn test_normalize_accepts_os_strings() {
        let args = normalize_args([OsString::from("--dir= /srv/repo "), OsString::from("-x")]);
        assert_eq!(args, vec!["--dir=/srv/repo"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_dir_is_kept_as_path() {
        use std::os::unix::ffi::OsStrExt;

        let args = [
            OsStr::new("--table=git_history"),
            OsStr::from_bytes(b"--dir=/tmp/caf\xe9"),
        ];
        let config = Config::parse_args(args).expect("non-UTF-8 dir should parse");

        assert_eq!(
            config.project_dir,
            Some(PathBuf::from(OsStr::from_bytes(b"/tmp/caf\xe9")))
        );
        assert_eq!(config.table_name.as_deref(), Some("git_history"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_table_is_clap_error() {
        use std::os::unix::ffi::OsStrExt;

        let err = Config::parse_args([OsStr::from_bytes(b"--table=caf\xe9")]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::InvalidUtf8);
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.table_name.is_none());
        assert!(config.project_dir.is_none());
        assert!(config.output_file_name.is_none());
        assert!(!config.verbose);
        assert!(!config.quiet);
    }

    #[test]
    fn test_validate_complete_config() {
        let config = Config {
            table_name: Some("git_history".to_string()),
            service: Some("svc1".to_string()),
            repo: Some("repoA".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_reports_repo_first() {
        let config = Config::default();
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "Empty repo");
    }

    #[test]
    fn test_validate_empty_string_is_missing() {
        let config = Config {
            table_name: Some(String::new()),
            service: Some("svc1".to_string()),
            repo: Some("repoA".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("table name")));
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(Config::default().log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_log_level_verbose_wins_over_quiet() {
        let config = Config {
            verbose: true,
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::DEBUG);
    }

    #[test]
    fn test_log_level_quiet() {
        let config = Config {
            quiet: true,
            ..Default::default()
        };
        assert_eq!(config.log_level(), tracing::Level::WARN);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Config::command().debug_assert();
    }
}
