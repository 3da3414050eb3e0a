//! githistory-sql: print SQL that loads a repository's git history
//!
//! Usage:
//!   githistory-sql --table=git_history --service=svc1 --repo=repoA [--dir=PATH]

use anyhow::Context;
use githistory_sql::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::parse_args(std::env::args_os().skip(1)).unwrap_or_else(|e| e.exit());

    // Logs go to stderr; stdout carries only SQL
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    githistory_sql::run(&config, &mut out).context("Failed to fetch git history")?;

    Ok(())
}
