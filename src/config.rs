//! Runtime configuration
//!
//! All knobs are read from the environment once, when the binary starts:
//!
//! - `TWIG_LOG`: tracing filter directive (defaults to `warn`)
//! - `NO_PAGER`: when set, long output is never sent through the pager
//! - `TWIG_COMMIT_DATE`: fixed timestamp for new commits, `%Y-%m-%d %H:%M:%S %z`

use anyhow::Context;
use chrono::{DateTime, FixedOffset};

pub const LOG_ENV: &str = "TWIG_LOG";
pub const NO_PAGER_ENV: &str = "NO_PAGER";
pub const COMMIT_DATE_ENV: &str = "TWIG_COMMIT_DATE";

const DEFAULT_LOG_FILTER: &str = "warn";
const COMMIT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

#[derive(Debug, Clone, Default)]
pub struct Config {
    log_filter: Option<String>,
    no_pager: bool,
    commit_date: Option<DateTime<FixedOffset>>,
}

impl Config {
    pub fn load_from_env() -> anyhow::Result<Self> {
        let log_filter = std::env::var(LOG_ENV).ok();
        let no_pager = std::env::var_os(NO_PAGER_ENV).is_some();
        let commit_date = std::env::var(COMMIT_DATE_ENV)
            .ok()
            .map(|date| Self::parse_commit_date(&date))
            .transpose()?;

        Ok(Config {
            log_filter,
            no_pager,
            commit_date,
        })
    }

    fn parse_commit_date(date: &str) -> anyhow::Result<DateTime<FixedOffset>> {
        DateTime::parse_from_str(date, COMMIT_DATE_FORMAT)
            .or_else(|_| DateTime::parse_from_rfc2822(date))
            .with_context(|| format!("invalid {COMMIT_DATE_ENV} value: {date}"))
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    pub fn no_pager(&self) -> bool {
        self.no_pager
    }

    /// Timestamp to stamp on the next commit
    pub fn commit_date(&self) -> DateTime<FixedOffset> {
        self.commit_date
            .unwrap_or_else(|| chrono::Local::now().fixed_offset())
    }
}
