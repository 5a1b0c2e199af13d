//! # Time Utilities
//!
//! Utilities for time formatting and manipulation using chrono.

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time.
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current month as `YYYY-MM`, the format the expenses endpoint expects.
pub fn current_month() -> String {
    now_utc().format("%Y-%m").to_string()
}

/// Parse a `YYYY-MM` month into its first day.
pub fn parse_month(month: &str) -> Result<NaiveDate, Error> {
    if month.len() != 7 {
        return Err(Error::FailToMonthParse(month.to_string()));
    }
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d")
        .map_err(|_| Error::FailToMonthParse(month.to_string()))
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToMonthParse(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error
