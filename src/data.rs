use chrono::NaiveDate;
use thiserror::Error;

/// Fatal input problems. Anything here aborts the run before the output file
/// is touched. Note that per-row garbage is never fatal (see `merge`) - only
/// the new export being unusable as a whole is.
#[derive(Error, Debug, PartialEq, Eq)]
pub(crate) enum Error {
    #[error("new CSV is empty")]
    EmptyNewTable,
    #[error("date column '{0}' not found in NEW header")]
    DateColumnMissing(String),
}

/// Parse the date part of a cell. Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`
/// or ISO-like `YYYY-MM-DDTHH:MM:SSZ`; whatever time-of-day follows the date is
/// dropped since only the calendar date matters here. `None` means the cell
/// doesn't carry a date, which callers treat as "skip this row", not an error.
pub(crate) fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    let date_part = s.split(['T', ' ']).next().unwrap_or(s);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}
