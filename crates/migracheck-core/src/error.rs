//! Validation errors raised at the entry-input boundary

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryError {
    #[error("intensity {0} is out of range (expected 0-10)")]
    IntensityOutOfRange(u8),

    #[error("invalid date '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid month '{0}' (expected YYYY-MM)")]
    InvalidMonth(String),

    #[error("invalid year '{0}' (expected YYYY)")]
    InvalidYear(String),
}
