use thiserror::Error;

/// Errors raised at the edges of the calculator: settings and timestamp input.
///
/// The calculations themselves never fail; absent or inverted inputs map to
/// `None`, `false`, `0.0` or `"0h"`.
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("Invalid time format '{0}', expected HH:MM")]
    InvalidTimeFormat(String),

    #[error("Invalid time '{0}'")]
    InvalidTime(String),

    #[error("Work hours start time must be before end time")]
    EmptyWindow,

    #[error("Overdue threshold must be a positive number of hours, got {0}")]
    InvalidThreshold(f64),

    #[error("Failed to parse timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("Timestamp '{0}' has no timezone offset (pass --assume-utc to treat it as UTC)")]
    NaiveTimestamp(String),
}

pub type Result<T> = std::result::Result<T, Error>;
