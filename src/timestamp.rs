use crate::error::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an RFC 3339 timestamp.
///
/// Values without an offset are rejected unless `assume_utc` is set, in which
/// case they are read as UTC.
pub fn parse_timestamp(s: &str, assume_utc: bool) -> Result<DateTime<FixedOffset>> {
    let s = s.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(s) {
        return Ok(parsed);
    }

    for format in &NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            if !assume_utc {
                return Err(Error::NaiveTimestamp(s.to_string()));
            }
            return Ok(Utc.from_utc_datetime(&naive).fixed_offset());
        }
    }

    Err(Error::InvalidTimestamp(s.to_string()))
}
