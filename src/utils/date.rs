use crate::error::{self, Result};
use chrono::{DateTime, NaiveDate, Utc};

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp. Timestamps are converted to UTC before the
/// time of day is dropped.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.with_timezone(&Utc).date_naive())
        .map_err(|_| error::INVALID_DATE)
}
