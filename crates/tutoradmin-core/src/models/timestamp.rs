use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date or date-time as the server sent it.
///
/// The backend mixes RFC 3339 instants (`2024-01-15T10:00:00Z`) and plain
/// dates (`2025-01-15`) across records. The raw text is kept so a record
/// re-serializes exactly as received; [`Timestamp::to_datetime`] parses on
/// demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// RFC 3339 as-is, `YYYY-MM-DD` as midnight UTC, anything else `None`.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if let Ok(instant) = DateTime::parse_from_rfc3339(&self.0) {
            return Some(instant.with_timezone(&Utc));
        }
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d")
            .ok()
            .map(|date| date.and_time(NaiveTime::MIN).and_utc())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        self.to_datetime().map(|instant| instant.date_naive())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self(instant.to_rfc3339())
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
