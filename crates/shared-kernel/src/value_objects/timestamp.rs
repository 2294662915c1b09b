// crates/shared-kernel/src/value_objects/timestamp.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An absolute instant on the UTC timeline, comparable at nanosecond resolution.
///
/// Equality and ordering ignore the offset a wall-clock representation was
/// written in: `2024-03-15T09:00:00+05:00` and `2024-03-15T04:00:00Z` are the
/// same `Timestamp`. Fractional seconds are preserved as parsed, so values of
/// mixed precision compare at the finer resolution.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[must_use]
#[repr(transparent)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339()
    }
}

impl FromStr for Timestamp {
    type Err = String;

    /// Accepts RFC 3339 and RFC 2822 forms, both of which carry an explicit
    /// UTC offset. Date-only and offset-less datetimes are rejected rather
    /// than interpreted in a guessed timezone.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
            return Ok(Self(dt.with_timezone(&Utc)));
        }
        Err(format!("expected a datetime with an explicit UTC offset, got '{s}'"))
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(instant: DateTime<Utc>) -> Self {
        Self::new(instant)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.instant()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
