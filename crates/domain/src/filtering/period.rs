// crates/domain/src/filtering/period.rs
use std::{fmt, str::FromStr};

use chrono::{DateTime, Datelike, Days, Duration, Months, NaiveDate, NaiveTime, TimeZone, Utc};
use leadlens_shared_kernel::{DomainError, DomainResult, Timestamp};
use serde::{Deserialize, Serialize};

use super::interval::Interval;

/// Named calendar periods an interval can be anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Day,
    /// ISO week, starting on Monday.
    Week,
    Month,
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            _ => Err(DomainError::InvalidPeriod { name: s.to_string() }),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
        };
        write!(f, "{name}")
    }
}

/// Builds the closed interval covering the period that contains `reference`.
///
/// Both bounds are anchored in the timezone of `reference` itself, so the
/// calendar day is the one the reference's own context would print; a range
/// built here never mixes calendar contexts with the instant that seeded it.
/// The end bound is the last representable instant of the period, one
/// nanosecond before the next period starts, which keeps membership tests
/// inclusive on both ends.
///
/// # Errors
/// Fails with [`DomainError::NonexistentBoundary`] when the anchoring local
/// midnight does not exist in the reference's zone (a DST gap spanning
/// midnight) or the boundary date falls outside the representable calendar.
pub fn bounds<Tz: TimeZone>(reference: &DateTime<Tz>, period: Period) -> DomainResult<Interval> {
    let date = reference.date_naive();
    let (first_day, next_first) = match period {
        Period::Day => (date, add_days(date, 1)?),
        Period::Week => {
            let monday = date
                .checked_sub_days(Days::new(u64::from(date.weekday().num_days_from_monday())))
                .ok_or(DomainError::NonexistentBoundary { date })?;
            (monday, add_days(monday, 7)?)
        }
        Period::Month => {
            let first = date.with_day(1).ok_or(DomainError::NonexistentBoundary { date })?;
            let next = first
                .checked_add_months(Months::new(1))
                .ok_or(DomainError::NonexistentBoundary { date })?;
            (first, next)
        }
    };

    let tz = reference.timezone();
    let start = start_of_day(&tz, first_day)?.with_timezone(&Utc);
    let next_start = start_of_day(&tz, next_first)?.with_timezone(&Utc);
    let end = next_start - Duration::nanoseconds(1);

    Interval::new(Timestamp::new(start), Timestamp::new(end))
}

fn add_days(date: NaiveDate, days: u64) -> DomainResult<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .ok_or(DomainError::NonexistentBoundary { date })
}

/// First valid instant of `date` in `tz`.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DomainResult<DateTime<Tz>> {
    tz.from_local_datetime(&date.and_time(NaiveTime::MIN))
        .earliest()
        .ok_or(DomainError::NonexistentBoundary { date })
}
