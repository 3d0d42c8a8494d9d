//! UTC calendar fields rebuilt from a date and an hour-of-day offset.
//!
//! The solar algorithms return times as fractional hours after 0h UTC of
//! the requested date. Values below 0 or at/above 24 are legal and land on
//! the neighbouring day. The hours are split into whole hours, minutes and
//! seconds by flooring at each step; sub-second precision is dropped.

use chrono::{DateTime, Datelike, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};

use crate::error::TimeError;

/// UTC calendar date and time of day, to whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

/// Build a calendar date, rejecting impossible year/month/day triples.
pub fn calendar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, TimeError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(TimeError::InvalidDate { year, month, day })
}

/// Split fractional hours into `(hours, minutes, seconds)`, flooring each.
///
/// Hours may be negative; minutes and seconds are then counted forward from
/// the floored hour, as in `-0.5 → (-1, 30, 0)`.
pub fn split_hours(hours: f64) -> Result<(i64, i64, i64), TimeError> {
    if !hours.is_finite() {
        return Err(TimeError::NonFiniteHours(hours));
    }
    let h = hours.floor();
    let m = ((hours - h) * 60.0).floor();
    let s = ((hours - (h + m / 60.0)) * 60.0 * 60.0).floor();
    Ok((h as i64, m as i64, s as i64))
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Calendar fields of a chrono UTC timestamp, truncated to the second.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
        }
    }

    /// Time `hours` after 0h UTC on `date`.
    pub fn from_hour_of_day(date: NaiveDate, hours: f64) -> Result<Self, TimeError> {
        Ok(Self::from_datetime(&datetime_from_hour_of_day(date, hours)?))
    }

    /// Convert to a chrono UTC timestamp.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>, TimeError> {
        Utc.with_ymd_and_hms(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
        .single()
        .ok_or(TimeError::InvalidDate {
            year: self.year,
            month: self.month,
            day: self.day,
        })
    }
}

/// Timestamp `hours` after 0h UTC on `date`, with floor decomposition.
pub fn datetime_from_hour_of_day(date: NaiveDate, hours: f64) -> Result<DateTime<Utc>, TimeError> {
    let (h, m, s) = split_hours(hours)?;
    let offset = TimeDelta::try_hours(h)
        .zip(TimeDelta::try_minutes(m))
        .zip(TimeDelta::try_seconds(s))
        .and_then(|((h, m), s)| h.checked_add(&m)?.checked_add(&s))
        .ok_or(TimeError::OutOfRange)?;
    date.and_hms_opt(0, 0, 0)
        .and_then(|midnight| midnight.checked_add_signed(offset))
        .map(|naive| naive.and_utc())
        .ok_or(TimeError::OutOfRange)
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}
