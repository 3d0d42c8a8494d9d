//! Error types for calendar and hour-of-day conversions.

use thiserror::Error;

/// Errors from Julian Day or UTC calendar conversions.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Hour-of-day value is NaN or infinite.
    #[error("hour of day is not finite: {0}")]
    NonFiniteHours(f64),
    /// Year/month/day do not form a Gregorian calendar date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Result falls outside the range chrono can represent.
    #[error("time outside the representable range")]
    OutOfRange,
}
