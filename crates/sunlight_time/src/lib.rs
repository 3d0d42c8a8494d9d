//! Time arguments for the solar series.
//!
//! This crate provides:
//! - Gregorian calendar → Julian Day and Julian Century conversions
//! - Greenwich mean sidereal time
//! - Reconstruction of UTC timestamps from a date plus fractional
//!   hour-of-day (`UtcTime`)
//!
//! All times are UTC; there is no leap-second or ΔT handling.

pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;

pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, julian_century, julian_day, julian_day_from_datetime,
    julian_day_from_parts,
};
pub use sidereal::{
    SIDEREAL_DEG_PER_DAY, SIDEREAL_DEG_PER_DAY_ROUNDED, advance_sidereal_time,
    mean_sidereal_time,
};
pub use utc_time::{UtcTime, calendar_date, datetime_from_hour_of_day, split_hours};
