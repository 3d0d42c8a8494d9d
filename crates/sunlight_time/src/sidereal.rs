//! Mean sidereal time at Greenwich.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Eq. 12.4:
//!
//! θ0 = 280.46061837 + 360.98564736629·(JD − 2451545.0)
//!      + 0.000387933·T² − T³ / 38710000
//!
//! The apparent sidereal time (nutation-corrected) is assembled by the
//! solar position code, which owns the nutation terms.

use sunlight_math::Angle;

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

/// Mean sidereal rotation in degrees per day.
pub const SIDEREAL_DEG_PER_DAY: f64 = 360.985_647_366_29;

/// Sidereal advance in degrees per day used when shifting θ0 by a
/// fractional day during transit/rise/set refinement.
pub const SIDEREAL_DEG_PER_DAY_ROUNDED: f64 = 360.985_647;

/// Greenwich mean sidereal time for Julian century `t`, in `[0, 360)`.
///
/// The Julian Day is recovered from `t` (`JD = 36525·T + 2451545`) so the
/// day term and the polynomial share one time argument.
pub fn mean_sidereal_time(t: f64) -> Angle {
    let jd = (t * DAYS_PER_JULIAN_CENTURY) + J2000_JD;
    let term1 = 280.460_618_37;
    let term2 = SIDEREAL_DEG_PER_DAY * (jd - J2000_JD);
    let term3 = 0.000_387_933 * t.powi(2);
    let term4 = t.powi(3) / 38_710_000.0;
    Angle::new(term1 + term2 + term3 - term4).unwound()
}

/// Mean sidereal time `m` days after the instant whose sidereal time is
/// `theta0`, in `[0, 360)`.
pub fn advance_sidereal_time(theta0: Angle, m: f64) -> Angle {
    Angle::new(theta0.degrees() + SIDEREAL_DEG_PER_DAY_ROUNDED * m).unwound()
}
