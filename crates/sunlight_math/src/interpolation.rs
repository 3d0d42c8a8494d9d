//! Three-point quadratic interpolation over equally spaced tabular values.
//!
//! Given a value `y2` with its neighbours `y1` (one interval before) and
//! `y3` (one interval after), and an offset `n` measured in intervals from
//! `y2`, the interpolated value is
//!
//! ```text
//! a = y2 - y1,  b = y3 - y2,  c = b - a
//! y = y2 + (n / 2) * (a + b + n * c)
//! ```
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 3.

use crate::angle::Angle;

/// Interpolate a scalar at offset `n` (in intervals) from `value`.
///
/// `n` is not clamped; values outside `[-1, 1]` extrapolate.
pub fn interpolate(value: f64, previous: f64, next: f64, n: f64) -> f64 {
    let a = value - previous;
    let b = next - value;
    let c = b - a;
    value + (n / 2.0) * (a + b + n * c)
}

/// Interpolate an angle at offset `n` from `value`.
///
/// The two differences are unwound before combining, so a sequence that
/// crosses 0°/360° (e.g. 359°, 1°, 3°) interpolates smoothly. The result is
/// not normalized.
pub fn interpolate_angles(value: Angle, previous: Angle, next: Angle, n: f64) -> Angle {
    let a = (value - previous).unwound();
    let b = (next - value).unwound();
    let c = b - a;
    Angle::new(value.degrees() + (n / 2.0) * (a.degrees() + b.degrees() + n * c.degrees()))
}
