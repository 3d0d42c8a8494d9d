//! Shared numeric helpers.

/// Reduce `value` into `[0, max)` by subtracting whole multiples of `max`.
///
/// `value - max * floor(value / max)`, with the two rounding edge cases
/// (a result of exactly `max`, or a tiny negative remainder) folded back
/// into range.
pub fn normalize_to_scale(value: f64, max: f64) -> f64 {
    let r = value - max * (value / max).floor();
    if r >= max {
        r - max
    } else if r < 0.0 {
        r + max
    } else {
        r
    }
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    normalize_to_scale(deg, 360.0)
}
