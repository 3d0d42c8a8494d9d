//! Low-precision nutation and the lunar fundamental arguments it needs.
//!
//! Four-term series for nutation in longitude (Δψ) and obliquity (Δε),
//! good to about 0.5″ and 0.1″ respectively. Coefficients are in
//! arcseconds and returned in degrees.
//!
//! Source: Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 22.

use sunlight_math::Angle;

/// Geometric mean longitude of the Moon, in [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_lunar_longitude(t: f64) -> Angle {
    let term1 = 218.3165;
    let term2 = 481_267.8813 * t;
    Angle::new(term1 + term2).unwound()
}

/// Longitude of the Moon's mean ascending node (Ω), in [0, 360).
pub fn ascending_lunar_node_longitude(t: f64) -> Angle {
    let term1 = 125.044_52;
    let term2 = 1934.136_261 * t;
    let term3 = 0.002_070_8 * t.powi(2);
    let term4 = t.powi(3) / 450_000.0;
    Angle::new(term1 - term2 + term3 + term4).unwound()
}

/// Nutation in longitude Δψ, in degrees.
///
/// `solar_longitude` (L0) and `lunar_longitude` (L′) are the mean
/// longitudes, `node` is Ω.
pub fn nutation_in_longitude(solar_longitude: Angle, lunar_longitude: Angle, node: Angle) -> f64 {
    let term1 = (-17.2 / 3600.0) * node.radians().sin();
    let term2 = (1.32 / 3600.0) * (2.0 * solar_longitude.radians()).sin();
    let term3 = (0.23 / 3600.0) * (2.0 * lunar_longitude.radians()).sin();
    let term4 = (0.21 / 3600.0) * (2.0 * node.radians()).sin();
    term1 - term2 - term3 + term4
}

/// Nutation in obliquity Δε, in degrees.
pub fn nutation_in_obliquity(solar_longitude: Angle, lunar_longitude: Angle, node: Angle) -> f64 {
    let term1 = (9.2 / 3600.0) * node.radians().cos();
    let term2 = (0.57 / 3600.0) * (2.0 * solar_longitude.radians()).cos();
    let term3 = (0.10 / 3600.0) * (2.0 * lunar_longitude.radians()).cos();
    let term4 = (0.09 / 3600.0) * (2.0 * node.radians()).cos();
    term1 + term2 + term3 - term4
}
