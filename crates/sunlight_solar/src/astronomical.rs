//! Closed-form solar series.
//!
//! Mean and apparent solar longitude, mean anomaly, equation of the
//! center, obliquity of the ecliptic and the altitude of a body on the
//! celestial sphere. `t` is always Julian centuries since J2000.0; results
//! are in degrees.
//!
//! Sources: Meeus, *Astronomical Algorithms* (2nd ed.), Chapters 13, 22
//! and 25 (low-accuracy solar coordinates). The coefficients are the
//! published constants and are kept verbatim.

use sunlight_math::Angle;

/// Longitude of the ascending node used by the low-accuracy aberration
/// and obliquity corrections, in degrees (not unwound).
fn correction_node(t: f64) -> f64 {
    125.04 - (1934.136 * t)
}

/// Geometric mean longitude of the Sun (L0), in [0, 360).
pub fn mean_solar_longitude(t: f64) -> Angle {
    let term1 = 280.466_456_7;
    let term2 = 36_000.769_83 * t;
    let term3 = 0.000_303_2 * t.powi(2);
    Angle::new(term1 + term2 + term3).unwound()
}

/// Mean anomaly of the Sun (M), in [0, 360).
pub fn mean_solar_anomaly(t: f64) -> Angle {
    let term1 = 357.529_11;
    let term2 = 35_999.050_29 * t;
    let term3 = 0.000_153_7 * t.powi(2);
    Angle::new(term1 + term2 - term3).unwound()
}

/// The Sun's equation of the center (C).
///
/// A small signed correction; not unwound.
pub fn solar_equation_of_the_center(t: f64, mean_anomaly: Angle) -> Angle {
    let m = mean_anomaly.radians();
    let term1 = (1.914_602 - (0.004_817 * t) - (0.000_014 * t.powi(2))) * m.sin();
    let term2 = (0.019_993 - (0.000_101 * t)) * (2.0 * m).sin();
    let term3 = 0.000_289 * (3.0 * m).sin();
    Angle::new(term1 + term2 + term3)
}

/// Apparent longitude of the Sun (λ), referred to the true equinox of the
/// date, in [0, 360).
///
/// True longitude `L0 + C` corrected for aberration and nutation.
pub fn apparent_solar_longitude(t: f64, mean_longitude: Angle) -> Angle {
    let longitude = mean_longitude + solar_equation_of_the_center(t, mean_solar_anomaly(t));
    let omega = Angle::new(correction_node(t));
    let lambda = Angle::new(longitude.degrees() - 0.005_69 - (0.004_78 * omega.radians().sin()));
    lambda.unwound()
}

/// Mean obliquity of the ecliptic (ε0), IAU formula.
pub fn mean_obliquity_of_the_ecliptic(t: f64) -> Angle {
    let term1 = 23.439_291;
    let term2 = 0.013_004_167 * t;
    let term3 = 0.000_000_163_9 * t.powi(2);
    let term4 = 0.000_000_503_6 * t.powi(3);
    Angle::new(term1 - term2 - term3 + term4)
}

/// Obliquity of the ecliptic corrected for the apparent position of the
/// Sun.
pub fn apparent_obliquity_of_the_ecliptic(t: f64, mean_obliquity: Angle) -> Angle {
    let o = correction_node(t);
    Angle::new(mean_obliquity.degrees() + (0.002_56 * Angle::new(o).radians().cos()))
}

/// Altitude of a body with declination `declination` at local hour angle
/// `hour_angle`, seen from `latitude`.
///
/// `h = asin(sinφ·sinδ + cosφ·cosδ·cosH)`
pub fn altitude_of_celestial_body(latitude: Angle, declination: Angle, hour_angle: Angle) -> Angle {
    let term1 = latitude.radians().sin() * declination.radians().sin();
    let term2 =
        latitude.radians().cos() * declination.radians().cos() * hour_angle.radians().cos();
    Angle::from_radians((term1 + term2).asin())
}
