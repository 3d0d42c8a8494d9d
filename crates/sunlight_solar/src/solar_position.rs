//! Apparent equatorial position of the Sun at one instant.

use sunlight_math::Angle;
use sunlight_time::{julian_century, mean_sidereal_time};

use crate::astronomical::{
    apparent_obliquity_of_the_ecliptic, apparent_solar_longitude, mean_obliquity_of_the_ecliptic,
    mean_solar_longitude,
};
use crate::nutation::{
    ascending_lunar_node_longitude, mean_lunar_longitude, nutation_in_longitude,
    nutation_in_obliquity,
};

/// The Sun's apparent declination and right ascension together with the
/// apparent sidereal time at Greenwich, for one Julian Day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Angle between the Sun's rays and the plane of Earth's equator.
    pub declination: Angle,
    /// Angular distance along the celestial equator from the vernal equinox
    /// to the Sun's hour circle, in [0, 360).
    pub right_ascension: Angle,
    /// Hour angle of the true vernal equinox at Greenwich.
    pub apparent_sidereal_time: Angle,
}

impl SolarPosition {
    /// Compute the snapshot for `julian_day` (UT).
    pub fn new(julian_day: f64) -> Self {
        let t = julian_century(julian_day);
        let l0 = mean_solar_longitude(t);
        let lp = mean_lunar_longitude(t);
        let omega = ascending_lunar_node_longitude(t);
        let lambda = apparent_solar_longitude(t, l0).radians();

        let theta0 = mean_sidereal_time(t);
        let dpsi = nutation_in_longitude(l0, lp, omega);
        let deps = nutation_in_obliquity(l0, lp, omega);

        let eps0 = mean_obliquity_of_the_ecliptic(t);
        let eps_app = apparent_obliquity_of_the_ecliptic(t, eps0).radians();

        // Meeus eq. 25.7
        let declination = Angle::from_radians((eps_app.sin() * lambda.sin()).asin());
        // Meeus eq. 25.6
        let right_ascension =
            Angle::from_radians((eps_app.cos() * lambda.sin()).atan2(lambda.cos())).unwound();
        // Equation of the equinoxes, Δψ·cos ε, applied in arcseconds.
        let apparent_sidereal_time = Angle::new(
            theta0.degrees()
                + (((dpsi * 3600.0) * Angle::new(eps0.degrees() + deps).radians().cos()) / 3600.0),
        );

        Self {
            declination,
            right_ascension,
            apparent_sidereal_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use sunlight_time::julian_day;

    #[test]
    fn meeus_example_25a() {
        let solar = SolarPosition::new(julian_day(1992, 10, 13, 0.0));
        assert_abs_diff_eq!(solar.declination.degrees(), -7.785_07, epsilon = 1e-5);
        assert_abs_diff_eq!(solar.right_ascension.degrees(), 198.380_83, epsilon = 1e-5);
    }

    #[test]
    fn apparent_sidereal_time_meeus_example_12a() {
        // 1987 April 10, 0h UT: apparent θ = 13h10m46.1351s
        let solar = SolarPosition::new(julian_day(1987, 4, 10, 0.0));
        assert_abs_diff_eq!(
            solar.apparent_sidereal_time.degrees(),
            197.692_229_583_3,
            epsilon = 1e-4
        );
    }

    #[test]
    fn right_ascension_is_unwound() {
        for day in 0..366 {
            let solar = SolarPosition::new(2_457_023.5 + f64::from(day));
            let ra = solar.right_ascension.degrees();
            assert!((0.0..360.0).contains(&ra), "α out of range on day {day}: {ra}");
            assert!(solar.declination.degrees().abs() < 23.5);
        }
    }

    #[test]
    fn deterministic() {
        let a = SolarPosition::new(2_457_215.5);
        let b = SolarPosition::new(2_457_215.5);
        assert_eq!(a, b);
    }
}
