//! Transit, rising and setting from three days of solar coordinates.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 15. The Sun's
//! right ascension and declination at 0h UT on the previous, current and
//! next day are interpolated to the estimated event time, and the estimate
//! is corrected once. There is no convergence loop: a single pass is the
//! published method and the golden values depend on it.
//!
//! Times are fractions of a day (`m`) internally and hours after 0h UT of
//! the current day on return. Longitudes are east positive; `Lw = −L` is
//! the west longitude used in Meeus' formulas.

use sunlight_math::{Angle, interpolate, interpolate_angles, normalize_to_scale};
use sunlight_time::advance_sidereal_time;

use crate::astronomical::altitude_of_celestial_body;
use crate::solar_date_types::Coordinates;

/// An angle tabulated at 0h UT on three consecutive days.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreeDay {
    pub previous: Angle,
    pub current: Angle,
    pub next: Angle,
}

impl ThreeDay {
    pub fn new(previous: Angle, current: Angle, next: Angle) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }

    /// Angle interpolation across the 0°/360° seam.
    fn angle_at(&self, m: f64) -> Angle {
        interpolate_angles(self.current, self.previous, self.next, m)
    }

    /// Plain scalar interpolation of the degree values.
    fn value_at(&self, m: f64) -> Angle {
        Angle::new(interpolate(
            self.current.degrees(),
            self.previous.degrees(),
            self.next.degrees(),
            m,
        ))
    }
}

/// West longitude `Lw = L · −1`.
fn west_longitude(longitude: Angle) -> Angle {
    longitude * Angle::new(-1.0)
}

/// Approximate transit as a fraction of the day, in [0, 1).
///
/// `m0 = (α + Lw − Θ0) / 360`, reduced to the unit interval. `sidereal_time`
/// is the apparent sidereal time at Greenwich at 0h UT.
pub fn approximate_transit(longitude: Angle, sidereal_time: Angle, right_ascension: Angle) -> f64 {
    let lw = west_longitude(longitude);
    normalize_to_scale(
        ((right_ascension + lw - sidereal_time) / Angle::new(360.0)).degrees(),
        1.0,
    )
}

/// Corrected transit (solar noon) in hours after 0h UT.
///
/// Interpolates α to `m0`, takes the local hour angle
/// `H = θ − Lw − α` shifted into [-180, 180] and applies `Δm = −H / 360`.
pub fn corrected_transit(
    approximate_transit: f64,
    longitude: Angle,
    sidereal_time: Angle,
    right_ascension: ThreeDay,
) -> f64 {
    let m0 = approximate_transit;
    let lw = west_longitude(longitude);
    let theta = advance_sidereal_time(sidereal_time, m0);
    let alpha = right_ascension.angle_at(m0).unwound();
    let h = (theta - lw - alpha).quadrant_shifted();
    let dm = h / Angle::new(-360.0);
    (m0 + dm.degrees()) * 24.0
}

/// Cosine of the hour angle at which a body of declination `declination`
/// reaches `altitude`:
///
/// `cos H0 = (sin h0 − sinφ·sinδ) / (cosφ·cosδ)`
///
/// Values above 1 mean the altitude is never reached from below (the body
/// stays under it); values below −1 mean the body never drops to it.
pub fn hour_angle_cosine(altitude: Angle, latitude: Angle, declination: Angle) -> f64 {
    let term1 = altitude.radians().sin() - (latitude.radians().sin() * declination.radians().sin());
    let term2 = latitude.radians().cos() * declination.radians().cos();
    term1 / term2
}

/// Time at which the Sun's center reaches `altitude`, in hours after 0h UT.
///
/// `after_transit` picks the setting (afternoon) crossing, otherwise the
/// rising one. Returns a non-finite value when [`hour_angle_cosine`] falls
/// outside [-1, 1].
pub fn corrected_hour_angle(
    approximate_transit: f64,
    altitude: Angle,
    coordinates: &Coordinates,
    after_transit: bool,
    sidereal_time: Angle,
    right_ascension: ThreeDay,
    declination: ThreeDay,
) -> f64 {
    let m0 = approximate_transit;
    let lw = west_longitude(coordinates.longitude_angle());
    let latitude = coordinates.latitude_angle();

    let h0 = Angle::from_radians(hour_angle_cosine(altitude, latitude, declination.current).acos());
    let m = if after_transit {
        m0 + (h0.degrees() / 360.0)
    } else {
        m0 - (h0.degrees() / 360.0)
    };

    let theta = advance_sidereal_time(sidereal_time, m);
    let alpha = right_ascension.angle_at(m).unwound();
    let delta = declination.value_at(m);
    let h = theta - lw - alpha;
    let observed = altitude_of_celestial_body(latitude, delta, h);

    let term3 = (observed - altitude).degrees();
    let term4 = 360.0 * delta.radians().cos() * latitude.radians().cos() * h.radians().sin();
    let dm = term3 / term4;
    (m + dm) * 24.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    // Meeus example 15.a: Venus at Boston, 1988 March 20.
    const LONGITUDE: f64 = -71.0833;
    const THETA0: f64 = 177.742_08;

    fn alpha() -> ThreeDay {
        ThreeDay::new(Angle::new(40.680_21), Angle::new(41.731_29), Angle::new(42.782_04))
    }

    fn delta() -> ThreeDay {
        ThreeDay::new(Angle::new(18.047_61), Angle::new(18.440_92), Angle::new(18.827_42))
    }

    fn m0() -> f64 {
        approximate_transit(Angle::new(LONGITUDE), Angle::new(THETA0), alpha().current)
    }

    #[test]
    fn approximate_transit_meeus() {
        assert_abs_diff_eq!(m0(), 0.819_65, epsilon = 1e-5);
    }

    #[test]
    fn corrected_transit_meeus() {
        let transit =
            corrected_transit(m0(), Angle::new(LONGITUDE), Angle::new(THETA0), alpha()) / 24.0;
        assert_abs_diff_eq!(transit, 0.819_80, epsilon = 1e-5);
    }

    #[test]
    fn rising_meeus() {
        let coords = Coordinates::new(42.3333, LONGITUDE);
        let rise = corrected_hour_angle(
            m0(),
            Angle::new(-0.5667),
            &coords,
            false,
            Angle::new(THETA0),
            alpha(),
            delta(),
        ) / 24.0;
        assert_abs_diff_eq!(rise, 0.517_66, epsilon = 1e-5);
    }

    #[test]
    fn setting_follows_rising() {
        let coords = Coordinates::new(42.3333, LONGITUDE);
        let crossing = |after| {
            corrected_hour_angle(
                m0(),
                Angle::new(-0.5667),
                &coords,
                after,
                Angle::new(THETA0),
                alpha(),
                delta(),
            )
        };
        let transit = corrected_transit(m0(), Angle::new(LONGITUDE), Angle::new(THETA0), alpha());
        assert!(crossing(false) < transit);
        assert!(crossing(true) > transit);
    }

    #[test]
    fn approximate_transit_in_unit_interval() {
        for lon in [-180.0, -78.65, 0.0, 77.2, 179.9] {
            for theta in [0.0, 90.0, 359.9] {
                let m = approximate_transit(Angle::new(lon), Angle::new(theta), Angle::new(123.0));
                assert!((0.0..1.0).contains(&m), "m0 = {m}");
            }
        }
    }

    #[test]
    fn unreachable_altitude_is_not_finite() {
        // 42°N with δ ≈ 18°: the Sun never gets 30° below the horizon.
        let coords = Coordinates::new(42.3333, LONGITUDE);
        let hours = corrected_hour_angle(
            m0(),
            Angle::new(-30.0),
            &coords,
            true,
            Angle::new(THETA0),
            alpha(),
            delta(),
        );
        assert!(!hours.is_finite());
        assert!(hour_angle_cosine(Angle::new(-30.0), Angle::new(42.3333), delta().current) < -1.0);
    }

    #[test]
    fn hour_angle_cosine_polar() {
        let h0 = Angle::new(-50.0 / 60.0);
        let phi = Angle::new(70.0);
        assert!(hour_angle_cosine(h0, phi, Angle::new(-23.44)) > 1.0);
        assert!(hour_angle_cosine(h0, phi, Angle::new(23.44)) < -1.0);
    }

    #[test]
    fn hour_angle_cosine_equator_equinox() {
        let c = hour_angle_cosine(Angle::new(-0.8333), Angle::new(0.0), Angle::new(0.0));
        assert_abs_diff_eq!(c, -0.014_54, epsilon = 1e-3);
    }
}
