//! Types for solar noon, sunrise/sunset and twilight calculations.
//!
//! Provides observer coordinates, event types and the horizon
//! configuration used by [`crate::SolarDate`].

use sunlight_math::Angle;

use crate::error::SolarError;

/// Observer position on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, east positive.
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn latitude_angle(&self) -> Angle {
        Angle::new(self.latitude)
    }

    pub fn longitude_angle(&self) -> Angle {
        Angle::new(self.longitude)
    }

    /// Reject non-finite values and latitudes outside [-90, 90].
    pub fn validate(&self) -> Result<(), SolarError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(SolarError::InvalidLocation("latitude must be within [-90, 90]"));
        }
        if !self.longitude.is_finite() {
            return Err(SolarError::InvalidLocation("longitude must be finite"));
        }
        Ok(())
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolarEvent {
    /// Upper limb of the Sun at the horizon, refraction included.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
    /// Sun center 6° below the horizon, morning.
    CivilDawn,
    /// Sun center 6° below the horizon, evening.
    CivilDusk,
    /// Sun center 12° below the horizon, morning.
    NauticalDawn,
    /// Sun center 12° below the horizon, evening.
    NauticalDusk,
    /// Sun center 18° below the horizon, morning.
    AstronomicalDawn,
    /// Sun center 18° below the horizon, evening.
    AstronomicalDusk,
}

/// All events in chronological order for an ordinary day.
pub const ALL_EVENTS: [SolarEvent; 8] = [
    SolarEvent::AstronomicalDawn,
    SolarEvent::NauticalDawn,
    SolarEvent::CivilDawn,
    SolarEvent::Sunrise,
    SolarEvent::Sunset,
    SolarEvent::CivilDusk,
    SolarEvent::NauticalDusk,
    SolarEvent::AstronomicalDusk,
];

impl SolarEvent {
    /// All event variants in chronological order.
    pub const fn all() -> &'static [SolarEvent] {
        &ALL_EVENTS
    }

    /// Target altitude of the Sun's center for this event.
    ///
    /// Sunrise/sunset take the horizon altitude from `config`; twilight
    /// events use the fixed IAU depression angles.
    pub fn altitude(self, config: &RiseSetConfig) -> Angle {
        match self {
            Self::Sunrise | Self::Sunset => config.horizon_altitude(),
            Self::CivilDawn | Self::CivilDusk => Angle::new(-6.0),
            Self::NauticalDawn | Self::NauticalDusk => Angle::new(-12.0),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Angle::new(-18.0),
        }
    }

    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    /// Whether the event follows the meridian transit.
    pub fn after_transit(self) -> bool {
        !self.is_rising()
    }
}

/// Horizon parameters for sunrise/sunset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
        }
    }
}

impl RiseSetConfig {
    /// Altitude of the Sun's center at sunrise/sunset.
    ///
    /// `h0 = -(refraction + semidiameter) / 60`, i.e. −50′ by default.
    pub fn horizon_altitude(&self) -> Angle {
        Angle::new(-(self.refraction_arcmin + self.semidiameter_arcmin) / 60.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_horizon_is_minus_50_arcmin() {
        let h0 = RiseSetConfig::default().horizon_altitude();
        assert_eq!(h0.degrees(), -50.0 / 60.0);
    }

    #[test]
    fn custom_horizon() {
        let c = RiseSetConfig {
            refraction_arcmin: 0.0,
            ..Default::default()
        };
        assert!((c.horizon_altitude().degrees() + 16.0 / 60.0).abs() < 1e-15);
    }

    #[test]
    fn twilight_altitudes() {
        let c = RiseSetConfig::default();
        assert_eq!(SolarEvent::CivilDawn.altitude(&c).degrees(), -6.0);
        assert_eq!(SolarEvent::NauticalDusk.altitude(&c).degrees(), -12.0);
        assert_eq!(SolarEvent::AstronomicalDawn.altitude(&c).degrees(), -18.0);
        assert_eq!(SolarEvent::Sunset.altitude(&c), c.horizon_altitude());
    }

    #[test]
    fn is_rising_correct() {
        assert!(SolarEvent::Sunrise.is_rising());
        assert!(SolarEvent::CivilDawn.is_rising());
        assert!(SolarEvent::NauticalDawn.is_rising());
        assert!(SolarEvent::AstronomicalDawn.is_rising());
        assert!(!SolarEvent::Sunset.is_rising());
        assert!(!SolarEvent::CivilDusk.is_rising());
        assert!(!SolarEvent::NauticalDusk.is_rising());
        assert!(!SolarEvent::AstronomicalDusk.is_rising());
    }

    #[test]
    fn all_events_split_at_transit() {
        let all = SolarEvent::all();
        assert_eq!(all.len(), 8);
        assert!(all[..4].iter().all(|e| e.is_rising()));
        assert!(all[4..].iter().all(|e| e.after_transit()));
    }

    #[test]
    fn coordinates_angles() {
        let c = Coordinates::new(35.783, -78.65);
        assert_eq!(c.latitude_angle().degrees(), 35.783);
        assert_eq!(c.longitude_angle().degrees(), -78.65);
    }

    #[test]
    fn coordinates_validation() {
        assert!(Coordinates::new(90.0, 0.0).validate().is_ok());
        assert!(Coordinates::new(-45.0, 200.0).validate().is_ok());
        assert!(matches!(
            Coordinates::new(91.0, 0.0).validate(),
            Err(SolarError::InvalidLocation(_))
        ));
        assert!(matches!(
            Coordinates::new(f64::NAN, 0.0).validate(),
            Err(SolarError::InvalidLocation(_))
        ));
        assert!(matches!(
            Coordinates::new(0.0, f64::INFINITY).validate(),
            Err(SolarError::InvalidLocation(_))
        ));
    }
}
