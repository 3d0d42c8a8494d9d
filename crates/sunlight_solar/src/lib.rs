//! Solar position and daily solar events for an observer on Earth.
//!
//! This crate provides:
//! - Apparent solar declination, right ascension and sidereal time
//!   (low-precision Meeus series with four-term nutation)
//! - Solar noon, sunrise and sunset for a UTC calendar date
//! - Times at which the Sun reaches an arbitrary altitude (twilight)
//!
//! Accuracy is on the order of a minute for mid-latitudes. All times are
//! UTC.

pub mod astronomical;
pub mod error;
pub mod nutation;
pub mod solar_date;
pub mod solar_date_types;
pub mod solar_position;
pub mod transit;

pub use astronomical::{
    altitude_of_celestial_body, apparent_obliquity_of_the_ecliptic, apparent_solar_longitude,
    mean_obliquity_of_the_ecliptic, mean_solar_anomaly, mean_solar_longitude,
    solar_equation_of_the_center,
};
pub use error::SolarError;
pub use nutation::{
    ascending_lunar_node_longitude, mean_lunar_longitude, nutation_in_longitude,
    nutation_in_obliquity,
};
pub use solar_date::SolarDate;
pub use solar_date_types::{ALL_EVENTS, Coordinates, RiseSetConfig, SolarEvent};
pub use solar_position::SolarPosition;
pub use transit::{
    ThreeDay, approximate_transit, corrected_hour_angle, corrected_transit, hour_angle_cosine,
};
