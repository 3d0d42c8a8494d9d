//! Solar noon, sunrise, sunset and arbitrary-altitude crossings for one
//! calendar day.
//!
//! [`SolarDate`] computes the Sun's position at 0h UT on the day before,
//! the day itself and the day after, then runs the single-pass transit and
//! hour-angle corrections from [`crate::transit`]. The three snapshots are
//! kept so that further altitude crossings (twilight) can be queried
//! without recomputing them.
//!
//! Times are produced as fractional hours after 0h UTC of the date and
//! converted to `chrono` UTC timestamps by flooring to whole seconds.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use log::{debug, trace};
use sunlight_math::Angle;
use sunlight_time::{calendar_date, datetime_from_hour_of_day, julian_day};

use crate::error::SolarError;
use crate::solar_date_types::{ALL_EVENTS, Coordinates, RiseSetConfig, SolarEvent};
use crate::solar_position::SolarPosition;
use crate::transit::{
    ThreeDay, approximate_transit, corrected_hour_angle, corrected_transit, hour_angle_cosine,
};

/// The three cached snapshots and the approximate transit they share.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SolarWindow {
    date: NaiveDate,
    coordinates: Coordinates,
    solar: SolarPosition,
    previous_solar: SolarPosition,
    next_solar: SolarPosition,
    approximate_transit: f64,
}

impl SolarWindow {
    fn new(coordinates: Coordinates, date: NaiveDate) -> Self {
        let jd = julian_day(date.year(), date.month(), date.day(), 0.0);
        let previous_solar = SolarPosition::new(jd - 1.0);
        let solar = SolarPosition::new(jd);
        let next_solar = SolarPosition::new(jd + 1.0);
        let approximate_transit = approximate_transit(
            coordinates.longitude_angle(),
            solar.apparent_sidereal_time,
            solar.right_ascension,
        );
        trace!("{date} at {coordinates:?}: approximate transit m0 = {approximate_transit:.6}");
        Self {
            date,
            coordinates,
            solar,
            previous_solar,
            next_solar,
            approximate_transit,
        }
    }

    fn right_ascensions(&self) -> ThreeDay {
        ThreeDay::new(
            self.previous_solar.right_ascension,
            self.solar.right_ascension,
            self.next_solar.right_ascension,
        )
    }

    fn declinations(&self) -> ThreeDay {
        ThreeDay::new(
            self.previous_solar.declination,
            self.solar.declination,
            self.next_solar.declination,
        )
    }

    fn transit_hours(&self) -> Result<f64, SolarError> {
        let hours = corrected_transit(
            self.approximate_transit,
            self.coordinates.longitude_angle(),
            self.solar.apparent_sidereal_time,
            self.right_ascensions(),
        );
        if hours.is_finite() {
            return Ok(hours);
        }
        debug!("{} at {:?}: non-finite transit", self.date, self.coordinates);
        Err(SolarError::NonFinite("transit"))
    }

    fn hours_for_solar_angle(
        &self,
        angle: Angle,
        after_transit: bool,
    ) -> Result<f64, SolarError> {
        let hours = corrected_hour_angle(
            self.approximate_transit,
            angle,
            &self.coordinates,
            after_transit,
            self.solar.apparent_sidereal_time,
            self.right_ascensions(),
            self.declinations(),
        );
        if hours.is_finite() {
            return Ok(hours);
        }

        let cos_h = hour_angle_cosine(
            angle,
            self.coordinates.latitude_angle(),
            self.solar.declination,
        );
        let altitude_deg = angle.degrees();
        let err = if cos_h > 1.0 {
            SolarError::NeverRises { altitude_deg }
        } else if cos_h < -1.0 {
            SolarError::NeverSets { altitude_deg }
        } else {
            SolarError::NonFinite("hour angle")
        };
        debug!("{} at {:?}: {err}", self.date, self.coordinates);
        Err(err)
    }
}

/// Solar events for one observer and one UTC calendar date.
///
/// Construction succeeds only if solar noon, sunrise and sunset all exist;
/// at high latitudes around the solstices it fails with
/// [`SolarError::NeverRises`] or [`SolarError::NeverSets`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarDate {
    window: SolarWindow,
    config: RiseSetConfig,
    transit_hours: f64,
    sunrise_hours: f64,
    sunset_hours: f64,
    solar_noon: DateTime<Utc>,
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

impl SolarDate {
    /// Events for `date` with the standard −50′ sunrise/sunset altitude.
    pub fn new(coordinates: Coordinates, date: NaiveDate) -> Result<Self, SolarError> {
        Self::with_config(coordinates, date, RiseSetConfig::default())
    }

    /// Events for a year/month/day triple.
    pub fn from_ymd(
        coordinates: Coordinates,
        year: i32,
        month: u32,
        day: u32,
    ) -> Result<Self, SolarError> {
        Self::new(coordinates, calendar_date(year, month, day)?)
    }

    /// Events for the current UTC date.
    pub fn today(coordinates: Coordinates) -> Result<Self, SolarError> {
        Self::new(coordinates, Utc::now().date_naive())
    }

    /// Events for `date` with a custom sunrise/sunset horizon.
    pub fn with_config(
        coordinates: Coordinates,
        date: NaiveDate,
        config: RiseSetConfig,
    ) -> Result<Self, SolarError> {
        coordinates.validate()?;
        let window = SolarWindow::new(coordinates, date);

        let horizon = config.horizon_altitude();
        let transit_hours = window.transit_hours()?;
        let sunrise_hours = window.hours_for_solar_angle(horizon, false)?;
        let sunset_hours = window.hours_for_solar_angle(horizon, true)?;
        trace!(
            "{date} at {coordinates:?}: transit {transit_hours:.6}h, \
             sunrise {sunrise_hours:.6}h, sunset {sunset_hours:.6}h"
        );

        Ok(Self {
            window,
            config,
            transit_hours,
            sunrise_hours,
            sunset_hours,
            solar_noon: datetime_from_hour_of_day(date, transit_hours)?,
            sunrise: datetime_from_hour_of_day(date, sunrise_hours)?,
            sunset: datetime_from_hour_of_day(date, sunset_hours)?,
        })
    }

    /// Hours after 0h UTC at which the Sun's center reaches `angle`, before
    /// or after transit.
    pub fn hours_for_solar_angle(
        &self,
        angle: Angle,
        after_transit: bool,
    ) -> Result<f64, SolarError> {
        self.window.hours_for_solar_angle(angle, after_transit)
    }

    /// UTC time at which the Sun's center reaches `angle`, before or after
    /// transit. Fails per call without affecting the rest of the result.
    pub fn time_for_solar_angle(
        &self,
        angle: Angle,
        after_transit: bool,
    ) -> Result<DateTime<Utc>, SolarError> {
        let hours = self.hours_for_solar_angle(angle, after_transit)?;
        Ok(datetime_from_hour_of_day(self.window.date, hours)?)
    }

    /// UTC time of a sunrise/sunset or twilight event.
    pub fn time_for_event(&self, event: SolarEvent) -> Result<DateTime<Utc>, SolarError> {
        self.time_for_solar_angle(event.altitude(&self.config), event.after_transit())
    }

    /// Every [`SolarEvent`], in chronological order, each with its own
    /// result.
    pub fn all_events(&self) -> [(SolarEvent, Result<DateTime<Utc>, SolarError>); 8] {
        ALL_EVENTS.map(|event| (event, self.time_for_event(event)))
    }

    pub fn date(&self) -> NaiveDate {
        self.window.date
    }

    pub fn coordinates(&self) -> Coordinates {
        self.window.coordinates
    }

    pub fn config(&self) -> RiseSetConfig {
        self.config
    }

    /// Solar position at 0h UT of the date.
    pub fn solar_position(&self) -> SolarPosition {
        self.window.solar
    }

    /// Solar positions at 0h UT of the previous and next day.
    pub fn neighbouring_positions(&self) -> (SolarPosition, SolarPosition) {
        (self.window.previous_solar, self.window.next_solar)
    }

    /// Approximate transit as a fraction of the day, in [0, 1).
    pub fn approximate_transit(&self) -> f64 {
        self.window.approximate_transit
    }

    pub fn transit_hours(&self) -> f64 {
        self.transit_hours
    }

    pub fn sunrise_hours(&self) -> f64 {
        self.sunrise_hours
    }

    pub fn sunset_hours(&self) -> f64 {
        self.sunset_hours
    }

    pub fn solar_noon(&self) -> DateTime<Utc> {
        self.solar_noon
    }

    pub fn sunrise(&self) -> DateTime<Utc> {
        self.sunrise
    }

    pub fn sunset(&self) -> DateTime<Utc> {
        self.sunset
    }
}
