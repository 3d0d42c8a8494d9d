//! Julian Day and Julian Century.
//!
//! Gregorian calendar → Julian Day follows Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 7. The intermediate century and month terms are
//! truncated toward zero, not rounded; the published golden values depend
//! on it.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Julian Date of the J2000.0 epoch (2000-Jan-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Julian Day for a Gregorian calendar date plus fractional hours.
///
/// January and February count as months 13 and 14 of the previous year.
/// `hours` may exceed 24; the excess rolls into the day count, so
/// `julian_day(2010, 1, 3, 0.0) == julian_day(2010, 1, 1, 48.0)`.
pub fn julian_day(year: i32, month: u32, day: u32, hours: f64) -> f64 {
    let (y, m) = if month > 2 {
        (i64::from(year), i64::from(month))
    } else {
        (i64::from(year) - 1, i64::from(month) + 12)
    };
    let d = f64::from(day) + hours / 24.0;

    let a = y / 100;
    let b = 2 - a + a / 4;

    let i0 = (365.25 * (y as f64 + 4716.0)) as i64;
    let i1 = (30.6001 * (m as f64 + 1.0)) as i64;
    i0 as f64 + i1 as f64 + d + b as f64 - 1524.5
}

/// Julian Day from optional date/time components.
///
/// Missing year, month and day default to 1; missing hour and minute to 0.
/// Seconds are not part of the input: the day fraction is
/// `hour + minute / 60` hours.
pub fn julian_day_from_parts(
    year: Option<i32>,
    month: Option<u32>,
    day: Option<u32>,
    hour: Option<u32>,
    minute: Option<u32>,
) -> f64 {
    let hours = f64::from(hour.unwrap_or(0)) + f64::from(minute.unwrap_or(0)) / 60.0;
    julian_day(
        year.unwrap_or(1),
        month.unwrap_or(1),
        day.unwrap_or(1),
        hours,
    )
}

/// Julian Day for a naive (UTC) date-time, to minute resolution.
pub fn julian_day_from_datetime(dt: &NaiveDateTime) -> f64 {
    julian_day_from_parts(
        Some(dt.year()),
        Some(dt.month()),
        Some(dt.day()),
        Some(dt.hour()),
        Some(dt.minute()),
    )
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::NaiveDate;

    #[test]
    fn usno_reference_dates() {
        let cases = [
            (2010, 1, 2, 2_455_198.5),
            (2011, 2, 4, 2_455_596.5),
            (2012, 3, 6, 2_455_992.5),
            (2013, 4, 8, 2_456_390.5),
            (2014, 5, 10, 2_456_787.5),
            (2015, 6, 12, 2_457_185.5),
            (2016, 7, 14, 2_457_583.5),
            (2017, 8, 16, 2_457_981.5),
            (2018, 9, 18, 2_458_379.5),
            (2019, 10, 20, 2_458_776.5),
            (2020, 11, 22, 2_459_175.5),
            (2021, 12, 24, 2_459_572.5),
        ];
        for (y, m, d, expected) in cases {
            assert_eq!(julian_day(y, m, d, 0.0), expected, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn fractional_hours() {
        assert_abs_diff_eq!(julian_day(2015, 7, 12, 4.25), 2_457_215.677_083_33, epsilon = 1e-6);
        assert_abs_diff_eq!(julian_day(2015, 7, 12, 8.0), 2_457_215.833_333, epsilon = 1e-6);
        assert_abs_diff_eq!(julian_day(1992, 10, 13, 0.0), 2_448_908.5, epsilon = 1e-6);
    }

    #[test]
    fn hours_roll_into_days() {
        assert_eq!(julian_day(2010, 1, 3, 0.0), julian_day(2010, 1, 1, 48.0));
    }

    #[test]
    fn from_parts_matches_hours() {
        let jd = julian_day_from_parts(Some(2015), Some(7), Some(12), Some(4), Some(15));
        assert_abs_diff_eq!(jd, 2_457_215.677_083_33, epsilon = 1e-6);
    }

    #[test]
    fn from_parts_defaults() {
        assert_abs_diff_eq!(
            julian_day_from_parts(None, None, None, None, None),
            1_721_425.5,
            epsilon = 1e-6
        );
    }

    #[test]
    fn from_datetime_ignores_seconds() {
        let dt = NaiveDate::from_ymd_opt(2015, 7, 12)
            .and_then(|d| d.and_hms_opt(4, 15, 59))
            .unwrap();
        assert_abs_diff_eq!(julian_day_from_datetime(&dt), 2_457_215.677_083_33, epsilon = 1e-6);
    }

    #[test]
    fn century_at_epoch_is_zero() {
        assert_eq!(julian_century(J2000_JD), 0.0);
        assert_abs_diff_eq!(julian_century(J2000_JD + DAYS_PER_JULIAN_CENTURY), 1.0);
    }

    #[test]
    fn century_1992_oct_13() {
        let t = julian_century(julian_day(1992, 10, 13, 0.0));
        assert_abs_diff_eq!(t, -0.072_183_436, epsilon = 1e-11);
    }
}
