//! Angles stored as signed degrees.
//!
//! [`Angle`] is a plain value type: every operation returns a new angle and
//! nothing is normalized implicitly. Callers pick the range they need with
//! [`Angle::unwound`] (`[0, 360)`) or [`Angle::quadrant_shifted`]
//! (`[-180, 180]`).
//!
//! Multiplication and division act on the degree values directly, the way
//! the series formulas use them (`L * -1`, `H / -360`).

use std::f64::consts::PI;
use std::fmt::{Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};

use crate::util::normalize_to_scale;

/// An angle in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Angle {
    degrees: f64,
}

impl Angle {
    /// Create an angle from degrees.
    pub const fn new(degrees: f64) -> Self {
        Self { degrees }
    }

    /// Create an angle from radians: `degrees = radians * 180 / π`.
    pub fn from_radians(radians: f64) -> Self {
        Self::new((radians * 180.0) / PI)
    }

    /// Value in degrees.
    pub const fn degrees(self) -> f64 {
        self.degrees
    }

    /// Value in radians.
    pub fn radians(self) -> f64 {
        (self.degrees * PI) / 180.0
    }

    pub fn sin(self) -> f64 {
        self.radians().sin()
    }

    pub fn cos(self) -> f64 {
        self.radians().cos()
    }

    /// Reduce into `[0, 360)`.
    pub fn unwound(self) -> Self {
        Self::new(normalize_to_scale(self.degrees, 360.0))
    }

    /// Shift into `[-180, 180]`.
    ///
    /// Angles already inside the range are returned unchanged; anything else
    /// has the nearest whole number of turns removed (halves round away from
    /// zero).
    pub fn quadrant_shifted(self) -> Self {
        if (-180.0..=180.0).contains(&self.degrees) {
            return self;
        }
        let shifted = self.degrees - 360.0 * (self.degrees / 360.0).round();
        // Division rounding can leave us a hair past the boundary.
        let shifted = if shifted > 180.0 {
            shifted - 360.0
        } else if shifted < -180.0 {
            shifted + 360.0
        } else {
            shifted
        };
        Self::new(shifted)
    }
}

impl From<f64> for Angle {
    fn from(degrees: f64) -> Self {
        Self::new(degrees)
    }
}

impl Display for Angle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°", self.degrees)
    }
}

impl Add for Angle {
    type Output = Angle;

    fn add(self, rhs: Angle) -> Angle {
        Angle::new(self.degrees + rhs.degrees)
    }
}

impl Sub for Angle {
    type Output = Angle;

    fn sub(self, rhs: Angle) -> Angle {
        Angle::new(self.degrees - rhs.degrees)
    }
}

impl Mul for Angle {
    type Output = Angle;

    fn mul(self, rhs: Angle) -> Angle {
        Angle::new(self.degrees * rhs.degrees)
    }
}

impl Div for Angle {
    type Output = Angle;

    fn div(self, rhs: Angle) -> Angle {
        Angle::new(self.degrees / rhs.degrees)
    }
}
