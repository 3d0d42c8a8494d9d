//! Error types for solar calculations.

use sunlight_time::TimeError;
use thiserror::Error;

/// Errors from solar position and rise/set calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// The Sun stays below `altitude_deg` for the whole day (polar night
    /// for sunrise/sunset).
    #[error("the Sun never rises to {altitude_deg}° on this date")]
    NeverRises { altitude_deg: f64 },
    /// The Sun stays above `altitude_deg` for the whole day (midnight sun
    /// for sunrise/sunset).
    #[error("the Sun never sets below {altitude_deg}° on this date")]
    NeverSets { altitude_deg: f64 },
    /// A computed time was NaN or infinite for a reason other than an
    /// unreachable altitude.
    #[error("non-finite {0} time")]
    NonFinite(&'static str),
    /// Invalid observer coordinate.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Error from calendar / timestamp conversion.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
}
