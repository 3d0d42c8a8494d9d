//! Numeric building blocks for the solar calculations.
//!
//! This crate provides:
//! - [`Angle`], a degree-valued angle with `[0, 360)` and `[-180, 180]`
//!   normalization
//! - Three-point quadratic interpolation for scalars and angles
//! - Scale normalization helpers

pub mod angle;
pub mod interpolation;
pub mod util;

pub use angle::Angle;
pub use interpolation::{interpolate, interpolate_angles};
pub use util::{normalize_360, normalize_to_scale};
