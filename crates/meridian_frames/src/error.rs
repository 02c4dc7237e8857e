//! Error types for coordinate transforms.

use std::error::Error;
use std::fmt::{Display, Formatter};

use meridian_angle::AngleError;
use meridian_time::TimeError;

/// Errors from coordinate transforms.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FrameError {
    /// Observer at a pole or target at the zenith: azimuth is undefined.
    UndefinedAzimuth,
    /// Observer at a pole or target at a celestial pole: hour angle is
    /// undefined.
    UndefinedHourAngle,
    /// Coordinate outside its valid range or not finite.
    InvalidInput(&'static str),
    /// Error from time conversion.
    Time(TimeError),
    /// Error from an angle conversion.
    Angle(AngleError),
}

impl Display for FrameError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedAzimuth => write!(f, "azimuth is undefined at the pole or zenith"),
            Self::UndefinedHourAngle => {
                write!(f, "hour angle is undefined at the pole or celestial pole")
            }
            Self::InvalidInput(msg) => write!(f, "invalid coordinate: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Angle(e) => write!(f, "angle error: {e}"),
        }
    }
}

impl Error for FrameError {}

impl From<TimeError> for FrameError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<AngleError> for FrameError {
    fn from(e: AngleError) -> Self {
        Self::Angle(e)
    }
}

pub(crate) fn check_finite(value: f64, what: &'static str) -> Result<f64, FrameError> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("rejected non-finite {what}");
        Err(FrameError::InvalidInput(what))
    }
}

/// Validate a latitude-like angle in [-90, 90] degrees.
pub(crate) fn check_latitude(value: f64, what: &'static str) -> Result<f64, FrameError> {
    check_finite(value, what)?;
    if (-90.0..=90.0).contains(&value) {
        Ok(value)
    } else {
        log::debug!("rejected {what} = {value}");
        Err(FrameError::InvalidInput(what))
    }
}
