//! Error types for time conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

use meridian_angle::AngleError;

/// Errors from calendar, clock and sidereal conversions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A calendar or clock field is outside its valid range.
    InvalidCalendarField(&'static str),
    /// A time zone or daylight-saving offset is outside its valid range.
    InvalidOffset(&'static str),
    /// Julian day or decimal time was NaN or infinite.
    NonFinite,
    /// Error from an angle conversion.
    Angle(AngleError),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarField(msg) => write!(f, "invalid calendar field: {msg}"),
            Self::InvalidOffset(msg) => write!(f, "invalid time offset: {msg}"),
            Self::NonFinite => write!(f, "time value is not a finite number"),
            Self::Angle(e) => write!(f, "angle error: {e}"),
        }
    }
}

impl Error for TimeError {}

impl From<AngleError> for TimeError {
    fn from(e: AngleError) -> Self {
        match e {
            AngleError::NonFinite => Self::NonFinite,
            other => Self::Angle(other),
        }
    }
}

/// Log and build an [`TimeError::InvalidCalendarField`].
pub(crate) fn invalid_field(msg: &'static str) -> TimeError {
    log::debug!("rejected calendar input: {msg}");
    TimeError::InvalidCalendarField(msg)
}
