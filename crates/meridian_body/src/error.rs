//! Error types for Sun and planet calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use meridian_angle::AngleError;
use meridian_frames::FrameError;
use meridian_time::TimeError;

use crate::elements::Planet;

/// Errors from body position and rise/set calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BodyError {
    /// No orbital elements exist under this name.
    UnknownBody(String),
    /// Earth is the observer; it has no geocentric position.
    ObserverBody,
    /// A custom element table lacks an entry for this planet.
    MissingElements(Planet),
    /// An orbital element is out of its physical range.
    InvalidElements(&'static str),
    /// Invalid geographic location parameter.
    InvalidLocation(&'static str),
    /// Error from time conversion.
    Time(TimeError),
    /// Error from a coordinate transform.
    Frame(FrameError),
    /// Error from an angle conversion.
    Angle(AngleError),
}

impl Display for BodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownBody(name) => write!(f, "unknown body: {name:?}"),
            Self::ObserverBody => write!(f, "earth is the observer and has no geocentric position"),
            Self::MissingElements(p) => write!(f, "element table has no entry for {p}"),
            Self::InvalidElements(msg) => write!(f, "invalid orbital elements: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Frame(e) => write!(f, "frame error: {e}"),
            Self::Angle(e) => write!(f, "angle error: {e}"),
        }
    }
}

impl Error for BodyError {}

impl From<TimeError> for BodyError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<FrameError> for BodyError {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}

impl From<AngleError> for BodyError {
    fn from(e: AngleError) -> Self {
        Self::Angle(e)
    }
}
