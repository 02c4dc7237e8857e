//! Error types for angle conversions.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from angle normalization and sexagesimal conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
#[non_exhaustive]
pub enum AngleError {
    /// Input was NaN or ±Infinity.
    NonFinite,
    /// Normalization range is empty (`upper <= lower`).
    InvalidRange { lower: f64, upper: f64 },
    /// A degree/hour, minute or second component is out of range.
    InvalidComponent(&'static str),
}

impl Display for AngleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite => write!(f, "angle is not a finite number"),
            Self::InvalidRange { lower, upper } => {
                write!(f, "empty normalization range [{lower}, {upper})")
            }
            Self::InvalidComponent(msg) => write!(f, "invalid angle component: {msg}"),
        }
    }
}

impl Error for AngleError {}
