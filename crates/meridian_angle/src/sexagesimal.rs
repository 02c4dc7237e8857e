//! Sexagesimal (whole, minute, second) representations.
//!
//! The sign of an angle lives only on the whole-degree (or whole-hour)
//! component. Minutes and seconds are always non-negative magnitudes.
//! Angles in (-1, 0) keep their sign through a negative-zero whole
//! component, so `-0.5°` splits to `(-0.0, 30, 0.0)`.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::AngleError;

/// Decimal places kept by the rounded conversion primitives.
pub const ROUNDED_SECOND_DECIMALS: i32 = 2;

/// Split a decimal value into `(whole, minutes, seconds)`.
///
/// With `round_seconds` the seconds are rounded to
/// [`ROUNDED_SECOND_DECIMALS`] places; a result of 60 carries into the
/// minutes, and 60 minutes carry into the whole component. Without it the
/// seconds keep full precision.
pub fn split_sexagesimal(value: f64, round_seconds: bool) -> Result<(f64, u32, f64), AngleError> {
    if !value.is_finite() {
        return Err(AngleError::NonFinite);
    }
    let negative = value < 0.0;
    let total_seconds = value.abs() * 3600.0;
    let mut whole = (total_seconds / 3600.0).floor();
    let remainder = total_seconds - whole * 3600.0;
    let mut minutes = (remainder / 60.0).floor();
    let mut seconds = (remainder - minutes * 60.0).max(0.0);

    if round_seconds {
        let scale = 10f64.powi(ROUNDED_SECOND_DECIMALS);
        seconds = (seconds * scale).round() / scale;
    }
    if seconds >= 60.0 {
        seconds -= 60.0;
        minutes += 1.0;
    }
    if minutes >= 60.0 {
        minutes -= 60.0;
        whole += 1.0;
    }

    let whole = if negative { -whole } else { whole };
    Ok((whole, minutes as u32, seconds))
}

/// Join `(whole, minutes, seconds)` back into a decimal value.
///
/// The sign is taken from `whole`, including negative zero.
pub fn join_sexagesimal(whole: f64, minutes: u32, seconds: f64) -> Result<f64, AngleError> {
    if !whole.is_finite() || !seconds.is_finite() {
        return Err(AngleError::NonFinite);
    }
    if whole.fract() != 0.0 {
        return Err(AngleError::InvalidComponent("whole component must be integral"));
    }
    if minutes >= 60 {
        return Err(AngleError::InvalidComponent("minutes must be below 60"));
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(AngleError::InvalidComponent("seconds must lie in [0, 60)"));
    }
    let magnitude = whole.abs() + f64::from(minutes) / 60.0 + seconds / 3600.0;
    Ok(if whole.is_sign_negative() { -magnitude } else { magnitude })
}

/// An angle as degrees, arcminutes and arcseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dms {
    /// Whole degrees, carrying the sign of the angle.
    pub degrees: f64,
    /// Arcminutes in [0, 60).
    pub minutes: u32,
    /// Arcseconds in [0, 60).
    pub seconds: f64,
}

impl Dms {
    /// Build a validated triple.
    pub fn new(degrees: f64, minutes: u32, seconds: f64) -> Result<Self, AngleError> {
        join_sexagesimal(degrees, minutes, seconds)?;
        Ok(Self {
            degrees,
            minutes,
            seconds,
        })
    }

    /// Whether the angle is negative (including `-0°mm′ss″`).
    pub fn is_negative(&self) -> bool {
        self.degrees.is_sign_negative()
    }

    /// Back to decimal degrees.
    pub fn to_decimal_degrees(&self) -> Result<f64, AngleError> {
        join_sexagesimal(self.degrees, self.minutes, self.seconds)
    }
}

impl Display for Dms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{:.0}°{:02}′{:05.2}″",
            self.degrees.abs(),
            self.minutes,
            self.seconds
        )
    }
}

/// Exact decimal-degree → DMS conversion. Seconds keep full precision.
pub fn decimal_degrees_to_dms(deg: f64) -> Result<Dms, AngleError> {
    let (degrees, minutes, seconds) = split_sexagesimal(deg, false)?;
    Ok(Dms {
        degrees,
        minutes,
        seconds,
    })
}

/// Rounded decimal-degree → DMS conversion for presentation.
///
/// Seconds are rounded to two decimals; a rounded 60″ carries into the
/// minutes and a carried 60′ into the degrees.
pub fn decimal_degrees_to_dms_rounded(deg: f64) -> Result<Dms, AngleError> {
    let (degrees, minutes, seconds) = split_sexagesimal(deg, true)?;
    Ok(Dms {
        degrees,
        minutes,
        seconds,
    })
}

/// DMS → decimal degrees. The sign comes from `degrees`.
pub fn dms_to_decimal_degrees(degrees: f64, minutes: u32, seconds: f64) -> Result<f64, AngleError> {
    join_sexagesimal(degrees, minutes, seconds)
}
