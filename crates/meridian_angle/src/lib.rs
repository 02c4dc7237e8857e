//! Angle representations and conversions.
//!
//! This crate provides:
//! - Degree ↔ hour ↔ radian scaling
//! - Range normalization that terminates for every input
//! - Sexagesimal (degree/hour, minute, second) splitting and joining
//! - Clamped inverse trigonometry for rounding-prone arguments

pub mod error;
pub mod normalize;
pub mod sexagesimal;
pub mod trig;

pub use error::AngleError;
pub use normalize::{normalize_angle, wrap_degrees, wrap_hours};
pub use sexagesimal::{
    Dms, decimal_degrees_to_dms, decimal_degrees_to_dms_rounded, dms_to_decimal_degrees,
    join_sexagesimal, split_sexagesimal,
};
pub use trig::{clamped_acos, clamped_asin};

/// Degrees of arc per hour of right ascension or hour angle.
pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Convert degrees of arc to hours (divide by 15).
pub fn degrees_to_hours(deg: f64) -> f64 {
    deg / DEGREES_PER_HOUR
}

/// Convert hours to degrees of arc (multiply by 15).
pub fn hours_to_degrees(hours: f64) -> f64 {
    hours * DEGREES_PER_HOUR
}

pub fn degrees_to_radians(deg: f64) -> f64 {
    deg.to_radians()
}

pub fn radians_to_degrees(rad: f64) -> f64 {
    rad.to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn hours_degrees_scale() {
        assert_eq!(degrees_to_hours(180.0), 12.0);
        assert_eq!(hours_to_degrees(6.0), 90.0);
    }

    #[test]
    fn radians_degrees_scale() {
        assert!((degrees_to_radians(180.0) - PI).abs() < 1e-15);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < 1e-12);
    }
}
