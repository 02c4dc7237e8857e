//! Range normalization.
//!
//! Implemented with `rem_euclid` rather than repeated add/subtract, so the
//! cost is constant for any magnitude and non-finite values are rejected
//! before any arithmetic.

use crate::error::AngleError;

/// Bring `value` into `[lower, upper)` by adding or subtracting whole
/// multiples of the range width.
///
/// Values already inside the range are returned unchanged, which makes the
/// operation idempotent bit-for-bit.
///
/// # Errors
/// * [`AngleError::NonFinite`] if any argument is NaN or infinite.
/// * [`AngleError::InvalidRange`] if `upper <= lower`.
pub fn normalize_angle(value: f64, lower: f64, upper: f64) -> Result<f64, AngleError> {
    if !value.is_finite() || !lower.is_finite() || !upper.is_finite() {
        log::debug!("normalize_angle: non-finite input {value} in [{lower}, {upper})");
        return Err(AngleError::NonFinite);
    }
    if upper <= lower {
        return Err(AngleError::InvalidRange { lower, upper });
    }
    if (lower..upper).contains(&value) {
        return Ok(value);
    }
    let width = upper - lower;
    let r = lower + (value - lower).rem_euclid(width);
    // rem_euclid of a tiny negative offset can round up to the full width
    Ok(if r >= upper { lower } else { r })
}

/// Wrap degrees into [0, 360). NaN in, NaN out.
pub fn wrap_degrees(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}

/// Wrap decimal hours into [0, 24). NaN in, NaN out.
pub fn wrap_hours(hours: f64) -> f64 {
    let r = hours.rem_euclid(24.0);
    if r >= 24.0 { 0.0 } else { r }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_positive_overflow() {
        assert!((normalize_angle(730.0, 0.0, 360.0).unwrap() - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_negative() {
        assert!((normalize_angle(-10.0, 0.0, 360.0).unwrap() - 350.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_upper_bound_excluded() {
        assert_eq!(normalize_angle(24.0, 0.0, 24.0).unwrap(), 0.0);
    }

    #[test]
    fn normalize_signed_range() {
        let r = normalize_angle(270.0, -180.0, 180.0).unwrap();
        assert!((r - -90.0).abs() < 1e-12);
    }

    #[test]
    fn normalize_rejects_nan_and_infinity() {
        assert_eq!(normalize_angle(f64::NAN, 0.0, 360.0), Err(AngleError::NonFinite));
        assert_eq!(normalize_angle(f64::INFINITY, 0.0, 360.0), Err(AngleError::NonFinite));
        assert_eq!(normalize_angle(1.0, 0.0, f64::INFINITY), Err(AngleError::NonFinite));
    }

    #[test]
    fn normalize_rejects_empty_range() {
        assert!(matches!(
            normalize_angle(1.0, 360.0, 0.0),
            Err(AngleError::InvalidRange { .. })
        ));
    }

    #[test]
    fn normalize_huge_value_terminates() {
        let r = normalize_angle(1.0e300, 0.0, 360.0).unwrap();
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn wrap_tiny_negative() {
        let r = wrap_degrees(-1.0e-17);
        assert!((0.0..360.0).contains(&r));
    }

    #[test]
    fn wrap_hours_negative() {
        assert!((wrap_hours(-1.5) - 22.5).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_normalize_in_range(value in -1e7..1e7f64) {
            let r = normalize_angle(value, 0.0, 360.0).unwrap();
            prop_assert!((0.0..360.0).contains(&r));
        }

        #[test]
        fn prop_normalize_idempotent(
            value in -1e7..1e7f64,
            lower in -720.0..720.0f64,
            width in 0.5..1000.0f64,
        ) {
            let upper = lower + width;
            let once = normalize_angle(value, lower, upper).unwrap();
            let twice = normalize_angle(once, lower, upper).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
