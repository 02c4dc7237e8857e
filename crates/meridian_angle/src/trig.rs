//! Inverse trigonometry with domain clamping.
//!
//! Spherical-astronomy formulas can produce `asin`/`acos` arguments a few
//! ulps outside [-1, 1] near the poles. These helpers pin the argument to the
//! interval instead of returning NaN. The clamp is lossy: an argument that is
//! far outside the interval (a genuine domain error upstream) is silently
//! mapped to ±90° / 0°/180°, so it is logged at warn level.

/// Arguments further than this outside [-1, 1] are reported.
const CLAMP_WARN_EPS: f64 = 1.0e-9;

fn clamp_unit(x: f64, op: &str) -> f64 {
    if x.abs() - 1.0 > CLAMP_WARN_EPS {
        log::warn!("{op}: argument {x} clamped to [-1, 1]");
    }
    x.clamp(-1.0, 1.0)
}

/// `asin` of the clamped argument, in radians.
pub fn clamped_asin(x: f64) -> f64 {
    clamp_unit(x, "asin").asin()
}

/// `acos` of the clamped argument, in radians.
pub fn clamped_acos(x: f64) -> f64 {
    clamp_unit(x, "acos").acos()
}
