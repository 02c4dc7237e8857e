//! Hour angle/declination ↔ horizon coordinates.
//!
//! Azimuth is measured from north through east. `acos` alone only resolves
//! half a circle, so the sign of `sin(H)` (or `sin(A)` on the way back)
//! picks the side of the meridian.

use meridian_angle::{
    clamped_acos, clamped_asin, degrees_to_hours, hours_to_degrees, wrap_degrees, wrap_hours,
};

use crate::coords::{EquatorialCoord, HorizonCoord, HourAngleCoord};
use crate::error::{FrameError, check_finite, check_latitude};

/// Below this value of `cos(φ)·cos(x)` the azimuth/hour-angle formula
/// divides by zero.
const POLE_EPSILON: f64 = 1e-12;

/// Convert hour angle and declination to altitude and azimuth for an
/// observer at `latitude_deg`.
///
/// Fails with [`FrameError::UndefinedAzimuth`] when the observer stands on a
/// pole or the target sits at the zenith or nadir.
pub fn hour_angle_to_horizon(
    coord: &HourAngleCoord,
    latitude_deg: f64,
) -> Result<HorizonCoord, FrameError> {
    check_finite(coord.hour_angle_hours, "hour angle")?;
    check_latitude(coord.declination_deg, "declination")?;
    check_latitude(latitude_deg, "latitude")?;

    let h = hours_to_degrees(wrap_hours(coord.hour_angle_hours)).to_radians();
    let dec = coord.declination_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let sin_alt = dec.sin() * phi.sin() + dec.cos() * phi.cos() * h.cos();
    let alt = clamped_asin(sin_alt);

    let denom = phi.cos() * alt.cos();
    if denom.abs() < POLE_EPSILON {
        return Err(FrameError::UndefinedAzimuth);
    }
    let cos_az = (dec.sin() - phi.sin() * alt.sin()) / denom;
    let mut az = clamped_acos(cos_az).to_degrees();
    if h.sin() > 0.0 {
        az = 360.0 - az;
    }

    Ok(HorizonCoord {
        altitude_deg: alt.to_degrees(),
        azimuth_deg: wrap_degrees(az),
    })
}

/// Convert right ascension and declination to horizon coordinates, given
/// the local sidereal time in hours.
///
/// The hour angle is `LST − RA` wrapped into [0, 24).
pub fn equatorial_to_horizon(
    coord: &EquatorialCoord,
    latitude_deg: f64,
    lst_hours: f64,
) -> Result<HorizonCoord, FrameError> {
    check_finite(coord.right_ascension_hours, "right ascension")?;
    check_finite(lst_hours, "local sidereal time")?;
    let ha = wrap_hours(lst_hours - coord.right_ascension_hours);
    hour_angle_to_horizon(&HourAngleCoord::new(ha, coord.declination_deg), latitude_deg)
}

/// Convert altitude and azimuth back to hour angle and declination.
///
/// Fails with [`FrameError::UndefinedHourAngle`] when the observer stands on
/// a pole or the direction points at a celestial pole.
pub fn horizon_to_equatorial(
    coord: &HorizonCoord,
    latitude_deg: f64,
) -> Result<HourAngleCoord, FrameError> {
    check_latitude(coord.altitude_deg, "altitude")?;
    check_finite(coord.azimuth_deg, "azimuth")?;
    check_latitude(latitude_deg, "latitude")?;

    let alt = coord.altitude_deg.to_radians();
    let az = wrap_degrees(coord.azimuth_deg).to_radians();
    let phi = latitude_deg.to_radians();

    let sin_dec = alt.sin() * phi.sin() + alt.cos() * phi.cos() * az.cos();
    let dec = clamped_asin(sin_dec);

    let denom = phi.cos() * dec.cos();
    if denom.abs() < POLE_EPSILON {
        return Err(FrameError::UndefinedHourAngle);
    }
    let cos_h = (alt.sin() - phi.sin() * dec.sin()) / denom;
    let mut h = clamped_acos(cos_h).to_degrees();
    if az.sin() > 0.0 {
        h = 360.0 - h;
    }

    Ok(HourAngleCoord {
        hour_angle_hours: wrap_hours(degrees_to_hours(h)),
        declination_deg: dec.to_degrees(),
    })
}
