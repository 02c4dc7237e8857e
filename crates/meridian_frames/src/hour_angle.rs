//! Right ascension ↔ hour angle.
//!
//! Both directions go through the local sidereal time of the observer's
//! civil instant: local time → UT → GST → LST.

use meridian_angle::wrap_hours;
use meridian_time::{
    CivilDateTime, TimeZone, local_sidereal_time, local_to_universal,
    universal_to_greenwich_sidereal,
};

use crate::error::{FrameError, check_finite};

/// Local sidereal time (hours) at a civil instant and east-positive
/// longitude.
pub fn local_sidereal_time_at(
    local: &CivilDateTime,
    zone: &TimeZone,
    longitude_deg: f64,
) -> Result<f64, FrameError> {
    let ut = local_to_universal(local, zone)?;
    let gst = universal_to_greenwich_sidereal(&ut)?;
    let lst = local_sidereal_time(gst, longitude_deg)?;
    log::trace!("local sidereal time: ut={ut} gst={gst:.6}h lst={lst:.6}h");
    Ok(lst)
}

fn check_hour_range(value: f64, what: &'static str) -> Result<f64, FrameError> {
    check_finite(value, what)?;
    if (0.0..24.0).contains(&value) {
        Ok(value)
    } else {
        log::debug!("rejected {what} = {value}");
        Err(FrameError::InvalidInput(what))
    }
}

/// Hour angle (hours, [0, 24)) of a right ascension seen at a civil instant.
pub fn right_ascension_to_hour_angle(
    right_ascension_hours: f64,
    local: &CivilDateTime,
    zone: &TimeZone,
    longitude_deg: f64,
) -> Result<f64, FrameError> {
    check_hour_range(right_ascension_hours, "right ascension")?;
    let lst = local_sidereal_time_at(local, zone, longitude_deg)?;
    Ok(wrap_hours(lst - right_ascension_hours))
}

/// Right ascension (hours, [0, 24)) of an hour angle seen at a civil
/// instant.
pub fn hour_angle_to_right_ascension(
    hour_angle_hours: f64,
    local: &CivilDateTime,
    zone: &TimeZone,
    longitude_deg: f64,
) -> Result<f64, FrameError> {
    check_hour_range(hour_angle_hours, "hour angle")?;
    let lst = local_sidereal_time_at(local, zone, longitude_deg)?;
    Ok(wrap_hours(lst - hour_angle_hours))
}
