//! Greenwich and local sidereal time.
//!
//! Sidereal times are decimal hours in [0, 24), scoped to the Greenwich
//! calendar date they were computed for. Longitudes are east positive.
//!
//! GST at 0h UT uses the polynomial
//!   6.697374558 + 2400.051336·T + 0.000025862·T²  (hours)
//! where T is Julian centuries of UT since J2000.0.
//!
//! Source: Duffett-Smith & Zwart, _Practical Astronomy with your Calculator
//! or Spreadsheet_ (4th ed.), §12–§15.

use meridian_angle::{degrees_to_hours, wrap_hours};

use crate::calendar::CalendarDate;
use crate::civil::UniversalTime;
use crate::error::{TimeError, invalid_field};
use crate::julian::julian_centuries_since_j2000;

/// Sidereal hours elapsed per hour of Universal Time.
pub const SIDEREAL_RATE: f64 = 1.002_737_909;

/// Universal hours elapsed per sidereal hour.
pub const SOLAR_RATE: f64 = 0.997_269_566_3;

/// Greenwich sidereal time at 0h UT of the day whose 0h Julian Date is
/// `jd_0h`. Returns hours in [0, 24).
pub fn gst_at_zero_ut(jd_0h: f64) -> f64 {
    let t = julian_centuries_since_j2000(jd_0h);
    wrap_hours(6.697_374_558 + 2400.051_336 * t + 0.000_025_862 * t * t)
}

fn check_hours(value: f64) -> Result<f64, TimeError> {
    if !value.is_finite() {
        return Err(TimeError::NonFinite);
    }
    Ok(value)
}

fn check_longitude(longitude_deg: f64) -> Result<f64, TimeError> {
    if !longitude_deg.is_finite() {
        return Err(TimeError::NonFinite);
    }
    if !(-180.0..=180.0).contains(&longitude_deg) {
        return Err(invalid_field("longitude outside [-180, 180] degrees"));
    }
    Ok(longitude_deg)
}

/// Universal Time → Greenwich sidereal time, in hours.
pub fn universal_to_greenwich_sidereal(ut: &UniversalTime) -> Result<f64, TimeError> {
    ut.validate()?;
    let gst0 = gst_at_zero_ut(ut.date().julian_day()?);
    Ok(wrap_hours(gst0 + ut.decimal_hours() * SIDEREAL_RATE))
}

/// Greenwich sidereal time on `date` → Universal Time, in hours.
///
/// A sidereal day is about four minutes shorter than a solar day, so a GST
/// within the first ~0.066 h after GST-at-0h maps to two instants on the
/// same date; the earlier one is returned.
pub fn greenwich_sidereal_to_universal(
    gst_hours: f64,
    date: &CalendarDate,
) -> Result<f64, TimeError> {
    check_hours(gst_hours)?;
    let gst0 = gst_at_zero_ut(date.julian_day()?);
    Ok(wrap_hours(gst_hours - gst0) * SOLAR_RATE)
}

/// Greenwich sidereal time → local sidereal time at an east-positive
/// longitude.
pub fn local_sidereal_time(gst_hours: f64, longitude_deg: f64) -> Result<f64, TimeError> {
    check_hours(gst_hours)?;
    check_longitude(longitude_deg)?;
    Ok(wrap_hours(gst_hours + degrees_to_hours(longitude_deg)))
}

/// Local sidereal time → Greenwich sidereal time.
pub fn greenwich_sidereal_time(lst_hours: f64, longitude_deg: f64) -> Result<f64, TimeError> {
    check_hours(lst_hours)?;
    check_longitude(longitude_deg)?;
    Ok(wrap_hours(lst_hours - degrees_to_hours(longitude_deg)))
}
