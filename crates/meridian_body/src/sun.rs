//! Sun position, distance and the equation of time.
//!
//! First-order solution of Earth's orbit: mean anomaly from the elapsed days
//! since epoch 2010.0, plus the equation of centre `(360/π)·e·sin M`. Good to
//! roughly 0.01° over a few decades either side of the epoch.

use std::f64::consts::PI;

use meridian_angle::wrap_degrees;
use meridian_frames::{EclipticCoord, EquatorialCoord, ecliptic_to_equatorial, mean_obliquity_deg};
use meridian_time::{
    CalendarDate, CivilDateTime, EPOCH_2010_JD, TimeError, TimeZone, greenwich_sidereal_to_universal,
    local_to_universal,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BodyError;

/// Sun's ecliptic longitude at epoch 2010.0, degrees.
pub const SUN_LONGITUDE_AT_EPOCH_DEG: f64 = 279.557_208;
/// Longitude of the Sun at perigee, epoch 2010.0, degrees.
pub const SUN_PERIGEE_LONGITUDE_DEG: f64 = 283.112_438;
/// Eccentricity of the Sun–Earth orbit.
pub const SUN_ORBIT_ECCENTRICITY: f64 = 0.016_705;
/// Length of the tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_191;
/// Semi-major axis of the Sun–Earth orbit in km.
pub const SUN_MEAN_DISTANCE_KM: f64 = 1.495_985e8;
/// Angular diameter of the Sun at the mean distance, degrees.
pub const SUN_MEAN_ANGULAR_DIAMETER_DEG: f64 = 0.533_128;

/// Geocentric position of the Sun.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunPosition {
    /// Apparent ecliptic longitude in degrees, range [0, 360).
    pub ecliptic_longitude_deg: f64,
    /// True anomaly in degrees.
    pub true_anomaly_deg: f64,
    /// Right ascension and declination (mean equinox of date).
    pub equatorial: EquatorialCoord,
}

/// Sun–Earth distance and apparent size of the solar disc.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunDistance {
    pub distance_km: f64,
    /// Angular diameter in degrees.
    pub angular_diameter_deg: f64,
}

/// Julian Day (UT) of a local civil instant.
pub(crate) fn universal_julian_day(
    local: &CivilDateTime,
    zone: &TimeZone,
) -> Result<f64, BodyError> {
    let ut = local_to_universal(local, zone)?;
    Ok(ut.to_julian_day()?)
}

/// Ecliptic longitude and true anomaly (degrees) at `jd`.
fn solar_longitude_and_anomaly(jd: f64) -> (f64, f64) {
    let days = jd - EPOCH_2010_JD;
    let n = wrap_degrees(360.0 / TROPICAL_YEAR_DAYS * days);
    let mean_anomaly = wrap_degrees(n + SUN_LONGITUDE_AT_EPOCH_DEG - SUN_PERIGEE_LONGITUDE_DEG);
    let centre = (360.0 / PI) * SUN_ORBIT_ECCENTRICITY * mean_anomaly.to_radians().sin();
    let longitude = wrap_degrees(n + centre + SUN_LONGITUDE_AT_EPOCH_DEG);
    (longitude, mean_anomaly + centre)
}

/// Position of the Sun at a Julian Day (UT).
pub fn sun_position_at_jd(jd: f64) -> Result<SunPosition, BodyError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite.into());
    }
    let (longitude, true_anomaly) = solar_longitude_and_anomaly(jd);
    let equatorial =
        ecliptic_to_equatorial(&EclipticCoord::new(longitude, 0.0), mean_obliquity_deg(jd))?;
    Ok(SunPosition {
        ecliptic_longitude_deg: longitude,
        true_anomaly_deg: true_anomaly,
        equatorial,
    })
}

/// Ecliptic longitude of the Sun (degrees, [0, 360)) at a local civil
/// instant.
pub fn sun_ecliptic_longitude(local: &CivilDateTime, zone: &TimeZone) -> Result<f64, BodyError> {
    let jd = universal_julian_day(local, zone)?;
    Ok(solar_longitude_and_anomaly(jd).0)
}

/// Position of the Sun at a local civil instant.
pub fn sun_position(local: &CivilDateTime, zone: &TimeZone) -> Result<SunPosition, BodyError> {
    sun_position_at_jd(universal_julian_day(local, zone)?)
}

/// Sun–Earth distance and angular diameter at a local civil instant.
///
/// Both scale with `f = (1 + e·cos ν) / (1 − e²)`: distance is
/// `a / f`, angular diameter is `θ₀·f`.
pub fn sun_distance_and_angular_size(
    local: &CivilDateTime,
    zone: &TimeZone,
) -> Result<SunDistance, BodyError> {
    let jd = universal_julian_day(local, zone)?;
    let (_, true_anomaly) = solar_longitude_and_anomaly(jd);
    let e = SUN_ORBIT_ECCENTRICITY;
    let f = (1.0 + e * true_anomaly.to_radians().cos()) / (1.0 - e * e);
    Ok(SunDistance {
        distance_km: SUN_MEAN_DISTANCE_KM / f,
        angular_diameter_deg: SUN_MEAN_ANGULAR_DIAMETER_DEG * f,
    })
}

/// Equation of time in decimal hours: apparent minus mean solar time.
///
/// Evaluated at 12h UT on `date`. The Sun's right ascension is read as a
/// Greenwich sidereal time and converted to UT; the difference from noon is
/// how far the true Sun runs ahead of (positive) or behind (negative) the
/// mean Sun.
///
/// Depends on the date alone: the time of day and the observer's location
/// do not enter, so every observer gets the same value for a given date.
pub fn equation_of_time(date: &CalendarDate) -> Result<f64, BodyError> {
    let jd_noon = date.julian_day()? + 0.5;
    let sun = sun_position_at_jd(jd_noon)?;
    let transit_ut = greenwich_sidereal_to_universal(sun.equatorial.right_ascension_hours, date)?;
    let eot = 12.0 - transit_ut;
    log::trace!("equation of time {date}: ra={:.6}h eot={eot:.6}h", sun.equatorial.right_ascension_hours);
    Ok(eot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitude_at_epoch() {
        let (lon, _) = solar_longitude_and_anomaly(EPOCH_2010_JD);
        let m = SUN_LONGITUDE_AT_EPOCH_DEG - SUN_PERIGEE_LONGITUDE_DEG + 360.0;
        let centre = (360.0 / PI) * SUN_ORBIT_ECCENTRICITY * m.to_radians().sin();
        assert!((lon - (SUN_LONGITUDE_AT_EPOCH_DEG + centre)).abs() < 1e-9);
    }

    #[test]
    fn longitude_advances_about_one_degree_per_day() {
        let (a, _) = solar_longitude_and_anomaly(2_460_000.5);
        let (b, _) = solar_longitude_and_anomaly(2_460_001.5);
        let step = wrap_degrees(b - a);
        assert!(step > 0.95 && step < 1.03, "step = {step}");
    }

    #[test]
    fn sun_stays_on_ecliptic_band() {
        for k in 0..36 {
            let pos = sun_position_at_jd(2_455_000.5 + 10.0 * f64::from(k)).unwrap();
            assert!(pos.equatorial.declination_deg.abs() <= 23.45);
            assert!((0.0..24.0).contains(&pos.equatorial.right_ascension_hours));
        }
    }

    #[test]
    fn rejects_non_finite_jd() {
        assert_eq!(
            sun_position_at_jd(f64::NAN),
            Err(BodyError::Time(TimeError::NonFinite))
        );
    }

    #[test]
    fn distance_extremes_bracket_mean() {
        let zone = TimeZone::UTC;
        let jan = CivilDateTime::new(2024, 1, 3, 0, 0, 0.0).unwrap();
        let jul = CivilDateTime::new(2024, 7, 4, 0, 0, 0.0).unwrap();
        let near = sun_distance_and_angular_size(&jan, &zone).unwrap();
        let far = sun_distance_and_angular_size(&jul, &zone).unwrap();
        assert!(near.distance_km < SUN_MEAN_DISTANCE_KM);
        assert!(far.distance_km > SUN_MEAN_DISTANCE_KM);
        assert!(near.angular_diameter_deg > far.angular_diameter_deg);
    }

    #[test]
    fn equation_of_time_is_read_at_greenwich_noon() {
        let date = CalendarDate::new(2010, 7, 27).unwrap();
        let noon = CivilDateTime::new(2010, 7, 27, 12, 0, 0.0).unwrap();
        let sun = sun_position(&noon, &TimeZone::UTC).unwrap();
        let transit =
            greenwich_sidereal_to_universal(sun.equatorial.right_ascension_hours, &date).unwrap();
        let eot = equation_of_time(&date).unwrap();
        assert!((eot - (12.0 - transit)).abs() < 1e-9, "eot = {eot}");
        assert!((eot * 60.0 + 6.47).abs() < 0.05);
    }
}
