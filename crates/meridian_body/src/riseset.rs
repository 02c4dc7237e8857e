//! Sunrise/sunset computation with twilight variants.
//!
//! Iterative algorithm: start from the approximate local noon, solve the
//! hour angle at which the Sun's centre reaches the target altitude, turn
//! it into a Universal Time through LST → GST → UT, and re-evaluate the Sun
//! at that instant until successive estimates agree.
//!
//! `date` is the observer's local civil date. The search starts at local
//! solar noon inside that civil day, and the Universal Time estimate is free
//! to cross Greenwich midnight, so each event carries both its local and
//! its Greenwich calendar date.

use meridian_angle::{degrees_to_hours, wrap_hours};
use meridian_frames::{HourAngleCoord, hour_angle_to_horizon};
use meridian_time::{
    CalendarDate, TimeZone, greenwich_sidereal_time, greenwich_sidereal_to_universal,
    julian_day_to_gregorian_date,
};

use crate::error::BodyError;
use crate::riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, TwilightKind,
};
use crate::sun::sun_position_at_jd;

/// Maximum iterations for the rise/set refinement loop.
const MAX_ITERATIONS: usize = 10;

/// Convergence threshold in hours (0.1 s).
const CONVERGENCE_HOURS: f64 = 0.1 / 3600.0;

/// Approximate UT (hours) of local solar noon at an east-positive longitude.
pub fn approximate_local_noon_ut(longitude_deg: f64) -> f64 {
    wrap_hours(12.0 - degrees_to_hours(longitude_deg))
}

enum Crossing {
    /// Hour angle east or west of the meridian, hours in [0, 12].
    HourAngle(f64),
    NeverRises,
    NeverSets,
}

/// `cos H = (sin h0 − sin φ sin δ) / (cos φ cos δ)`
fn crossing_hour_angle(latitude_rad: f64, declination_deg: f64, target_alt_deg: f64) -> Crossing {
    let dec = declination_deg.to_radians();
    let h0 = target_alt_deg.to_radians();
    let cos_h = (h0.sin() - latitude_rad.sin() * dec.sin()) / (latitude_rad.cos() * dec.cos());
    if cos_h > 1.0 {
        Crossing::NeverRises
    } else if cos_h < -1.0 {
        Crossing::NeverSets
    } else {
        Crossing::HourAngle(degrees_to_hours(cos_h.acos().to_degrees()))
    }
}

/// Calendar date `days` whole days after the date whose 0h is `jd_0h`.
fn date_after(date: &CalendarDate, jd_0h: f64, days: f64) -> Result<CalendarDate, BodyError> {
    if days == 0.0 {
        return Ok(*date);
    }
    let shifted = julian_day_to_gregorian_date(jd_0h + days)?;
    Ok(CalendarDate {
        year: shifted.year,
        month: shifted.month,
        day: shifted.day.floor() as u32,
    })
}

/// Universal Time for a Greenwich sidereal time, in hours after 0h UT of
/// `date`, picking the solution nearest `near`.
///
/// A sidereal time recurs every 23h56m, so the neighbouring Greenwich days
/// are tried as well.
fn universal_hours_near(
    gst: f64,
    date: &CalendarDate,
    jd_0h: f64,
    near: f64,
) -> Result<f64, BodyError> {
    let base = (near / 24.0).floor();
    let mut best = f64::INFINITY;
    for days in [base - 1.0, base, base + 1.0] {
        let day = date_after(date, jd_0h, days)?;
        let ut = greenwich_sidereal_to_universal(gst, &day)? + 24.0 * days;
        if (ut - near).abs() < (best - near).abs() {
            best = ut;
        }
    }
    Ok(best)
}

/// Compute a single rise/set event for the Sun on the local civil `date`.
///
/// # Returns
/// * `RiseSetResult::Event` with local and universal dates and hours and
///   the azimuth; the local date differs from `date` only when the crossing
///   nearest local solar noon falls past local midnight
/// * `RiseSetResult::NeverRises` if the Sun stays below the target altitude
/// * `RiseSetResult::NeverSets` if the Sun stays above it
pub fn compute_rise_set(
    date: &CalendarDate,
    location: &GeoLocation,
    zone: &TimeZone,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<RiseSetResult, BodyError> {
    location.validate()?;
    zone.validate()?;
    let jd_0h = date.julian_day()?;
    let phi = location.latitude_rad();
    let target_alt = config.target_altitude_deg(event, location.altitude_m);

    let offset = zone.total_offset_hours();
    // Hours after 0h UT of `date`; local solar noon inside the civil day.
    let mut ut = wrap_hours(approximate_local_noon_ut(location.longitude_deg) + offset) - offset;
    let mut hour_angle = 0.0;
    let mut declination = 0.0;

    for iteration in 0..MAX_ITERATIONS {
        let sun = sun_position_at_jd(jd_0h + ut / 24.0)?;
        declination = sun.equatorial.declination_deg;
        hour_angle = match crossing_hour_angle(phi, declination, target_alt) {
            Crossing::HourAngle(h) => h,
            Crossing::NeverRises => return Ok(RiseSetResult::NeverRises),
            Crossing::NeverSets => return Ok(RiseSetResult::NeverSets),
        };

        let ra = sun.equatorial.right_ascension_hours;
        let lst = if event.is_rising() {
            wrap_hours(ra - hour_angle)
        } else {
            wrap_hours(ra + hour_angle)
        };
        let gst = greenwich_sidereal_time(lst, location.longitude_deg)?;
        let next = universal_hours_near(gst, date, jd_0h, ut)?;
        let step = next - ut;
        log::trace!(
            "{} {date} iter {iteration}: ra={ra:.6}h dec={declination:.6} H={hour_angle:.6}h ut={next:.7}h",
            event.name()
        );
        ut = next;
        if step.abs() < CONVERGENCE_HOURS {
            break;
        }
    }

    // Rising events sit east of the meridian, at hour angle 24 − H.
    let signed_ha = if event.is_rising() {
        wrap_hours(-hour_angle)
    } else {
        hour_angle
    };
    let horizon = hour_angle_to_horizon(
        &HourAngleCoord::new(signed_ha, declination),
        location.latitude_deg,
    )?;

    let local = ut + offset;
    let local_days = (local / 24.0).floor();
    let universal_days = (ut / 24.0).floor();
    Ok(RiseSetResult::Event {
        event,
        local_date: date_after(date, jd_0h, local_days)?,
        local_hours: local - 24.0 * local_days,
        universal_date: date_after(date, jd_0h, universal_days)?,
        universal_hours: ut - 24.0 * universal_days,
        azimuth_deg: horizon.azimuth_deg,
    })
}

/// Sunrise and sunset, in that order.
pub fn sun_rise_and_set(
    date: &CalendarDate,
    location: &GeoLocation,
    zone: &TimeZone,
    config: &RiseSetConfig,
) -> Result<(RiseSetResult, RiseSetResult), BodyError> {
    Ok((
        compute_rise_set(date, location, zone, RiseSetEvent::Sunrise, config)?,
        compute_rise_set(date, location, zone, RiseSetEvent::Sunset, config)?,
    ))
}

/// Start of morning twilight and end of evening twilight, in that order.
pub fn sun_twilight(
    date: &CalendarDate,
    location: &GeoLocation,
    zone: &TimeZone,
    kind: TwilightKind,
) -> Result<(RiseSetResult, RiseSetResult), BodyError> {
    let config = RiseSetConfig::default();
    let (dawn, dusk) = kind.events();
    Ok((
        compute_rise_set(date, location, zone, dawn, &config)?,
        compute_rise_set(date, location, zone, dusk, &config)?,
    ))
}

/// Compute all 8 rise/set events for a day.
///
/// Returns results in chronological order:
/// AstronomicalDawn, NauticalDawn, CivilDawn, Sunrise,
/// Sunset, CivilDusk, NauticalDusk, AstronomicalDusk.
///
/// Each event is computed independently; one that cannot occur is reported
/// as NeverRises/NeverSets.
pub fn compute_all_events(
    date: &CalendarDate,
    location: &GeoLocation,
    zone: &TimeZone,
    config: &RiseSetConfig,
) -> Result<Vec<RiseSetResult>, BodyError> {
    ALL_EVENTS
        .iter()
        .map(|&evt| compute_rise_set(date, location, zone, evt, config))
        .collect()
}
