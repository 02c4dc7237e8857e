//! Local civil time and Universal Time.
//!
//! `CivilDateTime` is what a clock on the wall shows; `UniversalTime` is the
//! same instant at Greenwich. A `TimeZone` carries the zone offset and any
//! daylight-saving shift in force.

use std::fmt::{Display, Formatter};

use meridian_angle::split_sexagesimal;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::error::{TimeError, invalid_field};
use crate::julian::{check_day, gregorian_date_to_julian_day, julian_day_to_gregorian_date};

/// Seconds value a leap-second reading (`:60`) is clamped to.
pub const LEAP_SECOND_CLAMP: f64 = 59.999_999;

/// Westernmost and easternmost civil zone offsets in hours.
const ZONE_RANGE_HOURS: (f64, f64) = (-12.0, 14.0);

/// Largest daylight-saving shift accepted, in hours.
const MAX_DAYLIGHT_HOURS: i32 = 2;

/// Zone offset and daylight-saving shift of a local clock.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeZone {
    /// Standard offset from UT in hours, east positive (e.g. −5 for EST).
    pub zone_offset_hours: f64,
    /// Daylight-saving shift in hours (usually 0 or 1).
    pub daylight_saving_hours: f64,
}

impl TimeZone {
    /// Universal Time: no offset, no daylight saving.
    pub const UTC: Self = Self {
        zone_offset_hours: 0.0,
        daylight_saving_hours: 0.0,
    };

    /// Create a validated zone.
    ///
    /// `daylight_hours` carries the sign of the daylight shift;
    /// `daylight_minutes` is its magnitude.
    pub fn new(
        zone_offset_hours: f64,
        daylight_hours: i32,
        daylight_minutes: u32,
    ) -> Result<Self, TimeError> {
        if daylight_minutes >= 60 {
            return Err(TimeError::InvalidOffset("daylight minutes must be below 60"));
        }
        let minutes = f64::from(daylight_minutes) / 60.0;
        let daylight_saving_hours = if daylight_hours < 0 {
            f64::from(daylight_hours) - minutes
        } else {
            f64::from(daylight_hours) + minutes
        };
        let zone = Self {
            zone_offset_hours,
            daylight_saving_hours,
        };
        zone.validate()?;
        Ok(zone)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        if !self.zone_offset_hours.is_finite() || !self.daylight_saving_hours.is_finite() {
            return Err(TimeError::NonFinite);
        }
        if !(ZONE_RANGE_HOURS.0..=ZONE_RANGE_HOURS.1).contains(&self.zone_offset_hours) {
            log::debug!("rejected zone offset {}", self.zone_offset_hours);
            return Err(TimeError::InvalidOffset("zone offset outside [-12, 14] hours"));
        }
        if self.daylight_saving_hours.abs() > f64::from(MAX_DAYLIGHT_HOURS) {
            log::debug!("rejected daylight shift {}", self.daylight_saving_hours);
            return Err(TimeError::InvalidOffset("daylight saving outside [-2, 2] hours"));
        }
        Ok(())
    }

    /// Local time minus Universal Time, in hours.
    pub fn total_offset_hours(&self) -> f64 {
        self.zone_offset_hours + self.daylight_saving_hours
    }
}

fn validate_fields(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), TimeError> {
    check_day(year, month, f64::from(day))?;
    if hour >= 24 {
        return Err(invalid_field("hour must be below 24"));
    }
    if minute >= 60 {
        return Err(invalid_field("minute must be below 60"));
    }
    if !second.is_finite() {
        return Err(TimeError::NonFinite);
    }
    // 60.x is a leap-second reading
    if !(0.0..61.0).contains(&second) {
        return Err(invalid_field("second outside [0, 61)"));
    }
    Ok(())
}

fn clock_hours(hour: u32, minute: u32, second: f64) -> f64 {
    f64::from(hour) + f64::from(minute) / 60.0 + second.min(LEAP_SECOND_CLAMP) / 3600.0
}

/// Calendar fields after moving `hours` (relative to 0h of `date`) onto the
/// correct day.
struct Shifted {
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
}

fn shift_onto_day(date: CalendarDate, hours: f64) -> Result<Shifted, TimeError> {
    if !hours.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let mut day_shift = (hours / 24.0).floor();
    let mut in_day = hours - day_shift * 24.0;
    if in_day >= 24.0 {
        in_day = 0.0;
        day_shift += 1.0;
    }
    // The time of day stays out of the Julian Day so that sub-microsecond
    // seconds survive; only the whole-day shift goes through it.
    let jd = date.julian_day()? + day_shift;
    let shifted = julian_day_to_gregorian_date(jd)?;
    let (hour, minute, second) = split_sexagesimal(in_day, false)?;
    Ok(Shifted {
        year: shifted.year,
        month: shifted.month,
        day: shifted.day.floor() as u32,
        hour: hour as u32,
        minute,
        second: second.min(LEAP_SECOND_CLAMP),
    })
}

/// Local civil date and time.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CivilDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds in [0, 61); a leap-second reading is clamped to
    /// [`LEAP_SECOND_CLAMP`] in conversions.
    pub second: f64,
}

impl CivilDateTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        validate_fields(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// The calendar date part.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Time of day in decimal hours.
    pub fn decimal_hours(&self) -> f64 {
        clock_hours(self.hour, self.minute, self.second)
    }
}

impl Display for CivilDateTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_date_time(
            f,
            (self.year, self.month, self.day),
            (self.hour, self.minute, self.second),
            "",
        )
    }
}

/// Universal Time calendar date and time of day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UniversalTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UniversalTime {
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, TimeError> {
        let t = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        };
        t.validate()?;
        Ok(t)
    }

    pub fn validate(&self) -> Result<(), TimeError> {
        validate_fields(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// The Greenwich calendar date part.
    pub fn date(&self) -> CalendarDate {
        CalendarDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// UT of day in decimal hours.
    pub fn decimal_hours(&self) -> f64 {
        clock_hours(self.hour, self.minute, self.second)
    }

    /// Julian Date of this instant.
    pub fn to_julian_day(&self) -> Result<f64, TimeError> {
        self.validate()?;
        let day_frac = f64::from(self.day) + self.decimal_hours() / 24.0;
        gregorian_date_to_julian_day(self.year, self.month, day_frac)
    }

    /// Instant at a Julian Date.
    pub fn from_julian_day(jd: f64) -> Result<Self, TimeError> {
        let date = julian_day_to_gregorian_date(jd)?;
        let whole = CalendarDate {
            year: date.year,
            month: date.month,
            day: date.day.floor() as u32,
        };
        let s = shift_onto_day(whole, date.day.fract() * 24.0)?;
        Ok(Self {
            year: s.year,
            month: s.month,
            day: s.day,
            hour: s.hour,
            minute: s.minute,
            second: s.second,
        })
    }
}

impl Display for UniversalTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_date_time(
            f,
            (self.year, self.month, self.day),
            (self.hour, self.minute, self.second),
            "Z",
        )
    }
}

fn write_date_time(
    f: &mut Formatter<'_>,
    (year, month, day): (i32, u32, u32),
    (hour, minute, second): (u32, u32, f64),
    suffix: &str,
) -> std::fmt::Result {
    let whole = second as u32;
    let frac = second - f64::from(whole);
    if frac.abs() < 1e-9 {
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{whole:02}{suffix}"
        )
    } else {
        write!(
            f,
            "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:09.6}{suffix}"
        )
    }
}

/// Local civil time → Universal Time.
///
/// Subtracts the daylight-saving shift and zone offset, moving onto the
/// previous or next civil day when the result leaves [0, 24). A leap-second
/// reading (`second >= 60`) is clamped to [`LEAP_SECOND_CLAMP`] and never
/// rolls into the next minute.
pub fn local_to_universal(
    local: &CivilDateTime,
    zone: &TimeZone,
) -> Result<UniversalTime, TimeError> {
    local.validate()?;
    zone.validate()?;
    let ut_hours = local.decimal_hours() - zone.daylight_saving_hours - zone.zone_offset_hours;
    let s = shift_onto_day(local.date(), ut_hours)?;
    Ok(UniversalTime {
        year: s.year,
        month: s.month,
        day: s.day,
        hour: s.hour,
        minute: s.minute,
        second: s.second,
    })
}

/// Universal Time → local civil time. Inverse of [`local_to_universal`].
pub fn universal_to_local(
    ut: &UniversalTime,
    zone: &TimeZone,
) -> Result<CivilDateTime, TimeError> {
    ut.validate()?;
    zone.validate()?;
    let local_hours = ut.decimal_hours() + zone.zone_offset_hours + zone.daylight_saving_hours;
    let s = shift_onto_day(ut.date(), local_hours)?;
    Ok(CivilDateTime {
        year: s.year,
        month: s.month,
        day: s.day,
        hour: s.hour,
        minute: s.minute,
        second: s.second,
    })
}
