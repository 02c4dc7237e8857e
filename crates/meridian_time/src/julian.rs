//! Julian Day ↔ calendar conversions.
//!
//! Dates on or after 1582-10-15 use the Gregorian calendar; earlier dates
//! use the Julian calendar. The ten days 1582-10-05 .. 1582-10-14 never
//! existed and are rejected.
//!
//! Source: Duffett-Smith & Zwart, _Practical Astronomy with your Calculator
//! or Spreadsheet_ (4th ed.), §4 and §5; Meeus, _Astronomical Algorithms_,
//! ch. 7.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::calendar::days_in_month;
use crate::error::{TimeError, invalid_field};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of epoch 2010.0 (2010 January 0.0), the reference epoch of
/// the Sun and planet orbital elements.
pub const EPOCH_2010_JD: f64 = 2_455_196.5;

/// Last integer day number counted in the Julian calendar.
pub const GREGORIAN_REFORM_JD: f64 = 2_299_160.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Calendar date whose day may carry a fraction of a day.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    /// Day of month; the fractional part is the time of day.
    pub day: f64,
}

fn is_gregorian(year: i32, month: u32, day: f64) -> bool {
    year > 1582 || (year == 1582 && (month > 10 || (month == 10 && day >= 15.0)))
}

/// Month length in the calendar in force: every fourth year is a leap
/// year before the reform.
fn month_length_in_force(year: i32, month: u32) -> Result<u32, TimeError> {
    let length = days_in_month(year, month)?;
    if month == 2 && year <= 1582 {
        Ok(if year.rem_euclid(4) == 0 { 29 } else { 28 })
    } else {
        Ok(length)
    }
}

/// Validate a (possibly fractional) day against the month it lives in.
pub(crate) fn check_day(year: i32, month: u32, day: f64) -> Result<(), TimeError> {
    if !day.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let length = month_length_in_force(year, month)?;
    if day < 1.0 || day >= f64::from(length) + 1.0 {
        return Err(invalid_field("day outside the month"));
    }
    if year == 1582 && month == 10 && (5.0..15.0).contains(&day.floor()) {
        return Err(invalid_field("day falls in the 1582 calendar reform gap"));
    }
    Ok(())
}

/// Convert a calendar date to a Julian Day.
///
/// January and February are treated as months 13 and 14 of the preceding
/// year. The Gregorian century correction applies from 1582-10-15 on.
///
/// # Errors
/// [`TimeError::InvalidCalendarField`] for a month outside 1–12 or a day
/// outside the month. Before the reform, February 29 exists in every year
/// divisible by 4.
pub fn gregorian_date_to_julian_day(year: i32, month: u32, day: f64) -> Result<f64, TimeError> {
    check_day(year, month, day)?;

    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = f64::from(y);

    let b = if is_gregorian(year, month, day) {
        let a = (y / 100.0).floor();
        2.0 - a + (a / 4.0).floor()
    } else {
        0.0
    };
    let c = if y < 0.0 {
        (365.25 * y - 0.75).trunc()
    } else {
        (365.25 * y).trunc()
    };
    let d = (30.6001 * f64::from(m + 1)).trunc();

    Ok(b + c + d + day + 1_720_994.5)
}

/// Convert a Julian Day back to a calendar date.
///
/// Exact inverse of [`gregorian_date_to_julian_day`].
pub fn julian_day_to_gregorian_date(jd: f64) -> Result<GregorianDate, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let b = if z > GREGORIAN_REFORM_JD {
        let a = ((z - 1_867_216.25) / 36_524.25).floor();
        z + 1.0 + a - (a / 4.0).floor()
    } else {
        z
    };
    let c = b + 1524.0;
    let d = ((c - 122.1) / 365.25).floor();
    let e = (365.25 * d).floor();
    let g = ((c - e) / 30.6001).floor();

    let day = c - e + f - (30.6001 * g).floor();
    let month = if g < 13.5 { g - 1.0 } else { g - 13.0 };
    let year = if month > 2.5 { d - 4716.0 } else { d - 4715.0 };

    Ok(GregorianDate {
        year: year as i32,
        month: month as u32,
        day,
    })
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jd_with_fractional_day() {
        let jd = gregorian_date_to_julian_day(2009, 6, 19.75).unwrap();
        assert!((jd - 2_455_002.25).abs() < 1e-4);
    }

    #[test]
    fn jd_j2000() {
        assert_eq!(gregorian_date_to_julian_day(2000, 1, 1.5).unwrap(), J2000_JD);
    }

    #[test]
    fn jd_epoch_2010() {
        // 2010 January 0.0 is 2009 December 31.0
        assert_eq!(
            gregorian_date_to_julian_day(2009, 12, 31.0).unwrap(),
            EPOCH_2010_JD
        );
    }

    #[test]
    fn jd_zero_point() {
        assert_eq!(gregorian_date_to_julian_day(-4712, 1, 1.5).unwrap(), 0.0);
    }

    #[test]
    fn reform_days_are_consecutive() {
        let before = gregorian_date_to_julian_day(1582, 10, 4.0).unwrap();
        let after = gregorian_date_to_julian_day(1582, 10, 15.0).unwrap();
        assert_eq!(after - before, 1.0);
    }

    #[test]
    fn reform_gap_rejected() {
        assert!(gregorian_date_to_julian_day(1582, 10, 10.0).is_err());
    }

    #[test]
    fn invalid_month_rejected() {
        assert_eq!(
            gregorian_date_to_julian_day(2000, 13, 1.0),
            Err(TimeError::InvalidCalendarField("month outside 1-12"))
        );
        assert!(gregorian_date_to_julian_day(2000, 0, 1.0).is_err());
    }

    #[test]
    fn invalid_day_rejected() {
        assert!(gregorian_date_to_julian_day(2023, 2, 29.0).is_err());
        assert!(gregorian_date_to_julian_day(2024, 2, 29.0).is_ok());
        assert!(gregorian_date_to_julian_day(2024, 4, 31.0).is_err());
        assert!(gregorian_date_to_julian_day(2024, 4, 0.5).is_err());
    }

    #[test]
    fn julian_calendar_leap_day_before_reform() {
        let leap = gregorian_date_to_julian_day(1500, 2, 29.0).unwrap();
        let march = gregorian_date_to_julian_day(1500, 3, 1.0).unwrap();
        assert_eq!(march - leap, 1.0);
        let back = julian_day_to_gregorian_date(leap).unwrap();
        assert_eq!((back.year, back.month, back.day), (1500, 2, 29.0));
        assert!(gregorian_date_to_julian_day(1501, 2, 29.0).is_err());
        assert!(gregorian_date_to_julian_day(1700, 2, 29.0).is_err());
        assert!(gregorian_date_to_julian_day(-101, 2, 29.0).is_err());
        assert!(gregorian_date_to_julian_day(-100, 2, 29.0).is_ok());
    }

    #[test]
    fn calendar_from_jd() {
        let date = julian_day_to_gregorian_date(2_455_002.25).unwrap();
        assert_eq!(date.year, 2009);
        assert_eq!(date.month, 6);
        assert!((date.day - 19.75).abs() < 1e-9);
    }

    #[test]
    fn calendar_across_reform() {
        let date = julian_day_to_gregorian_date(2_299_160.5).unwrap();
        assert_eq!((date.year, date.month, date.day), (1582, 10, 15.0));
        let date = julian_day_to_gregorian_date(2_299_159.5).unwrap();
        assert_eq!((date.year, date.month, date.day), (1582, 10, 4.0));
    }

    #[test]
    fn calendar_rejects_nan() {
        assert_eq!(julian_day_to_gregorian_date(f64::NAN), Err(TimeError::NonFinite));
    }

    #[test]
    fn centuries_at_j2000() {
        assert_eq!(julian_centuries_since_j2000(J2000_JD), 0.0);
        assert!((julian_centuries_since_j2000(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
