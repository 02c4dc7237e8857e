//! Calendar arithmetic: leap years, weekdays, ordinal days, Easter.

use std::fmt::{Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, invalid_field};
use crate::julian::{check_day, gregorian_date_to_julian_day};

/// Gregorian leap-year rule: divisible by 4 and not by 100, or by 400.
///
/// Applied to every year, including those before the 1582 reform.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, TimeError> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Ok(31),
        4 | 6 | 9 | 11 => Ok(30),
        2 if is_leap_year(year) => Ok(29),
        2 => Ok(28),
        _ => Err(invalid_field("month outside 1-12")),
    }
}

/// A whole calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CalendarDate {
    /// Create a validated calendar date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        let date = Self { year, month, day };
        date.validate()?;
        Ok(date)
    }

    /// Check month and day ranges.
    pub fn validate(&self) -> Result<(), TimeError> {
        check_day(self.year, self.month, f64::from(self.day))
    }

    /// Julian Day at 0h of this date.
    pub fn julian_day(&self) -> Result<f64, TimeError> {
        gregorian_date_to_julian_day(self.year, self.month, f64::from(self.day))
    }
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

/// All weekdays, Sunday first.
pub const ALL_WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

impl Weekday {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Day of the week, from `(JD + 1.5) mod 7` at 0h of the date.
pub fn day_of_week(year: i32, month: u32, day: u32) -> Result<Weekday, TimeError> {
    let jd = gregorian_date_to_julian_day(year, month, f64::from(day))?;
    let idx = (jd + 1.5).rem_euclid(7.0).round() as usize % 7;
    Ok(ALL_WEEKDAYS[idx])
}

/// 0-based ordinal day within the year (1 January = 0, 31 December = 364
/// or 365).
///
/// Counts with the Gregorian month lengths for every year, so a Julian
/// calendar leap day such as 1500-02-29 is rejected here.
pub fn day_number_in_year(year: i32, month: u32, day: u32) -> Result<u32, TimeError> {
    check_day(year, month, f64::from(day))?;
    if day > days_in_month(year, month)? {
        return Err(invalid_field("day outside the month"));
    }
    let mut before = 0;
    for m in 1..month {
        before += days_in_month(year, m)?;
    }
    Ok(before + day - 1)
}

/// Month and day of Easter Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EasterDate {
    pub month: u32,
    pub day: u32,
}

/// Easter Sunday in the Gregorian calendar.
///
/// Anonymous Gregorian algorithm (Meeus/Jones/Butcher), integer arithmetic
/// only. Euclidean division keeps it total over negative years, although
/// it is meaningful only for Gregorian-era years.
pub fn easter_date(year: i32) -> EasterDate {
    let y = i64::from(year);
    let a = y.rem_euclid(19);
    let b = y.div_euclid(100);
    let c = y.rem_euclid(100);
    let d = b.div_euclid(4);
    let e = b.rem_euclid(4);
    let f = (b + 8).div_euclid(25);
    let g = (b - f + 1).div_euclid(3);
    let h = (19 * a + b - d - g + 15).rem_euclid(30);
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let n = h + l - 7 * m + 114;
    EasterDate {
        month: (n / 31) as u32,
        day: (n % 31 + 1) as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn february_length() {
        assert_eq!(days_in_month(2024, 2).unwrap(), 29);
        assert_eq!(days_in_month(2100, 2).unwrap(), 28);
    }

    #[test]
    fn month_out_of_range() {
        assert!(days_in_month(2024, 0).is_err());
        assert!(days_in_month(2024, 13).is_err());
    }

    #[test]
    fn weekday_known_dates() {
        assert_eq!(day_of_week(2000, 1, 1).unwrap(), Weekday::Saturday);
        assert_eq!(day_of_week(2024, 2, 18).unwrap(), Weekday::Sunday);
        assert_eq!(day_of_week(2009, 2, 15).unwrap(), Weekday::Sunday);
    }

    #[test]
    fn day_number_bounds() {
        assert_eq!(day_number_in_year(2023, 1, 1).unwrap(), 0);
        assert_eq!(day_number_in_year(2023, 12, 31).unwrap(), 364);
        assert_eq!(day_number_in_year(2024, 12, 31).unwrap(), 365);
    }

    #[test]
    fn day_number_after_leap_february() {
        assert_eq!(day_number_in_year(2024, 3, 1).unwrap(), 60);
        assert_eq!(day_number_in_year(2023, 3, 1).unwrap(), 59);
    }

    #[test]
    fn day_number_rejects_bad_day() {
        assert!(day_number_in_year(2023, 2, 29).is_err());
        assert!(day_number_in_year(1500, 2, 29).is_err());
    }

    #[test]
    fn easter_known() {
        assert_eq!(easter_date(2009), EasterDate { month: 4, day: 12 });
        assert_eq!(easter_date(2023), EasterDate { month: 4, day: 9 });
        assert_eq!(easter_date(2024), EasterDate { month: 3, day: 31 });
        assert_eq!(easter_date(2000), EasterDate { month: 4, day: 23 });
    }

    #[test]
    fn easter_extremes() {
        // Earliest and latest possible Gregorian Easter dates
        assert_eq!(easter_date(1818), EasterDate { month: 3, day: 22 });
        assert_eq!(easter_date(2038), EasterDate { month: 4, day: 25 });
    }

    #[test]
    fn calendar_date_validation() {
        assert!(CalendarDate::new(2024, 2, 29).is_ok());
        assert!(CalendarDate::new(2023, 2, 29).is_err());
        assert!(CalendarDate::new(1500, 2, 29).is_ok());
        assert!(CalendarDate::new(1700, 2, 29).is_err());
        assert!(CalendarDate::new(2023, 13, 1).is_err());
        assert!(CalendarDate::new(1582, 10, 10).is_err());
    }

    #[test]
    fn calendar_date_display() {
        let d = CalendarDate::new(2003, 7, 27).unwrap();
        assert_eq!(d.to_string(), "2003-07-27");
    }
}
