//! Calendar and time-system conversions.
//!
//! This crate provides:
//! - Julian Day ↔ calendar conversions across the 1582 reform
//! - Weekday, ordinal day and Easter computations
//! - Clock readings ↔ decimal hours
//! - Local civil time ↔ Universal Time with zone and daylight offsets
//! - Universal Time ↔ Greenwich/local sidereal time

pub mod calendar;
pub mod civil;
pub mod clock;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use calendar::{
    ALL_WEEKDAYS, CalendarDate, EasterDate, Weekday, day_number_in_year, day_of_week,
    days_in_month, easter_date, is_leap_year,
};
pub use civil::{
    CivilDateTime, LEAP_SECOND_CLAMP, TimeZone, UniversalTime, local_to_universal,
    universal_to_local,
};
pub use clock::{ClockFormat, Hms, hms_to_decimal_hours, to_clock_time, to_elapsed_time};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, EPOCH_2010_JD, GREGORIAN_REFORM_JD, GregorianDate, J2000_JD,
    gregorian_date_to_julian_day, julian_centuries_since_j2000, julian_day_to_gregorian_date,
};
pub use sidereal::{
    SIDEREAL_RATE, SOLAR_RATE, greenwich_sidereal_time, greenwich_sidereal_to_universal,
    gst_at_zero_ut, local_sidereal_time, universal_to_greenwich_sidereal,
};
