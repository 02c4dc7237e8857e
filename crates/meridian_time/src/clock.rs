//! Decimal hours ↔ hours/minutes/seconds.

use std::fmt::{Display, Formatter};

use meridian_angle::{join_sexagesimal, split_sexagesimal, wrap_hours};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{TimeError, invalid_field};

/// How the hour field of a clock reading is to be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClockFormat {
    /// Hours in [0, 24).
    TwentyFourHour,
    /// Hours in [0, 12] with an AM/PM marker. 12 AM is midnight, 12 PM noon.
    TwelveHour { pm: bool },
}

/// Convert a clock reading to decimal hours.
///
/// # Errors
/// [`TimeError::InvalidCalendarField`] if the hour is outside [0, 24) in
/// 24-hour mode or outside [0, 12] in 12-hour mode, minutes are 60 or more,
/// or seconds lie outside [0, 60).
pub fn hms_to_decimal_hours(
    hours: u32,
    minutes: u32,
    seconds: f64,
    format: ClockFormat,
) -> Result<f64, TimeError> {
    if minutes >= 60 {
        return Err(invalid_field("minute must be below 60"));
    }
    if !seconds.is_finite() {
        return Err(TimeError::NonFinite);
    }
    if !(0.0..60.0).contains(&seconds) {
        return Err(invalid_field("second outside [0, 60)"));
    }
    let hours = match format {
        ClockFormat::TwentyFourHour => {
            if hours >= 24 {
                return Err(invalid_field("hour must be below 24"));
            }
            hours
        }
        ClockFormat::TwelveHour { pm } => {
            if hours > 12 {
                return Err(invalid_field("hour must be at most 12 on a 12-hour clock"));
            }
            match (hours, pm) {
                (12, false) => 0,
                (12, true) => 12,
                (h, true) => h + 12,
                (h, false) => h,
            }
        }
    };
    Ok(join_sexagesimal(f64::from(hours), minutes, seconds)?)
}

/// A time as whole hours, minutes and seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hms {
    /// Whole hours, carrying the sign for negative elapsed times.
    pub hours: f64,
    pub minutes: u32,
    pub seconds: f64,
}

impl Hms {
    pub fn to_decimal_hours(&self) -> Result<f64, TimeError> {
        Ok(join_sexagesimal(self.hours, self.minutes, self.seconds)?)
    }
}

impl Display for Hms {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.hours.is_sign_negative() { "-" } else { "" };
        write!(
            f,
            "{sign}{:02.0}h{:02}m{:05.2}s",
            self.hours.abs(),
            self.minutes,
            self.seconds
        )
    }
}

/// Decimal hours → h:m:s without wrapping, for elapsed or relative times.
///
/// Seconds are rounded to two decimals. A rounded 60 s carries into the
/// minutes and 60 min into the hours; the hours are never reduced modulo 24,
/// so 25.5 stays `25h30m`.
pub fn to_elapsed_time(decimal_hours: f64) -> Result<Hms, TimeError> {
    let (hours, minutes, seconds) = split_sexagesimal(decimal_hours, true)?;
    Ok(Hms {
        hours,
        minutes,
        seconds,
    })
}

/// Decimal hours → h:m:s on a 24-hour clock face.
///
/// The input is wrapped into [0, 24) first, and a carry that reaches 24h
/// wraps to 0h.
pub fn to_clock_time(decimal_hours: f64) -> Result<Hms, TimeError> {
    if !decimal_hours.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let (mut hours, minutes, seconds) = split_sexagesimal(wrap_hours(decimal_hours), true)?;
    if hours >= 24.0 {
        hours -= 24.0;
    }
    Ok(Hms {
        hours,
        minutes,
        seconds,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn twenty_four_hour() {
        let h = hms_to_decimal_hours(18, 31, 27.0, ClockFormat::TwentyFourHour).unwrap();
        assert!((h - 18.524_166_667).abs() < 1e-8);
    }

    #[test]
    fn twelve_am_is_midnight() {
        let h = hms_to_decimal_hours(12, 30, 0.0, ClockFormat::TwelveHour { pm: false }).unwrap();
        assert!((h - 0.5).abs() < 1e-12);
    }

    #[test]
    fn twelve_pm_is_noon() {
        let h = hms_to_decimal_hours(12, 0, 0.0, ClockFormat::TwelveHour { pm: true }).unwrap();
        assert_eq!(h, 12.0);
    }

    #[test]
    fn pm_adds_twelve() {
        let h = hms_to_decimal_hours(3, 15, 0.0, ClockFormat::TwelveHour { pm: true }).unwrap();
        assert!((h - 15.25).abs() < 1e-12);
    }

    #[test]
    fn hour_out_of_range() {
        assert!(hms_to_decimal_hours(24, 0, 0.0, ClockFormat::TwentyFourHour).is_err());
        assert!(hms_to_decimal_hours(13, 0, 0.0, ClockFormat::TwelveHour { pm: true }).is_err());
    }

    #[test]
    fn minute_and_second_out_of_range() {
        assert!(hms_to_decimal_hours(1, 60, 0.0, ClockFormat::TwentyFourHour).is_err());
        assert!(hms_to_decimal_hours(1, 0, 60.0, ClockFormat::TwentyFourHour).is_err());
        assert!(hms_to_decimal_hours(1, 0, -0.5, ClockFormat::TwentyFourHour).is_err());
        assert_eq!(
            hms_to_decimal_hours(1, 0, f64::NAN, ClockFormat::TwentyFourHour),
            Err(TimeError::NonFinite)
        );
    }

    #[test]
    fn elapsed_known() {
        let t = to_elapsed_time(18.524_167).unwrap();
        assert_eq!(t.hours, 18.0);
        assert_eq!(t.minutes, 31);
        assert!((t.seconds - 27.0).abs() < 0.01);
    }

    #[test]
    fn elapsed_carries_rounded_seconds() {
        // 1h 59m 59.999s rounds to 2h 00m 00.00s
        let t = to_elapsed_time(1.0 + 59.0 / 60.0 + 59.999 / 3600.0).unwrap();
        assert_eq!((t.hours, t.minutes, t.seconds), (2.0, 0, 0.0));
    }

    #[test]
    fn elapsed_does_not_wrap() {
        let t = to_elapsed_time(25.5).unwrap();
        assert_eq!((t.hours, t.minutes), (25.0, 30));
        let t = to_elapsed_time(-1.5).unwrap();
        assert_eq!((t.hours, t.minutes), (-1.0, 30));
    }

    #[test]
    fn clock_wraps() {
        let t = to_clock_time(25.5).unwrap();
        assert_eq!((t.hours, t.minutes), (1.0, 30));
        let t = to_clock_time(-1.5).unwrap();
        assert_eq!((t.hours, t.minutes), (22.0, 30));
    }

    #[test]
    fn clock_carry_wraps_midnight() {
        let t = to_clock_time(23.0 + 59.0 / 60.0 + 59.999 / 3600.0).unwrap();
        assert_eq!((t.hours, t.minutes, t.seconds), (0.0, 0, 0.0));
    }

    #[test]
    fn display_hms() {
        let t = to_elapsed_time(4.0 + 40.0 / 60.0 + 5.23 / 3600.0).unwrap();
        assert_eq!(t.to_string(), "04h40m05.23s");
    }

    proptest! {
        #[test]
        fn prop_hms_roundtrip(h in 0u32..24, m in 0u32..60, s in 0.0..60.0f64) {
            let dh = hms_to_decimal_hours(h, m, s, ClockFormat::TwentyFourHour).unwrap();
            let back = to_elapsed_time(dh).unwrap();
            let back_dh = back.to_decimal_hours().unwrap();
            // Seconds are rounded to 0.01 s, so agreement is to half a centisecond
            prop_assert!((back_dh - dh).abs() <= 0.005 / 3600.0 + 1e-12);
        }
    }
}
