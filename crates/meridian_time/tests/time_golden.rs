//! Golden-value tests against worked examples from Duffett-Smith & Zwart,
//! _Practical Astronomy with your Calculator or Spreadsheet_ (4th ed.).
//!
//! Pure-math tests (no data files needed).

use meridian_time::{
    CalendarDate, CivilDateTime, TimeZone, UniversalTime, Weekday, day_of_week, easter_date,
    gregorian_date_to_julian_day, greenwich_sidereal_to_universal, julian_day_to_gregorian_date,
    local_to_universal, to_elapsed_time, universal_to_greenwich_sidereal,
};
use proptest::prelude::*;

#[test]
fn julian_day_of_fractional_date() {
    let jd = gregorian_date_to_julian_day(2009, 6, 19.75).unwrap();
    assert!((jd - 2_455_002.25).abs() < 1e-4, "jd = {jd}");
}

#[test]
fn easter_2009_and_2023() {
    let e = easter_date(2009);
    assert_eq!((e.day, e.month), (12, 4));
    let e = easter_date(2023);
    assert_eq!((e.day, e.month), (9, 4));
}

#[test]
fn gst_from_ut() {
    // 22 Apr 1980, 14:36:51.67 UT → GST 4h 40m 5.23s
    let ut = UniversalTime::new(1980, 4, 22, 14, 36, 51.67).unwrap();
    let gst = universal_to_greenwich_sidereal(&ut).unwrap();
    let hms = to_elapsed_time(gst).unwrap();
    assert_eq!(hms.hours, 4.0);
    assert_eq!(hms.minutes, 40);
    assert!((hms.seconds - 5.23).abs() <= 0.01, "seconds = {}", hms.seconds);
}

#[test]
fn ut_from_gst() {
    let date = CalendarDate::new(1980, 4, 22).unwrap();
    let gst = 4.0 + 40.0 / 60.0 + 5.23 / 3600.0;
    let ut = greenwich_sidereal_to_universal(gst, &date).unwrap();
    let hms = to_elapsed_time(ut).unwrap();
    assert_eq!((hms.hours, hms.minutes), (14.0, 36));
    assert!((hms.seconds - 51.67).abs() <= 0.01, "seconds = {}", hms.seconds);
}

#[test]
fn lct_to_ut_book_example() {
    // 1 Jul 2013, 03:37:00 local, zone +4, DST 1 → 30 Jun 2013 22:37:00 UT
    let local = CivilDateTime::new(2013, 7, 1, 3, 37, 0.0).unwrap();
    let zone = TimeZone::new(4.0, 1, 0).unwrap();
    let ut = local_to_universal(&local, &zone).unwrap();
    assert_eq!((ut.year, ut.month, ut.day), (2013, 6, 30));
    assert_eq!((ut.hour, ut.minute), (22, 37));
}

#[test]
fn weekday_of_book_example() {
    assert_eq!(day_of_week(2009, 2, 15).unwrap(), Weekday::Sunday);
}

#[test]
fn jd_roundtrip_fixed_dates_across_reform() {
    let dates = [
        (-4712, 1, 1),
        (-100, 2, 17),
        (1, 1, 1),
        (1000, 7, 4),
        (-100, 2, 29),
        (1500, 2, 29),
        (1500, 12, 31),
        (1582, 10, 4),
        (1582, 10, 15),
        (1600, 3, 1),
        (1900, 2, 28),
        (2000, 2, 29),
        (2100, 12, 31),
    ];
    for (y, m, d) in dates {
        let jd = gregorian_date_to_julian_day(y, m, f64::from(d)).unwrap();
        let back = julian_day_to_gregorian_date(jd).unwrap();
        assert_eq!((back.year, back.month, back.day), (y, m, f64::from(d)), "jd {jd}");
    }
}

#[test]
fn julian_calendar_leap_day_instant() {
    // JD 2268991.5 is 1500-02-29 0h in the Julian calendar
    let ut = UniversalTime::from_julian_day(2_268_991.5).unwrap();
    assert_eq!((ut.year, ut.month, ut.day, ut.hour), (1500, 2, 29, 0));

    let local = CivilDateTime::new(1500, 3, 1, 2, 0, 0.0).unwrap();
    let zone = TimeZone::new(4.0, 0, 0).unwrap();
    let ut = local_to_universal(&local, &zone).unwrap();
    assert_eq!((ut.year, ut.month, ut.day, ut.hour), (1500, 2, 29, 22));
}

/// Month length in the calendar in force on that date.
fn month_length(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if year <= 1582 && year.rem_euclid(4) == 0 => 29,
        2 if year > 1582 && ((year % 4 == 0 && year % 100 != 0) || year % 400 == 0) => 29,
        2 => 28,
        _ => 31,
    }
}

proptest! {
    #[test]
    fn prop_jd_roundtrip(year in -4000i32..4000, month in 1u32..=12, day in 1u32..=31) {
        prop_assume!(day <= month_length(year, month));
        prop_assume!(!(year == 1582 && month == 10 && (5..15).contains(&day)));
        let jd = gregorian_date_to_julian_day(year, month, f64::from(day)).unwrap();
        let back = julian_day_to_gregorian_date(jd).unwrap();
        prop_assert_eq!((back.year, back.month, back.day), (year, month, f64::from(day)));
    }

    #[test]
    fn prop_jd_roundtrip_fractional(year in 1000i32..3000, month in 1u32..=12, day in 1.0..28.999f64) {
        prop_assume!(!(year == 1582 && month == 10 && (5.0..15.0).contains(&day.floor())));
        let jd = gregorian_date_to_julian_day(year, month, day).unwrap();
        let back = julian_day_to_gregorian_date(jd).unwrap();
        prop_assert_eq!((back.year, back.month), (year, month));
        prop_assert!((back.day - day).abs() < 1e-6);
    }
}

#[cfg(feature = "serde")]
#[test]
fn universal_time_serde_roundtrip() {
    let ut = UniversalTime::new(1980, 4, 22, 14, 36, 51.67).unwrap();
    let json = serde_json::to_string(&ut).unwrap();
    let back: UniversalTime = serde_json::from_str(&json).unwrap();
    assert_eq!(ut, back);
}
