//! Sunrise, sunset and twilight at known locations.
//!
//! Pure-math tests (no data files needed).

use meridian_body::{
    GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, TwilightKind, compute_all_events,
    compute_rise_set, sun_rise_and_set, sun_twilight,
};
use meridian_time::{CalendarDate, TimeZone};

fn hms(h: f64, m: f64, s: f64) -> f64 {
    h + m / 60.0 + s / 3600.0
}

const TWO_SECONDS: f64 = 2.0 / 3600.0;

fn expect_event(result: RiseSetResult, local: f64, azimuth: f64) {
    match result {
        RiseSetResult::Event {
            local_hours,
            azimuth_deg,
            ..
        } => {
            assert!(
                (local_hours - local).abs() < TWO_SECONDS,
                "local {local_hours} vs {local}"
            );
            assert!((azimuth_deg - azimuth).abs() < 0.01, "azimuth {azimuth_deg} vs {azimuth}");
        }
        other => panic!("expected an event, got {other:?}"),
    }
}

fn boston() -> (CalendarDate, GeoLocation, TimeZone) {
    (
        CalendarDate::new(1986, 3, 10).unwrap(),
        GeoLocation::new(42.37, -71.05, 0.0),
        TimeZone::new(-5.0, 0, 0).unwrap(),
    )
}

#[test]
fn boston_sunrise_and_sunset() {
    let (date, loc, zone) = boston();
    let (rise, set) = sun_rise_and_set(&date, &loc, &zone, &RiseSetConfig::default()).unwrap();
    expect_event(rise, hms(6.0, 5.0, 5.96), 94.832);
    expect_event(set, hms(17.0, 44.0, 31.15), 265.426);

    if let RiseSetResult::Event {
        universal_hours,
        local_hours,
        local_date,
        universal_date,
        event,
        ..
    } = rise
    {
        assert_eq!(event, RiseSetEvent::Sunrise);
        assert_eq!((local_date, universal_date), (date, date));
        assert!((universal_hours - (local_hours + 5.0)).abs() < 1e-9);
    }
}

#[test]
fn boston_astronomical_twilight() {
    let (date, loc, zone) = boston();
    let (dawn, dusk) = sun_twilight(&date, &loc, &zone, TwilightKind::Astronomical).unwrap();
    expect_event(dawn, hms(4.0, 31.0, 50.0), 78.858);
    expect_event(dusk, hms(19.0, 18.0, 0.18), 281.492);

    // Dusk falls after Greenwich midnight
    if let RiseSetResult::Event {
        local_date,
        universal_date,
        universal_hours,
        ..
    } = dusk
    {
        assert_eq!(local_date, date);
        assert_eq!(universal_date, CalendarDate::new(1986, 3, 11).unwrap());
        assert!((universal_hours - hms(0.0, 18.0, 0.18)).abs() < TWO_SECONDS);
    }
}

#[test]
fn sydney_events_stay_on_the_local_date() {
    // Zone +10: sunrise happens before Greenwich midnight of the local date
    let date = CalendarDate::new(2024, 3, 20).unwrap();
    let loc = GeoLocation::new(-33.87, 151.21, 0.0);
    let zone = TimeZone::new(10.0, 0, 0).unwrap();
    let (rise, set) = sun_rise_and_set(&date, &loc, &zone, &RiseSetConfig::default()).unwrap();
    expect_event(rise, hms(5.0, 58.0, 20.14), 90.701);
    expect_event(set, hms(18.0, 6.0, 18.55), 269.540);

    match rise {
        RiseSetResult::Event {
            local_date,
            universal_date,
            universal_hours,
            ..
        } => {
            assert_eq!(local_date, date);
            assert_eq!(universal_date, CalendarDate::new(2024, 3, 19).unwrap());
            assert!((universal_hours - hms(19.0, 58.0, 20.14)).abs() < TWO_SECONDS);
        }
        other => panic!("expected an event, got {other:?}"),
    }
    match set {
        RiseSetResult::Event {
            local_date,
            universal_date,
            ..
        } => {
            assert_eq!(local_date, date);
            assert_eq!(universal_date, date);
        }
        other => panic!("expected an event, got {other:?}"),
    }
}

#[test]
fn equator_at_equinox() {
    let date = CalendarDate::new(2024, 3, 20).unwrap();
    let loc = GeoLocation::new(0.0, 0.0, 0.0);
    let (rise, set) =
        sun_rise_and_set(&date, &loc, &TimeZone::UTC, &RiseSetConfig::default()).unwrap();
    expect_event(rise, hms(6.0, 4.0, 2.89), 89.951);
    expect_event(set, hms(18.0, 10.0, 33.97), 270.249);
}

#[test]
fn polar_night_and_midnight_sun() {
    let loc = GeoLocation::new(70.0, 19.0, 0.0);
    let zone = TimeZone::new(1.0, 0, 0).unwrap();
    let config = RiseSetConfig::default();

    let winter = CalendarDate::new(2023, 12, 21).unwrap();
    let rise = compute_rise_set(&winter, &loc, &zone, RiseSetEvent::Sunrise, &config).unwrap();
    assert_eq!(rise, RiseSetResult::NeverRises);

    let summer = CalendarDate::new(2023, 6, 21).unwrap();
    let set = compute_rise_set(&summer, &loc, &zone, RiseSetEvent::Sunset, &config).unwrap();
    assert_eq!(set, RiseSetResult::NeverSets);
}

#[test]
fn summer_night_without_astronomical_darkness() {
    // 55°N in late June: the Sun never sinks 18° below the horizon
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let loc = GeoLocation::new(55.0, 0.0, 0.0);
    let events = compute_all_events(&date, &loc, &TimeZone::UTC, &RiseSetConfig::default()).unwrap();
    assert_eq!(events[0], RiseSetResult::NeverSets);
    assert_eq!(events[7], RiseSetResult::NeverSets);
    assert!(events[3].local_hours().is_some());
    assert!(events[4].local_hours().is_some());
}

#[test]
fn altitude_dip_widens_the_day() {
    let (date, _, zone) = boston();
    let sea = GeoLocation::new(42.37, -71.05, 0.0);
    let peak = GeoLocation::new(42.37, -71.05, 2000.0);
    let config = RiseSetConfig::default();
    let (rise_sea, set_sea) = sun_rise_and_set(&date, &sea, &zone, &config).unwrap();
    let (rise_peak, set_peak) = sun_rise_and_set(&date, &peak, &zone, &config).unwrap();
    assert!(rise_peak.local_hours().unwrap() < rise_sea.local_hours().unwrap());
    assert!(set_peak.local_hours().unwrap() > set_sea.local_hours().unwrap());
}
