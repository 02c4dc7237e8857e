//! Sun and planet positions from mean orbital elements.
//!
//! This crate provides:
//! - The orbital-element table keyed by [`Planet`]
//! - Sun ecliptic longitude, equatorial position, distance and angular size
//! - The equation of time
//! - Sunrise, sunset and civil/nautical/astronomical twilight
//! - Geocentric planet positions (inferior and superior constructions)
//!
//! Sources: Duffett-Smith & Zwart, _Practical Astronomy with your Calculator
//! or Spreadsheet_ (4th ed.), sections on the Sun, planets and rising and
//! setting. First-order (equation-of-centre) solutions only; no Kepler
//! iteration and no perturbations.

pub mod elements;
pub mod error;
pub mod planet;
pub mod riseset;
pub mod riseset_types;
pub mod sun;

pub use elements::{ALL_PLANETS, EPOCH_2010_ELEMENTS, ElementTable, OrbitalElements, Planet};
pub use error::BodyError;
pub use planet::{PlanetPosition, planet_position, planet_position_at_jd, planet_position_by_name};
pub use riseset::{
    approximate_local_noon_ut, compute_all_events, compute_rise_set, sun_rise_and_set,
    sun_twilight,
};
pub use riseset_types::{
    ALL_EVENTS, GeoLocation, RiseSetConfig, RiseSetEvent, RiseSetResult, TwilightKind,
};
pub use sun::{
    SunDistance, SunPosition, equation_of_time, sun_distance_and_angular_size,
    sun_ecliptic_longitude, sun_position, sun_position_at_jd,
};
