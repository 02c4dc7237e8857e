//! Coordinate transforms between celestial reference frames.
//!
//! This crate provides:
//! - Hour angle/declination ↔ horizon (altitude/azimuth)
//! - Right ascension ↔ hour angle through local sidereal time
//! - Ecliptic ↔ equatorial rotation by the obliquity of the ecliptic
//! - Mean obliquity of the ecliptic
//! - Angular separation of two equatorial directions
//!
//! All angles are decimal degrees except right ascension, hour angle and
//! sidereal time, which are decimal hours.

pub mod coords;
pub mod ecliptic;
pub mod error;
pub mod horizon;
pub mod hour_angle;
pub mod obliquity;
pub mod separation;

pub use coords::{EclipticCoord, EquatorialCoord, HorizonCoord, HourAngleCoord};
pub use ecliptic::{ecliptic_to_equatorial, equatorial_to_ecliptic};
pub use error::FrameError;
pub use horizon::{equatorial_to_horizon, horizon_to_equatorial, hour_angle_to_horizon};
pub use hour_angle::{
    hour_angle_to_right_ascension, local_sidereal_time_at, right_ascension_to_hour_angle,
};
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use separation::angular_separation;
