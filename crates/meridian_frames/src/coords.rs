//! Coordinate value types.
//!
//! These are plain views of one direction on the sky; range checks happen at
//! the transform that consumes them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Right ascension and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EquatorialCoord {
    /// Right ascension in hours, range [0, 24).
    pub right_ascension_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
}

impl EquatorialCoord {
    pub fn new(right_ascension_hours: f64, declination_deg: f64) -> Self {
        Self {
            right_ascension_hours,
            declination_deg,
        }
    }
}

/// Local hour angle and declination.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HourAngleCoord {
    /// Hour angle in hours west of the meridian, range [0, 24).
    pub hour_angle_hours: f64,
    /// Declination in degrees, range [-90, 90].
    pub declination_deg: f64,
}

impl HourAngleCoord {
    pub fn new(hour_angle_hours: f64, declination_deg: f64) -> Self {
        Self {
            hour_angle_hours,
            declination_deg,
        }
    }
}

/// Altitude above the horizon and azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HorizonCoord {
    /// Altitude in degrees, range [-90, 90].
    pub altitude_deg: f64,
    /// Azimuth in degrees measured from north through east, range [0, 360).
    pub azimuth_deg: f64,
}

impl HorizonCoord {
    pub fn new(altitude_deg: f64, azimuth_deg: f64) -> Self {
        Self {
            altitude_deg,
            azimuth_deg,
        }
    }
}

/// Ecliptic longitude and latitude.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EclipticCoord {
    /// Longitude in degrees, range [0, 360).
    pub longitude_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub latitude_deg: f64,
}

impl EclipticCoord {
    pub fn new(longitude_deg: f64, latitude_deg: f64) -> Self {
        Self {
            longitude_deg,
            latitude_deg,
        }
    }
}
