//! Types for sunrise/sunset and twilight calculations.
//!
//! Provides geographic location, event types, configuration, and result types
//! used by the rise/set computation module.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use meridian_time::CalendarDate;

use crate::error::BodyError;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeoLocation {
    /// Latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    pub fn validate(&self) -> Result<(), BodyError> {
        if !self.latitude_deg.is_finite() || !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(BodyError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(BodyError::InvalidLocation("longitude outside [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(BodyError::InvalidLocation("altitude is not finite"));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

/// Rise/set event types, including twilight variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSetEvent {
    /// Upper limb of the Sun appears at the horizon.
    Sunrise,
    /// Upper limb disappears below the horizon.
    Sunset,
    /// Sun centre at -6 deg, morning.
    CivilDawn,
    /// Sun centre at -6 deg, evening.
    CivilDusk,
    /// Sun centre at -12 deg, morning.
    NauticalDawn,
    /// Sun centre at -12 deg, evening.
    NauticalDusk,
    /// Sun centre at -18 deg, morning.
    AstronomicalDawn,
    /// Sun centre at -18 deg, evening.
    AstronomicalDusk,
}

/// All eight events in chronological order through a normal day.
pub const ALL_EVENTS: [RiseSetEvent; 8] = [
    RiseSetEvent::AstronomicalDawn,
    RiseSetEvent::NauticalDawn,
    RiseSetEvent::CivilDawn,
    RiseSetEvent::Sunrise,
    RiseSetEvent::Sunset,
    RiseSetEvent::CivilDusk,
    RiseSetEvent::NauticalDusk,
    RiseSetEvent::AstronomicalDusk,
];

impl RiseSetEvent {
    /// Whether this is a rising (morning) event.
    pub fn is_rising(self) -> bool {
        matches!(
            self,
            Self::Sunrise | Self::CivilDawn | Self::NauticalDawn | Self::AstronomicalDawn
        )
    }

    /// Twilight band of this event, `None` for sunrise and sunset.
    pub fn twilight(self) -> Option<TwilightKind> {
        match self {
            Self::Sunrise | Self::Sunset => None,
            Self::CivilDawn | Self::CivilDusk => Some(TwilightKind::Civil),
            Self::NauticalDawn | Self::NauticalDusk => Some(TwilightKind::Nautical),
            Self::AstronomicalDawn | Self::AstronomicalDusk => Some(TwilightKind::Astronomical),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Sunrise => "sunrise",
            Self::Sunset => "sunset",
            Self::CivilDawn => "civil dawn",
            Self::CivilDusk => "civil dusk",
            Self::NauticalDawn => "nautical dawn",
            Self::NauticalDusk => "nautical dusk",
            Self::AstronomicalDawn => "astronomical dawn",
            Self::AstronomicalDusk => "astronomical dusk",
        }
    }
}

/// Twilight band, defined by the depression of the Sun's centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TwilightKind {
    Civil,
    Nautical,
    Astronomical,
}

impl TwilightKind {
    /// Depression of the Sun's centre below the horizon, degrees.
    pub fn depression_deg(self) -> f64 {
        match self {
            Self::Civil => 6.0,
            Self::Nautical => 12.0,
            Self::Astronomical => 18.0,
        }
    }

    /// `(dawn, dusk)` events of this band.
    pub fn events(self) -> (RiseSetEvent, RiseSetEvent) {
        match self {
            Self::Civil => (RiseSetEvent::CivilDawn, RiseSetEvent::CivilDusk),
            Self::Nautical => (RiseSetEvent::NauticalDawn, RiseSetEvent::NauticalDusk),
            Self::Astronomical => (RiseSetEvent::AstronomicalDawn, RiseSetEvent::AstronomicalDusk),
        }
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub semidiameter_arcmin: f64,
    /// Whether to apply geometric dip for observer altitude,
    /// `dip ≈ sqrt(2h/R)` radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            semidiameter_arcmin: 16.0,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Total horizon depression for sunrise/sunset in degrees.
    ///
    /// `h0 = (refraction + semidiameter) / 60 + dip_deg`
    pub fn horizon_depression_deg(&self, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin) / 60.0;
        if self.altitude_correction && altitude_m > 0.0 {
            let dip_rad = (2.0 * altitude_m / EARTH_RADIUS_M).sqrt();
            base + dip_rad.to_degrees()
        } else {
            base
        }
    }

    /// Altitude of the Sun's centre (degrees, negative below the horizon)
    /// at which `event` happens.
    pub fn target_altitude_deg(&self, event: RiseSetEvent, altitude_m: f64) -> f64 {
        match event.twilight() {
            Some(kind) => -kind.depression_deg(),
            None => -self.horizon_depression_deg(altitude_m),
        }
    }
}

/// Result of a rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RiseSetResult {
    /// Event occurs at the given times.
    Event {
        event: RiseSetEvent,
        /// Local civil date of the event.
        local_date: CalendarDate,
        /// Local civil time in hours, range [0, 24).
        local_hours: f64,
        /// Greenwich calendar date of the event.
        universal_date: CalendarDate,
        /// Universal Time in hours on `universal_date`, range [0, 24).
        universal_hours: f64,
        /// Azimuth of the Sun at the event, degrees from north through east.
        azimuth_deg: f64,
    },
    /// Sun never reaches the target altitude on this date (polar night).
    NeverRises,
    /// Sun never drops to the target altitude on this date (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    /// Local civil hours of the event, if it happens.
    pub fn local_hours(&self) -> Option<f64> {
        match self {
            Self::Event { local_hours, .. } => Some(*local_hours),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}
