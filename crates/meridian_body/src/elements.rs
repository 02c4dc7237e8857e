//! Planets and their mean orbital elements.
//!
//! The built-in table holds elements for the epoch 2010.0 (JD 2455196.5),
//! from Duffett-Smith & Zwart, _Practical Astronomy with your Calculator or
//! Spreadsheet_ (4th ed.), Table 8. Lookups by enum are total; lookups by
//! name are case-sensitive and fail with [`BodyError::UnknownBody`].

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use meridian_time::EPOCH_2010_JD;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::BodyError;

/// The eight major planets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Planet {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

/// All planets in order of distance from the Sun.
pub const ALL_PLANETS: [Planet; 8] = [
    Planet::Mercury,
    Planet::Venus,
    Planet::Earth,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::Uranus,
    Planet::Neptune,
];

impl Planet {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
        }
    }

    /// 0-based index into [`ALL_PLANETS`].
    pub const fn index(self) -> usize {
        match self {
            Self::Mercury => 0,
            Self::Venus => 1,
            Self::Earth => 2,
            Self::Mars => 3,
            Self::Jupiter => 4,
            Self::Saturn => 5,
            Self::Uranus => 6,
            Self::Neptune => 7,
        }
    }

    /// Whether the orbit lies inside Earth's (Mercury, Venus).
    pub const fn is_inferior(self) -> bool {
        matches!(self, Self::Mercury | Self::Venus)
    }

    /// Resolve a case-sensitive planet name such as `"Jupiter"`.
    pub fn from_name(name: &str) -> Result<Self, BodyError> {
        ALL_PLANETS
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| {
                log::debug!("no planet named {name:?}");
                BodyError::UnknownBody(name.to_string())
            })
    }
}

impl Display for Planet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Planet {
    type Err = BodyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

/// Mean orbital elements of one planet at a reference epoch.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OrbitalElements {
    /// Orbital period in tropical years.
    pub period_years: f64,
    /// Mean longitude at the epoch, degrees.
    pub epoch_longitude_deg: f64,
    /// Longitude of perihelion, degrees.
    pub perihelion_longitude_deg: f64,
    pub eccentricity: f64,
    /// Semi-major axis in AU.
    pub semi_major_axis_au: f64,
    /// Inclination to the ecliptic, degrees.
    pub inclination_deg: f64,
    /// Longitude of the ascending node, degrees.
    pub ascending_node_deg: f64,
    /// Julian Day of the epoch the longitudes refer to.
    pub epoch_jd: f64,
}

impl OrbitalElements {
    /// Check that every element is finite and physically meaningful
    /// (bound elliptical orbit, positive period and axis).
    pub fn validate(&self) -> Result<(), BodyError> {
        let fields = [
            self.period_years,
            self.epoch_longitude_deg,
            self.perihelion_longitude_deg,
            self.eccentricity,
            self.semi_major_axis_au,
            self.inclination_deg,
            self.ascending_node_deg,
            self.epoch_jd,
        ];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(BodyError::InvalidElements("element is not finite"));
        }
        if self.period_years <= 0.0 {
            return Err(BodyError::InvalidElements("period must be positive"));
        }
        if !(0.0..1.0).contains(&self.eccentricity) {
            return Err(BodyError::InvalidElements("eccentricity outside [0, 1)"));
        }
        if self.semi_major_axis_au <= 0.0 {
            return Err(BodyError::InvalidElements("semi-major axis must be positive"));
        }
        if !(0.0..=180.0).contains(&self.inclination_deg) {
            return Err(BodyError::InvalidElements("inclination outside [0, 180]"));
        }
        Ok(())
    }
}

const fn epoch_2010(
    period_years: f64,
    epoch_longitude_deg: f64,
    perihelion_longitude_deg: f64,
    eccentricity: f64,
    semi_major_axis_au: f64,
    inclination_deg: f64,
    ascending_node_deg: f64,
) -> OrbitalElements {
    OrbitalElements {
        period_years,
        epoch_longitude_deg,
        perihelion_longitude_deg,
        eccentricity,
        semi_major_axis_au,
        inclination_deg,
        ascending_node_deg,
        epoch_jd: EPOCH_2010_JD,
    }
}

/// Orbital elements for all eight planets, indexed by [`Planet`].
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable {
    entries: [OrbitalElements; 8],
}

/// Built-in elements for the epoch 2010.0.
pub static EPOCH_2010_ELEMENTS: ElementTable = ElementTable {
    entries: [
        epoch_2010(0.24085, 75.5671, 77.612, 0.205627, 0.387098, 7.0051, 48.449),
        epoch_2010(0.615207, 272.30044, 131.54, 0.006812, 0.723329, 3.3947, 76.769),
        epoch_2010(0.999996, 99.556772, 103.2055, 0.016671, 0.999985, 0.0, 0.0),
        epoch_2010(1.880765, 109.09646, 336.217, 0.093348, 1.523689, 1.8497, 49.632),
        epoch_2010(11.857911, 337.917132, 14.6633, 0.048907, 5.20278, 1.3035, 100.595),
        epoch_2010(29.310579, 172.398316, 89.567, 0.053853, 9.51134, 2.4873, 113.752),
        epoch_2010(84.039492, 356.135400, 172.884833, 0.046321, 19.21814, 0.773059, 73.926961),
        epoch_2010(165.845392, 326.895127, 23.07, 0.010483, 30.1985, 1.7673, 131.879),
    ],
};

impl Default for ElementTable {
    fn default() -> Self {
        EPOCH_2010_ELEMENTS.clone()
    }
}

impl ElementTable {
    /// The built-in epoch 2010.0 table.
    pub fn builtin() -> &'static Self {
        &EPOCH_2010_ELEMENTS
    }

    /// Build a table from `(planet, elements)` pairs.
    ///
    /// Every planet must appear; a later duplicate replaces an earlier one.
    pub fn from_entries<I>(entries: I) -> Result<Self, BodyError>
    where
        I: IntoIterator<Item = (Planet, OrbitalElements)>,
    {
        let mut slots: [Option<OrbitalElements>; 8] = [None; 8];
        for (planet, elements) in entries {
            elements.validate()?;
            slots[planet.index()] = Some(elements);
        }
        let mut table = EPOCH_2010_ELEMENTS.clone();
        for planet in ALL_PLANETS {
            table.entries[planet.index()] =
                slots[planet.index()].ok_or(BodyError::MissingElements(planet))?;
        }
        Ok(table)
    }

    pub fn get(&self, planet: Planet) -> &OrbitalElements {
        &self.entries[planet.index()]
    }

    /// Look up elements by case-sensitive planet name.
    pub fn lookup(&self, name: &str) -> Result<&OrbitalElements, BodyError> {
        Ok(self.get(Planet::from_name(name)?))
    }

    /// Iterate `(planet, elements)` in [`ALL_PLANETS`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Planet, &OrbitalElements)> {
        ALL_PLANETS.iter().map(move |&p| (p, self.get(p)))
    }
}
