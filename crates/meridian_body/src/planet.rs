//! Geocentric planet positions from mean orbital elements.
//!
//! For the target and for Earth: mean anomaly, equation of centre, true
//! heliocentric longitude and radius. The target's orbit is then projected
//! onto the ecliptic, and the projected point is seen from Earth with the
//! elongation construction for inferior planets or the parallax
//! construction for superior ones.

use std::f64::consts::PI;

use meridian_angle::wrap_degrees;
use meridian_frames::{
    EclipticCoord, EquatorialCoord, ecliptic_to_equatorial, mean_obliquity_deg,
};
use meridian_time::{CivilDateTime, TimeError, TimeZone};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::elements::{ElementTable, OrbitalElements, Planet};
use crate::error::BodyError;
use crate::sun::{TROPICAL_YEAR_DAYS, universal_julian_day};

/// Geocentric position of a planet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanetPosition {
    pub planet: Planet,
    /// Geocentric ecliptic longitude and latitude.
    pub ecliptic: EclipticCoord,
    /// Geocentric right ascension and declination.
    pub equatorial: EquatorialCoord,
    /// Sun–planet distance in AU.
    pub heliocentric_radius_au: f64,
    /// Earth–planet distance in AU.
    pub distance_au: f64,
}

/// True heliocentric longitude (degrees) and radius (AU).
struct Heliocentric {
    longitude_deg: f64,
    radius_au: f64,
}

fn heliocentric(el: &OrbitalElements, jd: f64) -> Heliocentric {
    let days = jd - el.epoch_jd;
    let n = wrap_degrees(360.0 / TROPICAL_YEAR_DAYS * days / el.period_years);
    let mean_anomaly = n + el.epoch_longitude_deg - el.perihelion_longitude_deg;
    let longitude = wrap_degrees(
        n + (360.0 / PI) * el.eccentricity * mean_anomaly.to_radians().sin()
            + el.epoch_longitude_deg,
    );
    let true_anomaly = longitude - el.perihelion_longitude_deg;
    let e = el.eccentricity;
    let radius = el.semi_major_axis_au * (1.0 - e * e) / (1.0 + e * true_anomaly.to_radians().cos());
    Heliocentric {
        longitude_deg: longitude,
        radius_au: radius,
    }
}

/// Position of a planet at a Julian Day (UT), using `table` for elements.
pub fn planet_position_at_jd(
    planet: Planet,
    jd: f64,
    table: &ElementTable,
) -> Result<PlanetPosition, BodyError> {
    if planet == Planet::Earth {
        return Err(BodyError::ObserverBody);
    }
    if !jd.is_finite() {
        return Err(TimeError::NonFinite.into());
    }
    let el = table.get(planet);
    let target = heliocentric(el, jd);
    let earth = heliocentric(table.get(Planet::Earth), jd);
    log::trace!(
        "{planet} heliocentric: l={:.6} r={:.6}; earth L={:.6} R={:.6}",
        target.longitude_deg,
        target.radius_au,
        earth.longitude_deg,
        earth.radius_au
    );

    // Project onto the ecliptic.
    let from_node = (target.longitude_deg - el.ascending_node_deg).to_radians();
    let incl = el.inclination_deg.to_radians();
    let psi = (from_node.sin() * incl.sin()).asin();
    let y = from_node.sin() * incl.cos();
    let x = from_node.cos();
    let l_proj = wrap_degrees(y.atan2(x).to_degrees() + el.ascending_node_deg);
    let r_proj = target.radius_au * psi.cos();
    let height = target.radius_au * psi.sin();

    let big_l = earth.longitude_deg;
    let big_r = earth.radius_au;
    let longitude = if planet.is_inferior() {
        let d = (big_l - l_proj).to_radians();
        let a = (r_proj * d.sin()).atan2(big_r - r_proj * d.cos());
        wrap_degrees(180.0 + big_l + a.to_degrees())
    } else {
        let d = (l_proj - big_l).to_radians();
        let a = (big_r * d.sin()).atan2(r_proj - big_r * d.cos());
        wrap_degrees(a.to_degrees() + l_proj)
    };

    // Latitude from the height above the ecliptic over the projected
    // Earth–planet distance; equal to the tan β construction but finite at
    // conjunction and opposition.
    let sep = (l_proj - big_l).to_radians();
    let projected_distance =
        (big_r * big_r + r_proj * r_proj - 2.0 * big_r * r_proj * sep.cos()).sqrt();
    let latitude = height.atan2(projected_distance).to_degrees();

    let distance = (big_r * big_r + target.radius_au * target.radius_au
        - 2.0 * big_r * target.radius_au * (target.longitude_deg - big_l).to_radians().cos())
    .sqrt();

    let ecliptic = EclipticCoord::new(longitude, latitude);
    let equatorial = ecliptic_to_equatorial(&ecliptic, mean_obliquity_deg(jd))?;
    log::trace!(
        "{planet} geocentric: lambda={longitude:.6} beta={latitude:.6} ra={:.6}h dec={:.6}",
        equatorial.right_ascension_hours,
        equatorial.declination_deg
    );

    Ok(PlanetPosition {
        planet,
        ecliptic,
        equatorial,
        heliocentric_radius_au: target.radius_au,
        distance_au: distance,
    })
}

/// Position of a planet at a local civil instant.
pub fn planet_position(
    planet: Planet,
    local: &CivilDateTime,
    zone: &TimeZone,
    table: &ElementTable,
) -> Result<PlanetPosition, BodyError> {
    planet_position_at_jd(planet, universal_julian_day(local, zone)?, table)
}

/// Position of a planet named case-sensitively, e.g. `"Saturn"`.
pub fn planet_position_by_name(
    name: &str,
    local: &CivilDateTime,
    zone: &TimeZone,
    table: &ElementTable,
) -> Result<PlanetPosition, BodyError> {
    planet_position(Planet::from_name(name)?, local, zone, table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{ALL_PLANETS, EPOCH_2010_ELEMENTS};

    #[test]
    fn earth_is_rejected() {
        assert_eq!(
            planet_position_at_jd(Planet::Earth, 2_455_196.5, &EPOCH_2010_ELEMENTS),
            Err(BodyError::ObserverBody)
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let local = CivilDateTime::new(2003, 11, 22, 0, 0, 0.0).unwrap();
        let err =
            planet_position_by_name("Vulcan", &local, &TimeZone::UTC, &EPOCH_2010_ELEMENTS)
                .unwrap_err();
        assert_eq!(err, BodyError::UnknownBody("Vulcan".into()));
    }

    #[test]
    fn heliocentric_radius_within_orbit() {
        for planet in ALL_PLANETS {
            let el = EPOCH_2010_ELEMENTS.get(planet);
            for k in 0..20 {
                let h = heliocentric(el, 2_450_000.5 + 500.0 * f64::from(k));
                let a = el.semi_major_axis_au;
                let e = el.eccentricity;
                assert!(h.radius_au >= a * (1.0 - e) - 1e-12, "{planet}");
                assert!(h.radius_au <= a * (1.0 + e) + 1e-12, "{planet}");
                assert!((0.0..360.0).contains(&h.longitude_deg));
            }
        }
    }

    #[test]
    fn inferior_planets_stay_near_sun() {
        // Greatest elongation: Mercury ~28°, Venus ~47°
        for k in 0..40 {
            let jd = 2_455_196.5 + 37.0 * f64::from(k);
            let sun = crate::sun::sun_position_at_jd(jd).unwrap();
            for (planet, max_elong) in [(Planet::Mercury, 29.0), (Planet::Venus, 48.0)] {
                let pos = planet_position_at_jd(planet, jd, &EPOCH_2010_ELEMENTS).unwrap();
                let elong = (pos.ecliptic.longitude_deg - sun.ecliptic_longitude_deg + 540.0)
                    .rem_euclid(360.0)
                    - 180.0;
                assert!(elong.abs() < max_elong, "{planet} elongation {elong} at {jd}");
            }
        }
    }

    #[test]
    fn distance_bounds() {
        let jd = 2_452_965.5;
        for planet in ALL_PLANETS.into_iter().filter(|&p| p != Planet::Earth) {
            let pos = planet_position_at_jd(planet, jd, &EPOCH_2010_ELEMENTS).unwrap();
            let r = pos.heliocentric_radius_au;
            // Earth's radius stays within [0.98, 1.02] AU
            assert!(pos.distance_au >= (r - 1.02).max(0.98 - r) - 1e-9, "{planet}");
            assert!(pos.distance_au <= r + 1.02, "{planet}");
        }
    }
}
