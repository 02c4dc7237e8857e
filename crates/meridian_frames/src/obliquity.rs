//! Mean obliquity of the ecliptic.

use meridian_time::julian_centuries_since_j2000;

/// Mean obliquity of the ecliptic at J2000.0 in degrees.
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_292;

/// Mean obliquity of the ecliptic (degrees) at Julian Day `jd`.
///
/// Cubic in Julian centuries T since J2000.0:
/// `ε = 23.439292° − (46.815 T + 0.0006 T² − 0.00181 T³)″`.
pub fn mean_obliquity_deg(jd: f64) -> f64 {
    let t = julian_centuries_since_j2000(jd);
    let arcsec = t * (46.815 + t * (0.0006 - t * 0.00181));
    OBLIQUITY_J2000_DEG - arcsec / 3600.0
}
