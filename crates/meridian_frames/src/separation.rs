//! Angular separation on the celestial sphere.

use meridian_angle::{clamped_asin, hours_to_degrees};

use crate::coords::EquatorialCoord;
use crate::error::{FrameError, check_finite, check_latitude};

/// Great-circle angle (degrees, [0, 180]) between two equatorial directions.
///
/// Uses the haversine form, which keeps precision for close pairs where the
/// cosine formula loses it.
pub fn angular_separation(a: &EquatorialCoord, b: &EquatorialCoord) -> Result<f64, FrameError> {
    for c in [a, b] {
        check_finite(c.right_ascension_hours, "right ascension")?;
        check_latitude(c.declination_deg, "declination")?;
    }
    let d1 = a.declination_deg.to_radians();
    let d2 = b.declination_deg.to_radians();
    let dra = hours_to_degrees(b.right_ascension_hours - a.right_ascension_hours).to_radians();

    let half_dec = ((d2 - d1) / 2.0).sin();
    let half_ra = (dra / 2.0).sin();
    let hav = half_dec * half_dec + d1.cos() * d2.cos() * half_ra * half_ra;
    Ok(2.0 * clamped_asin(hav.sqrt()).to_degrees())
}
