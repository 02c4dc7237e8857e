//! Ecliptic ↔ equatorial rotation about the vernal equinox axis.

use meridian_angle::{clamped_asin, degrees_to_hours, hours_to_degrees, wrap_degrees};

use crate::coords::{EclipticCoord, EquatorialCoord};
use crate::error::{FrameError, check_finite, check_latitude};

/// Rotate ecliptic longitude/latitude into right ascension/declination.
///
/// `obliquity_deg` is usually [`mean_obliquity_deg`](crate::mean_obliquity_deg)
/// for the date. Right ascension comes from `atan2`, so every quadrant is
/// resolved without a sign fix-up.
pub fn ecliptic_to_equatorial(
    coord: &EclipticCoord,
    obliquity_deg: f64,
) -> Result<EquatorialCoord, FrameError> {
    check_finite(coord.longitude_deg, "ecliptic longitude")?;
    check_latitude(coord.latitude_deg, "ecliptic latitude")?;
    check_finite(obliquity_deg, "obliquity")?;

    let (sin_l, cos_l) = coord.longitude_deg.to_radians().sin_cos();
    let (sin_b, cos_b) = coord.latitude_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let dec = clamped_asin(sin_b * cos_e + cos_b * sin_e * sin_l);
    // tan(β) scaled through by cos(β) so β = ±90° stays finite
    let y = sin_l * cos_b * cos_e - sin_b * sin_e;
    let x = cos_l * cos_b;
    let ra_deg = wrap_degrees(y.atan2(x).to_degrees());

    Ok(EquatorialCoord {
        right_ascension_hours: degrees_to_hours(ra_deg),
        declination_deg: dec.to_degrees(),
    })
}

/// Rotate right ascension/declination into ecliptic longitude/latitude.
pub fn equatorial_to_ecliptic(
    coord: &EquatorialCoord,
    obliquity_deg: f64,
) -> Result<EclipticCoord, FrameError> {
    check_finite(coord.right_ascension_hours, "right ascension")?;
    check_latitude(coord.declination_deg, "declination")?;
    check_finite(obliquity_deg, "obliquity")?;

    let (sin_a, cos_a) = hours_to_degrees(coord.right_ascension_hours)
        .to_radians()
        .sin_cos();
    let (sin_d, cos_d) = coord.declination_deg.to_radians().sin_cos();
    let (sin_e, cos_e) = obliquity_deg.to_radians().sin_cos();

    let lat = clamped_asin(sin_d * cos_e - cos_d * sin_e * sin_a);
    let y = sin_a * cos_d * cos_e + sin_d * sin_e;
    let x = cos_a * cos_d;

    Ok(EclipticCoord {
        longitude_deg: wrap_degrees(y.atan2(x).to_degrees()),
        latitude_deg: lat.to_degrees(),
    })
}
