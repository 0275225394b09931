//! Azimuthal projection of the radial profile onto the horizontal plane.

use crate::config::defaults::METERS_PER_DEGREE;
use crate::numeric::{cosd, tand};
use crate::types::CoordinateSystem;

/// Split each radial offset into easting/northing components along
/// `azimuth` and add them to the wellhead coordinates.
///
/// `tan(az)` loses the quadrant, so offsets are subtracted for
/// `90 < az <= 270` and added otherwise. `az` of exactly 90 or 270 has no
/// tangent; the whole offset then goes to `x`.
pub fn fork_into_xy(
    r: &[f64],
    azimuth: f64,
    surface_x: f64,
    surface_y: f64,
    coordinates: CoordinateSystem,
) -> (Vec<f64>, Vec<f64>) {
    let sign = if azimuth > 90.0 && azimuth <= 270.0 {
        -1.0
    } else {
        1.0
    };

    r.iter()
        .map(|&offset| {
            let (dx, dy) = horizontal_delta(offset, azimuth);
            let (dx, dy) = to_coordinate_units(dx, dy, surface_y, coordinates);
            (surface_x + sign * dx, surface_y + sign * dy)
        })
        .unzip()
}

/// Unsigned `(delta_x, delta_y)` for a radial offset.
#[allow(clippy::float_cmp)]
fn horizontal_delta(r: f64, azimuth: f64) -> (f64, f64) {
    if azimuth == 90.0 || azimuth == 270.0 {
        return (r, 0.0);
    }
    let t = tand(azimuth);
    let delta_y = r / (t * t + 1.0).sqrt();
    (delta_y * t, delta_y)
}

/// Meters to degrees for geodetic wellheads. Longitude degrees shrink with
/// latitude, so `delta_x` also carries `cos(lat)`.
fn to_coordinate_units(
    delta_x: f64,
    delta_y: f64,
    latitude: f64,
    coordinates: CoordinateSystem,
) -> (f64, f64) {
    match coordinates {
        CoordinateSystem::Projected => (delta_x, delta_y),
        CoordinateSystem::Geodetic => (
            delta_x * cosd(latitude) / METERS_PER_DEGREE,
            delta_y / METERS_PER_DEGREE,
        ),
    }
}
