//! Three-point table interpolation.

use crate::error::GeometryError;

/// `b[0] + (b[1] - b[0]) * (a[1] - a[0]) / (a[2] - a[0])`
///
/// Fails with `DegenerateInterpolation` when the window is flat
/// (`a[2] == a[0]`).
#[allow(clippy::float_cmp)]
pub fn try_interpolate(a: &[f64; 3], b: &[f64; 2]) -> Result<f64, GeometryError> {
    let span = a[2] - a[0];
    if span == 0.0 {
        return Err(GeometryError::DegenerateInterpolation {
            lower: a[0],
            upper: a[2],
        });
    }
    Ok(b[0] + (b[1] - b[0]) * (a[1] - a[0]) / span)
}

/// Like `try_interpolate`, but a flat window yields `b[0]`.
pub fn interpolate(a: &[f64; 3], b: &[f64; 2]) -> f64 {
    try_interpolate(a, b).unwrap_or(b[0])
}
