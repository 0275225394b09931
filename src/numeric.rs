//! Degree-based trigonometry and small array helpers shared by the
//! trajectory and distance modules.

/// Sine of an angle given in degrees.
#[inline]
pub fn sind(deg: f64) -> f64 {
    deg.to_radians().sin()
}

/// Cosine of an angle given in degrees.
#[inline]
pub fn cosd(deg: f64) -> f64 {
    deg.to_radians().cos()
}

/// Tangent of an angle given in degrees.
#[inline]
pub fn tand(deg: f64) -> f64 {
    deg.to_radians().tan()
}

/// `n` evenly spaced samples over the closed interval `[start, stop]`.
///
/// Sample `i` is `start + i * step`, and the last sample is pinned to `stop`
/// exactly so leg endpoints join without rounding drift.
/// Returns `[start]` for `n == 1` and an empty vector for `n == 0`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut out: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            out[n - 1] = stop;
            out
        }
    }
}

/// Number of samples strictly below `threshold`.
pub fn count_below(values: &[f64], threshold: f64) -> usize {
    values.iter().filter(|&&v| v < threshold).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_trig() {
        assert!((sind(30.0) - 0.5).abs() < 1e-12);
        assert!((cosd(60.0) - 0.5).abs() < 1e-12);
        assert!((tand(45.0) - 1.0).abs() < 1e-12);
        assert!(sind(0.0).abs() < 1e-15);
    }

    #[test]
    fn test_linspace_endpoints_and_spacing() {
        let v = linspace(-20.0, 980.0, 50);
        assert_eq!(v.len(), 50);
        assert_eq!(v[0], -20.0);
        assert_eq!(v[49], 980.0);
        let step = 1000.0 / 49.0;
        for w in v.windows(2) {
            assert!((w[1] - w[0] - step).abs() < 1e-9);
        }
    }

    #[test]
    fn test_linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(3.0, 7.0, 2), vec![3.0, 7.0]);
    }

    #[test]
    fn test_linspace_descending() {
        let v = linspace(10.0, 0.0, 3);
        assert_eq!(v, vec![10.0, 5.0, 0.0]);
    }

    #[test]
    fn test_count_below_is_strict() {
        let v = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(count_below(&v, 3.0), 2);
        assert_eq!(count_below(&v, 0.0), 0);
        assert_eq!(count_below(&v, 10.0), 4);
    }
}
