//! FILENAME: scatter-engine/src/ellipse.rs
//! Distribution ellipses for 2D sample clouds.
//!
//! PURPOSE: Given one category's points, fit an ellipse oriented along the
//! dominant spread direction. The 2x2 eigenproblem is solved analytically
//! from trace and determinant, no matrix library involved.
//!
//! The axis multiplier is a fixed visual-coverage constant, NOT a
//! statistically calibrated confidence level.

use serde::{Deserialize, Serialize};

/// Semi-axis multiplier applied to sqrt(eigenvalue). Tuned so the outline
/// hugs the bulk of a typical sample cloud; do not read a confidence
/// percentage into it.
pub const AXIS_SCALE: f64 = 1.5;

/// Fewer samples than this produce no ellipse.
pub const MIN_POINTS: usize = 3;

/// One 2D sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Center, semi-axes, and rotation of a fitted ellipse. `rx` runs along
/// the dominant spread direction, `angle` is its rotation in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub angle: f64,
}

/// Fits an ellipse to a sample cloud, or `None` for fewer than three
/// points (insufficient signal, not an error).
///
/// Uses population covariance (divide by n, no Bessel correction) and the
/// analytic 2x2 eigendecomposition: eigenvalues from trace/determinant,
/// orientation from the dominant eigenvector. Discriminant and eigenvalues
/// are clamped at zero so near-degenerate clouds cannot produce NaN axes.
pub fn confidence_ellipse(points: &[Point]) -> Option<Ellipse> {
    if points.len() < MIN_POINTS {
        return None;
    }
    let n = points.len() as f64;

    let mut mx = 0.0;
    let mut my = 0.0;
    for p in points {
        mx += p.x;
        my += p.y;
    }
    mx /= n;
    my /= n;

    let mut cxx = 0.0;
    let mut cxy = 0.0;
    let mut cyy = 0.0;
    for p in points {
        let dx = p.x - mx;
        let dy = p.y - my;
        cxx += dx * dx;
        cxy += dx * dy;
        cyy += dy * dy;
    }
    cxx /= n;
    cxy /= n;
    cyy /= n;

    let trace = cxx + cyy;
    let det = cxx * cyy - cxy * cxy;
    let disc = (trace * trace / 4.0 - det).max(0.0).sqrt();
    let l1 = trace / 2.0 + disc;
    let l2 = trace / 2.0 - disc;

    // Dominant eigenvector direction, without a general eigenvector solve.
    let angle = if cxy != 0.0 {
        (l1 - cxx).atan2(cxy)
    } else if cxx < cyy {
        std::f64::consts::FRAC_PI_2
    } else {
        0.0
    };

    Some(Ellipse {
        cx: mx,
        cy: my,
        rx: AXIS_SCALE * l1.max(0.0).sqrt(),
        ry: AXIS_SCALE * l2.max(0.0).sqrt(),
        angle,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() < 1e-9, "{a} != {b}");
    }

    #[test]
    fn test_too_few_points_yields_none() {
        assert!(confidence_ellipse(&[]).is_none());
        assert!(confidence_ellipse(&[Point::new(1.0, 2.0)]).is_none());
        assert!(confidence_ellipse(&[Point::new(1.0, 2.0), Point::new(3.0, 4.0)]).is_none());
    }

    #[test]
    fn test_symmetric_cloud_has_equal_axes() {
        let points = [
            Point::new(1.0, 0.0),
            Point::new(-1.0, 0.0),
            Point::new(0.0, 1.0),
            Point::new(0.0, -1.0),
        ];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.cx, 0.0);
        assert_close(e.cy, 0.0);
        assert_close(e.rx, e.ry);
        assert_close(e.rx, AXIS_SCALE * 0.5_f64.sqrt());
        assert_close(e.angle, 0.0);
    }

    #[test]
    fn test_vertical_cloud_rotates_quarter_turn() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(0.0, 2.0),
            Point::new(0.0, 4.0),
        ];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.cy, 2.0);
        assert_close(e.angle, FRAC_PI_2);
        // All spread lies on one axis; the minor axis collapses.
        assert_close(e.ry, 0.0);
        assert_close(e.rx, AXIS_SCALE * (8.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn test_horizontal_cloud_keeps_angle_zero() {
        let points = [
            Point::new(0.0, 0.0),
            Point::new(2.0, 0.0),
            Point::new(4.0, 0.0),
        ];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.angle, 0.0);
        assert_close(e.ry, 0.0);
    }

    #[test]
    fn test_diagonal_cloud_rotates_to_diagonal() {
        let points = [
            Point::new(-2.0, -2.0),
            Point::new(0.0, 0.0),
            Point::new(2.0, 2.0),
        ];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.angle, FRAC_PI_4);
        assert_close(e.ry, 0.0);
    }

    #[test]
    fn test_population_variance_divides_by_n() {
        // Bessel-corrected variance would be 1.0 here; population is 2/3.
        let points = [
            Point::new(-1.0, 0.0),
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
        ];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.rx, AXIS_SCALE * (2.0_f64 / 3.0).sqrt());
    }

    #[test]
    fn test_identical_points_collapse_without_nan() {
        let points = [Point::new(5.0, 5.0); 4];
        let e = confidence_ellipse(&points).unwrap();
        assert_close(e.rx, 0.0);
        assert_close(e.ry, 0.0);
        assert!(e.angle.is_finite());
    }
}
