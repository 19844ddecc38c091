// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Authored curves mapped to the display density

use super::curves::{self, Curve};
use crate::settings;
use kurbo::{Affine, BezPath, ParamCurve, Point};

/// An authored curve scaled to a display density.
///
/// The scale is uniform and anchored at the origin, not at the shape's
/// centroid, so all curves of the glyph stay aligned with each other.
#[derive(Debug, Clone)]
pub struct ScaledPath {
    path: BezPath,
    scale: f64,
}

impl ScaledPath {
    /// Build `curve` for a display with `density` pixels per dp
    pub fn new(curve: Curve, density: f64) -> Self {
        let mut path = curves::to_bezpath(curve);
        let reference = settings::geometry::PATH_GEN_DENSITY;

        let scale = if nearly_equal(density, reference, settings::geometry::DENSITY_EPSILON) {
            1.0
        } else {
            let scale = density / reference;
            path.apply_affine(Affine::scale(scale));
            scale
        };

        Self { path, scale }
    }

    /// The scaled geometry
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Factor applied to the authored coordinates
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// First point of the path
    pub fn start(&self) -> Point {
        self.path
            .segments()
            .next()
            .map(|seg| seg.start())
            .unwrap_or(Point::ZERO)
    }

    /// Last point of the path
    pub fn end(&self) -> Point {
        self.path
            .segments()
            .last()
            .map(|seg| seg.end())
            .unwrap_or(Point::ZERO)
    }
}

/// Compare two floats with a relative tolerance.
///
/// Falls back to an absolute comparison near zero, where relative error
/// stops meaning anything.
pub fn nearly_equal(a: f64, b: f64, epsilon: f64) -> bool {
    if a == b {
        // Also covers matching infinities
        return true;
    }

    let diff = (a - b).abs();
    if a == 0.0 || b == 0.0 || diff < f64::MIN_POSITIVE {
        return diff < epsilon * f64::MIN_POSITIVE;
    }

    diff / (a.abs() + b.abs()) < epsilon
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::curves::{BOTTOM, MIDDLE, TOP};
    use kurbo::PathEl;

    fn points(path: &BezPath) -> Vec<Point> {
        path.elements()
            .iter()
            .flat_map(|el| match *el {
                PathEl::MoveTo(p) | PathEl::LineTo(p) => vec![p],
                PathEl::QuadTo(p1, p2) => vec![p1, p2],
                PathEl::CurveTo(p1, p2, p3) => vec![p1, p2, p3],
                PathEl::ClosePath => vec![],
            })
            .collect()
    }

    #[test]
    fn test_reference_density_is_identity() {
        for curve in [TOP.track_a.first, MIDDLE.track_b.second, BOTTOM.track_a.second] {
            let scaled = ScaledPath::new(curve, settings::geometry::PATH_GEN_DENSITY);
            assert_eq!(scaled.scale(), 1.0);

            let authored = points(&curves::to_bezpath(curve));
            for (got, want) in points(scaled.path()).iter().zip(&authored) {
                assert!((got.x - want.x).abs() < 1e-5);
                assert!((got.y - want.y).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_near_reference_density_skips_scaling() {
        let scaled = ScaledPath::new(TOP.track_b.first, 3.0 + 1e-7);
        assert_eq!(scaled.scale(), 1.0);
    }

    #[test]
    fn test_double_density_doubles_coordinates() {
        let reference = settings::geometry::PATH_GEN_DENSITY;
        for curve in [TOP.track_a.second, MIDDLE.track_a.first, BOTTOM.track_b.first] {
            let scaled = ScaledPath::new(curve, reference * 2.0);
            assert!((scaled.scale() - 2.0).abs() < 1e-12);

            let authored = points(&curves::to_bezpath(curve));
            for (got, want) in points(scaled.path()).iter().zip(&authored) {
                assert!((got.x - want.x * 2.0).abs() < 1e-9);
                assert!((got.y - want.y * 2.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_start_and_end() {
        let scaled = ScaledPath::new(MIDDLE.track_a.first, 1.5);
        assert!(scaled.start().distance(Point::new(2.521, 17.5)) < 1e-9);
        assert!(scaled.end().distance(Point::new(17.5, 3.3955)) < 1e-9);
    }

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(3.0, 3.0, 1e-5));
        assert!(nearly_equal(f64::INFINITY, f64::INFINITY, 1e-5));
        assert!(nearly_equal(3.0, 3.000001, 1e-5));
        assert!(!nearly_equal(3.0, 3.1, 1e-5));
        assert!(!nearly_equal(0.0, 1e-3, 1e-5));
        assert!(!nearly_equal(f64::NAN, f64::NAN, 1e-5));
    }
}
