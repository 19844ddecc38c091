// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! One bar of the glyph

use super::paint::StrokePaint;
use crate::path::JoinedCurvePair;
use crate::settings;
use crate::surface::Surface;
use kurbo::{Line, Point};

/// A bar drawn as the straight segment between two tracks.
///
/// Both tracks are sampled at the same progress; the bar's left end rides
/// `path_a` and its right end rides `path_b`.
#[derive(Debug, Clone)]
pub struct BridgingLine {
    path_a: JoinedCurvePair,
    path_b: JoinedCurvePair,
}

impl BridgingLine {
    pub fn new(path_a: JoinedCurvePair, path_b: JoinedCurvePair) -> Self {
        Self { path_a, path_b }
    }

    /// Raw endpoints at `progress`, before any cap correction
    pub fn endpoints(&self, progress: f64) -> (Point, Point) {
        (self.path_a.sample_at(progress), self.path_b.sample_at(progress))
    }

    /// The segment to stroke at `progress`.
    ///
    /// `inset` is half the stroke width when round caps are in use.
    pub fn segment(&self, progress: f64, inset: Option<f64>) -> Line {
        let (a, b) = self.endpoints(progress);
        let (a, b) = match inset {
            Some(half_width) => inset_for_round_caps(a, b, half_width),
            None => (a, b),
        };
        Line::new(a, b)
    }

    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        progress: f64,
        inset: Option<f64>,
        paint: &StrokePaint,
    ) {
        surface.draw_line(self.segment(progress, inset), paint);
    }

    pub fn path_a(&self) -> &JoinedCurvePair {
        &self.path_a
    }

    pub fn path_b(&self) -> &JoinedCurvePair {
        &self.path_b
    }
}

/// Pull both ends in by `half_width` along the segment.
///
/// A round cap extends past each endpoint by half the stroke width; this
/// keeps the visible bar at the authored length. Coincident points are
/// returned unchanged.
pub fn inset_for_round_caps(a: Point, b: Point, half_width: f64) -> (Point, Point) {
    let v = b - a;
    let magnitude = v.hypot();
    if magnitude <= settings::geometry::MIN_SEGMENT_LENGTH {
        return (a, b);
    }

    let param_a = (magnitude - half_width) / magnitude;
    let param_b = half_width / magnitude;
    (b - v * param_a, b - v * param_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ScaledPath;
    use crate::path::curves::TOP;

    fn top_line(density: f64) -> BridgingLine {
        let pair = |track: crate::path::TrackCurves| {
            JoinedCurvePair::new(
                ScaledPath::new(track.first, density),
                ScaledPath::new(track.second, density),
            )
        };
        BridgingLine::new(pair(TOP.track_a), pair(TOP.track_b))
    }

    #[test]
    fn test_inset_horizontal() {
        let (a, b) = inset_for_round_caps(Point::new(0.0, 0.0), Point::new(10.0, 0.0), 1.0);
        assert!(a.distance(Point::new(1.0, 0.0)) < 1e-12);
        assert!(b.distance(Point::new(9.0, 0.0)) < 1e-12);
    }

    #[test]
    fn test_inset_diagonal_shortens_by_stroke_width() {
        let a = Point::new(1.0, 2.0);
        let b = Point::new(4.0, 6.0);
        let (a2, b2) = inset_for_round_caps(a, b, 0.5);
        assert!((a2.distance(b2) - 4.0).abs() < 1e-12);
        assert!((a.distance(a2) - 0.5).abs() < 1e-12);
        assert!((b.distance(b2) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_inset_coincident_points_stay_finite() {
        let p = Point::new(3.0, 3.0);
        let (a, b) = inset_for_round_caps(p, p, 1.0);
        assert_eq!(a, p);
        assert_eq!(b, p);
        assert!(a.x.is_finite() && a.y.is_finite());
    }

    #[test]
    fn test_segment_at_rest_is_hamburger_bar() {
        let line = top_line(3.0).segment(0.0, None);
        assert!(line.p0.distance(Point::new(5.042, 20.0)) < 1e-9);
        assert!(line.p1.distance(Point::new(64.959, 20.0)) < 1e-9);
    }

    #[test]
    fn test_segment_with_inset() {
        let line = top_line(3.0).segment(0.0, Some(3.0));
        assert!((line.p0.x - 8.042).abs() < 1e-9);
        assert!((line.p1.x - 61.959).abs() < 1e-9);
        assert_eq!(line.p0.y, line.p1.y);
    }

    #[test]
    fn test_draw_emits_one_line() {
        let mut surface = crate::surface::RecordingSurface::new();
        let paint = StrokePaint::new(6.0, false);
        top_line(3.0).draw(&mut surface, 0.25, None, &paint);
        assert_eq!(surface.calls().len(), 1);
    }
}
