// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Authored curve data for the three bars.
//!
//! Every bar has two tracks: track A carries the bar's left end from the
//! hamburger pose to the arrow pose, track B carries its right end. Each
//! track is authored as two cubic pieces so a single sweep of the progress
//! value can bend around the glyph. Coordinates are pixels at the
//! authoring density (`settings::geometry::PATH_GEN_DENSITY`) and must stay
//! coordinate-for-coordinate identical to keep the arrowhead closing up.

use kurbo::{BezPath, Point, Vec2};

/// One command of an authored curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveCommand {
    /// Start a new subpath
    MoveTo(f64, f64),
    /// Absolute cubic: two control points and the end point
    CubicTo(f64, f64, f64, f64, f64, f64),
    /// Cubic with every coordinate relative to the current point
    RelCubicTo(f64, f64, f64, f64, f64, f64),
}

/// An authored sub-curve
pub type Curve = &'static [CurveCommand];

/// The two pieces of one track
#[derive(Debug, Clone, Copy)]
pub struct TrackCurves {
    pub first: Curve,
    pub second: Curve,
}

/// Both tracks of one bar
#[derive(Debug, Clone, Copy)]
pub struct BarCurves {
    pub track_a: TrackCurves,
    pub track_b: TrackCurves,
}

use CurveCommand::{CubicTo, MoveTo, RelCubicTo};

pub const TOP: BarCurves = BarCurves {
    track_a: TrackCurves {
        first: &[
            MoveTo(5.042, 20.0),
            RelCubicTo(8.125, -16.317, 39.753, -27.851, 55.49, -2.765),
        ],
        second: &[
            MoveTo(60.531, 17.235),
            RelCubicTo(11.301, 18.015, -3.699, 46.083, -23.725, 43.456),
        ],
    },
    track_b: TrackCurves {
        first: &[
            MoveTo(64.959, 20.0),
            RelCubicTo(4.457, 16.75, 1.512, 37.982, -22.557, 42.699),
        ],
        second: &[
            MoveTo(42.402, 62.699),
            CubicTo(18.333, 67.418, 8.807, 45.646, 8.807, 32.823),
        ],
    },
};

pub const MIDDLE: BarCurves = BarCurves {
    track_a: TrackCurves {
        first: &[
            MoveTo(5.042, 35.0),
            CubicTo(5.042, 20.333, 18.625, 6.791, 35.0, 6.791),
        ],
        second: &[
            MoveTo(35.0, 6.791),
            RelCubicTo(16.083, 0.0, 26.853, 16.702, 26.853, 28.209),
        ],
    },
    track_b: TrackCurves {
        first: &[
            MoveTo(64.959, 35.0),
            RelCubicTo(0.0, 10.926, -8.709, 26.416, -29.958, 26.416),
        ],
        second: &[
            MoveTo(35.0, 61.416),
            RelCubicTo(-7.5, 0.0, -23.946, -8.211, -23.946, -26.416),
        ],
    },
};

pub const BOTTOM: BarCurves = BarCurves {
    track_a: TrackCurves {
        first: &[
            MoveTo(5.042, 50.0),
            CubicTo(2.5, 43.312, 0.013, 26.546, 9.475, 17.346),
        ],
        second: &[
            MoveTo(9.475, 17.346),
            RelCubicTo(9.462, -9.2, 24.188, -10.353, 27.326, -8.245),
        ],
    },
    track_b: TrackCurves {
        first: &[
            MoveTo(64.959, 50.0),
            RelCubicTo(-7.021, 10.08, -20.584, 19.699, -37.361, 12.74),
        ],
        second: &[
            MoveTo(27.598, 62.699),
            RelCubicTo(-15.723, -6.521, -18.8, -23.543, -18.8, -25.642),
        ],
    },
};

/// Bars in draw order
pub const BARS: [BarCurves; 3] = [TOP, MIDDLE, BOTTOM];

/// Build an unscaled `BezPath` from authored commands
pub fn to_bezpath(curve: Curve) -> BezPath {
    let mut path = BezPath::new();
    let mut current = Point::ZERO;

    for command in curve {
        match *command {
            MoveTo(x, y) => {
                current = Point::new(x, y);
                path.move_to(current);
            }
            CubicTo(x1, y1, x2, y2, x, y) => {
                current = Point::new(x, y);
                path.curve_to(Point::new(x1, y1), Point::new(x2, y2), current);
            }
            RelCubicTo(dx1, dy1, dx2, dy2, dx, dy) => {
                let p1 = current + Vec2::new(dx1, dy1);
                let p2 = current + Vec2::new(dx2, dy2);
                current += Vec2::new(dx, dy);
                path.curve_to(p1, p2, current);
            }
        }
    }

    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    #[test]
    fn test_relative_cubic_resolves_against_move() {
        let path = to_bezpath(TOP.track_a.first);
        let elements = path.elements();
        assert_eq!(elements.len(), 2);
        match elements[1] {
            PathEl::CurveTo(p1, p2, p3) => {
                assert!((p1.x - 13.167).abs() < 1e-9);
                assert!((p1.y - 3.683).abs() < 1e-9);
                assert!((p2.x - 44.795).abs() < 1e-9);
                assert!((p2.y + 7.851).abs() < 1e-9);
                assert!((p3.x - 60.532).abs() < 1e-9);
                assert!((p3.y - 17.235).abs() < 1e-9);
            }
            other => panic!("expected a cubic, got {other:?}"),
        }
    }

    #[test]
    fn test_absolute_cubic_kept_verbatim() {
        let path = to_bezpath(MIDDLE.track_a.first);
        match path.elements()[1] {
            PathEl::CurveTo(p1, p2, p3) => {
                assert_eq!(p1, Point::new(5.042, 20.333));
                assert_eq!(p2, Point::new(18.625, 6.791));
                assert_eq!(p3, Point::new(35.0, 6.791));
            }
            other => panic!("expected a cubic, got {other:?}"),
        }
    }

    #[test]
    fn test_relative_cubic_after_absolute_cubic() {
        const CURVE: Curve = &[
            MoveTo(1.0, 2.0),
            CubicTo(3.0, 4.0, 5.0, 6.0, 7.0, 8.0),
            RelCubicTo(1.0, 0.0, 2.0, 0.0, 3.0, -1.0),
        ];
        let path = to_bezpath(CURVE);
        let elements = path.elements();
        assert_eq!(elements.len(), 3);
        assert_eq!(
            elements[1],
            PathEl::CurveTo(
                Point::new(3.0, 4.0),
                Point::new(5.0, 6.0),
                Point::new(7.0, 8.0)
            )
        );
        assert_eq!(
            elements[2],
            PathEl::CurveTo(
                Point::new(8.0, 8.0),
                Point::new(9.0, 8.0),
                Point::new(10.0, 7.0)
            )
        );
    }

    #[test]
    fn test_every_authored_piece_is_one_cubic() {
        for bar in BARS {
            for track in [bar.track_a, bar.track_b] {
                for piece in [track.first, track.second] {
                    assert_eq!(to_bezpath(piece).segments().count(), 1);
                }
            }
        }
    }

    #[test]
    fn test_tracks_are_contiguous() {
        for bar in BARS {
            for track in [bar.track_a, bar.track_b] {
                let end = to_bezpath(track.first).segments().last().map(|s| {
                    use kurbo::ParamCurve;
                    s.end()
                });
                let start = match track.second[0] {
                    MoveTo(x, y) => Point::new(x, y),
                    _ => panic!("second piece must start with a move"),
                };
                let end = end.expect("first piece has a segment");
                // The bottom bar's right track has a 0.04px seam
                assert!(end.distance(start) < 0.05, "{end:?} vs {start:?}");
            }
        }
    }

    #[test]
    fn test_hamburger_pose_is_horizontal() {
        for bar in BARS {
            let a = match bar.track_a.first[0] {
                MoveTo(_, y) => y,
                _ => unreachable!(),
            };
            let b = match bar.track_b.first[0] {
                MoveTo(_, y) => y,
                _ => unreachable!(),
            };
            assert_eq!(a, b);
        }
    }
}
