// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Two scaled curves sampled as one continuous track

use super::measure::PathMeasure;
use super::scaled::ScaledPath;
use kurbo::Point;

/// A track made of two sequential curve pieces.
///
/// The parameter range is split evenly: `[0, 0.5]` walks the first piece
/// and `(0.5, 1]` walks the second, each by arc length. The pieces are
/// expected to meet end to start, which the authored data provides.
#[derive(Debug, Clone)]
pub struct JoinedCurvePair {
    first: ScaledPath,
    second: ScaledPath,
    measure_first: PathMeasure,
    measure_second: PathMeasure,
}

impl JoinedCurvePair {
    pub fn new(first: ScaledPath, second: ScaledPath) -> Self {
        let measure_first = PathMeasure::new(first.path());
        let measure_second = PathMeasure::new(second.path());
        Self {
            first,
            second,
            measure_first,
            measure_second,
        }
    }

    /// Point on the track at parameter `t` in `[0, 1]`
    pub fn sample_at(&self, t: f64) -> Point {
        if t <= 0.5 {
            let local = t * 2.0;
            self.measure_first
                .position_at(local * self.measure_first.length())
        } else {
            let local = (t - 0.5) * 2.0;
            self.measure_second
                .position_at(local * self.measure_second.length())
        }
    }

    /// Combined arc length of both pieces
    pub fn length(&self) -> f64 {
        self.measure_first.length() + self.measure_second.length()
    }

    pub fn first(&self) -> &ScaledPath {
        &self.first
    }

    pub fn second(&self) -> &ScaledPath {
        &self.second
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::curves::{BARS, TrackCurves};

    fn joined(track: TrackCurves, density: f64) -> JoinedCurvePair {
        JoinedCurvePair::new(
            ScaledPath::new(track.first, density),
            ScaledPath::new(track.second, density),
        )
    }

    fn all_tracks() -> Vec<TrackCurves> {
        BARS.iter()
            .flat_map(|bar| [bar.track_a, bar.track_b])
            .collect()
    }

    #[test]
    fn test_sample_ends_match_pieces() {
        for track in all_tracks() {
            let pair = joined(track, 2.0);
            assert_eq!(pair.sample_at(0.0), pair.first().start());
            assert_eq!(pair.sample_at(1.0), pair.second().end());
        }
    }

    #[test]
    fn test_sample_is_deterministic() {
        for track in all_tracks() {
            let pair = joined(track, 3.0);
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                assert_eq!(pair.sample_at(t), pair.sample_at(t));
            }
        }
    }

    #[test]
    fn test_midpoint_is_first_piece_end() {
        for track in all_tracks() {
            let pair = joined(track, 3.0);
            assert_eq!(pair.sample_at(0.5), pair.first().end());
        }
    }

    #[test]
    fn test_just_past_midpoint_starts_second_piece() {
        for track in all_tracks() {
            let pair = joined(track, 3.0);
            let p = pair.sample_at(0.5 + 1e-9);
            assert!(p.distance(pair.second().start()) < 1e-3);
        }
    }

    #[test]
    fn test_samples_advance_by_arc_length() {
        // Equal steps in t within one piece should cover equal arc length,
        // so consecutive chords are close in size.
        let pair = joined(BARS[1].track_a, 3.0);
        let a = pair.sample_at(0.0);
        let b = pair.sample_at(0.05);
        let c = pair.sample_at(0.10);
        let first = a.distance(b);
        let second = b.distance(c);
        assert!((first - second).abs() < 0.05 * first.max(second));
    }

    #[test]
    fn test_length_scales_with_density() {
        let low = joined(BARS[0].track_b, 1.5);
        let high = joined(BARS[0].track_b, 3.0);
        assert!((high.length() - low.length() * 2.0).abs() < 1e-3);
    }
}
