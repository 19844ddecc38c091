// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Arc length measurement over a `BezPath`.
//!
//! Answers two questions about a path: how long is it, and where is the
//! point a given distance along it. Segment lengths are cached up front so
//! sampling only pays for one inverse arc length solve.

use crate::settings;
use kurbo::{BezPath, ParamCurve, ParamCurveArclen, PathSeg, Point};

/// Cached arc length table for one path
#[derive(Debug, Clone)]
pub struct PathMeasure {
    segments: Vec<MeasuredSegment>,
    length: f64,
}

#[derive(Debug, Clone)]
struct MeasuredSegment {
    seg: PathSeg,
    length: f64,
}

impl PathMeasure {
    /// Measure every segment of `path`
    pub fn new(path: &BezPath) -> Self {
        let accuracy = settings::measure::ARCLEN_ACCURACY;
        let segments: Vec<MeasuredSegment> = path
            .segments()
            .map(|seg| MeasuredSegment {
                seg,
                length: seg.arclen(accuracy),
            })
            .collect();
        let length = segments.iter().map(|s| s.length).sum();

        Self { segments, length }
    }

    /// Total arc length of the path
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Point at `distance` along the path.
    ///
    /// Distance is clamped to `[0, length]`. An empty path yields the origin.
    pub fn position_at(&self, distance: f64) -> Point {
        let Some(last) = self.segments.last() else {
            return Point::ZERO;
        };

        if distance <= 0.0 {
            return self.segments[0].seg.start();
        }
        if distance >= self.length {
            return last.seg.end();
        }

        let mut remaining = distance;
        for measured in &self.segments {
            if remaining <= measured.length {
                return position_on_segment(measured, remaining);
            }
            remaining -= measured.length;
        }

        // Float accumulation can leave a sliver past the final segment
        last.seg.end()
    }
}

fn position_on_segment(measured: &MeasuredSegment, distance: f64) -> Point {
    if measured.length <= 0.0 {
        return measured.seg.start();
    }
    if distance >= measured.length {
        return measured.seg.end();
    }
    let t = measured
        .seg
        .inv_arclen(distance, settings::measure::ARCLEN_ACCURACY);
    measured.seg.eval(t)
}
