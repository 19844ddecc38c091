// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Curve geometry for the glyph: the authored data, density scaling and
//! arc length sampling.
//!
//! Curves start as static command tables in `curves`, are turned into
//! `kurbo::BezPath`s and scaled to the display density by `ScaledPath`,
//! and are paired into tracks by `JoinedCurvePair`. `PathMeasure` provides
//! the arc length queries the tracks are sampled with.

pub mod curves;
pub mod joined;
pub mod measure;
pub mod scaled;

pub use curves::{BarCurves, Curve, CurveCommand, TrackCurves};
pub use joined::JoinedCurvePair;
pub use measure::PathMeasure;
pub use scaled::{ScaledPath, nearly_equal};
