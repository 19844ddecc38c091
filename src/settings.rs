// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Geometry and behaviour constants.
//!
//! Non-visual settings live here. Colors belong in `theme.rs`.

// ============================================================================
// AUTHORING GEOMETRY
// ============================================================================
/// Pixels per dp the curve literals were authored at
const PATH_GEN_DENSITY: f64 = 3.0;

/// Side length of the glyph (dp) at the authoring density
const DIMEN_DP: f64 = 23.5;

/// Stroke width (dp) the curves were tuned for.
///
/// The arrowhead only closes up properly at this width.
const STROKE_WIDTH_DP: f64 = 2.0;

/// Relative tolerance when comparing a display density to the authoring one
const DENSITY_EPSILON: f64 = 0.00001;

/// Below this length a bridging segment is treated as a single point
const MIN_SEGMENT_LENGTH: f64 = 1e-9;

// ============================================================================
// CURVE MEASUREMENT
// ============================================================================
/// Accuracy (in pixels) for arc length and inverse arc length queries
const ARCLEN_ACCURACY: f64 = 1e-4;

// ============================================================================
// DRAWER BEHAVIOUR
// ============================================================================
// The arrow only flips direction at the extremes of the slide, so it
// doesn't flicker while the drawer is being dragged.

/// Slide offset at or above which the drawer counts as open
const FLIP_OPEN_THRESHOLD: f64 = 0.995;

/// Slide offset at or below which the drawer counts as closed
const FLIP_CLOSED_THRESHOLD: f64 = 0.005;

// ============================================================================
// DEMO APPLICATION
// ============================================================================
/// Display density used when none is given on the command line
const DEMO_DEFAULT_DENSITY: f64 = 3.0;

/// Height of the drag track (logical px)
const DEMO_TRACK_HEIGHT: f64 = 48.0;

/// Width of the drag track (logical px)
const DEMO_TRACK_WIDTH: f64 = 320.0;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Authoring geometry of the glyph
pub mod geometry {
    /// Pixels per dp the curve literals were authored at
    pub const PATH_GEN_DENSITY: f64 = super::PATH_GEN_DENSITY;

    /// Glyph side length in dp
    pub const DIMEN_DP: f64 = super::DIMEN_DP;

    /// Stroke width in dp
    pub const STROKE_WIDTH_DP: f64 = super::STROKE_WIDTH_DP;

    /// Tolerance for the density fast path
    pub const DENSITY_EPSILON: f64 = super::DENSITY_EPSILON;

    /// Degenerate segment threshold for the round cap inset
    pub const MIN_SEGMENT_LENGTH: f64 = super::MIN_SEGMENT_LENGTH;
}

/// Curve measurement accuracy
pub mod measure {
    pub const ARCLEN_ACCURACY: f64 = super::ARCLEN_ACCURACY;
}

/// Drawer slide hysteresis
pub mod drawer {
    pub const FLIP_OPEN_THRESHOLD: f64 = super::FLIP_OPEN_THRESHOLD;
    pub const FLIP_CLOSED_THRESHOLD: f64 = super::FLIP_CLOSED_THRESHOLD;
}

/// Demo application defaults
pub mod demo {
    pub const DEFAULT_DENSITY: f64 = super::DEMO_DEFAULT_DENSITY;
    pub const TRACK_HEIGHT: f64 = super::DEMO_TRACK_HEIGHT;
    pub const TRACK_WIDTH: f64 = super::DEMO_TRACK_WIDTH;
}
