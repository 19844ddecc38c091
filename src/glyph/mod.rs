// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! The drawer arrow glyph.
//!
//! `ArrowGlyph` owns the three bars and the stroke style. Hosts drive it by
//! setting `progress` (0 = hamburger, 1 = arrow) and `flip` (mirror
//! vertically so the arrow points the other way), then call `draw` with a
//! `Surface` whenever `take_dirty` reports a change.
//!
//! The cap style is chosen at construction and can't be changed: the round
//! cap inset is baked into how every bar is drawn. Build a new glyph to
//! switch styles.

pub mod bridging_line;
pub mod paint;

pub use bridging_line::{BridgingLine, inset_for_round_caps};
pub use paint::{ColorFilter, StrokePaint};

use crate::error::ArrowError;
use crate::path::{BarCurves, JoinedCurvePair, ScaledPath, TrackCurves, curves};
use crate::settings;
use crate::surface::{self, Surface};
use kurbo::{Affine, Line, Rect};
use masonry::vello::peniko::Color;

/// Animated hamburger-to-arrow icon
#[derive(Debug, Clone)]
pub struct ArrowGlyph {
    top: BridgingLine,
    middle: BridgingLine,
    bottom: BridgingLine,
    paint: StrokePaint,
    half_stroke_width: f64,
    rounded: bool,
    density: f64,
    /// Side length in whole pixels
    dimen: u32,
    progress: f64,
    flip: bool,
    dirty: bool,
}

impl ArrowGlyph {
    /// Build the glyph for `density` pixels per dp.
    ///
    /// # Panics
    ///
    /// Panics if `density` is not finite and positive. Use
    /// [`ArrowGlyph::try_new`] for unchecked input.
    pub fn new(density: f64, rounded: bool) -> Self {
        match Self::try_new(density, rounded) {
            Ok(glyph) => glyph,
            Err(err) => panic!("{err}"),
        }
    }

    /// Squared-cap glyph
    pub fn squared(density: f64) -> Self {
        Self::new(density, false)
    }

    pub fn try_new(density: f64, rounded: bool) -> Result<Self, ArrowError> {
        if !density.is_finite() || density <= 0.0 {
            return Err(ArrowError::InvalidDensity(density));
        }

        let stroke_width = settings::geometry::STROKE_WIDTH_DP * density;
        let dimen = (settings::geometry::DIMEN_DP * density) as u32;

        let [top, middle, bottom] = curves::BARS.map(|bar| build_line(bar, density));

        tracing::debug!(
            "ArrowGlyph: density={density}, scale={}, bounds={dimen}px, rounded={rounded}",
            top.path_a().first().scale()
        );

        Ok(Self {
            top,
            middle,
            bottom,
            paint: StrokePaint::new(stroke_width, rounded),
            half_stroke_width: stroke_width / 2.0,
            rounded,
            density,
            dimen,
            progress: 0.0,
            flip: false,
            dirty: true,
        })
    }

    // ===== Parameters =====

    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Set the morph position; fails outside `[0, 1]`
    pub fn set_progress(&mut self, progress: f64) -> Result<(), ArrowError> {
        if !(0.0..=1.0).contains(&progress) {
            tracing::warn!("ArrowGlyph: rejected progress {progress}");
            return Err(ArrowError::ProgressOutOfRange(progress));
        }
        self.progress = progress;
        self.dirty = true;
        Ok(())
    }

    pub fn flip(&self) -> bool {
        self.flip
    }

    pub fn set_flip(&mut self, flip: bool) {
        self.flip = flip;
        self.dirty = true;
    }

    // ===== Paint =====

    pub fn stroke_color(&self) -> Color {
        self.paint.color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.paint.color = color;
        self.dirty = true;
    }

    pub fn set_alpha(&mut self, alpha: u8) {
        self.paint.alpha = alpha;
        self.dirty = true;
    }

    pub fn set_color_filter(&mut self, filter: Option<ColorFilter>) {
        self.paint.color_filter = filter;
        self.dirty = true;
    }

    pub fn paint(&self) -> &StrokePaint {
        &self.paint
    }

    pub fn is_rounded(&self) -> bool {
        self.rounded
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    // ===== Layout =====

    pub fn intrinsic_width(&self) -> u32 {
        self.dimen
    }

    pub fn intrinsic_height(&self) -> u32 {
        self.dimen
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.dimen as f64, self.dimen as f64)
    }

    // ===== Invalidation =====

    /// Whether a parameter changed since the last `take_dirty`
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Report and clear the dirty flag
    pub fn take_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    // ===== Drawing =====

    /// Segments for the current progress, ignoring flip
    pub fn segments(&self) -> [Line; 3] {
        let inset = self.inset();
        [&self.top, &self.middle, &self.bottom].map(|line| line.segment(self.progress, inset))
    }

    /// Draw the three bars: top, middle, bottom
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        tracing::trace!(
            "ArrowGlyph::draw progress={} flip={}",
            self.progress,
            self.flip
        );

        if self.flip {
            let mut flipped = surface::scoped(surface, self.flip_transform());
            self.draw_bars(&mut *flipped);
        } else {
            self.draw_bars(surface);
        }
    }

    fn draw_bars<S: Surface + ?Sized>(&self, surface: &mut S) {
        let inset = self.inset();
        for line in [&self.top, &self.middle, &self.bottom] {
            line.draw(surface, self.progress, inset, &self.paint);
        }
    }

    fn inset(&self) -> Option<f64> {
        self.rounded.then_some(self.half_stroke_width)
    }

    /// Vertical mirror about the glyph's center
    fn flip_transform(&self) -> Affine {
        let height = self.dimen as f64;
        Affine::new([1.0, 0.0, 0.0, -1.0, 0.0, height])
    }
}

fn build_line(bar: BarCurves, density: f64) -> BridgingLine {
    BridgingLine::new(
        build_track(bar.track_a, density),
        build_track(bar.track_b, density),
    )
}

fn build_track(track: TrackCurves, density: f64) -> JoinedCurvePair {
    JoinedCurvePair::new(
        ScaledPath::new(track.first, density),
        ScaledPath::new(track.second, density),
    )
}
