// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Drives a glyph from a drawer's slide offsets.
//!
//! A drawer reports how far it is open as it slides. The glyph follows the
//! offset directly, but only flips direction once the drawer snaps fully
//! open or fully closed. In between the previous direction is kept, so the
//! arrow doesn't jump while the drawer is being dragged back and forth.

use crate::error::ArrowError;
use crate::glyph::ArrowGlyph;
use crate::settings;

/// Flip state with open/closed thresholds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlipHysteresis {
    flipped: bool,
}

impl FlipHysteresis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a known flip state, e.g. when swapping glyphs
    pub fn with_flipped(flipped: bool) -> Self {
        Self { flipped }
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Feed one slide offset and return the resulting flip state
    pub fn update(&mut self, offset: f64) -> bool {
        self.crossing(offset);
        self.flipped
    }

    /// Feed `offset` into both the flip state and `glyph`.
    ///
    /// The glyph's flip is only touched when a threshold is reached. Progress
    /// is validated by the glyph, so out-of-range offsets are rejected there.
    pub fn apply(&mut self, glyph: &mut ArrowGlyph, offset: f64) -> Result<(), ArrowError> {
        if let Some(flipped) = self.crossing(offset) {
            glyph.set_flip(flipped);
        }
        glyph.set_progress(offset)
    }

    /// Update the state, returning it when `offset` is at a threshold
    fn crossing(&mut self, offset: f64) -> Option<bool> {
        let flipped = if offset >= settings::drawer::FLIP_OPEN_THRESHOLD {
            true
        } else if offset <= settings::drawer::FLIP_CLOSED_THRESHOLD {
            false
        } else {
            return None;
        };

        if flipped != self.flipped {
            tracing::debug!("FlipHysteresis: flipped={flipped} at offset {offset}");
        }
        self.flipped = flipped;
        Some(flipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hysteresis_stream() {
        let mut hysteresis = FlipHysteresis::new();
        let flips: Vec<bool> = [0.0, 0.5, 0.994, 0.996, 0.5, 0.004]
            .into_iter()
            .map(|offset| hysteresis.update(offset))
            .collect();
        assert_eq!(flips, vec![false, false, false, true, true, false]);
    }

    #[test]
    fn test_thresholds_are_inclusive() {
        let mut hysteresis = FlipHysteresis::new();
        assert!(hysteresis.update(0.995));
        assert!(!hysteresis.update(0.005));
    }

    #[test]
    fn test_apply_drives_glyph() {
        let mut glyph = ArrowGlyph::squared(3.0);
        let mut hysteresis = FlipHysteresis::new();

        hysteresis.apply(&mut glyph, 1.0).unwrap();
        assert!(glyph.flip());
        assert_eq!(glyph.progress(), 1.0);

        hysteresis.apply(&mut glyph, 0.4).unwrap();
        assert!(glyph.flip());
        assert_eq!(glyph.progress(), 0.4);

        hysteresis.apply(&mut glyph, 0.0).unwrap();
        assert!(!glyph.flip());
    }

    #[test]
    fn test_apply_mid_slide_leaves_glyph_flip_alone() {
        let mut glyph = ArrowGlyph::squared(3.0);
        glyph.set_flip(true);
        let mut hysteresis = FlipHysteresis::new();
        hysteresis.apply(&mut glyph, 0.5).unwrap();
        assert!(glyph.flip());
        assert!(!hysteresis.is_flipped());
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let mut glyph = ArrowGlyph::squared(3.0);
        let mut hysteresis = FlipHysteresis::with_flipped(false);
        assert_eq!(
            hysteresis.apply(&mut glyph, 1.5),
            Err(ArrowError::ProgressOutOfRange(1.5))
        );
    }
}
