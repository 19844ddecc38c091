// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Stroke styling shared by the three bars

use kurbo::{Cap, Stroke};
use masonry::vello::peniko::Color;

/// A color transform applied before alpha.
///
/// The glyph does not interpret filters beyond handing the resulting color
/// to the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorFilter {
    /// Replace the color channels, keep the paint's alpha
    Tint(Color),
    /// Multiply every channel, alpha included
    Modulate(Color),
}

impl ColorFilter {
    pub fn apply(&self, color: Color) -> Color {
        let [r, g, b, a] = color.components;
        match *self {
            ColorFilter::Tint(tint) => {
                let [tr, tg, tb, _] = tint.components;
                Color::new([tr, tg, tb, a])
            }
            ColorFilter::Modulate(m) => {
                let [mr, mg, mb, ma] = m.components;
                Color::new([r * mr, g * mg, b * mb, a * ma])
            }
        }
    }
}

/// Stroke style descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct StrokePaint {
    pub color: Color,
    pub width: f64,
    pub cap: Cap,
    pub alpha: u8,
    pub color_filter: Option<ColorFilter>,
    /// Vello always antialiases; recorded for surfaces that can choose
    pub antialias: bool,
}

impl StrokePaint {
    pub fn new(width: f64, rounded: bool) -> Self {
        Self {
            color: Color::from_rgb8(0x00, 0x00, 0x00),
            width,
            cap: if rounded { Cap::Round } else { Cap::Butt },
            alpha: 0xff,
            color_filter: None,
            antialias: true,
        }
    }

    /// Color after the filter and the paint alpha
    pub fn effective_color(&self) -> Color {
        let filtered = match &self.color_filter {
            Some(filter) => filter.apply(self.color),
            None => self.color,
        };
        let [r, g, b, a] = filtered.components;
        Color::new([r, g, b, a * (self.alpha as f32 / 255.0)])
    }

    /// Kurbo stroke matching this paint
    pub fn stroke(&self) -> Stroke {
        Stroke::new(self.width).with_caps(self.cap)
    }
}
