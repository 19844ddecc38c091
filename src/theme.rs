// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Theme colors and constants
//!
//! All colors use hexadecimal format: Color::from_rgb8(0xRR, 0xGG, 0xBB)

use masonry::vello::peniko::Color;

// ============================================================================
// BASE COLORS -- Generic colors for UI, a dark to light gradient by default
// ============================================================================
const BASE_A: Color = Color::from_rgb8(0x10, 0x10, 0x10);
const BASE_B: Color = Color::from_rgb8(0x20, 0x20, 0x20);
const BASE_C: Color = Color::from_rgb8(0x30, 0x30, 0x30);
const BASE_F: Color = Color::from_rgb8(0x60, 0x60, 0x60);
const BASE_G: Color = Color::from_rgb8(0x70, 0x70, 0x70);
const BASE_I: Color = Color::from_rgb8(0x90, 0x90, 0x90);
const BASE_L: Color = Color::from_rgb8(0xc0, 0xc0, 0xc0);

// ============================================================================
// GLOBAL BACKGROUNDS
// ============================================================================
const APP_BACKGROUND: Color = BASE_B;

// ============================================================================
// UI TEXT AND LABELS
// ============================================================================
const PRIMARY_UI_TEXT: Color = BASE_I;
const SECONDARY_UI_TEXT: Color = BASE_G;

// ============================================================================
// UI PANELS
// ============================================================================
const PANEL_BACKGROUND: Color = BASE_C;
const PANEL_OUTLINE: Color = BASE_F;

// ============================================================================
// ARROW GLYPH
// ============================================================================
// Light gray on the dark panel, like a toolbar indicator
const ARROW_STROKE: Color = BASE_L;
const ARROW_HOVER_BACKGROUND: Color = BASE_A;

// ============================================================================
// DRAWER TRACK
// ============================================================================
const TRACK_BACKGROUND: Color = BASE_A;
const TRACK_FILL: Color = Color::from_rgb8(0x57, 0x9a, 0xff);
const TRACK_OUTLINE: Color = BASE_F;

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Global application background color
pub mod app {
    use super::Color;
    pub const BACKGROUND: Color = super::APP_BACKGROUND;
}

/// Colors for UI text
pub mod text {
    use super::Color;
    pub const PRIMARY: Color = super::PRIMARY_UI_TEXT;
    pub const SECONDARY: Color = super::SECONDARY_UI_TEXT;
}

/// Colors for UI panels
pub mod panel {
    use super::Color;
    pub const BACKGROUND: Color = super::PANEL_BACKGROUND;
    pub const OUTLINE: Color = super::PANEL_OUTLINE;
}

/// Colors for the drawer arrow widget
pub mod arrow {
    use super::Color;
    pub const STROKE: Color = super::ARROW_STROKE;
    pub const HOVER_BACKGROUND: Color = super::ARROW_HOVER_BACKGROUND;
}

/// Colors for the drawer slide track
pub mod track {
    use super::Color;
    pub const BACKGROUND: Color = super::TRACK_BACKGROUND;
    pub const FILL: Color = super::TRACK_FILL;
    pub const OUTLINE: Color = super::TRACK_OUTLINE;
}

/// Sizes used by the demo
pub mod size {
    /// Corner radius for panels
    pub const PANEL_RADIUS: f64 = 8.0;

    /// Corner radius for the slide track
    pub const TRACK_RADIUS: f64 = 6.0;

    /// Outline width for the slide track
    pub const TRACK_OUTLINE_WIDTH: f64 = 1.5;

    /// Padding around the arrow inside its widget
    pub const ARROW_PADDING: f64 = 8.0;
}
