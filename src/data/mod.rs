// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Central application state (`AppState`) that drives the demo UI.
//!
//! `AppState` stands in for the host of the arrow: it tracks how far the
//! drawer is open, which way the arrow points and which cap style is shown.
//! Every UI rebuild reads from it; mutations happen in event callbacks.

use crate::components::ArrowParams;
use crate::drawer::FlipHysteresis;
use crate::theme;
use xilem::WindowId;

/// Startup options for the demo
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoOptions {
    /// Pixels per dp the glyph is built for
    pub density: f64,
    /// Start with round caps
    pub rounded: bool,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            density: crate::settings::demo::DEFAULT_DENSITY,
            rounded: false,
        }
    }
}

/// Main application state
pub struct AppState {
    /// Pixels per dp for the arrow glyph
    pub density: f64,

    /// Whether the arrow uses round caps
    pub rounded: bool,

    /// How far the drawer is open, 0 closed to 1 open
    pub offset: f64,

    /// Arrow direction, only updated at the ends of the slide
    pub drawer: FlipHysteresis,

    /// Whether the app should keep running
    pub running: bool,

    /// Main window ID (stable across rebuilds to prevent window
    /// recreation)
    pub main_window_id: WindowId,
}

impl AppState {
    pub fn new(options: DemoOptions) -> Self {
        Self {
            density: options.density,
            rounded: options.rounded,
            offset: 0.0,
            drawer: FlipHysteresis::new(),
            running: true,
            main_window_id: WindowId::next(),
        }
    }

    /// Handle one slide offset from the drawer
    pub fn on_drawer_slide(&mut self, offset: f64) {
        let offset = offset.clamp(0.0, 1.0);
        self.drawer.update(offset);
        self.offset = offset;
    }

    /// Snap the drawer shut if any of it is showing, otherwise open it
    pub fn toggle_drawer(&mut self) {
        let target = if self.is_drawer_visible() { 0.0 } else { 1.0 };
        tracing::debug!("AppState: drawer snapping to {target}");
        self.on_drawer_slide(target);
    }

    pub fn is_drawer_visible(&self) -> bool {
        self.offset > 0.0
    }

    /// Switch between round and square caps.
    ///
    /// The widget builds a fresh glyph for the new style and carries the
    /// current offset and flip over to it.
    pub fn toggle_rounded(&mut self) {
        self.rounded = !self.rounded;
        tracing::info!("Cap style: {}", if self.rounded { "rounded" } else { "squared" });
    }

    pub fn is_flipped(&self) -> bool {
        self.drawer.is_flipped()
    }

    /// Parameters for the arrow widget
    pub fn arrow_params(&self) -> ArrowParams {
        ArrowParams {
            density: self.density,
            rounded: self.rounded,
            progress: self.offset,
            flip: self.is_flipped(),
            color: theme::arrow::STROKE,
        }
    }

    /// Label for the cap style button, naming the style it switches to
    pub fn style_button_text(&self) -> &'static str {
        if self.rounded {
            "See Squared"
        } else {
            "See Rounded"
        }
    }
}

/// Implement the Xilem AppState trait
impl xilem::AppState for AppState {
    fn keep_running(&self) -> bool {
        self.running
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DemoOptions::default())
    }
}
