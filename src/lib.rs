// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawer Arrow: an animated hamburger-to-arrow navigation icon.
//!
//! The glyph is three bars whose ends ride pre-authored Bezier tracks. A
//! single progress value in `[0, 1]` moves every end along its track by arc
//! length, morphing the hamburger into a back arrow. See [`ArrowGlyph`] for
//! the entry point and [`Surface`] for drawing targets.
//!
//! The crate also ships a small Xilem demo (`run`) with a drag track
//! standing in for a sliding navigation drawer.

use anyhow::{Context, bail};
use winit::dpi::LogicalSize;
use winit::error::EventLoopError;
use xilem::{EventLoopBuilder, WindowView, Xilem, window};

pub mod components;
pub mod data;
pub mod drawer;
pub mod error;
pub mod glyph;
pub mod path;
pub mod settings;
pub mod surface;
pub mod theme;
mod views;

pub use data::{AppState, DemoOptions};
pub use drawer::FlipHysteresis;
pub use error::ArrowError;
pub use glyph::{ArrowGlyph, BridgingLine, ColorFilter, StrokePaint};
pub use path::{JoinedCurvePair, PathMeasure, ScaledPath};
pub use surface::{DrawCall, RecordingSurface, SceneSurface, Surface};

/// Entry point for the demo application
pub fn run(event_loop: EventLoopBuilder) -> Result<(), EventLoopError> {
    // Initialize tracing subscriber (can be controlled via RUST_LOG env var)
    // Filter out noisy wgpu/naga shader compilation logs
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(
            "drawer_arrow=info,wgpu=warn,naga=warn,wgpu_core=warn,wgpu_hal=warn",
        )
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(err) => {
            tracing::error!("{err:#}");
            tracing::error!("Usage: drawer-arrow [--rounded] [--density <pixels-per-dp>]");
            DemoOptions::default()
        }
    };
    tracing::info!(
        "Starting demo: density={}, rounded={}",
        options.density,
        options.rounded
    );

    let app = Xilem::new(AppState::new(options), app_logic);
    app.run_in(event_loop)?;
    Ok(())
}

/// Parse demo options from command-line arguments (program name excluded)
pub fn parse_args<I>(args: I) -> anyhow::Result<DemoOptions>
where
    I: IntoIterator<Item = String>,
{
    let mut options = DemoOptions::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--rounded" => options.rounded = true,
            "--squared" => options.rounded = false,
            "--density" => {
                let value = args.next().context("--density needs a value")?;
                let density: f64 = value
                    .parse()
                    .with_context(|| format!("invalid density {value:?}"))?;
                if !density.is_finite() || density <= 0.0 {
                    bail!(error::ArrowError::InvalidDensity(density));
                }
                options.density = density;
            }
            other => tracing::warn!("Ignoring unknown argument: {other}"),
        }
    }

    Ok(options)
}

/// Build the single demo window
fn app_logic(state: &mut AppState) -> impl Iterator<Item = WindowView<AppState>> + use<> {
    let window_size = LogicalSize::new(480.0, 360.0);
    let window_view = window(state.main_window_id, "Drawer Arrow", views::drawer_demo(state));
    let window_with_options = window_view.with_options(|options| {
        options
            .with_initial_inner_size(window_size)
            .on_close(|state: &mut AppState| state.running = false)
    });

    std::iter::once(window_with_options)
}
