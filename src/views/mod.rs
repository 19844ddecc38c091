// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Demo view: the arrow, a drawer track to drive it, and a cap style toggle

use masonry::properties::types::{AsUnit, MainAxisAlignment};
use xilem::WidgetView;
use xilem::style::Style;
use xilem::view::{CrossAxisAlignment, button, flex_col, label, sized_box};

use crate::components::{drawer_arrow_view, slide_track_view};
use crate::data::AppState;
use crate::theme;

/// Gap between the demo's rows
const ROW_GAP: f64 = 16.0;

/// Padding inside the demo panel
const PANEL_PADDING: f64 = 24.0;

/// The whole window: a centered panel on the app background
pub fn drawer_demo(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    flex_col((demo_panel(state),))
        .main_axis_alignment(MainAxisAlignment::Center)
        .cross_axis_alignment(CrossAxisAlignment::Center)
        .background_color(theme::app::BACKGROUND)
}

fn demo_panel(state: &mut AppState) -> impl WidgetView<AppState> + use<> {
    sized_box(
        flex_col((
            label("Drag the track to slide the drawer")
                .text_size(14.0)
                .color(theme::text::SECONDARY),
            drawer_arrow_view(state.arrow_params(), |state: &mut AppState| {
                state.toggle_drawer();
            }),
            slide_track_view(state.offset, |state: &mut AppState, offset| {
                state.on_drawer_slide(offset);
            }),
            label(status_text(state))
                .text_size(12.0)
                .color(theme::text::SECONDARY),
            button(
                label(state.style_button_text())
                    .text_size(14.0)
                    .color(theme::text::PRIMARY),
                |state: &mut AppState| {
                    state.toggle_rounded();
                },
            ),
        ))
        .gap(ROW_GAP.px())
        .cross_axis_alignment(CrossAxisAlignment::Center),
    )
    .padding(PANEL_PADDING)
    .background_color(theme::panel::BACKGROUND)
    .border_color(theme::panel::OUTLINE)
    .border_width(1.5)
    .corner_radius(theme::size::PANEL_RADIUS)
}

fn status_text(state: &AppState) -> String {
    let direction = if state.is_flipped() { "flipped" } else { "normal" };
    format!("offset {:.3} | {direction}", state.offset)
}
