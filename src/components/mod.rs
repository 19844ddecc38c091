// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! UI components for the drawer arrow demo

pub mod drawer_arrow_widget;
pub mod slide_track;

// Re-export commonly used widget views and types
pub use drawer_arrow_widget::{ArrowClicked, ArrowParams, DrawerArrowWidget, drawer_arrow_view};
pub use slide_track::{SlideOffset, SlideTrackWidget, slide_track_view};
