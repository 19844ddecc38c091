// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawer Arrow demo: drag the track to morph the arrow

use xilem::{EventLoop, winit::error::EventLoopError};

fn main() -> Result<(), EventLoopError> {
    drawer_arrow::run(EventLoop::with_user_event())
}
