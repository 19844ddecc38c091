// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type for glyph construction and parameter updates

use thiserror::Error;

/// Errors surfaced at the glyph's API boundary
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArrowError {
    /// Progress must lie in `[0, 1]`; values are never clamped
    #[error("progress must be between 0 and 1 inclusive, got {0}")]
    ProgressOutOfRange(f64),

    /// Density must be finite and strictly positive
    #[error("display density must be finite and positive, got {0}")]
    InvalidDensity(f64),
}
