// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Drawing targets for the glyph.
//!
//! The glyph only ever strokes straight lines under an optional transform,
//! so the surface contract is small: draw a line, push a transform, pop it.
//! `SceneSurface` renders into a Vello scene; `RecordingSurface` keeps the
//! calls for inspection.

use crate::glyph::StrokePaint;
use kurbo::{Affine, Cap, Line};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color};
use std::ops::{Deref, DerefMut};

/// Something the glyph can draw into
pub trait Surface {
    /// Stroke `line` with `paint` under the current transform
    fn draw_line(&mut self, line: Line, paint: &StrokePaint);

    /// Concatenate `transform` onto the current transform
    fn push_transform(&mut self, transform: Affine);

    /// Undo the most recent `push_transform`
    fn pop_transform(&mut self);
}

/// Pushes a transform and pops it again when dropped.
///
/// Dropping also happens during unwinding, so a panic part way through a
/// draw can't leave the surface transformed.
pub struct TransformGuard<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
}

/// Apply `transform` to `surface` for the lifetime of the returned guard
pub fn scoped<S: Surface + ?Sized>(surface: &mut S, transform: Affine) -> TransformGuard<'_, S> {
    surface.push_transform(transform);
    TransformGuard { surface }
}

impl<S: Surface + ?Sized> Deref for TransformGuard<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.surface
    }
}

impl<S: Surface + ?Sized> DerefMut for TransformGuard<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.surface
    }
}

impl<S: Surface + ?Sized> Drop for TransformGuard<'_, S> {
    fn drop(&mut self) {
        self.surface.pop_transform();
    }
}

// ===== Vello =====

/// Surface backed by a Vello scene
pub struct SceneSurface<'a> {
    scene: &'a mut Scene,
    base: Affine,
    stack: Vec<Affine>,
}

impl<'a> SceneSurface<'a> {
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_transform(scene, Affine::IDENTITY)
    }

    /// Draw everything under `base`, e.g. to position the glyph in a widget
    pub fn with_transform(scene: &'a mut Scene, base: Affine) -> Self {
        Self {
            scene,
            base,
            stack: Vec::new(),
        }
    }

    fn current(&self) -> Affine {
        self.stack.last().copied().unwrap_or(self.base)
    }
}

impl Surface for SceneSurface<'_> {
    fn draw_line(&mut self, line: Line, paint: &StrokePaint) {
        let brush = Brush::Solid(paint.effective_color());
        let transform = self.current();
        self.scene
            .stroke(&paint.stroke(), transform, &brush, None, &line);
    }

    fn push_transform(&mut self, transform: Affine) {
        let next = self.current() * transform;
        self.stack.push(next);
    }

    fn pop_transform(&mut self) {
        if self.stack.pop().is_none() {
            tracing::warn!("SceneSurface: pop_transform without matching push");
        }
    }
}

// ===== Recording =====

/// One recorded line
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    /// The line as passed to the surface
    pub line: Line,
    /// Transform in effect when the line was drawn
    pub transform: Affine,
    pub color: Color,
    pub width: f64,
    pub cap: Cap,
}

impl DrawCall {
    /// The line with its transform applied
    pub fn transformed_line(&self) -> Line {
        Line::new(self.transform * self.line.p0, self.transform * self.line.p1)
    }
}

/// Surface that records draw calls instead of rendering them
#[derive(Debug, Default)]
pub struct RecordingSurface {
    calls: Vec<DrawCall>,
    stack: Vec<Affine>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    /// Number of transforms currently pushed
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn current(&self) -> Affine {
        self.stack.last().copied().unwrap_or(Affine::IDENTITY)
    }
}

impl Surface for RecordingSurface {
    fn draw_line(&mut self, line: Line, paint: &StrokePaint) {
        self.calls.push(DrawCall {
            line,
            transform: self.current(),
            color: paint.effective_color(),
            width: paint.width,
            cap: paint.cap,
        });
    }

    fn push_transform(&mut self, transform: Affine) {
        let next = self.current() * transform;
        self.stack.push(next);
    }

    fn pop_transform(&mut self) {
        self.stack.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;

    #[test]
    fn test_guard_pops_on_drop() {
        let mut surface = RecordingSurface::new();
        {
            let mut guard = scoped(&mut surface, Affine::translate((5.0, 0.0)));
            assert_eq!(guard.depth(), 1);
            guard.draw_line(Line::new((0.0, 0.0), (1.0, 0.0)), &StrokePaint::new(1.0, false));
        }
        assert_eq!(surface.depth(), 0);
        assert_eq!(
            surface.calls()[0].transformed_line(),
            Line::new((5.0, 0.0), (6.0, 0.0))
        );
    }

    #[test]
    fn test_guard_pops_on_panic() {
        let mut surface = RecordingSurface::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = scoped(&mut surface, Affine::scale(2.0));
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn test_nested_transforms_concatenate() {
        let mut surface = RecordingSurface::new();
        let paint = StrokePaint::new(1.0, false);
        {
            let mut outer = scoped(&mut surface, Affine::translate((10.0, 0.0)));
            let mut inner = scoped(&mut *outer, Affine::scale(2.0));
            inner.draw_line(Line::new((1.0, 1.0), (2.0, 1.0)), &paint);
        }
        let line = surface.calls()[0].transformed_line();
        assert_eq!(line.p0, Point::new(12.0, 2.0));
        assert_eq!(line.p1, Point::new(14.0, 2.0));
    }
}
