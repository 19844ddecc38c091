// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Masonry widget and Xilem view for the drawer arrow glyph
//!
//! The widget owns an `ArrowGlyph` and forwards the view's parameters to it
//! on rebuild. It only asks for a repaint when the glyph reports itself
//! dirty, and rebuilds the glyph from scratch when the cap style or density
//! changes, since those are fixed per glyph.
//!
//! Clicking the widget emits `ArrowClicked`; the host decides whether that
//! opens or closes the drawer.

use crate::glyph::ArrowGlyph;
use crate::settings;
use crate::surface::SceneSurface;
use crate::theme;
use kurbo::{Affine, Point, Rect, Size};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PropertiesMut, PropertiesRef, RegisterCtx, TextEvent,
    Update, UpdateCtx, Widget,
};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Color, Fill};
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Everything the host controls about the glyph
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArrowParams {
    pub density: f64,
    pub rounded: bool,
    pub progress: f64,
    pub flip: bool,
    pub color: Color,
}

/// Action sent when the arrow is clicked
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ArrowClicked;

/// A widget that draws an `ArrowGlyph`
pub struct DrawerArrowWidget {
    glyph: ArrowGlyph,
    hovered: bool,
}

impl DrawerArrowWidget {
    pub fn new(params: ArrowParams) -> Self {
        let mut widget = Self {
            glyph: build_glyph(params, settings::demo::DEFAULT_DENSITY),
            hovered: false,
        };
        widget.apply(params);
        widget
    }

    pub fn glyph(&self) -> &ArrowGlyph {
        &self.glyph
    }

    /// Push `params` into the glyph.
    ///
    /// Returns true when the glyph was replaced and needs a new layout.
    pub fn apply(&mut self, params: ArrowParams) -> bool {
        let rebuilt = params.rounded != self.glyph.is_rounded()
            || params.density != self.glyph.density();
        if rebuilt {
            tracing::debug!(
                "DrawerArrowWidget: rebuilding glyph (rounded={}, density={})",
                params.rounded,
                params.density
            );
            self.glyph = build_glyph(params, self.glyph.density());
        }

        if self.glyph.stroke_color() != params.color {
            self.glyph.set_stroke_color(params.color);
        }
        if self.glyph.flip() != params.flip {
            self.glyph.set_flip(params.flip);
        }
        if self.glyph.progress() != params.progress
            && let Err(err) = self.glyph.set_progress(params.progress)
        {
            tracing::error!("DrawerArrowWidget: {err}");
        }

        rebuilt
    }

    fn glyph_size(&self) -> Size {
        let padding = theme::size::ARROW_PADDING * 2.0;
        Size::new(
            self.glyph.intrinsic_width() as f64 + padding,
            self.glyph.intrinsic_height() as f64 + padding,
        )
    }
}

/// Build a glyph for `params`, falling back to `fallback_density` when the
/// requested density is unusable
fn build_glyph(params: ArrowParams, fallback_density: f64) -> ArrowGlyph {
    ArrowGlyph::try_new(params.density, params.rounded).unwrap_or_else(|err| {
        tracing::error!("DrawerArrowWidget: {err}, using density {fallback_density}");
        ArrowGlyph::new(fallback_density, params.rounded)
    })
}

impl Widget for DrawerArrowWidget {
    type Action = ArrowClicked;

    fn register_children(&mut self, _ctx: &mut RegisterCtx<'_>) {
        // Leaf widget - no children
    }

    fn update(
        &mut self,
        _ctx: &mut UpdateCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &Update,
    ) {
    }

    fn layout(
        &mut self,
        _ctx: &mut LayoutCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        bc: &BoxConstraints,
    ) -> Size {
        bc.constrain(self.glyph_size())
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let size = ctx.size();

        if self.hovered {
            let background = Rect::from_origin_size(Point::ZERO, size)
                .to_rounded_rect(theme::size::PANEL_RADIUS);
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(theme::arrow::HOVER_BACKGROUND),
                None,
                &background,
            );
        }

        // Center the glyph in whatever space layout gave us
        let glyph_bounds = self.glyph.bounds();
        let offset = (
            (size.width - glyph_bounds.width()) / 2.0,
            (size.height - glyph_bounds.height()) / 2.0,
        );
        let mut surface = SceneSurface::with_transform(scene, Affine::translate(offset));
        self.glyph.draw(&mut surface);
        self.glyph.take_dirty();
    }

    fn accessibility_role(&self) -> Role {
        Role::Button
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        let label = if self.glyph.progress() > 0.5 {
            "Close navigation drawer"
        } else {
            "Open navigation drawer"
        };
        node.set_label(label);
    }

    fn children_ids(&self) -> ChildrenIds {
        ChildrenIds::new()
    }

    fn on_pointer_event(
        &mut self,
        ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        event: &PointerEvent,
    ) {
        match event {
            PointerEvent::Move(_) => {
                if !self.hovered {
                    self.hovered = true;
                    ctx.request_render();
                }
            }
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                tracing::debug!("DrawerArrowWidget: clicked at progress {}", self.glyph.progress());
                ctx.submit_action::<ArrowClicked>(ArrowClicked);
            }
            PointerEvent::Leave(_) => {
                if self.hovered {
                    self.hovered = false;
                    ctx.request_render();
                }
            }
            _ => {}
        }
    }

    fn on_text_event(
        &mut self,
        _ctx: &mut EventCtx<'_>,
        _props: &mut PropertiesMut<'_>,
        _event: &TextEvent,
    ) {
        // No text handling needed
    }
}

// ===== Xilem View Wrapper =====

/// Create a drawer arrow view
pub fn drawer_arrow_view<State, Action>(
    params: ArrowParams,
    on_click: impl Fn(&mut State) + Send + Sync + 'static,
) -> DrawerArrowView<State, Action>
where
    Action: 'static,
{
    DrawerArrowView {
        params,
        on_click: Box::new(on_click),
        phantom: PhantomData,
    }
}

type ArrowClickCallback<State> = Box<dyn Fn(&mut State) + Send + Sync>;

/// The Xilem View for DrawerArrowWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct DrawerArrowView<State, Action = ()> {
    params: ArrowParams,
    on_click: ArrowClickCallback<State>,
    phantom: PhantomData<fn() -> (State, Action)>,
}

impl<State, Action> ViewMarker for DrawerArrowView<State, Action> {}

impl<State: 'static, Action: 'static + Default> View<State, Action, ViewCtx>
    for DrawerArrowView<State, Action>
{
    type Element = Pod<DrawerArrowWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let widget = DrawerArrowWidget::new(self.params);
        let pod = ctx.create_pod(widget);
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        if self.params == prev.params {
            return;
        }

        let mut widget = element.downcast::<DrawerArrowWidget>();
        if widget.widget.apply(self.params) {
            widget.ctx.request_layout();
        }
        if widget.widget.glyph.is_dirty() {
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
        // No cleanup needed
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<Action> {
        match message.take_message::<ArrowClicked>() {
            Some(_) => {
                (self.on_click)(app_state);
                MessageResult::Nop
            }
            None => MessageResult::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ArrowParams {
        ArrowParams {
            density: 2.0,
            rounded: false,
            progress: 0.0,
            flip: false,
            color: theme::arrow::STROKE,
        }
    }

    #[test]
    fn test_widget_applies_params() {
        let widget = DrawerArrowWidget::new(ArrowParams {
            progress: 0.25,
            flip: true,
            ..params()
        });
        assert_eq!(widget.glyph().progress(), 0.25);
        assert!(widget.glyph().flip());
        assert_eq!(widget.glyph().stroke_color(), theme::arrow::STROKE);
    }

    #[test]
    fn test_cap_style_change_rebuilds_glyph() {
        let mut widget = DrawerArrowWidget::new(params());
        assert!(!widget.apply(ArrowParams {
            progress: 0.5,
            ..params()
        }));
        assert!(widget.apply(ArrowParams {
            rounded: true,
            progress: 0.5,
            ..params()
        }));
        assert!(widget.glyph().is_rounded());
        assert_eq!(widget.glyph().progress(), 0.5);
    }

    #[test]
    fn test_unchanged_params_leave_glyph_clean() {
        let mut widget = DrawerArrowWidget::new(params());
        widget.glyph.take_dirty();
        widget.apply(params());
        assert!(!widget.glyph().is_dirty());
    }

    #[test]
    fn test_invalid_progress_is_ignored() {
        let mut widget = DrawerArrowWidget::new(params());
        widget.apply(ArrowParams {
            progress: 1.5,
            ..params()
        });
        assert_eq!(widget.glyph().progress(), 0.0);
    }

    #[test]
    fn test_invalid_density_falls_back() {
        let widget = DrawerArrowWidget::new(ArrowParams {
            density: 0.0,
            ..params()
        });
        assert_eq!(widget.glyph().density(), settings::demo::DEFAULT_DENSITY);

        let mut widget = DrawerArrowWidget::new(params());
        widget.apply(ArrowParams {
            density: f64::NAN,
            rounded: true,
            ..params()
        });
        assert_eq!(widget.glyph().density(), 2.0);
        assert!(widget.glyph().is_rounded());
    }

    #[test]
    fn test_size_includes_padding() {
        let widget = DrawerArrowWidget::new(params());
        let size = widget.glyph_size();
        assert_eq!(size.width, 47.0 + theme::size::ARROW_PADDING * 2.0);
    }
}
