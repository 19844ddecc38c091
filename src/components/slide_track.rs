// Copyright 2025 the Drawer Arrow Authors
// SPDX-License-Identifier: Apache-2.0

//! Drag track standing in for a navigation drawer's edge.
//!
//! Dragging across the track reports how far the drawer is open, from 0 at
//! the left edge to 1 at the right, the same stream a real drawer emits
//! while it slides.

use crate::settings;
use crate::theme;
use kurbo::{Affine, Point, Rect, Size, Stroke};
use masonry::accesskit::{Node, Role};
use masonry::core::{
    AccessCtx, BoxConstraints, ChildrenIds, EventCtx, LayoutCtx, PaintCtx, PointerButton,
    PointerButtonEvent, PointerEvent, PointerUpdate, PropertiesMut, PropertiesRef, RegisterCtx,
    TextEvent, Update, UpdateCtx, Widget,
};
use masonry::vello::Scene;
use masonry::vello::peniko::{Brush, Fill};
use std::marker::PhantomData;
use xilem::core::{MessageContext, MessageResult, Mut, View, ViewMarker};
use xilem::{Pod, ViewCtx};

/// Action sent while the track is dragged
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SlideOffset(pub f64);

/// Horizontal drag track
pub struct SlideTrackWidget {
    /// Current slide offset in `[0, 1]`
    offset: f64,
    dragging: bool,
    /// Width from the last layout pass
    width: f64,
}

impl SlideTrackWidget {
    pub fn new(offset: f64) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            dragging: false,
            width: settings::demo::TRACK_WIDTH,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    fn set_offset(&mut self, offset: f64) {
        self.offset = offset.clamp(0.0, 1.0);
    }

    /// Emit the offset under `position` if it changed
    fn drag_to(&mut self, ctx: &mut EventCtx<'_>, position: Point) {
        let offset = offset_for_x(position.x, self.width);
        if offset != self.offset {
            self.offset = offset;
            ctx.request_render();
            ctx.submit_action::<SlideOffset>(SlideOffset(offset));
        }
    }
}

/// Map a local x coordinate to a slide offset
fn offset_for_x(x: f64, width: f64) -> f64 {
    if width <= 0.0 {
        return 0.0;
    }
    (x / width).clamp(0.0, 1.0)
}

impl Widget for SlideTrackWidget {
    type Action = SlideOffset;

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
        let size = bc.constrain(Size::new(
            settings::demo::TRACK_WIDTH,
            settings::demo::TRACK_HEIGHT,
        ));
        self.width = size.width;
        size
    }

    fn paint(&mut self, ctx: &mut PaintCtx<'_>, _props: &PropertiesRef<'_>, scene: &mut Scene) {
        let size = ctx.size();
        let radius = theme::size::TRACK_RADIUS;
        let track = Rect::from_origin_size(Point::ZERO, size).to_rounded_rect(radius);

        scene.fill(
            Fill::NonZero,
            Affine::IDENTITY,
            &Brush::Solid(theme::track::BACKGROUND),
            None,
            &track,
        );

        // Filled portion shows how far the drawer is open
        if self.offset > 0.0 {
            let filled = Rect::new(0.0, 0.0, size.width * self.offset, size.height)
                .to_rounded_rect(radius);
            scene.fill(
                Fill::NonZero,
                Affine::IDENTITY,
                &Brush::Solid(theme::track::FILL),
                None,
                &filled,
            );
        }

        scene.stroke(
            &Stroke::new(theme::size::TRACK_OUTLINE_WIDTH),
            Affine::IDENTITY,
            &Brush::Solid(theme::track::OUTLINE),
            None,
            &track,
        );
    }

    fn accessibility_role(&self) -> Role {
        Role::Slider
    }

    fn accessibility(
        &mut self,
        _ctx: &mut AccessCtx<'_>,
        _props: &PropertiesRef<'_>,
        node: &mut Node,
    ) {
        node.set_numeric_value(self.offset);
        node.set_min_numeric_value(0.0);
        node.set_max_numeric_value(1.0);
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
            PointerEvent::Down(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                state,
                ..
            }) => {
                ctx.capture_pointer();
                self.dragging = true;
                let local_pos = ctx.local_position(state.position);
                self.drag_to(ctx, local_pos);
            }
            PointerEvent::Move(PointerUpdate { current, .. }) => {
                if self.dragging {
                    let local_pos = ctx.local_position(current.position);
                    self.drag_to(ctx, local_pos);
                }
            }
            PointerEvent::Up(PointerButtonEvent {
                button: Some(PointerButton::Primary),
                ..
            }) => {
                if self.dragging {
                    self.dragging = false;
                    ctx.release_pointer();
                }
            }
            PointerEvent::Cancel(_) => {
                self.dragging = false;
                ctx.release_pointer();
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
    }
}

// ===== Xilem View Wrapper =====

/// Create a slide track view showing `offset`
pub fn slide_track_view<State, Action>(
    offset: f64,
    on_slide: impl Fn(&mut State, f64) + Send + Sync + 'static,
) -> SlideTrackView<State, Action>
where
    Action: 'static,
{
    SlideTrackView {
        offset,
        on_slide: Box::new(on_slide),
        phantom: PhantomData,
    }
}

type SlideCallback<State> = Box<dyn Fn(&mut State, f64) + Send + Sync>;

/// The Xilem View for SlideTrackWidget
#[must_use = "View values do nothing unless provided to Xilem."]
pub struct SlideTrackView<State, Action = ()> {
    offset: f64,
    on_slide: SlideCallback<State>,
    phantom: PhantomData<fn() -> (State, Action)>,
}

impl<State, Action> ViewMarker for SlideTrackView<State, Action> {}

impl<State: 'static, Action: 'static + Default> View<State, Action, ViewCtx>
    for SlideTrackView<State, Action>
{
    type Element = Pod<SlideTrackWidget>;
    type ViewState = ();

    fn build(&self, ctx: &mut ViewCtx, _app_state: &mut State) -> (Self::Element, Self::ViewState) {
        let pod = ctx.create_pod(SlideTrackWidget::new(self.offset));
        ctx.record_action(pod.new_widget.id());
        (pod, ())
    }

    fn rebuild(
        &self,
        _prev: &Self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        mut element: Mut<'_, Self::Element>,
        _app_state: &mut State,
    ) {
        // The offset can also change from outside, e.g. the arrow snapping
        // the drawer shut
        let mut widget = element.downcast::<SlideTrackWidget>();
        if widget.widget.offset != self.offset {
            widget.widget.set_offset(self.offset);
            widget.ctx.request_render();
        }
    }

    fn teardown(
        &self,
        _view_state: &mut Self::ViewState,
        _ctx: &mut ViewCtx,
        _element: Mut<'_, Self::Element>,
    ) {
    }

    fn message(
        &self,
        _view_state: &mut Self::ViewState,
        message: &mut MessageContext,
        _element: Mut<'_, Self::Element>,
        app_state: &mut State,
    ) -> MessageResult<Action> {
        match message.take_message::<SlideOffset>() {
            Some(action) => {
                (self.on_slide)(app_state, action.0);
                MessageResult::Nop
            }
            None => MessageResult::Stale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_for_x() {
        assert_eq!(offset_for_x(0.0, 200.0), 0.0);
        assert_eq!(offset_for_x(50.0, 200.0), 0.25);
        assert_eq!(offset_for_x(200.0, 200.0), 1.0);
    }

    #[test]
    fn test_offset_for_x_clamps_outside_track() {
        assert_eq!(offset_for_x(-20.0, 200.0), 0.0);
        assert_eq!(offset_for_x(500.0, 200.0), 1.0);
        assert_eq!(offset_for_x(10.0, 0.0), 0.0);
    }

    #[test]
    fn test_new_clamps_offset() {
        assert_eq!(SlideTrackWidget::new(2.0).offset(), 1.0);
        assert_eq!(SlideTrackWidget::new(-1.0).offset(), 0.0);
    }
}
