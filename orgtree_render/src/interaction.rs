// Copyright 2025 the Orgtree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer handling: rubber-band selection, click forwarding, hover.

use kurbo::{Point, Rect};
use orgtree_scene::{
    Canvas, Fill, Graphics, LocalNode, NodeFlags, NodeId, PointerEvent, PointerKind, Scene, Stroke,
};
use tracing::{debug, trace};

use crate::events::TreeEvent;
use crate::node_view::ACCENT;
use crate::renderer::TreeRenderer;

/// Fill opacity of the rubber band.
pub const BAND_ALPHA: f64 = 0.2;

#[derive(Copy, Clone, Debug, PartialEq)]
enum DragState {
    Idle,
    Dragging { anchor: Point, current: Point },
}

/// Turns pointer events into selection and expansion changes on a [`TreeRenderer`].
///
/// A press with Ctrl or Meta held starts a rubber band; moves stretch it;
/// the release selects every view whose center falls inside it, replacing the
/// selection unless Shift is held at release. Plain clicks go to the
/// renderer's click dispatch and plain moves drive hover.
///
/// The controller keeps no selection of its own. It forwards the renderer's
/// events and follows every single-node selection change with a
/// [`TreeEvent::SelectionChange`] carrying the renderer's whole set.
#[derive(Debug)]
pub struct SelectionController {
    band: Option<NodeId>,
    drag: DragState,
    events: Vec<TreeEvent>,
}

impl SelectionController {
    /// Create the rubber-band visual on top of everything else in `canvas`.
    pub fn new(canvas: &mut Canvas) -> Self {
        let local = LocalNode {
            z_index: i32::MAX,
            flags: NodeFlags::VISIBLE,
            ..LocalNode::default()
        };
        let band = canvas.scene.insert(None, local);
        Self {
            band: Some(band),
            drag: DragState::Idle,
            events: Vec::new(),
        }
    }

    /// Feed one pointer event. Returns `true` if the event was consumed by the rubber band.
    ///
    /// After [`SelectionController::destroy`] every event is ignored.
    pub fn handle_pointer(
        &mut self,
        renderer: &mut TreeRenderer,
        canvas: &mut Canvas,
        event: &PointerEvent,
    ) -> bool {
        let Some(band) = self.band else {
            return false;
        };
        let point = event.local_position(&canvas.viewport);
        let consumed = match (self.drag, event.kind) {
            (DragState::Idle, PointerKind::Down) if event.has_command_modifier() => {
                trace!(?point, "rubber band started");
                self.drag = DragState::Dragging {
                    anchor: point,
                    current: point,
                };
                draw_band(&mut canvas.scene, band, Rect::from_points(point, point));
                true
            }
            (DragState::Dragging { anchor, .. }, PointerKind::Move) => {
                self.drag = DragState::Dragging {
                    anchor,
                    current: point,
                };
                draw_band(&mut canvas.scene, band, Rect::from_points(anchor, point));
                true
            }
            (DragState::Dragging { anchor, current }, PointerKind::Up) => {
                self.drag = DragState::Idle;
                canvas.scene.set_graphics(band, Graphics::new());
                canvas.scene.set_local_bounds(band, Rect::ZERO);
                let bounds = Rect::from_points(anchor, current);
                let _ = self.select_nodes_in_bounds(
                    renderer,
                    &mut canvas.scene,
                    bounds,
                    event.has_shift(),
                );
                true
            }
            (DragState::Dragging { .. }, _) => true,
            (DragState::Idle, PointerKind::Move) => {
                let _ = renderer.hover_at(&mut canvas.scene, point);
                false
            }
            (DragState::Idle, PointerKind::Click) if !event.has_command_modifier() => {
                let _ = renderer.handle_click(canvas, point);
                false
            }
            (DragState::Idle, _) => false,
        };
        self.relay(renderer);
        consumed
    }

    /// Select every rendered view whose center lies in `bounds`.
    ///
    /// Containment is half-open: a center on the left or top edge is inside,
    /// on the right or bottom edge it is not. Unless `additive`, the previous
    /// selection is replaced. Always queues a [`TreeEvent::SelectionChange`],
    /// even when nothing matched. Returns the number of views matched.
    pub fn select_nodes_in_bounds(
        &mut self,
        renderer: &mut TreeRenderer,
        scene: &mut Scene,
        bounds: Rect,
        additive: bool,
    ) -> usize {
        self.relay(renderer);
        let bounds = bounds.abs();
        let hits: Vec<String> = renderer
            .views()
            .filter(|v| bounds.contains(v.center()))
            .map(|v| v.id().to_owned())
            .collect();
        let matched = hits.len();
        let _ = renderer.select_ids(scene, hits, additive);
        debug!(
            matched,
            additive,
            selected = renderer.selected_count(),
            "rectangle selection"
        );
        self.events
            .push(TreeEvent::SelectionChange(renderer.selected_ids().clone()));
        matched
    }

    /// Empty the renderer's selection and announce it.
    pub fn clear_selection(&mut self, renderer: &mut TreeRenderer, scene: &mut Scene) {
        self.relay(renderer);
        renderer.clear_selection(scene);
        self.events
            .push(TreeEvent::SelectionChange(renderer.selected_ids().clone()));
    }

    /// Number of selected ids, as held by the renderer.
    pub fn selected_count(&self, renderer: &TreeRenderer) -> usize {
        renderer.selected_count()
    }

    /// Whether a rubber band is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Current rubber band in canvas-local coordinates.
    pub fn selection_bounds(&self) -> Option<Rect> {
        match self.drag {
            DragState::Dragging { anchor, current } => Some(Rect::from_points(anchor, current)),
            DragState::Idle => None,
        }
    }

    /// Pick up the renderer's pending events and take everything queued.
    pub fn drain_events(&mut self, renderer: &mut TreeRenderer) -> Vec<TreeEvent> {
        self.relay(renderer);
        core::mem::take(&mut self.events)
    }

    /// Remove the rubber-band visual and stop handling input. Safe to call more than once.
    pub fn destroy(&mut self, canvas: &mut Canvas) {
        if let Some(band) = self.band.take() {
            canvas.scene.remove(band);
            self.drag = DragState::Idle;
            debug!("selection controller destroyed");
        }
    }

    fn relay(&mut self, renderer: &mut TreeRenderer) {
        for event in renderer.drain_events() {
            let announce = matches!(event, TreeEvent::Select { .. });
            self.events.push(event);
            if announce {
                self.events
                    .push(TreeEvent::SelectionChange(renderer.selected_ids().clone()));
            }
        }
    }
}

fn draw_band(scene: &mut Scene, band: NodeId, rect: Rect) {
    let mut g = Graphics::new();
    g.rect(
        rect,
        Some(Fill::with_alpha(ACCENT, BAND_ALPHA)),
        Some(Stroke::new(1.0, ACCENT)),
    );
    scene.set_local_bounds(band, rect);
    scene.set_graphics(band, g);
}
