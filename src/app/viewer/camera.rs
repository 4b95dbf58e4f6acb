use eframe::egui::{Pos2, Rect, Vec2, pos2};

use crate::kg::GraphNode;

pub const MIN_ZOOM: f32 = 0.2;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_IN_STEP: f32 = 1.1;
pub const ZOOM_OUT_STEP: f32 = 0.9;

/// View transform: `screen = world * zoom + pan`. Zoom is always kept inside
/// [MIN_ZOOM, MAX_ZOOM]; out-of-range requests clamp instead of failing.
#[derive(Clone, Debug)]
pub struct Camera {
    zoom: f32,
    pan: Vec2,
    drag_anchor: Option<Vec2>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Vec2::ZERO,
            drag_anchor: None,
        }
    }
}

impl Camera {
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn to_screen(&self, world: Pos2) -> Pos2 {
        pos2(
            world.x * self.zoom + self.pan.x,
            world.y * self.zoom + self.pan.y,
        )
    }

    pub fn to_world(&self, screen: Pos2) -> Pos2 {
        pos2(
            (screen.x - self.pan.x) / self.zoom,
            (screen.y - self.pan.y) / self.zoom,
        )
    }

    /// Multiplicative zoom keeping the world point under `anchor` fixed.
    pub fn zoom_by(&mut self, factor: f32, anchor: Pos2) {
        let next = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        let world = self.to_world(anchor);
        self.zoom = next;
        self.pan = anchor.to_vec2() - world.to_vec2() * self.zoom;
    }

    pub fn zoom_in(&mut self, anchor: Pos2) {
        self.zoom_by(ZOOM_IN_STEP, anchor);
    }

    pub fn zoom_out(&mut self, anchor: Pos2) {
        self.zoom_by(ZOOM_OUT_STEP, anchor);
    }

    pub fn begin_drag(&mut self, pointer: Pos2) {
        self.drag_anchor = Some(pointer.to_vec2() - self.pan);
    }

    /// 1:1 pan: the world point grabbed at drag start stays under the cursor.
    pub fn drag_to(&mut self, pointer: Pos2) {
        if let Some(anchor) = self.drag_anchor {
            self.pan = pointer.to_vec2() - anchor;
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn center_on_point(&mut self, world: Pos2, viewport: Rect) {
        self.pan = viewport.center().to_vec2() - world.to_vec2() * self.zoom;
    }

    /// Places the bounding-box center of `nodes` at the viewport center.
    /// Zero or one node collapses the box to a point; no division involved.
    pub fn center_on(&mut self, nodes: &[GraphNode], viewport: Rect) {
        self.center_on_point(bounds_center(nodes), viewport);
    }

    pub fn reset_view(&mut self, nodes: &[GraphNode], viewport: Rect) {
        self.zoom = 1.0;
        self.center_on(nodes, viewport);
    }
}

fn bounds_center(nodes: &[GraphNode]) -> Pos2 {
    let Some(first) = nodes.first() else {
        return Pos2::ZERO;
    };

    let mut min_x = first.x;
    let mut max_x = first.x;
    let mut min_y = first.y;
    let mut max_y = first.y;
    for node in &nodes[1..] {
        min_x = min_x.min(node.x);
        max_x = max_x.max(node.x);
        min_y = min_y.min(node.y);
        max_y = max_y.max(node.y);
    }

    pos2((min_x + max_x) * 0.5, (min_y + max_y) * 0.5)
}
