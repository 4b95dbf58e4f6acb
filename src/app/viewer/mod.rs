mod camera;
mod hit;
mod render;
mod style;

pub use style::kind_color;

use eframe::egui::{self, PointerButton, Pos2, Rect, Sense, Ui, pos2, vec2};

use crate::kg::{GraphData, GraphNode};

use camera::Camera;

/// What happened inside the viewer this frame. Events flow out; the caller
/// owns selection and reacts as it sees fit.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewerEvent {
    NodeClicked(String),
    BackgroundClicked,
    HoverChanged(Option<String>),
}

pub struct GraphViewer {
    camera: Camera,
    hovered: Option<String>,
    viewport: Rect,
    pending_center: bool,
}

impl Default for GraphViewer {
    fn default() -> Self {
        Self {
            camera: Camera::default(),
            hovered: None,
            viewport: Rect::from_min_size(Pos2::ZERO, vec2(1280.0, 800.0)),
            pending_center: true,
        }
    }
}

impl GraphViewer {
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    pub fn zoom(&self) -> f32 {
        self.camera.zoom()
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom_in(self.viewport.center());
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom_out(self.viewport.center());
    }

    pub fn reset_view(&mut self, graph: &GraphData) {
        self.camera.reset_view(&graph.nodes, self.viewport);
    }

    pub fn center_graph(&mut self, graph: &GraphData) {
        self.camera.center_on(&graph.nodes, self.viewport);
    }

    pub fn center_on_node(&mut self, node: &GraphNode) {
        self.camera
            .center_on_point(pos2(node.x, node.y), self.viewport);
    }

    /// Called when the caller swaps in a new graph: hover must not point at
    /// a node that no longer exists, and the next frame re-centers.
    pub fn graph_replaced(&mut self, graph: &GraphData) {
        if self
            .hovered
            .as_deref()
            .is_some_and(|id| !graph.contains(id))
        {
            self.hovered = None;
        }
        self.camera.end_drag();
        self.pending_center = true;
    }

    fn note_hover(&mut self, hit: Option<&GraphNode>) -> Option<ViewerEvent> {
        let id = hit.map(|node| node.id.clone());
        if id == self.hovered {
            return None;
        }
        self.hovered = id.clone();
        Some(ViewerEvent::HoverChanged(id))
    }

    pub fn show(&mut self, ui: &mut Ui, graph: &GraphData, selected: Option<&str>) -> Vec<ViewerEvent> {
        let (viewport, response) =
            ui.allocate_exact_size(ui.available_size(), Sense::click_and_drag());
        self.viewport = viewport;

        if self.pending_center {
            self.camera.reset_view(&graph.nodes, viewport);
            self.pending_center = false;
        }

        let mut events = Vec::new();

        // wheel: one fixed multiplicative step per event, viewport-center anchored
        if response.hovered() {
            let scroll = ui.input(|input| input.raw_scroll_delta.y);
            if scroll > f32::EPSILON {
                self.camera.zoom_in(viewport.center());
            } else if scroll < -f32::EPSILON {
                self.camera.zoom_out(viewport.center());
            }
        }

        // a press on a node is a click, never a pan
        if response.drag_started_by(PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
            && hit::hit_test(&graph.nodes, &self.camera, pointer).is_none()
        {
            self.camera.begin_drag(pointer);
        }

        if self.camera.dragging()
            && response.dragged_by(PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            self.camera.drag_to(pointer);
        }

        if response.drag_stopped() || (self.camera.dragging() && !response.dragged()) {
            self.camera.end_drag();
        }

        if !self.camera.dragging() {
            let hit = response
                .hover_pos()
                .and_then(|pointer| hit::hit_test(&graph.nodes, &self.camera, pointer));
            if let Some(event) = self.note_hover(hit) {
                events.push(event);
            }
            if self.hovered.is_some() {
                ui.output_mut(|output| {
                    output.cursor_icon = egui::CursorIcon::PointingHand;
                });
            }
        }

        if response.clicked_by(PointerButton::Primary)
            && let Some(pointer) = response.interact_pointer_pos()
        {
            match hit::hit_test(&graph.nodes, &self.camera, pointer) {
                Some(node) => events.push(ViewerEvent::NodeClicked(node.id.clone())),
                None => events.push(ViewerEvent::BackgroundClicked),
            }
        }

        let painter = ui.painter_at(viewport);
        render::draw_graph(
            &painter,
            viewport,
            graph,
            &self.camera,
            selected,
            self.hovered.as_deref(),
        );

        if self.camera.dragging() {
            ui.ctx().request_repaint();
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kg::{GraphData, NodeKind};

    fn node(id: &str, x: f32) -> GraphNode {
        GraphNode {
            id: id.to_owned(),
            label: id.to_owned(),
            kind: NodeKind::Disease,
            size: 10.0,
            x,
            y: 0.0,
        }
    }

    fn graph(ids: &[&str]) -> GraphData {
        GraphData::new(
            "g".to_owned(),
            ids.iter().enumerate().map(|(i, id)| node(id, i as f32 * 100.0)).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn hover_emits_once_per_transition() {
        let graph = graph(&["a", "b"]);
        let mut viewer = GraphViewer::default();
        let mut events = Vec::new();

        // over A, still over A, empty space, over B
        events.extend(viewer.note_hover(graph.node("a")));
        events.extend(viewer.note_hover(graph.node("a")));
        events.extend(viewer.note_hover(None));
        events.extend(viewer.note_hover(graph.node("b")));

        assert_eq!(
            events,
            vec![
                ViewerEvent::HoverChanged(Some("a".to_owned())),
                ViewerEvent::HoverChanged(None),
                ViewerEvent::HoverChanged(Some("b".to_owned())),
            ]
        );
    }

    #[test]
    fn unhover_from_nothing_is_silent() {
        let mut viewer = GraphViewer::default();
        assert_eq!(viewer.note_hover(None), None);
    }

    #[test]
    fn graph_swap_clears_stale_hover() {
        let old = graph(&["a", "b"]);
        let mut viewer = GraphViewer::default();
        viewer.note_hover(old.node("b"));
        assert_eq!(viewer.hovered(), Some("b"));

        let new = graph(&["a", "c"]);
        viewer.graph_replaced(&new);
        assert_eq!(viewer.hovered(), None);
        assert!(viewer.pending_center);

        // a hover id that still resolves survives the swap
        viewer.note_hover(new.node("a"));
        viewer.graph_replaced(&graph(&["a"]));
        assert_eq!(viewer.hovered(), Some("a"));
    }
}
