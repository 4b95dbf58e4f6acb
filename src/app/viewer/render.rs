use eframe::egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Stroke, pos2, vec2};

use crate::kg::{GraphData, GraphEdge, GraphNode};
use crate::util::truncate_label;

use super::camera::Camera;
use super::style;

const LABEL_MAX_CHARS: usize = 24;
const MIN_SCREEN_RADIUS: f32 = 2.0;

/// Full frame pass: background, then edges, then nodes with labels. Pure
/// function of the inputs; overlay chrome (legend, tooltips) is the
/// caller's business.
pub fn draw_graph(
    painter: &Painter,
    viewport: Rect,
    graph: &GraphData,
    camera: &Camera,
    selected: Option<&str>,
    hovered: Option<&str>,
) {
    if viewport.width() < 1.0 || viewport.height() < 1.0 {
        return;
    }

    draw_background(painter, viewport, camera);

    for (source, target, edge) in edge_segments(graph) {
        let start = camera.to_screen(pos2(source.x, source.y));
        let end = camera.to_screen(pos2(target.x, target.y));
        if !segment_visible(viewport, start, end) {
            continue;
        }
        painter.line_segment([start, end], style::edge_stroke(edge.weight));
    }

    for node in &graph.nodes {
        let is_selected = selected == Some(node.id.as_str());
        let is_hovered = hovered == Some(node.id.as_str());
        draw_node(painter, viewport, camera, node, is_selected, is_hovered);
    }
}

/// Edges whose endpoints both resolve in the graph; dangling references are
/// skipped without error.
pub fn edge_segments<'a>(
    graph: &'a GraphData,
) -> impl Iterator<Item = (&'a GraphNode, &'a GraphNode, &'a GraphEdge)> + 'a {
    graph.edges.iter().filter_map(|edge| {
        let source = graph.node(&edge.source)?;
        let target = graph.node(&edge.target)?;
        Some((source, target, edge))
    })
}

fn draw_background(painter: &Painter, viewport: Rect, camera: &Camera) {
    painter.rect_filled(viewport, 0.0, Color32::from_rgb(17, 21, 28));

    let step = (64.0 * camera.zoom()).max(24.0);
    let grid_stroke = Stroke::new(1.0, Color32::from_rgba_unmultiplied(58, 66, 80, 60));
    let origin = camera.to_screen(Pos2::ZERO);

    let mut x = viewport.left() + (origin.x - viewport.left()).rem_euclid(step);
    while x < viewport.right() {
        painter.line_segment(
            [pos2(x, viewport.top()), pos2(x, viewport.bottom())],
            grid_stroke,
        );
        x += step;
    }

    let mut y = viewport.top() + (origin.y - viewport.top()).rem_euclid(step);
    while y < viewport.bottom() {
        painter.line_segment(
            [pos2(viewport.left(), y), pos2(viewport.right(), y)],
            grid_stroke,
        );
        y += step;
    }
}

fn draw_node(
    painter: &Painter,
    viewport: Rect,
    camera: &Camera,
    node: &GraphNode,
    is_selected: bool,
    is_hovered: bool,
) {
    let highlighted = is_selected || is_hovered;
    let position = camera.to_screen(pos2(node.x, node.y));
    let scale = if highlighted { style::HIGHLIGHT_SCALE } else { 1.0 };
    let radius = (node.size * scale * camera.zoom()).max(MIN_SCREEN_RADIUS);

    if !circle_visible(viewport, position, radius * style::HALO_SCALE + 40.0) {
        return;
    }

    let color = style::kind_color(node.kind);

    if highlighted {
        painter.circle_filled(
            position,
            node.size * style::HALO_SCALE * camera.zoom(),
            style::with_alpha(color, 45),
        );
    }

    // two-tone fill: kind-colored disc with a lighter off-center core
    painter.circle_filled(position, radius, style::with_alpha(color, 235));
    painter.circle_filled(
        position - vec2(radius * 0.25, radius * 0.25),
        radius * 0.55,
        style::with_alpha(style::lighten(color, 0.45), 200),
    );

    let stroke = if is_selected {
        Stroke::new(2.0, Color32::WHITE)
    } else {
        Stroke::new(1.0, style::with_alpha(style::lighten(color, 0.25), 110))
    };
    painter.circle_stroke(position, radius, stroke);

    painter.text(
        position + vec2(0.0, radius + 4.0),
        Align2::CENTER_TOP,
        truncate_label(&node.label, LABEL_MAX_CHARS),
        FontId::proportional(style::label_font_size(camera.zoom())),
        Color32::from_gray(222),
    );
}

fn circle_visible(viewport: Rect, position: Pos2, radius: f32) -> bool {
    !(position.x + radius < viewport.left()
        || position.x - radius > viewport.right()
        || position.y + radius < viewport.top()
        || position.y - radius > viewport.bottom())
}

fn segment_visible(viewport: Rect, start: Pos2, end: Pos2) -> bool {
    let min_x = start.x.min(end.x);
    let max_x = start.x.max(end.x);
    let min_y = start.y.min(end.y);
    let max_y = start.y.max(end.y);

    !(max_x < viewport.left()
        || min_x > viewport.right()
        || max_y < viewport.top()
        || min_y > viewport.bottom())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::kg::NodeKind;

    fn node(id: &str, x: f32, y: f32) -> GraphNode {
        GraphNode {
            id: id.to_owned(),
            label: id.to_owned(),
            kind: NodeKind::Pathway,
            size: 14.0,
            x,
            y,
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            id: id.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            weight: 0.6,
            kind: "targets".to_owned(),
        }
    }

    fn graph_with_dangling_edge() -> GraphData {
        GraphData::new(
            "g".to_owned(),
            vec![node("a", 0.0, 0.0), node("b", 120.0, 60.0)],
            vec![edge("ok", "a", "b"), edge("dangling", "a", "ghost")],
        )
    }

    #[test]
    fn dangling_edges_are_omitted() {
        let graph = graph_with_dangling_edge();
        let segments = edge_segments(&graph).collect::<Vec<_>>();
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].2.id, "ok");
    }

    #[test]
    fn rendering_a_partial_graph_does_not_panic() {
        let graph = graph_with_dangling_edge();
        let camera = Camera::default();
        let ctx = eframe::egui::Context::default();

        let _ = ctx.run(Default::default(), |ctx| {
            eframe::egui::CentralPanel::default().show(ctx, |ui| {
                let viewport = ui.max_rect();
                draw_graph(ui.painter(), viewport, &graph, &camera, Some("a"), Some("ghost"));

                // zero-sized surface must be a silent no-op
                let empty = Rect::from_min_size(viewport.min, eframe::egui::Vec2::ZERO);
                draw_graph(ui.painter(), empty, &graph, &camera, None, None);
            });
        });
    }

    #[test]
    fn offscreen_geometry_is_culled() {
        let viewport = Rect::from_min_size(Pos2::ZERO, vec2(400.0, 300.0));
        assert!(!circle_visible(viewport, pos2(-100.0, -100.0), 10.0));
        assert!(circle_visible(viewport, pos2(-100.0, -100.0), 200.0));
        assert!(!segment_visible(viewport, pos2(500.0, 10.0), pos2(600.0, 20.0)));
        assert!(segment_visible(viewport, pos2(-50.0, 150.0), pos2(450.0, 150.0)));
    }
}
