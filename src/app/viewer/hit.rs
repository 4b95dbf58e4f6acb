use eframe::egui::{Pos2, pos2};

use crate::kg::GraphNode;

use super::camera::Camera;

/// Topmost node under a screen point: the pointer is converted to world
/// space and the node list scanned linearly; a node matches when the
/// distance to its center is within its radius. Overlap ties go to the
/// first node in the sequence.
pub fn hit_test<'a>(
    nodes: &'a [GraphNode],
    camera: &Camera,
    pointer: Pos2,
) -> Option<&'a GraphNode> {
    let world = camera.to_world(pointer);
    nodes
        .iter()
        .find(|node| pos2(node.x, node.y).distance(world) <= node.size)
}
