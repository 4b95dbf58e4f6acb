use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::util::stable_pair;

use super::{GraphData, GraphEdge, GraphNode, NodeKind};

const HUB_RING_RADIUS: f32 = 240.0;
const SATELLITE_RADIUS: f32 = 95.0;

const HUBS: [(&str, &str, NodeKind); 6] = [
    ("tp53", "TP53", NodeKind::Gene),
    ("doxorubicin", "Doxorubicin", NodeKind::Drug),
    ("osteosarcoma", "Osteosarcoma", NodeKind::Disease),
    ("col1a1", "Collagen I", NodeKind::Protein),
    ("apoptosis", "Apoptosis pathway", NodeKind::Pathway),
    ("s_aureus", "S. aureus", NodeKind::Organism),
];

fn seeded_unit(seed: u64, tag: &str) -> f32 {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    tag.hash(&mut hasher);
    (hasher.finish() & 0xffff) as f32 / 0xffff as f32
}

/// Built-in sample knowledge graph used when no `--graph` file is given.
/// Fully determined by the seed; every edge endpoint exists.
pub fn demo_graph(seed: u64) -> GraphData {
    let mut nodes = Vec::new();
    let mut edges = Vec::new();

    for (hub_index, (id, label, kind)) in HUBS.iter().enumerate() {
        let angle = (hub_index as f32 / HUBS.len() as f32) * std::f32::consts::TAU;
        nodes.push(GraphNode {
            id: (*id).to_owned(),
            label: (*label).to_owned(),
            kind: *kind,
            size: 20.0,
            x: angle.cos() * HUB_RING_RADIUS,
            y: angle.sin() * HUB_RING_RADIUS,
        });

        let satellites = 5 + (seeded_unit(seed, id) * 4.0) as usize;
        for satellite in 0..satellites {
            let member_id = format!("{id}_{satellite}");
            let (jx, jy) = stable_pair(&member_id);
            let spin = (satellite as f32 * 0.618_034 + seeded_unit(seed, &member_id))
                * std::f32::consts::TAU;
            let reach = SATELLITE_RADIUS * (0.7 + 0.3 * seeded_unit(seed, &format!("r/{member_id}")));

            nodes.push(GraphNode {
                id: member_id.clone(),
                label: format!("{label} #{satellite}"),
                kind: *kind,
                size: 9.0 + jx.abs() * 5.0,
                x: angle.cos() * HUB_RING_RADIUS + spin.cos() * reach + jx * 12.0,
                y: angle.sin() * HUB_RING_RADIUS + spin.sin() * reach + jy * 12.0,
            });

            edges.push(GraphEdge {
                id: format!("e_{member_id}"),
                source: (*id).to_owned(),
                target: member_id.clone(),
                weight: 0.25 + 0.7 * seeded_unit(seed, &format!("w/{member_id}")),
                kind: "associated_with".to_owned(),
            });

            // occasional cross link to the next hub keeps the ring connected
            if satellite == 0 {
                let next_hub = HUBS[(hub_index + 1) % HUBS.len()].0;
                edges.push(GraphEdge {
                    id: format!("x_{member_id}"),
                    source: member_id,
                    target: next_hub.to_owned(),
                    weight: 0.35,
                    kind: "interacts_with".to_owned(),
                });
            }
        }
    }

    for (hub_index, (id, _, _)) in HUBS.iter().enumerate() {
        let next = HUBS[(hub_index + 1) % HUBS.len()].0;
        edges.push(GraphEdge {
            id: format!("ring_{id}"),
            source: (*id).to_owned(),
            target: next.to_owned(),
            weight: 0.8,
            kind: "related_to".to_owned(),
        });
    }

    GraphData::new(format!("demo graph (seed {seed})"), nodes, edges)
}
