mod demo;
mod load;

pub use demo::demo_graph;
pub use load::load_graph_file;

use std::collections::HashMap;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Gene,
    Drug,
    Disease,
    Protein,
    Pathway,
    Organism,
    Unknown,
}

impl NodeKind {
    pub const ALL: [NodeKind; 7] = [
        Self::Gene,
        Self::Drug,
        Self::Disease,
        Self::Protein,
        Self::Pathway,
        Self::Organism,
        Self::Unknown,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Gene => "gene",
            Self::Drug => "drug",
            Self::Disease => "disease",
            Self::Protein => "protein",
            Self::Pathway => "pathway",
            Self::Organism => "organism",
            Self::Unknown => "other",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "gene" => Self::Gene,
            "drug" | "compound" | "chemical" => Self::Drug,
            "disease" | "disorder" => Self::Disease,
            "protein" => Self::Protein,
            "pathway" => Self::Pathway,
            "organism" | "species" | "microbe" => Self::Organism,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub size: f32,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: f32,
    pub kind: String,
}

#[derive(Clone, Debug)]
pub struct GraphData {
    pub name: String,
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
    index_by_id: HashMap<String, usize>,
}

impl GraphData {
    pub fn new(name: String, nodes: Vec<GraphNode>, edges: Vec<GraphEdge>) -> Self {
        let mut index_by_id = HashMap::with_capacity(nodes.len());
        let mut kept = Vec::with_capacity(nodes.len());

        for node in nodes {
            if index_by_id.contains_key(&node.id) {
                log::warn!("duplicate node id {:?} dropped", node.id);
                continue;
            }
            index_by_id.insert(node.id.clone(), kept.len());
            kept.push(node);
        }

        Self {
            name,
            nodes: kept,
            edges,
            index_by_id,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index_of(id).map(|index| &self.nodes[index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_by_id.contains_key(id)
    }

    /// Neighbors over both edge directions, in node order, each id once.
    pub fn neighbors(&self, id: &str) -> Vec<&GraphNode> {
        let mut indices = Vec::new();
        for edge in &self.edges {
            let other = if edge.source == id {
                edge.target.as_str()
            } else if edge.target == id {
                edge.source.as_str()
            } else {
                continue;
            };

            if other != id
                && let Some(index) = self.index_of(other)
                && !indices.contains(&index)
            {
                indices.push(index);
            }
        }
        indices.sort_unstable();
        indices.into_iter().map(|index| &self.nodes[index]).collect()
    }

    pub fn kind_counts(&self) -> HashMap<NodeKind, usize> {
        let mut counts = HashMap::new();
        for node in &self.nodes {
            *counts.entry(node.kind).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str) -> GraphNode {
        GraphNode {
            id: id.to_owned(),
            label: id.to_uppercase(),
            kind: NodeKind::Gene,
            size: 12.0,
            x: 0.0,
            y: 0.0,
        }
    }

    fn edge(id: &str, source: &str, target: &str) -> GraphEdge {
        GraphEdge {
            id: id.to_owned(),
            source: source.to_owned(),
            target: target.to_owned(),
            weight: 0.5,
            kind: "interacts_with".to_owned(),
        }
    }

    #[test]
    fn duplicate_node_ids_keep_first() {
        let mut second = node("a");
        second.label = "SHADOWED".to_owned();
        let graph = GraphData::new("g".to_owned(), vec![node("a"), second, node("b")], Vec::new());

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.node("a").map(|n| n.label.as_str()), Some("A"));
        assert_eq!(graph.index_of("b"), Some(1));
    }

    #[test]
    fn neighbors_cover_both_directions_without_repeats() {
        let graph = GraphData::new(
            "g".to_owned(),
            vec![node("a"), node("b"), node("c")],
            vec![
                edge("e1", "a", "b"),
                edge("e2", "c", "a"),
                edge("e3", "b", "a"),
                edge("e4", "a", "missing"),
            ],
        );

        let ids = graph
            .neighbors("a")
            .into_iter()
            .map(|n| n.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["b", "c"]);
    }

    #[test]
    fn kind_labels_round_trip() {
        for kind in NodeKind::ALL {
            if kind != NodeKind::Unknown {
                assert_eq!(NodeKind::from_label(kind.label()), kind);
            }
        }
        assert_eq!(NodeKind::from_label("Compound"), NodeKind::Drug);
        assert_eq!(NodeKind::from_label("weird"), NodeKind::Unknown);
    }
}
