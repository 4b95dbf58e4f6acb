use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::{GraphData, GraphEdge, GraphNode, NodeKind};

const DEFAULT_NODE_SIZE: f32 = 12.0;

#[derive(Debug, Deserialize)]
struct GraphDocument {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    nodes: Vec<NodeRecord>,
    #[serde(default)]
    edges: Vec<EdgeRecord>,
}

#[derive(Debug, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(default)]
    label: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    size: Option<f32>,
    #[serde(default)]
    x: f32,
    #[serde(default)]
    y: f32,
}

#[derive(Debug, Deserialize)]
struct EdgeRecord {
    #[serde(default)]
    id: Option<String>,
    source: String,
    target: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    weight: Option<f32>,
}

pub fn load_graph_file(path: &Path) -> Result<GraphData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read graph file {}", path.display()))?;
    let document: GraphDocument = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse graph file {}", path.display()))?;

    let name = document
        .name
        .unwrap_or_else(|| match path.file_stem().and_then(|stem| stem.to_str()) {
            Some(stem) => stem.to_owned(),
            None => "graph".to_owned(),
        });

    let graph = graph_from_document(name, document.nodes, document.edges);
    log::info!(
        "loaded {} nodes / {} edges from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}

fn graph_from_document(
    name: String,
    node_records: Vec<NodeRecord>,
    edge_records: Vec<EdgeRecord>,
) -> GraphData {
    let mut nodes = Vec::with_capacity(node_records.len());
    for record in node_records {
        let id = record.id.trim().to_owned();
        if id.is_empty() {
            log::warn!("node record with empty id dropped");
            continue;
        }

        let size = record.size.unwrap_or(DEFAULT_NODE_SIZE);
        if !size.is_finite() || size <= 0.0 {
            log::warn!("node {id:?} with non-positive size {size} dropped");
            continue;
        }

        let kind = record
            .kind
            .as_deref()
            .map(NodeKind::from_label)
            .unwrap_or(NodeKind::Unknown);

        nodes.push(GraphNode {
            label: record.label.filter(|label| !label.is_empty()).unwrap_or_else(|| id.clone()),
            id,
            kind,
            size,
            x: record.x,
            y: record.y,
        });
    }

    let mut edges = Vec::with_capacity(edge_records.len());
    for (index, record) in edge_records.into_iter().enumerate() {
        if record.source.is_empty() || record.target.is_empty() {
            log::warn!("edge record without endpoints dropped");
            continue;
        }

        let weight = record.weight.unwrap_or(0.5);
        let weight = if weight.is_finite() {
            weight.clamp(0.0, 1.0)
        } else {
            0.5
        };

        edges.push(GraphEdge {
            id: record.id.unwrap_or_else(|| format!("e{index}")),
            source: record.source,
            target: record.target,
            weight,
            kind: record.kind.unwrap_or_default(),
        });
    }

    GraphData::new(name, nodes, edges)
}
