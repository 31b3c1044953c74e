//! JSON format export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js force-directed layouts.

use crate::error::{GraphError, Result};
use crate::graph::{Edge, Graph, Node};
use serde_json::{json, Value};
use std::collections::HashSet;

/// Export graph to D3.js-compatible JSON format
pub fn export_json(graph: &Graph) -> Result<String> {
    export_json_filtered(graph, |_| true, true)
}

/// Export filtered subset of graph to JSON
///
/// Edges are included only when `include_edges` is set and both endpoints
/// pass the filter.
pub fn export_json_filtered(
    graph: &Graph,
    node_filter: impl Fn(&Node) -> bool,
    include_edges: bool,
) -> Result<String> {
    let mut nodes_array = Vec::new();
    let mut kept = HashSet::new();

    for (ix, node) in graph.nodes() {
        if node_filter(node) {
            nodes_array.push(node_to_json(node));
            kept.insert(ix);
        }
    }

    let mut links_array = Vec::new();
    if include_edges {
        for (_, edge) in graph.edges() {
            if kept.contains(&edge.source()) && kept.contains(&edge.destination()) {
                links_array.push(edge_to_json(graph, edge));
            }
        }
    }

    let result = json!({
        "nodes": nodes_array,
        "links": links_array,
    });

    serde_json::to_string_pretty(&result)
        .map_err(|e| GraphError::serialization("Failed to render graph as JSON", Some(e)))
}

/// Convert node to JSON object
fn node_to_json(node: &Node) -> Value {
    json!({
        "id": node.id(),
        "label": node.label(),
        "categories": node.categories(),
    })
}

/// Convert edge to JSON object, addressing endpoints by node id
fn edge_to_json(graph: &Graph, edge: &Edge) -> Value {
    let endpoint = |ix| graph.node(ix).map(Node::id);
    json!({
        "id": edge.id(),
        "label": edge.label(),
        "source": endpoint(edge.source()),
        "target": endpoint(edge.destination()),
        "type": edge.relation_type(),
        "weight": edge.weight(),
    })
}
