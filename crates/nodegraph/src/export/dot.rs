//! DOT format export for Graphviz visualization.

use crate::graph::{Category, Graph, RelationType};
use std::collections::HashMap;

/// Options for styling DOT export
#[derive(Debug, Clone)]
pub struct DotOptions {
    /// Node fill colors by category (first matching category wins)
    pub category_colors: HashMap<Category, String>,
    /// Edge colors by relation type
    pub relation_colors: HashMap<RelationType, String>,
    /// Graph layout direction: LR, TB, RL, BT
    pub rankdir: String,
    /// Append the edge weight to edge labels
    pub show_weights: bool,
}

impl Default for DotOptions {
    fn default() -> Self {
        DotOptions {
            category_colors: HashMap::new(),
            relation_colors: HashMap::new(),
            rankdir: "LR".to_string(),
            show_weights: false,
        }
    }
}

/// Export graph to Graphviz DOT format
pub fn export_dot(graph: &Graph) -> String {
    export_dot_styled(graph, &DotOptions::default())
}

/// Export graph to Graphviz DOT format with custom styling
pub fn export_dot_styled(graph: &Graph, options: &DotOptions) -> String {
    let mut output = String::new();

    // Header
    output.push_str("digraph G {\n");
    output.push_str(&format!("    rankdir={};\n", options.rankdir));
    output.push_str("    node [shape=box, style=filled];\n\n");

    for (ix, node) in graph.nodes() {
        let label = if node.label().is_empty() {
            node.id()
        } else {
            node.label()
        };
        let color = node
            .categories()
            .iter()
            .find_map(|c| options.category_colors.get(c))
            .map(String::as_str)
            .unwrap_or("#FFFFFF");
        output.push_str(&format!(
            "    {ix} [label=\"{}\", fillcolor=\"{color}\"];\n",
            escape_dot_label(label)
        ));
    }

    output.push('\n');

    for (_, edge) in graph.edges() {
        let mut label = escape_dot_label(edge.label());
        if *edge.relation_type() != RelationType::Default {
            label.push_str(&format!(
                " [{}]",
                escape_dot_label(edge.relation_type().as_str())
            ));
        }
        if options.show_weights {
            label.push_str(&format!(" ({})", edge.weight()));
        }

        let color = options
            .relation_colors
            .get(edge.relation_type())
            .map(|c| format!(", color=\"{c}\""))
            .unwrap_or_default();

        output.push_str(&format!(
            "    {} -> {} [label=\"{label}\"{color}];\n",
            edge.source(),
            edge.destination()
        ));
    }

    output.push_str("}\n");
    output
}

/// Escape special characters for DOT labels
fn escape_dot_label(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}
