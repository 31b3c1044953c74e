//! Core graph types: handles, tags, nodes and edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Handle of a node inside the arena of the graph that created it.
///
/// Handles are only meaningful for their own graph. Slots are never reused,
/// so a handle to a removed node resolves to nothing rather than to another node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeIndex(pub(crate) usize);

impl NodeIndex {
    /// Position of the node slot in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// Handle of an edge inside the arena of the graph that created it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeIndex(pub(crate) usize);

impl EdgeIndex {
    /// Position of the edge slot in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Identity of a graph instance, stored on every entity it owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GraphId(Uuid);

impl GraphId {
    /// Create a new random graph id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for GraphId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of relationship an edge expresses.
///
/// The set is open: besides [`RelationType::Default`] callers may use any
/// named relation. Relation types compare and hash by name, so
/// `Named("DEFAULT")` is the same relation as `Default`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RelationType {
    /// The relation used when none is given
    #[default]
    Default,
    /// Caller-defined relation
    Named(String),
}

impl RelationType {
    /// Create a named relation type. `"DEFAULT"` maps to [`RelationType::Default`].
    pub fn named(name: impl Into<String>) -> Self {
        Self::from(name.into())
    }

    /// Name of the relation type.
    pub fn as_str(&self) -> &str {
        match self {
            RelationType::Default => "DEFAULT",
            RelationType::Named(name) => name,
        }
    }
}

impl PartialEq for RelationType {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for RelationType {}

impl Hash for RelationType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

impl fmt::Display for RelationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for RelationType {
    fn from(value: String) -> Self {
        if value == "DEFAULT" {
            RelationType::Default
        } else {
            RelationType::Named(value)
        }
    }
}

impl From<&str> for RelationType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<RelationType> for String {
    fn from(value: RelationType) -> Self {
        match value {
            RelationType::Default => "DEFAULT".to_string(),
            RelationType::Named(name) => name,
        }
    }
}

/// A tag classifying a node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Category(String);

impl Category {
    /// Create a category with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the category.
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Category {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Category {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A node of the graph.
///
/// The edge lists are maintained by the owning [`Graph`](crate::Graph); they
/// hold edge handles in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    id: String,
    label: String,
    out_edges: Vec<EdgeIndex>,
    in_edges: Vec<EdgeIndex>,
    categories: Vec<Category>,
    graph: GraphId,
}

impl Node {
    pub(crate) fn new(graph: GraphId, id: String, label: String) -> Self {
        Self {
            id,
            label,
            out_edges: Vec::new(),
            in_edges: Vec::new(),
            categories: Vec::new(),
            graph,
        }
    }

    /// Id of the node, unique within its graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Graph that owns this node.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    /// Edges where this node is the source, in insertion order.
    pub fn out_edges(&self) -> &[EdgeIndex] {
        &self.out_edges
    }

    /// Edges where this node is the destination, in insertion order.
    pub fn in_edges(&self) -> &[EdgeIndex] {
        &self.in_edges
    }

    /// Categories attached to the node.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Whether the node carries the category.
    pub fn has_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Attach a category. Adding a category twice keeps a single entry.
    pub fn add_category(&mut self, category: impl Into<Category>) {
        let category = category.into();
        if !self.categories.contains(&category) {
            self.categories.push(category);
        }
    }

    /// Detach a category; unknown categories are ignored.
    pub fn remove_category(&mut self, category: &Category) {
        self.categories.retain(|c| c != category);
    }

    pub(crate) fn set_graph(&mut self, graph: GraphId) {
        self.graph = graph;
    }

    pub(crate) fn link_out(&mut self, edge: EdgeIndex) {
        self.out_edges.push(edge);
    }

    pub(crate) fn link_in(&mut self, edge: EdgeIndex) {
        self.in_edges.push(edge);
    }

    pub(crate) fn unlink_out(&mut self, edge: EdgeIndex) {
        self.out_edges.retain(|e| *e != edge);
    }

    pub(crate) fn unlink_in(&mut self, edge: EdgeIndex) {
        self.in_edges.retain(|e| *e != edge);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.id, self.label)
    }
}

/// A directed edge of the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Edge {
    id: String,
    label: String,
    weight: f64,
    relation_type: RelationType,
    source: NodeIndex,
    destination: NodeIndex,
    graph: GraphId,
}

impl Edge {
    pub(crate) fn new(
        graph: GraphId,
        id: String,
        relation_type: RelationType,
        label: String,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Self {
        Self {
            id,
            label,
            weight: 1.0,
            relation_type,
            source,
            destination,
            graph,
        }
    }

    /// Id of the edge, unique within its graph.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Weight of the edge (1.0 unless changed).
    pub fn weight(&self) -> f64 {
        self.weight
    }

    /// Replace the weight.
    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Relation type, fixed at creation.
    pub fn relation_type(&self) -> &RelationType {
        &self.relation_type
    }

    /// Source node handle.
    pub fn source(&self) -> NodeIndex {
        self.source
    }

    /// Destination node handle.
    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    /// Graph that owns this edge.
    pub fn graph(&self) -> GraphId {
        self.graph
    }

    pub(crate) fn set_graph(&mut self, graph: GraphId) {
        self.graph = graph;
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({})({} -> {})",
            self.id, self.label, self.source, self.destination
        )
    }
}
