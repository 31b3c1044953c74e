//! The arena-backed directed graph container.

use super::types::{Category, Edge, EdgeIndex, GraphId, Node, NodeIndex, RelationType};
use crate::error::{GraphError, Result};
use log::{debug, trace};
use std::collections::BTreeMap;
use uuid::Uuid;

/// A directed graph of labeled nodes and typed, weighted edges.
///
/// Nodes and edges live in arena slots addressed by [`NodeIndex`] and
/// [`EdgeIndex`]; their string ids are unique per graph and resolved through
/// ordered registries, so iteration over [`Graph::nodes`] and [`Graph::edges`]
/// follows id order.
///
/// Cloning produces a new graph with its own [`GraphId`]; the copied entities
/// are re-tagged with it. Slot positions are kept, so a handle taken from the
/// original addresses the corresponding entity of the clone.
#[derive(Debug, Default)]
pub struct Graph {
    id: GraphId,
    nodes: Vec<Option<Node>>,
    edges: Vec<Option<Edge>>,
    node_ids: BTreeMap<String, NodeIndex>,
    edge_ids: BTreeMap<String, EdgeIndex>,
}

impl Clone for Graph {
    fn clone(&self) -> Self {
        let id = GraphId::new();
        let mut nodes = self.nodes.clone();
        nodes.iter_mut().flatten().for_each(|node| node.set_graph(id));
        let mut edges = self.edges.clone();
        edges.iter_mut().flatten().for_each(|edge| edge.set_graph(id));
        debug!("Cloned graph {} as {id}", self.id);

        Self {
            id,
            nodes,
            edges,
            node_ids: self.node_ids.clone(),
            edge_ids: self.edge_ids.clone(),
        }
    }
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of this graph, shared by every entity it owns.
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Create a node with a freshly generated id.
    ///
    /// Always creates a new node, even if another node has the same label.
    pub fn new_node(&mut self, label: impl Into<String>) -> NodeIndex {
        let id = self.fresh_node_id();
        self.insert_node(id, label.into())
    }

    /// Create a node with the given id, or relabel the node that already has it.
    pub fn add_node(&mut self, id: impl Into<String>, label: impl Into<String>) -> NodeIndex {
        let id = id.into();
        let label = label.into();
        if let Some(&ix) = self.node_ids.get(&id) {
            debug!("Node found: id={id}, relabeling");
            if let Some(node) = self.slot_node_mut(ix) {
                node.set_label(label);
            }
            return ix;
        }
        self.insert_node(id, label)
    }

    /// Create an edge of the default relation type with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if either endpoint is not a
    /// node of this graph.
    pub fn new_edge(
        &mut self,
        label: impl Into<String>,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<EdgeIndex> {
        self.new_edge_with_type(RelationType::Default, label, source, destination)
    }

    /// Create an edge of the given relation type with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if either endpoint is not a
    /// node of this graph.
    pub fn new_edge_with_type(
        &mut self,
        relation_type: RelationType,
        label: impl Into<String>,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<EdgeIndex> {
        self.check_endpoints(source, destination)?;
        let id = self.fresh_edge_id();
        Ok(self.insert_edge(relation_type, id, label.into(), source, destination))
    }

    /// Create an edge of the default relation type with the given id, or
    /// relabel the edge that already has it.
    ///
    /// # Errors
    ///
    /// See [`Graph::add_edge_with_type`].
    pub fn add_edge(
        &mut self,
        id: impl Into<String>,
        label: impl Into<String>,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<EdgeIndex> {
        self.add_edge_with_type(RelationType::Default, id, label, source, destination)
    }

    /// Create an edge with the given id and relation type, or relabel the edge
    /// that already has the id.
    ///
    /// An existing edge keeps its endpoints; only its label changes.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidArgument`] if either endpoint is not a
    /// node of this graph, or if an edge with this id exists with a different
    /// relation type.
    pub fn add_edge_with_type(
        &mut self,
        relation_type: RelationType,
        id: impl Into<String>,
        label: impl Into<String>,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> Result<EdgeIndex> {
        self.check_endpoints(source, destination)?;
        let id = id.into();
        let label = label.into();

        if let Some(&ix) = self.edge_ids.get(&id) {
            debug!("Edge found: id={id}");
            let edge = self.slot_edge_mut(ix).ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: id.clone(),
            })?;
            if *edge.relation_type() != relation_type {
                return Err(GraphError::invalid_argument(format!(
                    "Edge {id} exists with relation type {}, requested {relation_type}",
                    edge.relation_type()
                )));
            }
            edge.set_label(label);
            return Ok(ix);
        }

        Ok(self.insert_edge(relation_type, id, label, source, destination))
    }

    /// Remove a node after detaching every edge incident to it.
    ///
    /// Returns the removed node; its edge lists are empty.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the handle is stale.
    pub fn remove_node(&mut self, ix: NodeIndex) -> Result<Node> {
        debug!("Removing node: {ix}");
        let node = self.node(ix).ok_or_else(|| GraphError::NodeNotFound {
            node_id: ix.to_string(),
        })?;

        let mut incident: Vec<EdgeIndex> = node.in_edges().to_vec();
        incident.extend_from_slice(node.out_edges());
        // A self loop shows up in both lists.
        incident.sort_unstable();
        incident.dedup();

        trace!("Removing {} incident edges of node {ix}", incident.len());
        for edge in incident {
            self.remove_edge(edge)?;
        }

        let node = self.nodes[ix.0].take().ok_or_else(|| GraphError::NodeNotFound {
            node_id: ix.to_string(),
        })?;
        self.node_ids.remove(node.id());
        Ok(node)
    }

    /// Remove an edge from the registry and from both endpoint edge lists.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the handle is stale.
    pub fn remove_edge(&mut self, ix: EdgeIndex) -> Result<Edge> {
        debug!("Removing edge: {ix}");
        let edge = self
            .edges
            .get_mut(ix.0)
            .and_then(Option::take)
            .ok_or_else(|| GraphError::EdgeNotFound {
                edge_id: ix.to_string(),
            })?;
        self.edge_ids.remove(edge.id());

        if let Some(source) = self.slot_node_mut(edge.source()) {
            source.unlink_out(ix);
        }
        if let Some(destination) = self.slot_node_mut(edge.destination()) {
            destination.unlink_in(ix);
        }
        Ok(edge)
    }

    /// Look up a node by id.
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.node_index(id).and_then(|ix| self.node(ix))
    }

    /// Look up an edge by id.
    pub fn get_edge(&self, id: &str) -> Option<&Edge> {
        self.edge_index(id).and_then(|ix| self.edge(ix))
    }

    /// Resolve a node id to its handle.
    pub fn node_index(&self, id: &str) -> Option<NodeIndex> {
        self.node_ids.get(id).copied()
    }

    /// Resolve an edge id to its handle.
    pub fn edge_index(&self, id: &str) -> Option<EdgeIndex> {
        self.edge_ids.get(id).copied()
    }

    /// Node behind a handle.
    pub fn node(&self, ix: NodeIndex) -> Option<&Node> {
        self.nodes.get(ix.0).and_then(Option::as_ref)
    }

    /// Mutable node behind a handle.
    ///
    /// Edge lists cannot be changed through it; use the graph's edge methods.
    pub fn node_mut(&mut self, ix: NodeIndex) -> Option<&mut Node> {
        self.slot_node_mut(ix)
    }

    /// Edge behind a handle.
    pub fn edge(&self, ix: EdgeIndex) -> Option<&Edge> {
        self.edges.get(ix.0).and_then(Option::as_ref)
    }

    /// Mutable edge behind a handle.
    pub fn edge_mut(&mut self, ix: EdgeIndex) -> Option<&mut Edge> {
        self.slot_edge_mut(ix)
    }

    /// Whether the handle refers to a live node of this graph.
    pub fn contains_node(&self, ix: NodeIndex) -> bool {
        self.node(ix).is_some()
    }

    /// Whether the handle refers to a live edge of this graph.
    pub fn contains_edge(&self, ix: EdgeIndex) -> bool {
        self.edge(ix).is_some()
    }

    /// Replace the label of a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the handle is stale.
    pub fn set_node_label(&mut self, ix: NodeIndex, label: impl Into<String>) -> Result<()> {
        self.require_node_mut(ix)?.set_label(label);
        Ok(())
    }

    /// Replace the label of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the handle is stale.
    pub fn set_edge_label(&mut self, ix: EdgeIndex, label: impl Into<String>) -> Result<()> {
        self.require_edge_mut(ix)?.set_label(label);
        Ok(())
    }

    /// Replace the weight of an edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the handle is stale.
    pub fn set_edge_weight(&mut self, ix: EdgeIndex, weight: f64) -> Result<()> {
        self.require_edge_mut(ix)?.set_weight(weight);
        Ok(())
    }

    /// Attach a category to a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the handle is stale.
    pub fn add_category(&mut self, ix: NodeIndex, category: impl Into<Category>) -> Result<()> {
        self.require_node_mut(ix)?.add_category(category);
        Ok(())
    }

    /// Detach a category from a node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the handle is stale.
    pub fn remove_category(&mut self, ix: NodeIndex, category: &Category) -> Result<()> {
        self.require_node_mut(ix)?.remove_category(category);
        Ok(())
    }

    /// Outgoing edges of a node in insertion order (empty for a stale handle).
    pub fn out_edges(&self, ix: NodeIndex) -> &[EdgeIndex] {
        self.node(ix).map(Node::out_edges).unwrap_or(&[])
    }

    /// Incoming edges of a node in insertion order (empty for a stale handle).
    pub fn in_edges(&self, ix: NodeIndex) -> &[EdgeIndex] {
        self.node(ix).map(Node::in_edges).unwrap_or(&[])
    }

    /// Destinations of the outgoing edges of a node, in edge order.
    ///
    /// A node reached by several edges appears once per edge.
    pub fn successors(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        self.out_edges(ix)
            .iter()
            .filter_map(|&e| self.edge(e))
            .map(Edge::destination)
            .collect()
    }

    /// Sources of the incoming edges of a node, in edge order.
    pub fn predecessors(&self, ix: NodeIndex) -> Vec<NodeIndex> {
        self.in_edges(ix)
            .iter()
            .filter_map(|&e| self.edge(e))
            .map(Edge::source)
            .collect()
    }

    /// All edges from `source` to `destination`, in the source's edge order.
    pub fn edges_between(&self, source: NodeIndex, destination: NodeIndex) -> Vec<EdgeIndex> {
        self.out_edges(source)
            .iter()
            .copied()
            .filter(|&e| {
                self.edge(e)
                    .is_some_and(|edge| edge.destination() == destination)
            })
            .collect()
    }

    /// All nodes, in id order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &Node)> + '_ {
        self.node_ids
            .values()
            .filter_map(move |&ix| self.node(ix).map(|node| (ix, node)))
    }

    /// All edges, in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeIndex, &Edge)> + '_ {
        self.edge_ids
            .values()
            .filter_map(move |&ix| self.edge(ix).map(|edge| (ix, edge)))
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_ids.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.node_ids.is_empty()
    }

    /// Drop every node and edge. Handles issued before resolve to nothing.
    pub fn clear(&mut self) {
        debug!("Clearing graph {}", self.id);
        self.nodes.iter_mut().for_each(|slot| *slot = None);
        self.edges.iter_mut().for_each(|slot| *slot = None);
        self.node_ids.clear();
        self.edge_ids.clear();
    }

    /// Create a query builder over the nodes of this graph.
    pub fn query(&self) -> crate::query::NodeQuery<'_> {
        crate::query::NodeQuery::new(self)
    }

    /// Nodes whose label contains `text`, ignoring case, in id order.
    pub fn find_nodes(&self, text: &str) -> Vec<NodeIndex> {
        self.query().label_contains(text).execute()
    }

    /// Render the graph in Graphviz DOT format.
    pub fn export_dot(&self) -> String {
        crate::export::export_dot(self)
    }

    /// Render the graph as D3-style JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Serialization`] if rendering fails.
    pub fn export_json(&self) -> Result<String> {
        crate::export::export_json(self)
    }

    // ===== Algorithm Methods =====

    /// Whether a cycle is reachable from `start`.
    pub fn has_cycle(&self, start: NodeIndex) -> bool {
        crate::traversal::has_cycle(self, start)
    }

    /// Node at which the first cycle reachable from `start` was detected.
    pub fn find_first_cycle_node(&self, start: NodeIndex) -> Option<NodeIndex> {
        crate::traversal::find_first_cycle_node(self, start)
    }

    /// Every node at which a cycle was detected during a walk from `start`.
    pub fn find_all_cycle_nodes(&self, start: NodeIndex) -> Vec<NodeIndex> {
        crate::traversal::find_all_cycle_nodes(self, start)
    }

    /// Nodes reachable from `start` in topological order, deepest first.
    ///
    /// Only meaningful when [`Graph::has_cycle`] is false.
    pub fn topological_sort(&self, start: NodeIndex) -> Vec<NodeIndex> {
        crate::traversal::topological_sort(self, start)
    }

    // Private helper methods

    fn insert_node(&mut self, id: String, label: String) -> NodeIndex {
        let ix = NodeIndex(self.nodes.len());
        debug!("Adding node: id={id}, handle={ix}");
        self.nodes.push(Some(Node::new(self.id, id.clone(), label)));
        self.node_ids.insert(id, ix);
        ix
    }

    fn insert_edge(
        &mut self,
        relation_type: RelationType,
        id: String,
        label: String,
        source: NodeIndex,
        destination: NodeIndex,
    ) -> EdgeIndex {
        let ix = EdgeIndex(self.edges.len());
        debug!("Adding edge: id={id}, {source} -> {destination}, type={relation_type}");
        self.edges.push(Some(Edge::new(
            self.id,
            id.clone(),
            relation_type,
            label,
            source,
            destination,
        )));
        self.edge_ids.insert(id, ix);

        if let Some(node) = self.slot_node_mut(source) {
            node.link_out(ix);
        }
        if let Some(node) = self.slot_node_mut(destination) {
            node.link_in(ix);
        }
        trace!("Edge {ix} linked");
        ix
    }

    fn check_endpoints(&self, source: NodeIndex, destination: NodeIndex) -> Result<()> {
        if !self.contains_node(source) {
            return Err(GraphError::invalid_argument(format!(
                "Source node {source} is not a node of this graph"
            )));
        }
        if !self.contains_node(destination) {
            return Err(GraphError::invalid_argument(format!(
                "Destination node {destination} is not a node of this graph"
            )));
        }
        Ok(())
    }

    fn require_node_mut(&mut self, ix: NodeIndex) -> Result<&mut Node> {
        self.slot_node_mut(ix).ok_or_else(|| GraphError::NodeNotFound {
            node_id: ix.to_string(),
        })
    }

    fn require_edge_mut(&mut self, ix: EdgeIndex) -> Result<&mut Edge> {
        self.slot_edge_mut(ix).ok_or_else(|| GraphError::EdgeNotFound {
            edge_id: ix.to_string(),
        })
    }

    fn slot_node_mut(&mut self, ix: NodeIndex) -> Option<&mut Node> {
        self.nodes.get_mut(ix.0).and_then(Option::as_mut)
    }

    fn slot_edge_mut(&mut self, ix: EdgeIndex) -> Option<&mut Edge> {
        self.edges.get_mut(ix.0).and_then(Option::as_mut)
    }

    fn fresh_node_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.node_ids.contains_key(&id) {
                return id;
            }
        }
    }

    fn fresh_edge_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if !self.edge_ids.contains_key(&id) {
                return id;
            }
        }
    }
}
