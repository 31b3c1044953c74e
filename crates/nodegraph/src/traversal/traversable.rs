//! The navigation surface the traversal engine needs from a graph.

use crate::graph::{Graph, NodeIndex};
use std::fmt::Debug;
use std::hash::Hash;

/// Indexed access to the neighbors of a node.
///
/// Neighbors are addressed by position in the node's edge lists so the engine
/// can read a list length once and then walk it; a position that no longer
/// resolves yields `None` instead of a panic.
pub trait Traversable {
    /// Handle used to identify nodes during a walk.
    type Node: Copy + Eq + Hash + Debug;

    /// Whether the node is still part of the graph.
    fn contains(&self, node: Self::Node) -> bool;

    /// Number of outgoing edges of the node (0 if absent).
    fn out_degree(&self, node: Self::Node) -> usize;

    /// Destination of the outgoing edge at `index`.
    fn out_neighbor(&self, node: Self::Node, index: usize) -> Option<Self::Node>;

    /// Number of incoming edges of the node (0 if absent).
    fn in_degree(&self, node: Self::Node) -> usize;

    /// Source of the incoming edge at `index`.
    fn in_neighbor(&self, node: Self::Node, index: usize) -> Option<Self::Node>;
}

impl Traversable for Graph {
    type Node = NodeIndex;

    fn contains(&self, node: NodeIndex) -> bool {
        self.contains_node(node)
    }

    fn out_degree(&self, node: NodeIndex) -> usize {
        self.out_edges(node).len()
    }

    fn out_neighbor(&self, node: NodeIndex, index: usize) -> Option<NodeIndex> {
        let edge = self.out_edges(node).get(index)?;
        self.edge(*edge).map(|e| e.destination())
    }

    fn in_degree(&self, node: NodeIndex) -> usize {
        self.in_edges(node).len()
    }

    fn in_neighbor(&self, node: NodeIndex, index: usize) -> Option<NodeIndex> {
        let edge = self.in_edges(node).get(index)?;
        self.edge(*edge).map(|e| e.source())
    }
}

/// Shared borrows walk the same graph; visitors then get read-only access.
impl<T: Traversable + ?Sized> Traversable for &T {
    type Node = T::Node;

    fn contains(&self, node: Self::Node) -> bool {
        (**self).contains(node)
    }

    fn out_degree(&self, node: Self::Node) -> usize {
        (**self).out_degree(node)
    }

    fn out_neighbor(&self, node: Self::Node, index: usize) -> Option<Self::Node> {
        (**self).out_neighbor(node, index)
    }

    fn in_degree(&self, node: Self::Node) -> usize {
        (**self).in_degree(node)
    }

    fn in_neighbor(&self, node: Self::Node, index: usize) -> Option<Self::Node> {
        (**self).in_neighbor(node, index)
    }
}
