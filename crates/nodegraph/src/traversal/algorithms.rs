//! Cycle queries and orderings built on the depth-first walk.
//!
//! These run over a shared borrow of the graph; their visitors never touch it.

use super::engine::{depth_first, depth_first_with_flags, depth_first_with_post};
use super::status::TraversalFlags;
use super::traversable::Traversable;

/// Whether a cycle is reachable from `start`.
///
/// Stops at the first node visited after a back edge has been seen.
pub fn has_cycle<G>(graph: &G, start: G::Node) -> bool
where
    G: Traversable + ?Sized,
{
    let mut view = graph;
    depth_first(&mut view, start, |_, _, status| Ok(!status.has_cycles())).has_cycles()
}

/// Node at which the first cycle reachable from `start` was detected.
pub fn find_first_cycle_node<G>(graph: &G, start: G::Node) -> Option<G::Node>
where
    G: Traversable + ?Sized,
{
    let mut view = graph;
    depth_first(&mut view, start, |_, _, status| Ok(!status.has_cycles())).first_cycle_node()
}

/// Every node at which a cycle was detected during a full walk from `start`.
///
/// A node closing several back edges appears once per edge.
pub fn find_all_cycle_nodes<G>(graph: &G, start: G::Node) -> Vec<G::Node>
where
    G: Traversable + ?Sized,
{
    let mut view = graph;
    depth_first(&mut view, start, |_, _, _| Ok(true)).into_cycle_nodes()
}

/// Nodes reachable from `start` in depth-first visiting order.
pub fn reachable<G>(graph: &G, start: G::Node, flags: TraversalFlags) -> Vec<G::Node>
where
    G: Traversable + ?Sized,
{
    let mut order = Vec::new();
    let mut view = graph;
    depth_first_with_flags(
        &mut view,
        start,
        |_, node, _| {
            order.push(node);
            Ok(true)
        },
        flags,
    );
    order
}

/// Nodes reachable from `start` in topological order, deepest first.
///
/// For an acyclic graph every node comes after all nodes reachable from it
/// and `start` comes last; siblings keep their edge order. On a cyclic graph
/// the order is deterministic but has no topological meaning, so check
/// [`has_cycle`] first.
pub fn topological_sort<G>(graph: &G, start: G::Node) -> Vec<G::Node>
where
    G: Traversable + ?Sized,
{
    let mut order = Vec::new();
    let mut view = graph;
    depth_first_with_post(
        &mut view,
        start,
        |_, _, _| Ok(true),
        |_, node, _| {
            order.push(node);
            Ok(true)
        },
        TraversalFlags::default(),
    );
    order
}
