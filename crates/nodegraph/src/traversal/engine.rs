//! Iterative depth-first and breadth-first walks.
//!
//! Both walks call back into caller code once per reachable node and never
//! fail: visitor errors end up in the returned [`TraversalStatus`]. Visitors
//! receive the graph mutably and may change it; the engine reads each
//! neighbor list length once before expanding a node and skips positions
//! that no longer resolve.

use super::status::{TraversalFlags, TraversalStatus, VisitResult};
use super::traversable::Traversable;
use log::{debug, trace, warn};
use std::collections::{HashSet, VecDeque};

/// Entry on the depth-first stack.
///
/// An expanded entry stays on the stack until all nodes pushed above it are
/// done; seeing it on top again means its subtree is exhausted.
#[derive(Debug, Clone, Copy)]
struct Frame<N> {
    node: N,
    expanded: bool,
}

/// Depth-first walk with default flags and no post-visit callback.
pub fn depth_first<G, Pre>(graph: &mut G, start: G::Node, pre_visit: Pre) -> TraversalStatus<G::Node>
where
    G: Traversable + ?Sized,
    Pre: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
{
    depth_first_with_flags(graph, start, pre_visit, TraversalFlags::default())
}

/// Depth-first walk with explicit flags and no post-visit callback.
pub fn depth_first_with_flags<G, Pre>(
    graph: &mut G,
    start: G::Node,
    pre_visit: Pre,
    flags: TraversalFlags,
) -> TraversalStatus<G::Node>
where
    G: Traversable + ?Sized,
    Pre: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
{
    depth_first_with_post(graph, start, pre_visit, |_, _, _| Ok(true), flags)
}

/// Depth-first walk from `start`.
///
/// `pre_visit` runs the first time a node reaches the top of the stack,
/// `post_visit` once everything reachable from it has been handled, so the
/// post-visit order of an acyclic graph lists every node after all of its
/// descendants. Children are visited in edge-list order.
///
/// A neighbor that is already visited and still on the active path closes a
/// back edge and is recorded as a cycle; a neighbor that finished earlier is
/// a cross edge and is not. With `directed = false` incoming edges are
/// followed as well, so the edge to the parent counts as a cycle too.
///
/// Either callback returning `Ok(false)` stops the walk. An `Err` is recorded
/// against the node; the walk then goes on as if `Ok(true)` had been returned
/// unless `continue_on_error` is off.
pub fn depth_first_with_post<G, Pre, Post>(
    graph: &mut G,
    start: G::Node,
    mut pre_visit: Pre,
    mut post_visit: Post,
    flags: TraversalFlags,
) -> TraversalStatus<G::Node>
where
    G: Traversable + ?Sized,
    Pre: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
    Post: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
{
    let mut status = TraversalStatus::new();
    let mut visited: HashSet<G::Node> = HashSet::new();
    let mut on_path: HashSet<G::Node> = HashSet::new();
    let mut stack = vec![Frame {
        node: start,
        expanded: false,
    }];

    while let Some(&Frame { node, expanded }) = stack.last() {
        if expanded {
            stack.pop();
            on_path.remove(&node);
            match post_visit(graph, node, &status) {
                Ok(true) => {}
                Ok(false) => {
                    debug!("Aborting from post-visit on node {node:?}");
                    break;
                }
                Err(e) => {
                    debug!("Error during post-visit. Node: {node:?}, Message: {e}");
                    status.add_error(node, e);
                    if !flags.continues_on_error() {
                        break;
                    }
                }
            }
            continue;
        }

        if visited.contains(&node) {
            // Pushed twice before its first visit; the other entry handled it.
            trace!("Dropping stale stack entry for {node:?}");
            stack.pop();
            continue;
        }

        if !graph.contains(node) {
            warn!("Node {node:?} left the graph during traversal, skipping");
            stack.pop();
            continue;
        }

        if let Some(top) = stack.last_mut() {
            top.expanded = true;
        }
        on_path.insert(node);

        let continue_traversal = match pre_visit(graph, node, &status) {
            Ok(proceed) => proceed,
            Err(e) => {
                debug!("Error during visit. Node: {node:?}, Message: {e}");
                status.add_error(node, e);
                if !flags.continues_on_error() {
                    break;
                }
                true
            }
        };
        visited.insert(node);
        debug!("Visited: {node:?}");
        if !continue_traversal {
            debug!("Aborting from pre-visit on node {node:?}");
            break;
        }

        // Pushed in reverse so the first edge ends up on top.
        let out_degree = graph.out_degree(node);
        for index in (0..out_degree).rev() {
            match graph.out_neighbor(node, index) {
                Some(destination) => {
                    trace!("Directed destination: {destination:?}");
                    if !visited.contains(&destination) {
                        stack.push(Frame {
                            node: destination,
                            expanded: false,
                        });
                    } else if on_path.contains(&destination) {
                        debug!("Cycle detected at {destination:?}");
                        status.register_cycle(destination);
                    }
                }
                None => warn!(
                    "Modification of graph during traversal of output edges: {node:?} Index: {index}"
                ),
            }
        }

        if !flags.is_directed() {
            let in_degree = graph.in_degree(node);
            for index in (0..in_degree).rev() {
                match graph.in_neighbor(node, index) {
                    Some(source) => {
                        trace!("Undirected source: {source:?}");
                        if !visited.contains(&source) {
                            stack.push(Frame {
                                node: source,
                                expanded: false,
                            });
                        } else if on_path.contains(&source) {
                            debug!("Cycle detected at {source:?}");
                            status.register_cycle(source);
                        }
                    }
                    None => warn!(
                        "Modification of graph during traversal of input edges: {node:?} Index: {index}"
                    ),
                }
            }
        }
    }

    status
}

/// Breadth-first walk with default flags.
pub fn breadth_first<G, V>(graph: &mut G, start: G::Node, visit: V) -> TraversalStatus<G::Node>
where
    G: Traversable + ?Sized,
    V: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
{
    breadth_first_with_flags(graph, start, visit, TraversalFlags::default())
}

/// Breadth-first walk from `start`, visiting each node on its first dequeue.
///
/// A directed walk does not look for cycles. An undirected walk records a
/// cycle every time an already visited node is dequeued again, which counts
/// every redundant edge into a seen node and not only true cycles.
pub fn breadth_first_with_flags<G, V>(
    graph: &mut G,
    start: G::Node,
    mut visit: V,
    flags: TraversalFlags,
) -> TraversalStatus<G::Node>
where
    G: Traversable + ?Sized,
    V: FnMut(&mut G, G::Node, &TraversalStatus<G::Node>) -> VisitResult,
{
    let mut status = TraversalStatus::new();
    let mut visited: HashSet<G::Node> = HashSet::new();
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        if visited.contains(&node) {
            if !flags.is_directed() {
                trace!("Revisiting {node:?} in undirected walk");
                status.register_cycle(node);
            }
            continue;
        }

        if !graph.contains(node) {
            warn!("Node {node:?} left the graph during traversal, skipping");
            continue;
        }

        let continue_traversal = match visit(graph, node, &status) {
            Ok(proceed) => proceed,
            Err(e) => {
                debug!("Error during visit. Node: {node:?}, Message: {e}");
                status.add_error(node, e);
                if !flags.continues_on_error() {
                    break;
                }
                true
            }
        };
        visited.insert(node);
        debug!("Visited: {node:?}");
        if !continue_traversal {
            debug!("Aborting from visit on node {node:?}");
            break;
        }

        let out_degree = graph.out_degree(node);
        for index in 0..out_degree {
            match graph.out_neighbor(node, index) {
                Some(destination) => queue.push_back(destination),
                None => warn!(
                    "Modification of graph during traversal of output edges: {node:?} Index: {index}"
                ),
            }
        }
        if !flags.is_directed() {
            let in_degree = graph.in_degree(node);
            for index in 0..in_degree {
                match graph.in_neighbor(node, index) {
                    Some(source) => queue.push_back(source),
                    None => warn!(
                        "Modification of graph during traversal of input edges: {node:?} Index: {index}"
                    ),
                }
            }
        }
    }

    status
}
