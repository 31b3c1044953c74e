//! Traversal engine: depth-first and breadth-first walks over any
//! [`Traversable`] graph, plus the cycle queries and topological ordering
//! derived from the depth-first walk.
//!
//! ```
//! use nodegraph::{traversal, Graph};
//!
//! # fn main() -> nodegraph::Result<()> {
//! let mut graph = Graph::new();
//! let a = graph.add_node("a", "A");
//! let b = graph.add_node("b", "B");
//! graph.new_edge("a->b", a, b)?;
//!
//! let mut labels = Vec::new();
//! let status = traversal::depth_first(&mut graph, a, |g, n, _| {
//!     labels.push(g.node(n).map(|node| node.label().to_string()));
//!     Ok(true)
//! });
//! assert!(!status.has_errors());
//! assert_eq!(traversal::topological_sort(&graph, a), vec![b, a]);
//! # Ok(())
//! # }
//! ```

pub mod algorithms;
mod engine;
mod status;
mod traversable;

pub use algorithms::{
    find_all_cycle_nodes, find_first_cycle_node, has_cycle, reachable, topological_sort,
};
pub use engine::{
    breadth_first, breadth_first_with_flags, depth_first, depth_first_with_flags,
    depth_first_with_post,
};
pub use status::{NodeError, TraversalFlags, TraversalStatus, VisitError, VisitResult};
pub use traversable::Traversable;
