//! # nodegraph
//!
//! An in-memory directed graph with an iterative traversal engine.
//!
//! ## Core Principles
//!
//! - **Arena ownership**: the [`Graph`] owns every node and edge; entities
//!   refer to each other through copyable handles, never through pointers
//! - **Walks never fail**: visitor errors and detected cycles are collected
//!   into a [`TraversalStatus`] instead of aborting the caller
//! - **Explicit stack**: depth-first walks are iterative, so deep graphs do
//!   not overflow the call stack
//!
//! ## Architecture
//!
//! ```text
//! Query / Export (find nodes, DOT, JSON)
//!     ↓
//! Traversal (depth-first, breadth-first, cycles, topological sort)
//!     ↓
//! Core Graph (nodes, edges, categories, relation types)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use nodegraph::{traversal, Graph};
//!
//! # fn main() -> nodegraph::Result<()> {
//! let mut graph = Graph::new();
//! let a = graph.add_node("A", "app");
//! let b = graph.add_node("B", "lib");
//! let c = graph.add_node("C", "core");
//! graph.new_edge("A->B", a, b)?;
//! graph.new_edge("B->C", b, c)?;
//!
//! assert!(!graph.has_cycle(a));
//! assert_eq!(graph.topological_sort(a), vec![c, b, a]);
//!
//! graph.new_edge("C->A", c, a)?;
//! let status = traversal::depth_first(&mut graph, a, |_, _, _| Ok(true));
//! assert_eq!(status.cycle_nodes(), &[a]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod error;
pub mod export;
pub mod graph;
pub mod query;
pub mod traversal;

// Re-export main types
pub use error::{GraphError, Result};
pub use graph::{Category, Edge, EdgeIndex, Graph, GraphId, Node, NodeIndex, RelationType};
pub use query::NodeQuery;
pub use traversal::{
    NodeError, Traversable, TraversalFlags, TraversalStatus, VisitError, VisitResult,
};
