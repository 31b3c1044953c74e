//! Core graph types and operations.
//!
//! This module defines the fundamental building blocks:
//! - [`Node`]: Labeled, categorized graph nodes
//! - [`Edge`]: Directed, weighted, relation-typed links between nodes
//! - [`Graph`]: The arena that owns both and keeps their links consistent

mod directed;
mod types;

pub use directed::Graph;
pub use types::{Category, Edge, EdgeIndex, GraphId, Node, NodeIndex, RelationType};
