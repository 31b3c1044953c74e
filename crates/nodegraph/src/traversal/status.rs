//! Per-walk configuration and result accumulator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error a visitor callback hands back to the traversal engine.
pub type VisitError = Box<dyn std::error::Error + Send + Sync>;

/// Result type returned by visitor callbacks.
///
/// `Ok(true)` continues the walk, `Ok(false)` stops it.
pub type VisitResult = std::result::Result<bool, VisitError>;

/// Configuration of a single walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraversalFlags {
    directed: bool,
    continue_on_error: bool,
}

impl TraversalFlags {
    /// Create flags with explicit values.
    pub fn new(directed: bool, continue_on_error: bool) -> Self {
        Self {
            directed,
            continue_on_error,
        }
    }

    /// Follow only outgoing edges (`true`) or incoming edges too (`false`).
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Keep walking after a visitor error (`true`) or stop at the first one.
    pub fn with_continue_on_error(mut self, continue_on_error: bool) -> Self {
        self.continue_on_error = continue_on_error;
        self
    }

    /// Whether only outgoing edges are followed.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Whether a visitor error leaves the walk running.
    pub fn continues_on_error(&self) -> bool {
        self.continue_on_error
    }
}

impl Default for TraversalFlags {
    fn default() -> Self {
        Self {
            directed: true,
            continue_on_error: true,
        }
    }
}

/// A visitor failure recorded against the node it happened on.
#[derive(Debug)]
pub struct NodeError<N> {
    node: N,
    error: VisitError,
}

impl<N: Copy> NodeError<N> {
    /// Node whose visit failed.
    pub fn node(&self) -> N {
        self.node
    }

    /// The error the visitor returned.
    pub fn error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.error.as_ref()
    }

    /// Display text of the error.
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

impl<N: fmt::Debug> fmt::Display for NodeError<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.node, self.error)
    }
}

/// Outcome of a walk: visitor errors and detected cycles.
///
/// Cycle nodes may repeat when several back edges reach the same ancestor.
#[derive(Debug)]
pub struct TraversalStatus<N> {
    errors: Vec<NodeError<N>>,
    cycle_nodes: Vec<N>,
}

impl<N: Copy> TraversalStatus<N> {
    /// Create an empty status.
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            cycle_nodes: Vec::new(),
        }
    }

    /// Visitor errors in the order they happened.
    pub fn errors(&self) -> &[NodeError<N>] {
        &self.errors
    }

    /// Whether any visitor failed.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of visitor failures.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Whether at least one cycle was detected.
    pub fn has_cycles(&self) -> bool {
        !self.cycle_nodes.is_empty()
    }

    /// Number of detected cycles.
    pub fn cycle_count(&self) -> usize {
        self.cycle_nodes.len()
    }

    /// Nodes at which cycles were detected, in detection order.
    pub fn cycle_nodes(&self) -> &[N] {
        &self.cycle_nodes
    }

    /// First node at which a cycle was detected.
    pub fn first_cycle_node(&self) -> Option<N> {
        self.cycle_nodes.first().copied()
    }

    pub(crate) fn add_error(&mut self, node: N, error: VisitError) {
        self.errors.push(NodeError { node, error });
    }

    pub(crate) fn register_cycle(&mut self, node: N) {
        self.cycle_nodes.push(node);
    }

    pub(crate) fn into_cycle_nodes(self) -> Vec<N> {
        self.cycle_nodes
    }
}

impl<N: Copy> Default for TraversalStatus<N> {
    fn default() -> Self {
        Self::new()
    }
}
