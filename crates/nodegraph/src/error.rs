//! Error types for graph mutations.
//!
//! Structural misuse of the [`Graph`](crate::Graph) API surfaces as a
//! [`GraphError`]. Traversals never return one: faults raised by visitor
//! callbacks are collected into a [`TraversalStatus`](crate::TraversalStatus)
//! instead.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for all fallible graph operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A caller passed an argument the graph cannot accept
    /// (absent edge endpoint, relation type clash on an existing edge id).
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of what went wrong
        message: String,
    },

    /// Node not found in the graph
    #[error("Node not found: {node_id}")]
    NodeNotFound {
        /// Id or handle of the missing node
        node_id: String,
    },

    /// Edge not found in the graph
    #[error("Edge not found: {edge_id}")]
    EdgeNotFound {
        /// Id or handle of the missing edge
        edge_id: String,
    },

    /// Serialization error during export
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create an invalid-argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}
