//! Error types for the graph-search library.

use thiserror::Error;

use super::VertexModel;

/// All errors that can occur while building or searching a graph.
///
/// Graph errors reject a single operation and leave the graph unchanged.
/// Only [`GraphError::Io`] and [`GraphError::Config`] end a session.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `[0, capacity)`.
    #[error("Vertex number {vertex} out of bounds (0-{max})", max = .capacity.saturating_sub(1))]
    OutOfRange { vertex: i64, capacity: usize },

    /// Edge endpoint was never added (explicit model).
    #[error("Vertex {0} does not exist")]
    MissingVertex(usize),

    /// Vertex was already added (explicit model).
    #[error("Vertex {0} already exists")]
    AlreadyExists(usize),

    /// Every vertex slot is already present.
    #[error("Graph is full: all {0} vertices are present")]
    CapacityExceeded(usize),

    /// Operation has no meaning in the graph's vertex model.
    #[error("{operation} is not used in the {model} vertex model")]
    UnsupportedInModel {
        operation: &'static str,
        model: VertexModel,
    },

    /// Unknown command code.
    #[error("Invalid command '{0}'. Please try again")]
    InvalidCommand(String),

    /// Operand that is not an integer.
    #[error("Invalid operand '{0}': expected an integer")]
    InvalidOperand(String),

    /// Invalid configuration value or unreadable config file.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Whether the error only rejects one command and the session may go on.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Config(_))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
