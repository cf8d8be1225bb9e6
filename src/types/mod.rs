//! Shared types for the graph-search library.

pub mod error;
pub mod model;

pub use error::{GraphError, GraphResult};
pub use model::VertexModel;

/// Default number of vertex slots.
pub const DEFAULT_CAPACITY: usize = 10;

/// Marker printed after the last neighbour of each adjacency row.
pub const END_MARKER: &str = "NULL";

/// Index of a vertex slot.
pub type VertexId = usize;
