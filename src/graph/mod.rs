//! In-memory graph operations — the core data structure.

pub mod adjacency_graph;
pub mod traversal;

pub use adjacency_graph::{AdjacencyRow, Graph};
pub use traversal::{bfs, dfs, TraversalKind};
