//! graph-search — a fixed-capacity undirected graph with DFS and BFS.
//!
//! Vertices live in a fixed number of slots, each owning an adjacency list
//! ordered newest edge first. The `gsearch` binary wraps the graph in a
//! one-character command loop.

pub mod cli;
pub mod config;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use cli::Session;
pub use config::{DriverConfig, OutputFormat};
pub use graph::{bfs, dfs, AdjacencyRow, Graph, TraversalKind};
pub use types::{GraphError, GraphResult, VertexId, VertexModel, DEFAULT_CAPACITY, END_MARKER};
