//! Core graph structure: fixed vertex slots, each owning its adjacency list.

use std::collections::VecDeque;
use std::fmt;

use log::debug;
use serde::Serialize;

use crate::types::{GraphError, GraphResult, VertexId, VertexModel, DEFAULT_CAPACITY, END_MARKER};

/// An undirected graph over a fixed number of vertex slots.
///
/// Each slot owns its neighbour list, ordered most-recent-first. The graph
/// also carries one visited flag per slot, used by the traversals and
/// cleared with [`Graph::reset_visited`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// Whether slots exist implicitly or must be added.
    model: VertexModel,
    /// Neighbour lists, indexed by vertex id. Front is the newest edge.
    adjacency: Vec<VecDeque<VertexId>>,
    /// Presence flags (explicit model only; all false otherwise).
    present: Vec<bool>,
    /// Number of present vertices (explicit model).
    present_count: usize,
    /// Per-traversal visited flags.
    visited: Vec<bool>,
    /// Number of successful edge insertions.
    edge_count: usize,
}

/// One line of the adjacency dump.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdjacencyRow {
    /// The vertex this row belongs to.
    pub vertex: VertexId,
    /// Neighbours in stored order.
    pub neighbors: Vec<VertexId>,
}

impl fmt::Display for AdjacencyRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex {}: ", self.vertex)?;
        for n in &self.neighbors {
            write!(f, "{} -> ", n)?;
        }
        f.write_str(END_MARKER)
    }
}

impl Graph {
    /// Create an empty graph with the default number of slots.
    pub fn new(model: VertexModel) -> Self {
        Self::with_capacity(model, DEFAULT_CAPACITY)
    }

    /// Create an empty graph with `capacity` slots.
    pub fn with_capacity(model: VertexModel, capacity: usize) -> Self {
        Self {
            model,
            adjacency: vec![VecDeque::new(); capacity],
            present: vec![false; capacity],
            present_count: 0,
            visited: vec![false; capacity],
            edge_count: 0,
        }
    }

    /// Discard every vertex and edge and clear all visited flags.
    pub fn reinitialize(&mut self) {
        for list in &mut self.adjacency {
            list.clear();
        }
        self.present.fill(false);
        self.visited.fill(false);
        self.present_count = 0;
        self.edge_count = 0;
        debug!("graph reinitialized ({} slots)", self.capacity());
    }

    /// Clear all visited flags, leaving vertices and edges intact.
    pub fn reset_visited(&mut self) {
        self.visited.fill(false);
    }

    /// Number of vertex slots.
    pub fn capacity(&self) -> usize {
        self.adjacency.len()
    }

    /// The vertex model this graph was created with.
    pub fn model(&self) -> VertexModel {
        self.model
    }

    /// Number of vertices: every slot in the implicit model, present ones otherwise.
    pub fn vertex_count(&self) -> usize {
        match self.model {
            VertexModel::Implicit => self.capacity(),
            VertexModel::Explicit => self.present_count,
        }
    }

    /// Number of edges inserted (each undirected edge counted once).
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Validate a vertex index against the capacity.
    pub fn check_vertex(&self, vertex: VertexId) -> GraphResult<VertexId> {
        if vertex < self.capacity() {
            Ok(vertex)
        } else {
            Err(GraphError::OutOfRange {
                vertex: i64::try_from(vertex).unwrap_or(i64::MAX),
                capacity: self.capacity(),
            })
        }
    }

    /// Whether `vertex` may take part in edges.
    ///
    /// Always true for in-range slots of an implicit graph.
    pub fn is_present(&self, vertex: VertexId) -> bool {
        match self.model {
            VertexModel::Implicit => vertex < self.capacity(),
            VertexModel::Explicit => self.present.get(vertex).copied().unwrap_or(false),
        }
    }

    /// Whether the current traversal has reached `vertex`.
    pub fn is_visited(&self, vertex: VertexId) -> bool {
        self.visited.get(vertex).copied().unwrap_or(false)
    }

    /// All vertices with the visited flag set, in index order.
    pub fn visited_vertices(&self) -> Vec<VertexId> {
        self.visited
            .iter()
            .enumerate()
            .filter_map(|(v, &seen)| seen.then_some(v))
            .collect()
    }

    /// Neighbours of `vertex`, newest edge first.
    pub fn neighbors(&self, vertex: VertexId) -> GraphResult<impl Iterator<Item = VertexId> + '_> {
        let vertex = self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].iter().copied())
    }

    /// Add a vertex (explicit model only).
    pub fn add_vertex(&mut self, vertex: VertexId) -> GraphResult<()> {
        if self.model == VertexModel::Implicit {
            return Err(GraphError::UnsupportedInModel {
                operation: "Insert vertex",
                model: self.model,
            });
        }
        let vertex = self.check_vertex(vertex)?;
        if self.present_count >= self.capacity() {
            return Err(GraphError::CapacityExceeded(self.capacity()));
        }
        if self.present[vertex] {
            return Err(GraphError::AlreadyExists(vertex));
        }

        self.present[vertex] = true;
        self.present_count += 1;
        debug!("vertex {} added ({} present)", vertex, self.present_count);
        Ok(())
    }

    /// Add an undirected edge between `a` and `b`.
    ///
    /// Both endpoints are validated before either list is touched. Self-loops
    /// and duplicate edges are accepted.
    pub fn add_edge(&mut self, a: VertexId, b: VertexId) -> GraphResult<()> {
        let a = self.check_vertex(a)?;
        let b = self.check_vertex(b)?;
        for v in [a, b] {
            if !self.is_present(v) {
                return Err(GraphError::MissingVertex(v));
            }
        }

        self.adjacency[a].push_front(b);
        self.adjacency[b].push_front(a);
        self.edge_count += 1;
        debug!("edge added between {} and {}", a, b);
        Ok(())
    }

    /// Whether the slot should appear in the adjacency dump.
    fn is_listed(&self, vertex: VertexId) -> bool {
        match self.model {
            VertexModel::Implicit => !self.adjacency[vertex].is_empty(),
            VertexModel::Explicit => self.present[vertex],
        }
    }

    /// Adjacency rows for every non-empty slot, in index order.
    pub fn adjacency_rows(&self) -> Vec<AdjacencyRow> {
        (0..self.capacity())
            .filter(|&v| self.is_listed(v))
            .map(|v| AdjacencyRow {
                vertex: v,
                neighbors: self.adjacency[v].iter().copied().collect(),
            })
            .collect()
    }

    /// The `index`-th neighbour of an in-range `vertex`, newest first.
    pub(crate) fn neighbor_at(&self, vertex: VertexId, index: usize) -> Option<VertexId> {
        self.adjacency[vertex].get(index).copied()
    }

    /// Set the visited flag; returns false if it was already set.
    pub(crate) fn mark_visited(&mut self, vertex: VertexId) -> bool {
        !std::mem::replace(&mut self.visited[vertex], true)
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(VertexModel::default())
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.adjacency_rows() {
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
