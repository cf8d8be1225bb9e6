//! Graph traversal algorithms (DFS, BFS).
//!
//! Both traversals use the graph's visited flags and leave them set when they
//! return. Call [`Graph::reset_visited`] before starting a new run; the start
//! vertex is always visited, even when its flag is already set.

use std::collections::VecDeque;

use log::debug;
use serde::Serialize;

use crate::types::{GraphResult, VertexId};

use super::Graph;

/// Which traversal to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraversalKind {
    /// Depth-first, pre-order.
    Dfs,
    /// Breadth-first, level order.
    Bfs,
}

impl TraversalKind {
    /// Return a human-readable name for this traversal.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Dfs => "dfs",
            Self::Bfs => "bfs",
        }
    }

    /// Run this traversal from `start`.
    pub fn run(self, graph: &mut Graph, start: VertexId) -> GraphResult<Vec<VertexId>> {
        match self {
            Self::Dfs => dfs(graph, start),
            Self::Bfs => bfs(graph, start),
        }
    }
}

/// Depth-first search from `start`, returning vertices in visit order.
///
/// Neighbours are explored in stored order (newest edge first) and each
/// unvisited neighbour is descended into before the next one is looked at.
/// The work-stack holds `(vertex, cursor)` frames so the order matches the
/// recursive formulation without depending on call-stack depth.
pub fn dfs(graph: &mut Graph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    let start = graph.check_vertex(start)?;
    let mut order = Vec::new();

    graph.mark_visited(start);
    order.push(start);

    let mut stack: Vec<(VertexId, usize)> = vec![(start, 0)];
    while let Some(frame) = stack.last_mut() {
        let (vertex, cursor) = *frame;
        match graph.neighbor_at(vertex, cursor) {
            Some(neighbor) => {
                frame.1 += 1;
                if graph.mark_visited(neighbor) {
                    order.push(neighbor);
                    stack.push((neighbor, 0));
                }
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!("dfs from {} visited {:?}", start, order);
    Ok(order)
}

/// Breadth-first search from `start`, returning vertices in visit order.
///
/// A vertex is marked visited when it is enqueued, so no vertex enters the
/// queue twice and the queue never holds more than `capacity` entries.
pub fn bfs(graph: &mut Graph, start: VertexId) -> GraphResult<Vec<VertexId>> {
    let start = graph.check_vertex(start)?;
    let mut order = Vec::new();
    let mut queue: VecDeque<VertexId> = VecDeque::with_capacity(graph.capacity());

    graph.mark_visited(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current);
        let mut cursor = 0;
        while let Some(neighbor) = graph.neighbor_at(current, cursor) {
            cursor += 1;
            if graph.mark_visited(neighbor) {
                debug_assert!(queue.len() < graph.capacity());
                queue.push_back(neighbor);
            }
        }
    }

    debug!("bfs from {} visited {:?}", start, order);
    Ok(order)
}
