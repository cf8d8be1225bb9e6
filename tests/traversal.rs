//! Traversal tests: DFS and BFS visit order, reachability, and level order.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use graph_search::graph::{bfs, dfs, Graph, TraversalKind};
use graph_search::types::{GraphError, VertexModel};

// ==================== Helper ====================

fn graph_with_edges(edges: &[(usize, usize)]) -> Graph {
    let mut graph = Graph::new(VertexModel::Implicit);
    for &(a, b) in edges {
        graph.add_edge(a, b).unwrap();
    }
    graph
}

/// Random implicit graph over `capacity` slots, plus the edge list used.
fn random_graph(rng: &mut StdRng, capacity: usize, edges: usize) -> (Graph, Vec<(usize, usize)>) {
    let mut graph = Graph::with_capacity(VertexModel::Implicit, capacity);
    let mut list = Vec::with_capacity(edges);
    for _ in 0..edges {
        let a = rng.gen_range(0..capacity);
        let b = rng.gen_range(0..capacity);
        graph.add_edge(a, b).unwrap();
        list.push((a, b));
    }
    (graph, list)
}

/// Hop distances from `start` by repeated relaxation over the edge list.
fn hop_distances(capacity: usize, edges: &[(usize, usize)], start: usize) -> Vec<Option<usize>> {
    let mut dist = vec![None; capacity];
    dist[start] = Some(0);
    let mut changed = true;
    while changed {
        changed = false;
        for &(a, b) in edges {
            for (from, to) in [(a, b), (b, a)] {
                if let Some(d) = dist[from] {
                    if dist[to].map_or(true, |cur| d + 1 < cur) {
                        dist[to] = Some(d + 1);
                        changed = true;
                    }
                }
            }
        }
    }
    dist
}

// ==================== DFS Tests ====================

#[test]
fn test_dfs_follows_newest_edge_first() {
    let mut graph = graph_with_edges(&[(0, 1), (0, 2)]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0, 2, 1]);
}

#[test]
fn test_dfs_chain() {
    let mut graph = graph_with_edges(&[(0, 1), (1, 2), (2, 3)]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0, 1, 2, 3]);
}

#[test]
fn test_dfs_descends_before_siblings() {
    let mut graph = graph_with_edges(&[(0, 1), (0, 2), (1, 3), (2, 4)]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0, 2, 4, 1, 3]);
}

#[test]
fn test_dfs_skips_unreachable() {
    let mut graph = graph_with_edges(&[(0, 1), (5, 6)]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0, 1]);
    assert!(graph.is_visited(1));
    assert!(!graph.is_visited(5));
    assert!(!graph.is_visited(6));
}

#[test]
fn test_dfs_isolated_start() {
    let mut graph = Graph::new(VertexModel::Implicit);
    assert_eq!(dfs(&mut graph, 7).unwrap(), vec![7]);
    assert_eq!(graph.visited_vertices(), vec![7]);
}

#[test]
fn test_dfs_out_of_range() {
    let mut graph = graph_with_edges(&[(0, 1)]);
    let err = dfs(&mut graph, 10).unwrap_err();
    assert!(matches!(err, GraphError::OutOfRange { vertex: 10, .. }));
    assert!(graph.visited_vertices().is_empty());
}

#[test]
fn test_dfs_ignores_loops_and_duplicates() {
    let mut graph = graph_with_edges(&[(2, 2), (2, 3), (2, 3)]);
    assert_eq!(dfs(&mut graph, 2).unwrap(), vec![2, 3]);
}

#[test]
fn test_dfs_without_reset_only_revisits_start() {
    let mut graph = graph_with_edges(&[(0, 1), (1, 2)]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0, 1, 2]);
    assert_eq!(dfs(&mut graph, 0).unwrap(), vec![0]);

    graph.reset_visited();
    assert_eq!(dfs(&mut graph, 2).unwrap(), vec![2, 1, 0]);
}

#[test]
fn test_dfs_long_path_does_not_recurse() {
    let n = 20_000;
    let mut graph = Graph::with_capacity(VertexModel::Implicit, n);
    for v in 0..n - 1 {
        graph.add_edge(v, v + 1).unwrap();
    }
    let order = dfs(&mut graph, 0).unwrap();
    assert_eq!(order, (0..n).collect::<Vec<_>>());
}

// ==================== BFS Tests ====================

#[test]
fn test_bfs_level_order() {
    let mut graph = graph_with_edges(&[(0, 1), (0, 2), (1, 3)]);
    assert_eq!(bfs(&mut graph, 0).unwrap(), vec![0, 2, 1, 3]);
}

#[test]
fn test_bfs_differs_from_dfs() {
    let edges = [(0, 1), (0, 2), (1, 3), (2, 4)];
    let mut graph = graph_with_edges(&edges);
    assert_eq!(bfs(&mut graph, 0).unwrap(), vec![0, 2, 1, 4, 3]);
}

#[test]
fn test_bfs_out_of_range() {
    let mut graph = Graph::new(VertexModel::Implicit);
    assert!(matches!(
        bfs(&mut graph, 99),
        Err(GraphError::OutOfRange { vertex: 99, .. })
    ));
    assert!(graph.visited_vertices().is_empty());
}

#[test]
fn test_bfs_complete_graph_never_overflows() {
    let mut graph = Graph::new(VertexModel::Implicit);
    for a in 0..10 {
        for b in 0..10 {
            graph.add_edge(a, b).unwrap();
        }
    }
    let order = bfs(&mut graph, 0).unwrap();
    assert_eq!(order.len(), 10);
    assert_eq!(order[0], 0);
}

#[test]
fn test_bfs_ignores_loops_and_duplicates() {
    let mut graph = graph_with_edges(&[(2, 2), (2, 3), (2, 3)]);
    assert_eq!(bfs(&mut graph, 2).unwrap(), vec![2, 3]);
}

// ==================== Explicit Model Tests ====================

#[test]
fn test_traversals_in_explicit_model() {
    let mut graph = Graph::new(VertexModel::Explicit);
    for v in [1, 2, 3] {
        graph.add_vertex(v).unwrap();
    }
    graph.add_edge(1, 2).unwrap();
    graph.add_edge(1, 3).unwrap();

    assert_eq!(dfs(&mut graph, 1).unwrap(), vec![1, 3, 2]);
    graph.reset_visited();
    assert_eq!(bfs(&mut graph, 1).unwrap(), vec![1, 3, 2]);
}

#[test]
fn test_traversal_kind_dispatch() {
    let mut graph = graph_with_edges(&[(0, 1), (0, 2), (1, 3), (2, 4)]);
    assert_eq!(
        TraversalKind::Dfs.run(&mut graph, 0).unwrap(),
        vec![0, 2, 4, 1, 3]
    );
    graph.reset_visited();
    assert_eq!(
        TraversalKind::Bfs.run(&mut graph, 0).unwrap(),
        vec![0, 2, 1, 4, 3]
    );
    assert_eq!(TraversalKind::Bfs.name(), "bfs");
}

// ==================== Randomized Property Tests ====================

#[test]
fn test_random_graphs_symmetric() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (graph, edges) = random_graph(&mut rng, 10, 15);
        for &(a, b) in &edges {
            assert!(graph.neighbors(a).unwrap().any(|n| n == b));
            assert!(graph.neighbors(b).unwrap().any(|n| n == a));
        }
        let entries: usize = (0..10).map(|v| graph.neighbors(v).unwrap().count()).sum();
        assert_eq!(entries, edges.len() * 2);
    }
}

#[test]
fn test_random_dfs_visits_reachable_set_once() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..100 {
        let (mut graph, edges) = random_graph(&mut rng, 10, 8);
        let start = rng.gen_range(0..10);
        let dist = hop_distances(10, &edges, start);

        let order = dfs(&mut graph, start).unwrap();
        let mut seen = order.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), order.len(), "duplicate visit in {:?}", order);

        let reachable: Vec<usize> = (0..10).filter(|&v| dist[v].is_some()).collect();
        assert_eq!(seen, reachable);
    }
}

#[test]
fn test_random_bfs_non_decreasing_distance() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..100 {
        let (mut graph, edges) = random_graph(&mut rng, 10, 10);
        let start = rng.gen_range(0..10);
        let dist = hop_distances(10, &edges, start);

        let order = bfs(&mut graph, start).unwrap();
        let levels: Vec<usize> = order.iter().map(|&v| dist[v].unwrap()).collect();
        assert!(
            levels.windows(2).all(|w| w[0] <= w[1]),
            "bfs order {:?} has levels {:?}",
            order,
            levels
        );
        assert_eq!(order.len(), dist.iter().filter(|d| d.is_some()).count());
    }
}
