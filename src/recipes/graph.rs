//! Weighted graph searches with a heap frontier, and component counting
//! with [`UnionFind`].
//!
//! | Function               | Frontier root                  | Complexity       |
//! |------------------------|--------------------------------|------------------|
//! | [`dijkstra`]           | smallest tentative distance    | O((V + E) log V) |
//! | [`prim_mst`]           | lightest edge leaving the tree | O((V + E) log V) |
//! | [`count_components`]   | n/a (union-find)               | O(V + E α(V))    |
//!
//! Both heap searches push duplicates instead of decreasing keys and skip
//! stale entries on pop.

use crate::ds::{OrderedHeap, UnionFind};
use crate::order::MinFirst;

/// Adjacency-list graph over dense node ids with non-negative weights.
///
/// ```
/// use lruheap::recipes::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4);
/// graph.add_undirected_edge(1, 2, 1);
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.neighbors(1), &[(2, 1)]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<(usize, u64)>>,
}

impl Graph {
    /// Graph with `nodes` isolated nodes.
    pub fn new(nodes: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); nodes],
        }
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Adds a directed edge, growing the node set to cover both endpoints.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u64) {
        let needed = from.max(to) + 1;
        if self.adjacency.len() < needed {
            self.adjacency.resize_with(needed, Vec::new);
        }
        self.adjacency[from].push((to, weight));
    }

    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: u64) {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight);
    }

    /// Outgoing `(neighbor, weight)` pairs; empty for an unknown node.
    pub fn neighbors(&self, node: usize) -> &[(usize, u64)] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Shortest distance from `start` to every node; `None` where unreachable.
///
/// An out-of-range `start` reaches nothing.
///
/// ```
/// use lruheap::recipes::{dijkstra, Graph};
///
/// let mut graph = Graph::new(4);
/// graph.add_edge(0, 1, 4);
/// graph.add_edge(0, 2, 1);
/// graph.add_edge(2, 1, 2);
///
/// assert_eq!(dijkstra(&graph, 0), vec![Some(0), Some(3), Some(1), None]);
/// ```
pub fn dijkstra(graph: &Graph, start: usize) -> Vec<Option<u64>> {
    let mut dist: Vec<Option<u64>> = vec![None; graph.node_count()];
    if start >= dist.len() {
        return dist;
    }
    dist[start] = Some(0);

    let mut frontier = OrderedHeap::new(MinFirst);
    frontier.push((0u64, start));

    while let Some((d, node)) = frontier.pop() {
        if dist[node].is_some_and(|best| d > best) {
            continue;
        }
        for &(next, weight) in graph.neighbors(node) {
            let candidate = d.saturating_add(weight);
            if dist[next].is_none_or(|best| candidate < best) {
                dist[next] = Some(candidate);
                frontier.push((candidate, next));
            }
        }
    }
    dist
}

/// Total weight of a minimum spanning tree of the component containing
/// `start`, treating every edge as undirected.
///
/// Build the graph with [`Graph::add_undirected_edge`]; directed-only edges
/// are followed only in their own direction.
///
/// ```
/// use lruheap::recipes::{prim_mst, Graph};
///
/// let mut graph = Graph::new(4);
/// graph.add_undirected_edge(0, 1, 1);
/// graph.add_undirected_edge(1, 2, 2);
/// graph.add_undirected_edge(0, 2, 3);
/// graph.add_undirected_edge(2, 3, 4);
///
/// assert_eq!(prim_mst(&graph, 0), 7);
/// ```
pub fn prim_mst(graph: &Graph, start: usize) -> u64 {
    if start >= graph.node_count() {
        return 0;
    }
    let mut in_tree = vec![false; graph.node_count()];
    let mut total = 0u64;

    let mut frontier = OrderedHeap::new(MinFirst);
    frontier.push((0u64, start));

    while let Some((weight, node)) = frontier.pop() {
        if in_tree[node] {
            continue;
        }
        in_tree[node] = true;
        total = total.saturating_add(weight);

        for &(next, edge) in graph.neighbors(node) {
            if !in_tree[next] {
                frontier.push((edge, next));
            }
        }
    }
    total
}

/// Number of connected components among nodes `0..nodes` joined by `edges`.
///
/// # Panics
///
/// Panics if an edge names a node `>= nodes`.
///
/// ```
/// use lruheap::recipes::count_components;
///
/// assert_eq!(count_components(5, &[(0, 1), (1, 2), (3, 4)]), 2);
/// ```
pub fn count_components(nodes: usize, edges: &[(usize, usize)]) -> usize {
    let mut sets = UnionFind::new(nodes);
    for &(a, b) in edges {
        sets.union(a, b);
    }
    sets.count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new(6);
        graph.add_undirected_edge(0, 1, 7);
        graph.add_undirected_edge(0, 2, 9);
        graph.add_undirected_edge(0, 5, 14);
        graph.add_undirected_edge(1, 2, 10);
        graph.add_undirected_edge(1, 3, 15);
        graph.add_undirected_edge(2, 3, 11);
        graph.add_undirected_edge(2, 5, 2);
        graph.add_undirected_edge(3, 4, 6);
        graph.add_undirected_edge(4, 5, 9);
        graph
    }

    #[test]
    fn dijkstra_finds_shortest_paths() {
        let dist = dijkstra(&sample(), 0);
        assert_eq!(
            dist,
            vec![Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]
        );
    }

    #[test]
    fn dijkstra_out_of_range_start_reaches_nothing() {
        assert_eq!(dijkstra(&sample(), 99), vec![None; 6]);
        assert!(dijkstra(&Graph::default(), 0).is_empty());
    }

    #[test]
    fn prim_counts_each_tree_edge_once() {
        // Tree: 2-5 (2), 3-4 (6), 0-1 (7), 0-2 (9), 4-5 (9).
        assert_eq!(prim_mst(&sample(), 0), 33);
        assert_eq!(prim_mst(&sample(), 4), 33);
    }

    #[test]
    fn prim_stays_within_the_start_component() {
        let mut graph = Graph::new(4);
        graph.add_undirected_edge(0, 1, 5);
        graph.add_undirected_edge(2, 3, 1);
        assert_eq!(prim_mst(&graph, 0), 5);
        assert_eq!(prim_mst(&graph, 2), 1);
        assert_eq!(prim_mst(&graph, 10), 0);
    }

    #[test]
    fn add_edge_grows_the_node_set() {
        let mut graph = Graph::new(0);
        graph.add_edge(3, 1, 2);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.neighbors(7).is_empty());
    }

    #[test]
    fn components_count_isolated_nodes() {
        assert_eq!(count_components(4, &[]), 4);
        assert_eq!(count_components(4, &[(0, 1), (1, 0), (2, 3), (3, 2)]), 2);
        assert_eq!(count_components(0, &[]), 0);
    }
}
