//! In-memory graph model.
//!
//! This module contains the fixed-index undirected graph the embedding
//! algorithm operates on, plus the ring-space properties that embeddings
//! attach to a graph as derived annotations.

pub mod gml;

pub use gml::{parse_gml_file, parse_gml_str, GmlParseError};

use std::collections::{HashMap, HashSet};

use crate::ring::RingIdentifierSpace;

/// Errors that can occur while building a graph
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("Edge endpoint {endpoint} is out of range for a graph with {node_count} nodes")]
    EndpointOutOfRange { endpoint: usize, node_count: usize },
}

/// An undirected edge, canonicalized so that `src <= dst`.
///
/// Canonicalization makes the unordered pair usable as a deduplication key:
/// (3, 7) and (7, 3) denote the same link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
}

impl Edge {
    /// Build the canonical form of the edge between `a` and `b`.
    pub fn canonical(a: usize, b: usize) -> Self {
        Self {
            src: a.min(b),
            dst: a.max(b),
        }
    }

    /// The endpoint that is not `node`. For a self-loop this is `node` itself.
    pub fn other_end(&self, node: usize) -> usize {
        if self.dst == node {
            self.src
        } else {
            self.dst
        }
    }
}

/// A fixed-size undirected graph with stable integer node indices.
///
/// Nodes are indexed `0..node_count` and never renumbered; algorithms that
/// logically delete nodes keep their own removal flags over these indices.
/// Parallel links between the same pair of nodes are preserved in the
/// adjacency lists (multiplicity matters for degree-based computations),
/// while `has_edge` answers on the deduplicated canonical edge set.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<usize>>,
    edge_set: HashSet<Edge>,
    ring_spaces: HashMap<String, RingIdentifierSpace>,
}

impl Graph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
            edge_set: HashSet::new(),
            ring_spaces: HashMap::new(),
        }
    }

    /// Build a graph from an undirected edge list.
    ///
    /// Edges may appear in either endpoint order and may repeat; repeats are
    /// kept as parallel links. Endpoints must be valid node indices.
    pub fn from_edges(node_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        graph.sort_adjacency();
        Ok(graph)
    }

    /// Add a single undirected edge.
    pub fn add_edge(&mut self, a: usize, b: usize) -> Result<(), GraphError> {
        let node_count = self.node_count();
        for endpoint in [a, b] {
            if endpoint >= node_count {
                return Err(GraphError::EndpointOutOfRange {
                    endpoint,
                    node_count,
                });
            }
        }
        self.adjacency[a].push(b);
        if a != b {
            self.adjacency[b].push(a);
        }
        self.edge_set.insert(Edge::canonical(a, b));
        Ok(())
    }

    /// Sort every adjacency list ascending so neighbor enumeration order is
    /// deterministic.
    fn sort_adjacency(&mut self) {
        for list in &mut self.adjacency {
            list.sort_unstable();
        }
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_set.len()
    }

    /// Neighbors of `node` in ascending index order, one entry per incident
    /// link (parallel links repeat their endpoint).
    pub fn neighbors(&self, node: usize) -> &[usize] {
        &self.adjacency[node]
    }

    /// Degree of `node`, counting every incident link.
    pub fn degree(&self, node: usize) -> usize {
        self.adjacency[node].len()
    }

    /// Whether an edge between `a` and `b` exists, in either direction.
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.edge_set.contains(&Edge::canonical(a, b))
    }

    /// Look up the canonical edge between `a` and `b`, if present.
    pub fn edge(&self, a: usize, b: usize) -> Option<Edge> {
        let edge = Edge::canonical(a, b);
        self.edge_set.get(&edge).copied()
    }

    /// Iterate over the distinct canonical edges in an unspecified order.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edge_set.iter()
    }

    /// Attach a ring identifier space to the graph under a freshly allocated
    /// property name and return that name.
    ///
    /// Names are namespaced with an auto-incrementing suffix
    /// (`ring_id_space_0`, `ring_id_space_1`, ...) so multiple embeddings of
    /// the same graph can coexist without overwriting each other.
    pub fn attach_ring_space(&mut self, space: RingIdentifierSpace) -> String {
        let mut suffix = 0usize;
        let name = loop {
            let candidate = format!("ring_id_space_{}", suffix);
            if !self.ring_spaces.contains_key(&candidate) {
                break candidate;
            }
            suffix += 1;
        };
        self.ring_spaces.insert(name.clone(), space);
        name
    }

    /// Look up an attached ring identifier space by property name.
    pub fn ring_space(&self, name: &str) -> Option<&RingIdentifierSpace> {
        self.ring_spaces.get(name)
    }

    /// Names of all attached ring identifier spaces, sorted.
    pub fn ring_space_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ring_spaces.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_edge_orders_endpoints() {
        assert_eq!(Edge::canonical(7, 3), Edge { src: 3, dst: 7 });
        assert_eq!(Edge::canonical(3, 7), Edge::canonical(7, 3));
    }

    #[test]
    fn test_neighbors_are_sorted_and_symmetric() {
        let graph = Graph::from_edges(4, &[(2, 0), (0, 1), (3, 0)]).unwrap();
        assert_eq!(graph.neighbors(0), &[1, 2, 3]);
        assert_eq!(graph.neighbors(2), &[0]);
        assert!(graph.has_edge(0, 2));
        assert!(graph.has_edge(2, 0));
        assert!(!graph.has_edge(1, 2));
    }

    #[test]
    fn test_parallel_links_kept_in_adjacency_but_deduped_in_edge_set() {
        let graph = Graph::from_edges(2, &[(0, 1), (1, 0)]).unwrap();
        assert_eq!(graph.degree(0), 2);
        assert_eq!(graph.degree(1), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_self_loop_counts_once() {
        let graph = Graph::from_edges(2, &[(0, 0), (0, 1)]).unwrap();
        assert_eq!(graph.neighbors(0), &[0, 1]);
        assert_eq!(graph.degree(0), 2);
        assert!(graph.has_edge(0, 0));
    }

    #[test]
    fn test_out_of_range_endpoint_is_rejected() {
        let result = Graph::from_edges(2, &[(0, 2)]);
        assert!(matches!(
            result,
            Err(GraphError::EndpointOutOfRange { endpoint: 2, .. })
        ));
    }

    #[test]
    fn test_ring_space_names_auto_increment() {
        let mut graph = Graph::new(3);
        let space = RingIdentifierSpace::from_order(&[0, 1, 2], 1.0, true);
        let first = graph.attach_ring_space(space.clone());
        let second = graph.attach_ring_space(space);
        assert_eq!(first, "ring_id_space_0");
        assert_eq!(second, "ring_id_space_1");
        assert!(graph.ring_space(&first).is_some());
        assert!(graph.ring_space(&second).is_some());
    }
}
