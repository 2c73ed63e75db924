//! Shared elimination state.
//!
//! One embedding run owns exactly one [`OverlayState`]: the logical-removal
//! flags, the per-node synthetic edge overlays added by triangulation, and
//! the cumulative set of pair edges marked for removal from consideration.
//! Node indices are stable handles into fixed-size arrays; eliminated nodes
//! are never physically deleted.

use std::collections::BTreeSet;

use crate::graph::{Edge, Graph};

/// Removal flags plus synthetic-edge overlays for one embedding run.
#[derive(Debug)]
pub(crate) struct OverlayState<'g> {
    graph: &'g Graph,
    removed: Vec<bool>,
    removed_count: usize,
    /// Synthetic partners per node. An inserted edge (a, b) appears in both
    /// `synthetic[a]` and `synthetic[b]`.
    synthetic: Vec<BTreeSet<usize>>,
    synthetic_count: usize,
    /// Pair edges marked during triangulation, deduplicated on the
    /// canonical pair.
    pair_marks: BTreeSet<Edge>,
}

impl<'g> OverlayState<'g> {
    pub(crate) fn new(graph: &'g Graph) -> Self {
        let node_count = graph.node_count();
        Self {
            graph,
            removed: vec![false; node_count],
            removed_count: 0,
            synthetic: vec![BTreeSet::new(); node_count],
            synthetic_count: 0,
            pair_marks: BTreeSet::new(),
        }
    }

    pub(crate) fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub(crate) fn node_count(&self) -> usize {
        self.removed.len()
    }

    pub(crate) fn is_removed(&self, node: usize) -> bool {
        self.removed[node]
    }

    pub(crate) fn mark_removed(&mut self, node: usize) {
        if !self.removed[node] {
            self.removed[node] = true;
            self.removed_count += 1;
        }
    }

    pub(crate) fn removed_count(&self) -> usize {
        self.removed_count
    }

    /// Whether `a` and `b` are directly connected, through an original or a
    /// synthetic edge.
    pub(crate) fn connected(&self, a: usize, b: usize) -> bool {
        self.graph.has_edge(a, b) || self.synthetic[a].contains(&b)
    }

    /// Insert the synthetic edge (a, b) into both overlays.
    ///
    /// Returns false without touching the overlays when the edge would be a
    /// self-loop or is already recorded.
    pub(crate) fn add_synthetic(&mut self, a: usize, b: usize) -> bool {
        if a == b || self.synthetic[a].contains(&b) {
            return false;
        }
        self.synthetic[a].insert(b);
        self.synthetic[b].insert(a);
        self.synthetic_count += 1;
        true
    }

    pub(crate) fn synthetic_count(&self) -> usize {
        self.synthetic_count
    }

    /// Synthetic partners of `node`, ascending.
    pub(crate) fn synthetic_partners(&self, node: usize) -> &BTreeSet<usize> {
        &self.synthetic[node]
    }

    /// Distinct not-yet-removed neighbors of `node` (original + synthetic),
    /// ascending.
    pub(crate) fn present_neighbors(&self, node: usize) -> Vec<usize> {
        let mut neighbors: BTreeSet<usize> = self
            .graph
            .neighbors(node)
            .iter()
            .copied()
            .filter(|&other| !self.removed[other])
            .collect();
        neighbors.extend(
            self.synthetic[node]
                .iter()
                .copied()
                .filter(|&other| !self.removed[other]),
        );
        neighbors.into_iter().collect()
    }

    /// Other endpoints of every present incident edge of `node`, one entry
    /// per edge, ascending. Parallel links repeat their endpoint, so the
    /// length of this list is the node's current degree.
    pub(crate) fn incident_present_edges(&self, node: usize) -> Vec<usize> {
        let mut endpoints: Vec<usize> = self
            .graph
            .neighbors(node)
            .iter()
            .copied()
            .filter(|&other| !self.removed[other])
            .collect();
        endpoints.extend(
            self.synthetic[node]
                .iter()
                .copied()
                .filter(|&other| !self.removed[other]),
        );
        endpoints.sort_unstable();
        endpoints
    }

    /// Distinct neighbors of `node` in the union of original and synthetic
    /// edges, ignoring removal state. Used by the longest-path sweeps.
    pub(crate) fn union_neighbors(&self, node: usize) -> Vec<usize> {
        let mut neighbors: BTreeSet<usize> =
            self.graph.neighbors(node).iter().copied().collect();
        neighbors.extend(self.synthetic_partners(node).iter().copied());
        neighbors.into_iter().collect()
    }

    /// Mark a pair edge as no longer needing a synthetic replacement.
    pub(crate) fn mark_pair_edge(&mut self, edge: Edge) {
        self.pair_marks.insert(edge);
    }

    pub(crate) fn pair_mark_count(&self) -> usize {
        self.pair_marks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Graph {
        Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap()
    }

    #[test]
    fn test_synthetic_edges_are_symmetric() {
        let graph = square();
        let mut state = OverlayState::new(&graph);
        assert!(state.add_synthetic(1, 3));
        assert!(state.synthetic_partners(1).contains(&3));
        assert!(state.synthetic_partners(3).contains(&1));
        assert_eq!(state.synthetic_count(), 1);
    }

    #[test]
    fn test_synthetic_self_loops_and_duplicates_are_rejected() {
        let graph = square();
        let mut state = OverlayState::new(&graph);
        assert!(!state.add_synthetic(2, 2));
        assert!(state.add_synthetic(0, 2));
        assert!(!state.add_synthetic(2, 0));
        assert_eq!(state.synthetic_count(), 1);
    }

    #[test]
    fn test_present_neighbors_filter_removed_nodes() {
        let graph = square();
        let mut state = OverlayState::new(&graph);
        state.add_synthetic(1, 3);
        assert_eq!(state.present_neighbors(1), vec![0, 2, 3]);

        state.mark_removed(0);
        assert_eq!(state.present_neighbors(1), vec![2, 3]);
        assert_eq!(state.removed_count(), 1);
        assert!(state.is_removed(0));
    }

    #[test]
    fn test_union_neighbors_ignore_removal() {
        let graph = square();
        let mut state = OverlayState::new(&graph);
        state.add_synthetic(1, 3);
        state.mark_removed(0);
        assert_eq!(state.union_neighbors(1), vec![0, 2, 3]);
    }

    #[test]
    fn test_degree_counts_parallel_links() {
        let graph = Graph::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
        let state = OverlayState::new(&graph);
        assert_eq!(state.incident_present_edges(0), vec![1, 1]);
        assert_eq!(state.present_neighbors(0), vec![1]);
    }

    #[test]
    fn test_connected_sees_both_edge_kinds() {
        let graph = square();
        let mut state = OverlayState::new(&graph);
        assert!(state.connected(0, 1));
        assert!(!state.connected(0, 2));
        state.add_synthetic(0, 2);
        assert!(state.connected(0, 2));
        assert!(state.connected(2, 0));
    }
}
