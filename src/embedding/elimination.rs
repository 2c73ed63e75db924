//! Elimination tracker.
//!
//! Chooses the next node to eliminate and maintains the two priority
//! node-sets that bias the order for layout quality: the wavefront (the
//! not-yet-eliminated neighbors of the most recently eliminated node) and
//! the wavecenter (all neighbors of eliminated nodes seen so far). Once both
//! are exhausted the tracker falls back to ascending original degree.

use std::collections::BTreeSet;

use crate::graph::Graph;

use super::error::EmbeddingError;
use super::state::OverlayState;

#[derive(Debug)]
pub(crate) struct EliminationTracker {
    wavefront: BTreeSet<usize>,
    wavecenter: BTreeSet<usize>,
    /// Node indices sorted ascending by original degree; the stable sort
    /// breaks ties by index, keeping selection deterministic.
    by_degree: Vec<usize>,
}

impl EliminationTracker {
    pub(crate) fn new(graph: &Graph) -> Self {
        let mut by_degree: Vec<usize> = (0..graph.node_count()).collect();
        by_degree.sort_by_key(|&node| graph.degree(node));
        Self {
            wavefront: BTreeSet::new(),
            wavecenter: BTreeSet::new(),
            by_degree,
        }
    }

    /// Select the next node to eliminate.
    ///
    /// Priority order: any not-yet-eliminated wavefront node, else any
    /// not-yet-eliminated wavecenter node, else the next not-yet-eliminated
    /// node in ascending-degree order. Each set is consumed in ascending
    /// index order.
    pub(crate) fn select_next(
        &mut self,
        state: &OverlayState<'_>,
    ) -> Result<usize, EmbeddingError> {
        if let Some(node) = Self::pop_eligible(&mut self.wavefront, state) {
            return Ok(node);
        }
        if let Some(node) = Self::pop_eligible(&mut self.wavecenter, state) {
            return Ok(node);
        }
        for &node in &self.by_degree {
            if !state.is_removed(node) {
                return Ok(node);
            }
        }
        Err(EmbeddingError::ExhaustedCandidates {
            eliminated: state.removed_count(),
            total: state.node_count(),
        })
    }

    /// Pop the smallest not-yet-removed node from `set`, dropping stale
    /// already-removed entries along the way.
    fn pop_eligible(set: &mut BTreeSet<usize>, state: &OverlayState<'_>) -> Option<usize> {
        while let Some(&node) = set.iter().next() {
            set.remove(&node);
            if !state.is_removed(node) {
                return Some(node);
            }
        }
        None
    }

    /// Record `node` as eliminated.
    ///
    /// The wavefront is rebuilt to exactly the not-yet-eliminated neighbors
    /// of `node` (original + synthetic edges); the same neighbors are
    /// unioned into the wavecenter.
    pub(crate) fn record_eliminated(&mut self, state: &mut OverlayState<'_>, node: usize) {
        let neighbors = state.present_neighbors(node);
        state.mark_removed(node);
        self.wavefront = neighbors.iter().copied().collect();
        self.wavecenter.extend(neighbors);
    }

    pub(crate) fn is_eliminated(&self, state: &OverlayState<'_>, node: usize) -> bool {
        state.is_removed(node)
    }
}
