//! Triangulation engine.
//!
//! Before a node is eliminated, its remaining neighborhood is saturated with
//! synthetic edges so the structure left behind stays triangulated. Existing
//! edges between two of its neighbors ("pair edges") already close a
//! triangle through the node and reduce the requirement; the rest is covered
//! by inserting synthetic edges between neighbor pairs found by a cursor
//! sweep over the rng-shuffled candidate list.

use std::collections::BTreeSet;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::graph::Edge;

use super::error::EmbeddingError;
use super::state::OverlayState;

/// Outcome of triangulating one node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TriangulationReport {
    /// Current degree of the node: present incident edges, original +
    /// synthetic, parallel links counted per link.
    pub degree: usize,
    /// Pair edges found among the node's present neighbors.
    pub pair_edges: usize,
    /// Synthetic edges required, `max(degree - 1 - pair_edges, 0)`.
    pub required: usize,
    /// Synthetic edges actually inserted. Equals `required` on success.
    pub added: usize,
}

/// Find the pair edges of `node`: still-present edges (x, y) where x is a
/// present neighbor of `node`, y is a present neighbor of x other than
/// `node`, and y is itself directly connected to `node`. Every such edge
/// already closes a triangle through `node`.
pub(crate) fn pair_edges(state: &OverlayState<'_>, node: usize) -> BTreeSet<Edge> {
    let mut result = BTreeSet::new();
    for x in state.present_neighbors(node) {
        for y in state.present_neighbors(x) {
            if y == node {
                continue;
            }
            if state.connected(node, y) {
                result.insert(Edge::canonical(x, y));
            }
        }
    }
    result
}

/// Saturate the triangulation requirement of `node`.
///
/// Computes the pair edges (marking them as not needing replacements), the
/// current degree, and the requirement `(degree - 1) - pair_edges`. While
/// the requirement is positive, sweeps cursor pairs (first, second) over the
/// shuffled candidate list and inserts a synthetic edge for every pair that
/// is distinct, not eliminated, and not already connected. Fails with
/// [`EmbeddingError::TriangulationDeadlock`] when the pair space is
/// exhausted first.
pub(crate) fn triangulate_node<R: Rng>(
    state: &mut OverlayState<'_>,
    node: usize,
    rng: &mut R,
) -> Result<TriangulationReport, EmbeddingError> {
    let pairs = pair_edges(state, node);
    for &edge in &pairs {
        state.mark_pair_edge(edge);
    }

    let mut candidates = state.incident_present_edges(node);
    let degree = candidates.len();

    let mut report = TriangulationReport {
        degree,
        pair_edges: pairs.len(),
        required: (degree.saturating_sub(1)).saturating_sub(pairs.len()),
        added: 0,
    };
    if report.required == 0 {
        return Ok(report);
    }

    candidates.shuffle(rng);

    let mut need = report.required;
    let mut first = 0usize;
    let mut second = 1usize;
    while need > 0 {
        if first + 1 >= degree || second >= degree {
            return Err(EmbeddingError::TriangulationDeadlock {
                node,
                needed: need,
                degree,
            });
        }

        let a = candidates[first];
        let b = candidates[second];
        let valid = a != b
            && !state.is_removed(a)
            && !state.is_removed(b)
            && !state.connected(a, b);
        if valid && state.add_synthetic(a, b) {
            need -= 1;
            report.added += 1;
        }

        // Invalid candidates advance the cursor like any other pair
        second += 1;
        if second >= degree {
            first += 1;
            second = first + 1;
        }
    }

    Ok(report)
}
