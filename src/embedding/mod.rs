//! Circular graph embedding.
//!
//! This module contains the layout algorithm that orders the nodes of an
//! arbitrary graph around a ring:
//!
//! 1. nodes are eliminated one by one ([`elimination`]), each elimination
//!    first saturating the node's neighborhood with synthetic triangulation
//!    edges ([`triangulation`]);
//! 2. a double-sweep depth-first search over original + synthetic edges
//!    extracts an approximate longest path ([`longest_path`]);
//! 3. nodes missing from that path are spliced in next to an already placed
//!    neighbor ([`completion`]);
//! 4. the final order is mapped onto uniformly spaced ring positions and
//!    attached to the graph as a ring identifier space.
//!
//! One invocation owns all of its mutable state; independent runs never
//! share anything, so batches can embed graphs in parallel. All randomness
//! comes from the rng passed in, which keeps seeded runs reproducible.

pub mod error;

mod completion;
mod elimination;
mod longest_path;
mod state;
mod triangulation;

pub use error::EmbeddingError;

use log::debug;
use rand::Rng;
use serde::Serialize;

use crate::config::EmbeddingConfig;
use crate::graph::Graph;
use crate::ring::RingIdentifierSpace;

use completion::complete_path;
use elimination::EliminationTracker;
use state::OverlayState;
use triangulation::triangulate_node;

/// Counters collected over one embedding run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EmbeddingStats {
    /// Nodes processed (always the full node count on success).
    pub eliminated: usize,
    /// Synthetic triangulation edges inserted.
    pub synthetic_edges: usize,
    /// Distinct pair edges marked as already closing a triangle.
    pub pair_edges_marked: usize,
}

/// Result of one successful embedding run.
#[derive(Debug, Clone, Serialize)]
pub struct EmbeddingOutcome {
    /// Property name the ring identifier space was attached under.
    pub property: String,
    /// Final node order around the ring; a permutation of `0..node_count`.
    pub order: Vec<usize>,
    pub stats: EmbeddingStats,
}

/// Embed `graph` onto a ring.
///
/// Runs the four phases to completion and attaches the resulting
/// [`RingIdentifierSpace`] to the graph under a fresh property name. The
/// configuration is expected to be validated; `config.seed` is not read
/// here, the caller seeds `rng`. An empty graph is a no-op success with an
/// empty ring.
pub fn embed<R: Rng>(
    graph: &mut Graph,
    config: &EmbeddingConfig,
    rng: &mut R,
) -> Result<EmbeddingOutcome, EmbeddingError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        let space = RingIdentifierSpace::from_order(&[], config.modulus, config.wrap_around);
        let property = graph.attach_ring_space(space);
        return Ok(EmbeddingOutcome {
            property,
            order: Vec::new(),
            stats: EmbeddingStats::default(),
        });
    }

    let (order, stats) = {
        let mut state = OverlayState::new(graph);
        let mut tracker = EliminationTracker::new(graph);

        // Phase 1: eliminate every node, triangulating as we go
        let mut elimination_order = Vec::with_capacity(node_count);
        for _ in 0..node_count {
            let node = tracker.select_next(&state)?;
            let report = triangulate_node(&mut state, node, rng)?;
            debug!(
                "Eliminated node {} (degree {}, {} pair edges, {} synthetic edges added)",
                node, report.degree, report.pair_edges, report.added
            );
            tracker.record_eliminated(&mut state, node);
            debug_assert!(tracker.is_eliminated(&state, node));
            elimination_order.push(node);
        }

        // Phase 2: approximate longest path, rooted at the first-eliminated
        // node
        let path = longest_path::longest_path(&state, elimination_order[0]);
        debug!(
            "Longest path covers {} of {} nodes",
            path.len(),
            node_count
        );

        // Phase 3: splice in everything the path missed
        let order = complete_path(state.graph(), path, config.max_placement_failures)?;
        debug_assert!(is_permutation(&order, node_count));

        let stats = EmbeddingStats {
            eliminated: elimination_order.len(),
            synthetic_edges: state.synthetic_count(),
            pair_edges_marked: state.pair_mark_count(),
        };
        (order, stats)
    };

    // Phase 4: uniform ring positions, attached as a derived annotation
    let space = RingIdentifierSpace::from_order(&order, config.modulus, config.wrap_around);
    let property = graph.attach_ring_space(space);

    Ok(EmbeddingOutcome {
        property,
        order,
        stats,
    })
}

fn is_permutation(order: &[usize], node_count: usize) -> bool {
    if order.len() != node_count {
        return false;
    }
    let mut seen = vec![false; node_count];
    for &node in order {
        if node >= node_count || seen[node] {
            return false;
        }
        seen[node] = true;
    }
    true
}
