//! Layout instrumentation.
//!
//! Currently one metric: the number of edge crossings a ring embedding
//! produces when every edge is drawn as a chord of the circle. Lower is
//! better; the CLI logs the count for the trivial index-order layout and
//! for the computed embedding side by side.

use crate::graph::Graph;
use crate::ring::RingIdentifierSpace;

/// Count the pairwise edge crossings of `graph` under the given ring
/// embedding.
///
/// Two chords cross exactly when their endpoint ranks interleave around the
/// circle. Self-loops, parallel links (one chord per distinct pair) and
/// edges with an unplaced endpoint do not contribute.
pub fn count_crossings(graph: &Graph, space: &RingIdentifierSpace) -> usize {
    let node_count = graph.node_count();
    let mut rank = vec![usize::MAX; node_count];
    for (position, &node) in space.order.iter().enumerate() {
        if node < node_count {
            rank[node] = position;
        }
    }

    // Distinct chords with both endpoints placed, as (low, high) rank pairs
    let mut chords: Vec<(usize, usize)> = graph
        .edges()
        .filter(|edge| edge.src != edge.dst)
        .filter(|edge| rank[edge.src] != usize::MAX && rank[edge.dst] != usize::MAX)
        .map(|edge| {
            let a = rank[edge.src];
            let b = rank[edge.dst];
            (a.min(b), a.max(b))
        })
        .collect();
    chords.sort_unstable();

    let mut crossings = 0;
    for (i, &(a_low, a_high)) in chords.iter().enumerate() {
        for &(b_low, b_high) in &chords[i + 1..] {
            // Shared endpoints never cross
            if a_low == b_low || a_low == b_high || a_high == b_low || a_high == b_high {
                continue;
            }
            let b_low_inside = a_low < b_low && b_low < a_high;
            let b_high_inside = a_low < b_high && b_high < a_high;
            if b_low_inside != b_high_inside {
                crossings += 1;
            }
        }
    }
    crossings
}

/// The trivial embedding that places nodes in index order; used as the
/// baseline when reporting crossing counts.
pub fn index_order_space(graph: &Graph, modulus: f64, wrap_around: bool) -> RingIdentifierSpace {
    let order: Vec<usize> = (0..graph.node_count()).collect();
    RingIdentifierSpace::from_order(&order, modulus, wrap_around)
}
