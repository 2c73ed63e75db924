//! Ring identifier space.
//!
//! A ring identifier space is a circular coordinate system of a given
//! circumference (the modulus) onto which an ordered set of nodes is mapped.
//! Embeddings produce one space per run and attach it to the graph as a
//! derived annotation; downstream routing experiments consume the positions,
//! the contiguous arc partitions, and the circular distance function.

use serde::{Deserialize, Serialize};

/// A contiguous arc of the ring, bounded by two positions.
///
/// The arc covers `[start, end)` going clockwise; the final arc of a
/// wrap-around space ends at the first position again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingPartition {
    pub start: f64,
    pub end: f64,
}

/// Positions and arc partitions for one circular embedding of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingIdentifierSpace {
    /// Ring circumference; all positions lie in `[0, modulus)`.
    pub modulus: f64,
    /// Whether distances and the final arc wrap at the modulus boundary.
    pub wrap_around: bool,
    /// Node indices in ring order; `order[k]` sits at `positions[k]`.
    pub order: Vec<usize>,
    /// Uniformly spaced positions, one per node, in ring order.
    pub positions: Vec<f64>,
    /// One arc per node; `partitions[k]` starts at `positions[k]`.
    pub partitions: Vec<RingPartition>,
}

impl RingIdentifierSpace {
    /// Lay the given node order uniformly around a ring of circumference
    /// `modulus`.
    ///
    /// Position `k` is `k * (modulus / N)`. Arc `k` runs from position `k`
    /// to position `k + 1`; the last arc wraps back to position 0 only when
    /// `wrap_around` is set, and otherwise closes at `modulus` so the ring
    /// stays open for the caller.
    pub fn from_order(order: &[usize], modulus: f64, wrap_around: bool) -> Self {
        let count = order.len();
        let mut positions = Vec::with_capacity(count);
        if count > 0 {
            let step = modulus / count as f64;
            for rank in 0..count {
                positions.push(rank as f64 * step);
            }
        }

        let mut partitions = Vec::with_capacity(count);
        for rank in 0..count {
            let end = if rank + 1 < count {
                positions[rank + 1]
            } else if wrap_around {
                positions[0]
            } else {
                modulus
            };
            partitions.push(RingPartition {
                start: positions[rank],
                end,
            });
        }

        Self {
            modulus,
            wrap_around,
            order: order.to_vec(),
            positions,
            partitions,
        }
    }

    /// Number of nodes placed on the ring.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Ring rank of `node` (its index in the final order), if placed.
    pub fn rank_of(&self, node: usize) -> Option<usize> {
        self.order.iter().position(|&placed| placed == node)
    }

    /// Ring position of `node`, if placed.
    pub fn position_of(&self, node: usize) -> Option<f64> {
        self.rank_of(node).map(|rank| self.positions[rank])
    }

    /// Circular distance between two positions.
    ///
    /// With wrap-around the shorter way around the ring counts; without it
    /// the ring is treated as an open interval.
    pub fn distance(&self, a: f64, b: f64) -> f64 {
        let direct = (a - b).abs();
        if self.wrap_around {
            direct.min(self.modulus - direct)
        } else {
            direct
        }
    }
}
