//! Embedding error kinds.
//!
//! All failures of the layout algorithm are typed results carrying enough
//! context for diagnosis (failing node, counters). None of them terminate
//! the process; the caller decides whether to retry with a different seed,
//! skip the graph, or abort a batch.

/// Errors that can occur during a circular embedding run
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmbeddingError {
    /// Elimination was requested but no eligible node remains. This cannot
    /// happen while unprocessed nodes exist and indicates a broken internal
    /// invariant.
    #[error("No eliminable node left after {eliminated} of {total} eliminations")]
    ExhaustedCandidates { eliminated: usize, total: usize },

    /// No valid neighbor pair remains to satisfy a node's triangulation
    /// requirement.
    #[error(
        "Could not find any more triangulation pairs for node {node} \
         ({needed} edges still required at degree {degree})"
    )]
    TriangulationDeadlock {
        node: usize,
        needed: usize,
        degree: usize,
    },

    /// The path-completion retry bound was exceeded.
    #[error(
        "Could not splice {remaining} remaining nodes into the path \
         after {failures} consecutive placement failures"
    )]
    PlacementDeadlock { failures: u32, remaining: usize },
}
