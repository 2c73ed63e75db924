//! Approximate longest-path extraction.
//!
//! Double-sweep depth-first search over the union of original and synthetic
//! edges, ignoring elimination state: the first sweep finds the deepest node
//! reachable from the start, the second sweep re-roots there, and the parent
//! chain to the second sweep's deepest node approximates a diameter path.
//!
//! The search is iterative with an explicit (node, parent, depth) frame
//! stack; recursion depth would equal the graph diameter, which cannot be
//! assumed to fit the call stack.

use super::state::OverlayState;

/// Result of one DFS sweep.
struct Sweep {
    deepest: usize,
    parent: Vec<Option<usize>>,
}

/// One depth-first sweep from `start`, recording parent pointers and the
/// maximum-depth node reached. Neighbors expand in ascending index order;
/// visited tracking guarantees termination on cyclic graphs.
fn sweep(state: &OverlayState<'_>, start: usize) -> Sweep {
    let node_count = state.node_count();
    let mut parent: Vec<Option<usize>> = vec![None; node_count];
    let mut visited = vec![false; node_count];

    let mut deepest = start;
    let mut max_depth = 0usize;

    // (node, parent, depth) frames
    let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(start, None, 0)];
    while let Some((node, from, depth)) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        parent[node] = from;
        if depth > max_depth {
            max_depth = depth;
            deepest = node;
        }
        // Reversed push so the smallest neighbor is expanded first
        for &neighbor in state.union_neighbors(node).iter().rev() {
            if !visited[neighbor] {
                stack.push((neighbor, Some(node), depth + 1));
            }
        }
    }

    Sweep { deepest, parent }
}

/// Extract an approximate longest path through the component of `start`.
///
/// Returns the node sequence from the second sweep's root to its deepest
/// node, both endpoints included. For a single-node component this is just
/// `[start]`.
pub(crate) fn longest_path(state: &OverlayState<'_>, start: usize) -> Vec<usize> {
    let first = sweep(state, start);
    let second = sweep(state, first.deepest);

    let mut path = Vec::new();
    let mut current = Some(second.deepest);
    while let Some(node) = current {
        path.push(node);
        current = second.parent[node];
    }
    path.reverse();
    path
}
