//! Path completion.
//!
//! The longest path rarely covers every node. The remaining nodes are kept
//! in a worklist and visited round-robin: a node with a neighbor already in
//! the path (original edges only) is spliced in right after that neighbor,
//! anything else waits for a later pass. A bounded counter of consecutive
//! failures turns a non-converging worklist into a typed error instead of
//! an endless loop.

use log::debug;

use crate::graph::Graph;

use super::error::EmbeddingError;

/// Splice every node missing from `path` next to one of its neighbors.
///
/// Fails with [`EmbeddingError::PlacementDeadlock`] once more than
/// `max_failures` consecutive nodes could not be placed.
pub(crate) fn complete_path(
    graph: &Graph,
    mut path: Vec<usize>,
    max_failures: u32,
) -> Result<Vec<usize>, EmbeddingError> {
    let mut in_path = vec![false; graph.node_count()];
    for &node in &path {
        in_path[node] = true;
    }
    let mut worklist: Vec<usize> = (0..graph.node_count())
        .filter(|&node| !in_path[node])
        .collect();

    let mut failures = 0u32;
    let mut cursor = 0usize;
    while !worklist.is_empty() {
        let index = cursor % worklist.len();
        let node = worklist[index];

        let anchor = graph
            .neighbors(node)
            .iter()
            .find_map(|&neighbor| path.iter().position(|&placed| placed == neighbor));

        match anchor {
            Some(position) => {
                // Splice in immediately after the found neighbor
                path.insert(position + 1, node);
                in_path[node] = true;
                worklist.remove(index);
                failures = 0;
            }
            None => {
                failures += 1;
                debug!(
                    "Cannot place node {} yet ({} consecutive failures, {} waiting)",
                    node,
                    failures,
                    worklist.len()
                );
                if failures > max_failures {
                    return Err(EmbeddingError::PlacementDeadlock {
                        failures,
                        remaining: worklist.len(),
                    });
                }
                cursor = (cursor + 1) % worklist.len();
            }
        }
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_is_spliced_after_its_neighbor() {
        // Path 0-1-2 with node 3 hanging off node 1
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (1, 3)]).unwrap();
        let path = complete_path(&graph, vec![0, 1, 2], 50).unwrap();
        assert_eq!(path, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_lowest_neighbor_in_path_wins() {
        // Node 3 touches both 0 and 2; the neighbor scan runs ascending
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (0, 3), (2, 3)]).unwrap();
        let path = complete_path(&graph, vec![0, 1, 2], 50).unwrap();
        assert_eq!(path, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_chained_placement_over_multiple_passes() {
        // 2 only attaches to 1, which itself is not placed yet
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let path = complete_path(&graph, vec![0], 50).unwrap();
        assert_eq!(path.len(), 3);
        assert!(path.contains(&1));
        assert!(path.contains(&2));
    }

    #[test]
    fn test_unreachable_node_deadlocks() {
        // Node 1 has no edges at all
        let graph = Graph::from_edges(2, &[]).unwrap();
        let result = complete_path(&graph, vec![0], 5);
        assert_eq!(
            result,
            Err(EmbeddingError::PlacementDeadlock {
                failures: 6,
                remaining: 1
            })
        );
    }

    #[test]
    fn test_complete_path_is_a_no_op_when_nothing_is_missing() {
        let graph = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        let path = complete_path(&graph, vec![2, 1, 0], 50).unwrap();
        assert_eq!(path, vec![2, 1, 0]);
    }
}
