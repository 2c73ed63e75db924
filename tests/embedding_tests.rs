//! End-to-end tests for the circular embedding pipeline.

use rand::rngs::StdRng;
use rand::SeedableRng;

use ringlayout::config::EmbeddingConfig;
use ringlayout::embedding::{embed, EmbeddingError, EmbeddingOutcome};
use ringlayout::graph::{parse_gml_str, Graph};

fn run(graph: &mut Graph, config: &EmbeddingConfig, seed: u64) -> EmbeddingOutcome {
    let mut rng = StdRng::seed_from_u64(seed);
    embed(graph, config, &mut rng).expect("embedding should succeed")
}

fn assert_permutation(order: &[usize], node_count: usize) {
    assert_eq!(order.len(), node_count, "order must cover every node");
    let mut seen = vec![false; node_count];
    for &node in order {
        assert!(node < node_count, "order contains out-of-range node {}", node);
        assert!(!seen[node], "order repeats node {}", node);
        seen[node] = true;
    }
}

/// Whether `order` is some rotation or reflection of `0..n`.
fn is_rotation_or_reflection(order: &[usize]) -> bool {
    let n = order.len();
    let doubled: Vec<usize> = order.iter().chain(order.iter()).copied().collect();
    for window in doubled.windows(n) {
        let forward: Vec<usize> = (0..n).collect();
        let backward: Vec<usize> = (0..n).rev().collect();
        if window == forward.as_slice() || window == backward.as_slice() {
            return true;
        }
    }
    false
}

#[test]
fn test_four_cycle_embeds_in_ring_order() {
    // Scenario: 0-1-2-3-0 with modulus 1.0 and wrap-around
    let mut graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
    let config = EmbeddingConfig::default();
    let outcome = run(&mut graph, &config, 42);

    assert_permutation(&outcome.order, 4);
    assert!(
        is_rotation_or_reflection(&outcome.order),
        "4-cycle should embed as a rotation/reflection of its ring order, got {:?}",
        outcome.order
    );

    let space = graph.ring_space(&outcome.property).unwrap();
    assert_eq!(space.positions, vec![0.0, 0.25, 0.5, 0.75]);
    assert_eq!(space.partitions.len(), 4);
    // Wrap-around: the last arc closes back at the first position
    assert_eq!(space.partitions[3].end, 0.0);
}

#[test]
fn test_single_isolated_node() {
    let mut graph = Graph::from_edges(1, &[]).unwrap();
    let config = EmbeddingConfig::default();
    let outcome = run(&mut graph, &config, 0);

    assert_eq!(outcome.order, vec![0]);
    // Degree 0 never requests triangulation edges
    assert_eq!(outcome.stats.synthetic_edges, 0);

    let space = graph.ring_space(&outcome.property).unwrap();
    assert_eq!(space.positions, vec![0.0]);
    assert_eq!(space.partitions.len(), 1);
}

#[test]
fn test_star_graph_triangulates_around_the_center() {
    // Center 0 with leaves 1..=4: leaves eliminate for free, the center
    // must bridge its remaining neighbors
    let mut graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]).unwrap();
    let config = EmbeddingConfig::default();
    let outcome = run(&mut graph, &config, 9);

    assert_permutation(&outcome.order, 5);
    assert!(
        outcome.stats.synthetic_edges >= 2,
        "center elimination must add edges among its 3 remaining leaves, got {}",
        outcome.stats.synthetic_edges
    );
}

#[test]
fn test_parallel_link_pair_surfaces_triangulation_deadlock() {
    // A doubled link gives its endpoints degree 2 with a single distinct
    // neighbor: the requirement is 1 but no admissible pair exists
    let mut graph = Graph::from_edges(2, &[(0, 1), (0, 1)]).unwrap();
    let config = EmbeddingConfig::default();
    let mut rng = StdRng::seed_from_u64(1);
    let result = embed(&mut graph, &config, &mut rng);
    assert!(
        matches!(
            result,
            Err(EmbeddingError::TriangulationDeadlock { needed: 1, .. })
        ),
        "expected a triangulation deadlock, got {:?}",
        result
    );
}

#[test]
fn test_empty_graph_is_a_no_op_success() {
    let mut graph = Graph::new(0);
    let config = EmbeddingConfig::default();
    let outcome = run(&mut graph, &config, 0);
    assert!(outcome.order.is_empty());

    let space = graph.ring_space(&outcome.property).unwrap();
    assert!(space.positions.is_empty());
    assert!(space.partitions.is_empty());
}

#[test]
fn test_final_order_is_always_a_permutation() {
    let cases: Vec<(usize, Vec<(usize, usize)>)> = vec![
        // Path
        (5, vec![(0, 1), (1, 2), (2, 3), (3, 4)]),
        // Cycle with a chord
        (6, vec![(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (1, 4)]),
        // Two triangles sharing a node
        (5, vec![(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]),
        // Complete graph K5
        (
            5,
            vec![
                (0, 1),
                (0, 2),
                (0, 3),
                (0, 4),
                (1, 2),
                (1, 3),
                (1, 4),
                (2, 3),
                (2, 4),
                (3, 4),
            ],
        ),
    ];

    for (node_count, edges) in cases {
        for seed in [0u64, 1, 7, 1234] {
            let mut graph = Graph::from_edges(node_count, &edges).unwrap();
            let config = EmbeddingConfig::default();
            let outcome = run(&mut graph, &config, seed);
            assert_permutation(&outcome.order, node_count);

            let space = graph.ring_space(&outcome.property).unwrap();
            assert_eq!(space.positions.len(), node_count);
            assert_eq!(space.partitions.len(), node_count);
            for (rank, partition) in space.partitions.iter().enumerate() {
                assert_eq!(partition.start, space.positions[rank]);
            }
        }
    }
}

#[test]
fn test_fixed_seed_is_deterministic() {
    let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 2), (1, 3)];
    let config = EmbeddingConfig {
        seed: Some(77),
        ..EmbeddingConfig::default()
    };

    let mut first_graph = Graph::from_edges(5, &edges).unwrap();
    let first = run(&mut first_graph, &config, 77);

    let mut second_graph = Graph::from_edges(5, &edges).unwrap();
    let second = run(&mut second_graph, &config, 77);

    assert_eq!(first.order, second.order);
    assert_eq!(first.stats, second.stats);
    assert_eq!(
        first_graph.ring_space(&first.property),
        second_graph.ring_space(&second.property)
    );
}

#[test]
fn test_open_ring_keeps_last_arc_at_modulus() {
    let mut graph = Graph::from_edges(3, &[(0, 1), (1, 2), (2, 0)]).unwrap();
    let config = EmbeddingConfig {
        modulus: 6.0,
        wrap_around: false,
        ..EmbeddingConfig::default()
    };
    let outcome = run(&mut graph, &config, 3);
    let space = graph.ring_space(&outcome.property).unwrap();
    assert_eq!(space.positions, vec![0.0, 2.0, 4.0]);
    assert_eq!(space.partitions[2].end, 6.0);
}

#[test]
fn test_gml_topology_end_to_end() {
    let gml = r#"
graph [
  node [ id 1 ]
  node [ id 2 ]
  node [ id 3 ]
  node [ id 4 ]
  node [ id 5 ]
  edge [ source 1 target 2 ]
  edge [ source 2 target 3 ]
  edge [ source 3 target 4 ]
  edge [ source 4 target 5 ]
  edge [ source 5 target 1 ]
]
"#;
    let mut graph = parse_gml_str(gml).unwrap();
    assert_eq!(graph.node_count(), 5);

    let config = EmbeddingConfig::default();
    let outcome = run(&mut graph, &config, 11);
    assert_permutation(&outcome.order, 5);

    let space = graph.ring_space(&outcome.property).unwrap();
    assert_eq!(space.node_count(), 5);
    for position in &space.positions {
        assert!(*position >= 0.0 && *position < space.modulus);
    }
}
