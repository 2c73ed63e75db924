//! # Ringlayout - Circular graph embedding for network-topology research
//!
//! This library computes circular layouts of arbitrary graphs: every node is
//! assigned a position on a ring of configurable circumference, producing an
//! identifier space suitable for routing and lookahead experiments on
//! synthetic or measured network topologies.
//!
//! ## Overview
//!
//! The layout procedure follows the Six–Tollis family of circular drawing
//! algorithms. Nodes are eliminated one at a time while synthetic
//! "triangulation" edges keep the remaining structure triangulated; a
//! double-sweep depth-first search through the elimination history extracts
//! an approximate longest path; nodes the path missed are spliced in next to
//! an already placed neighbor; and the final order is laid out uniformly
//! around the ring.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - `graph`: fixed-index undirected graph model and the GML topology parser
//! - `embedding`: the four-phase layout algorithm and its typed errors
//! - `ring`: ring identifier spaces (positions, arc partitions, distance)
//! - `config`: type-safe embedding configuration and YAML loading
//! - `metrics`: edge-crossing instrumentation for produced layouts
//!
//! ## Example Usage
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use ringlayout::config::EmbeddingConfig;
//! use ringlayout::embedding::embed;
//! use ringlayout::graph::Graph;
//!
//! // A 4-node ring topology
//! let mut graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)])?;
//!
//! let config = EmbeddingConfig::default();
//! let mut rng = StdRng::seed_from_u64(42);
//! let outcome = embed(&mut graph, &config, &mut rng)?;
//!
//! let space = graph.ring_space(&outcome.property).unwrap();
//! assert_eq!(space.positions.len(), 4);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Determinism
//!
//! All randomness is drawn from the rng the caller passes in; two runs with
//! the same seed and the same graph produce identical orders and ring
//! annotations. Runs never share mutable state, so batches of graphs can be
//! embedded in parallel.
//!
//! ## Error Handling
//!
//! Algorithm failures (`TriangulationDeadlock`, `PlacementDeadlock`,
//! `ExhaustedCandidates`) are typed results carrying the failing node and
//! counters; the caller decides whether to retry with another seed, skip the
//! graph, or abort a batch. The CLI layer uses `color_eyre` for contextual
//! error reporting.

pub mod config;
pub mod embedding;
pub mod graph;
pub mod metrics;
pub mod ring;

pub use config::EmbeddingConfig;
pub use embedding::{embed, EmbeddingError, EmbeddingOutcome, EmbeddingStats};
pub use graph::Graph;
pub use ring::{RingIdentifierSpace, RingPartition};
