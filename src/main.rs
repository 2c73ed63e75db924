use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use ringlayout::config::{self, EmbeddingConfig};
use ringlayout::embedding::{embed, EmbeddingStats};
use ringlayout::graph::parse_gml_file;
use ringlayout::metrics;
use ringlayout::ring::RingIdentifierSpace;

/// Circular graph embedding for network-topology research
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// GML topology files to embed
    #[arg(required = true)]
    graphs: Vec<PathBuf>,

    /// Path to the embedding configuration YAML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory for embedding reports
    #[arg(short, long, default_value = "embeddings")]
    output: PathBuf,

    /// Base rng seed, overriding the configuration value
    #[arg(long)]
    seed: Option<u64>,
}

/// JSON report written for every embedded graph
#[derive(Debug, Serialize)]
struct EmbeddingReport {
    graph: String,
    node_count: usize,
    edge_count: usize,
    property: String,
    order: Vec<usize>,
    ring: RingIdentifierSpace,
    stats: EmbeddingStats,
    crossings_index_order: usize,
    crossings_embedded: usize,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    // Load configuration, falling back to defaults when no file is given
    let mut config = match &args.config {
        Some(path) => config::load_config(path)?,
        None => EmbeddingConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    config.validate()?;

    info!(
        "Embedding {} graph(s) onto rings of modulus {} (wrap_around: {})",
        args.graphs.len(),
        config.modulus,
        config.wrap_around
    );
    if config.realities > 1 {
        warn!(
            "realities = {} is reserved and currently ignored; computing one embedding per graph",
            config.realities
        );
    }
    if config.seed.is_none() {
        info!("No seed configured; runs will not be reproducible");
    }

    fs::create_dir_all(&args.output).wrap_err_with(|| {
        format!(
            "Failed to create output directory '{}'",
            args.output.display()
        )
    })?;

    // Each graph is embedded with an independent state and a derived seed,
    // so the batch can run in parallel
    let failures: usize = args
        .graphs
        .par_iter()
        .enumerate()
        .map(|(index, path)| {
            match embed_one(path, index, &config, &args.output) {
                Ok(report_path) => {
                    info!(
                        "Wrote embedding report for '{}' to '{}'",
                        path.display(),
                        report_path.display()
                    );
                    0
                }
                Err(err) => {
                    error!("Embedding '{}' failed: {:#}", path.display(), err);
                    1
                }
            }
        })
        .sum();

    if failures > 0 {
        return Err(eyre!(
            "{} of {} embeddings failed",
            failures,
            args.graphs.len()
        ));
    }
    info!("All embeddings completed successfully");
    Ok(())
}

/// Embed a single GML topology and write its JSON report. Returns the
/// report path.
fn embed_one(
    path: &Path,
    index: usize,
    config: &EmbeddingConfig,
    output_dir: &Path,
) -> Result<PathBuf> {
    let mut graph = parse_gml_file(path)
        .wrap_err_with(|| format!("Failed to parse GML file '{}'", path.display()))?;
    info!(
        "Loaded '{}': {} nodes, {} edges",
        path.display(),
        graph.node_count(),
        graph.edge_count()
    );

    let mut rng = match config.seed {
        Some(base) => StdRng::seed_from_u64(base.wrapping_add(index as u64)),
        None => StdRng::from_entropy(),
    };

    let index_order = metrics::index_order_space(&graph, config.modulus, config.wrap_around);
    let crossings_index_order = metrics::count_crossings(&graph, &index_order);

    let outcome = embed(&mut graph, config, &mut rng)
        .wrap_err_with(|| format!("Embedding failed for '{}'", path.display()))?;

    let ring = graph
        .ring_space(&outcome.property)
        .ok_or_else(|| eyre!("Ring space '{}' missing after embedding", outcome.property))?
        .clone();
    let crossings_embedded = metrics::count_crossings(&graph, &ring);
    info!(
        "'{}': edge crossings {} (index order) -> {} (embedded), {} synthetic edges",
        path.display(),
        crossings_index_order,
        crossings_embedded,
        outcome.stats.synthetic_edges
    );

    let report = EmbeddingReport {
        graph: path.display().to_string(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        property: outcome.property,
        order: outcome.order,
        ring,
        stats: outcome.stats,
        crossings_index_order,
        crossings_embedded,
    };

    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("graph");
    let report_path = output_dir.join(format!("{}_embedding.json", stem));
    let json = serde_json::to_string_pretty(&report).wrap_err("Failed to serialize report")?;
    fs::write(&report_path, json)
        .wrap_err_with(|| format!("Failed to write report '{}'", report_path.display()))?;
    Ok(report_path)
}
