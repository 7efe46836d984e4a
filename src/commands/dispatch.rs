//! Command dispatch logic for wayfarer

use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use wayfarer_core::error::Result;
use wayfarer_core::graph::Graph;
use wayfarer_core::network::NetworkConfig;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        Commands::Stats => {
            let graph = load_graph(cli, start, false)?;
            commands::stats::execute(cli, &graph)
        }

        Commands::Traverse { start: from, algo } => {
            let graph = load_graph(cli, start, false)?;
            commands::traverse::execute(cli, &graph, from, *algo)
        }

        Commands::Route { source, to } => {
            let graph = load_graph(cli, start, true)?;
            commands::route::execute(cli, &graph, source, to.as_deref())
        }
    }
}

/// Build the graph the command operates on: the `--network` file when
/// given, otherwise the built-in demo (weighted for routing, unweighted
/// for structure and traversal)
fn load_graph(cli: &Cli, start: Instant, weighted_demo: bool) -> Result<Graph> {
    let config = match &cli.network {
        Some(path) => NetworkConfig::load(path)?,
        None if weighted_demo => NetworkConfig::demo_weighted(),
        None => NetworkConfig::demo(),
    };
    let graph = config.build_graph()?;

    if cli.verbose {
        eprintln!("load_network: {:?}", start.elapsed());
    }
    tracing::debug!(
        network = config.name.as_deref().unwrap_or("unnamed"),
        vertices = graph.vertex_count(),
        "network_loaded"
    );

    Ok(graph)
}
