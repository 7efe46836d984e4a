//! Network statistics command
//!
//! `wayfarer stats` - vertex count, edge count, and per-vertex degrees

use crate::cli::{Cli, OutputFormat};
use wayfarer_core::error::Result;
use wayfarer_core::graph::Graph;

/// Execute the stats command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let stats = graph.stats();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Human => {
            println!("Vertices: {}", stats.vertices);
            println!("Edges: {}", stats.edges);
            println!("Degrees:");
            for entry in &stats.degrees {
                println!("  {}: {}", entry.label, entry.degree);
            }
        }
    }

    Ok(())
}
