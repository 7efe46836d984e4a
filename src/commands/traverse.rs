//! Traversal command
//!
//! `wayfarer traverse <start> [--algo dfs|bfs]` - visitation orders from a
//! starting location; both algorithms when none is selected

use serde::Serialize;

use crate::cli::{Algorithm, Cli, OutputFormat};
use wayfarer_core::error::Result;
use wayfarer_core::graph::{bfs, dfs, Graph};

#[derive(Debug, Serialize)]
struct TraversalReport {
    start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    dfs: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    bfs: Option<Vec<String>>,
}

/// Execute the traverse command
pub fn execute(cli: &Cli, graph: &Graph, start: &str, algo: Option<Algorithm>) -> Result<()> {
    let run_dfs = algo.is_none() || algo == Some(Algorithm::Dfs);
    let run_bfs = algo.is_none() || algo == Some(Algorithm::Bfs);

    let report = TraversalReport {
        start: start.to_string(),
        dfs: run_dfs.then(|| dfs(graph, start)).transpose()?,
        bfs: run_bfs.then(|| bfs(graph, start)).transpose()?,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if let Some(order) = &report.dfs {
                println!("DFS from {}: {}", start, order.join(" -> "));
            }
            if let Some(order) = &report.bfs {
                println!("BFS from {}: {}", start, order.join(" -> "));
            }
        }
    }

    Ok(())
}
