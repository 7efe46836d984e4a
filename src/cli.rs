//! CLI argument parsing for wayfarer
//!
//! Uses clap with global flags: --network, --format, --quiet, --verbose,
//! --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use wayfarer_core::format::OutputFormat;

/// Wayfarer - network analysis CLI
#[derive(Parser, Debug)]
#[command(name = "wayfarer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Network definition file (TOML, JSON, or YAML); built-in demo
    /// network when omitted
    #[arg(long, global = true)]
    pub network: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report vertex count, edge count, and per-vertex degrees
    Stats,

    /// Walk the network from a starting location
    Traverse {
        /// Starting location label
        start: String,

        /// Traversal algorithm (both when omitted)
        #[arg(long, value_enum)]
        algo: Option<Algorithm>,
    },

    /// Compute shortest travel costs from a source location
    Route {
        /// Source location label
        source: String,

        /// Also reconstruct the cheapest path to this location
        #[arg(long)]
        to: Option<String>,
    },
}

/// Traversal algorithm selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
}

/// Parse output format from string
fn parse_format(s: &str) -> Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}
