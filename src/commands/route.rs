//! Shortest-route command
//!
//! `wayfarer route <source> [--to <target>]` - shortest travel costs from a
//! source location, optionally with the reconstructed path to one target

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfarer_core::error::{Result, WayfarerError};
use wayfarer_core::graph::{shortest_paths, Cost, Graph, RouteMap};

#[derive(Debug, Serialize)]
struct RouteReport<'a> {
    #[serde(flatten)]
    routes: &'a RouteMap,
    #[serde(flatten)]
    destination: Option<Destination>,
}

#[derive(Debug, Serialize)]
struct Destination {
    target: String,
    cost: Cost,
    path: Option<Vec<String>>,
}

/// Execute the route command
pub fn execute(cli: &Cli, graph: &Graph, source: &str, target: Option<&str>) -> Result<()> {
    let routes = shortest_paths(graph, source)?;

    let destination = match target {
        Some(target) => {
            let cost = routes
                .distance_to(target)
                .ok_or_else(|| WayfarerError::unknown_vertex(target))?;
            Some(Destination {
                target: target.to_string(),
                cost,
                path: routes.path_to(target),
            })
        }
        None => None,
    };

    let report = RouteReport {
        routes: &routes,
        destination,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            println!("Shortest travel costs from {}:", source);
            for entry in &routes.distances {
                println!("  {}: {}", entry.label, entry.distance);
            }
            if let Some(destination) = &report.destination {
                match &destination.path {
                    Some(path) => println!(
                        "Cheapest path to {}: {} (cost {})",
                        destination.target,
                        path.join(" -> "),
                        destination.cost
                    ),
                    None => println!(
                        "No route from {} to {} (unreachable)",
                        source, destination.target
                    ),
                }
            }
        }
    }

    Ok(())
}
