//! Network definition payloads
//!
//! A network is an ordered list of location labels plus an ordered list of
//! route triples (from, to, optional weight). Definitions load from TOML,
//! JSON, or YAML files, dispatched on extension; a built-in demo network
//! (a small city transportation net) backs the CLI when no file is given.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, WayfarerError};
use crate::graph::store::Graph;
use crate::graph::types::Cost;

/// One undirected connection in a network definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteConfig {
    pub from: String,
    pub to: String,
    /// Traversal cost; 1 when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// A complete network definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub locations: Vec<String>,
    #[serde(default)]
    pub routes: Vec<RouteConfig>,
}

const DEMO_LOCATIONS: [&str; 8] = [
    "Home",
    "Work",
    "Gas Station",
    "Mall",
    "Hospital",
    "Library",
    "Cafe",
    "Gym",
];

const DEMO_ROUTES: [(&str, &str, f64); 12] = [
    ("Home", "Work", 1.0),
    ("Home", "Gas Station", 2.0),
    ("Work", "Mall", 2.0),
    ("Mall", "Hospital", 3.0),
    ("Hospital", "Library", 2.0),
    ("Library", "Cafe", 1.0),
    ("Cafe", "Gym", 3.0),
    ("Gym", "Home", 2.0),
    ("Gas Station", "Mall", 1.0),
    ("Mall", "Cafe", 1.0),
    ("Cafe", "Home", 4.0),
    ("Gas Station", "Hospital", 2.0),
];

impl NetworkConfig {
    /// Load a network definition from a file, dispatching on extension
    pub fn load(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        let contents = fs::read_to_string(path)?;
        let config = match extension.as_str() {
            "toml" => toml::from_str(&contents)?,
            "json" => serde_json::from_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            other => {
                return Err(WayfarerError::unsupported(
                    "network file extension",
                    other,
                    "toml, json, yaml, yml",
                ))
            }
        };
        Ok(config)
    }

    /// The built-in city transportation network, unweighted (every route
    /// costs 1)
    pub fn demo() -> Self {
        NetworkConfig {
            name: Some("city-transport".to_string()),
            locations: DEMO_LOCATIONS.iter().map(ToString::to_string).collect(),
            routes: DEMO_ROUTES
                .iter()
                .map(|(from, to, _)| RouteConfig {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                    weight: None,
                })
                .collect(),
        }
    }

    /// The built-in city transportation network with travel costs
    pub fn demo_weighted() -> Self {
        NetworkConfig {
            name: Some("city-transport".to_string()),
            locations: DEMO_LOCATIONS.iter().map(ToString::to_string).collect(),
            routes: DEMO_ROUTES
                .iter()
                .map(|(from, to, weight)| RouteConfig {
                    from: (*from).to_string(),
                    to: (*to).to_string(),
                    weight: Some(*weight),
                })
                .collect(),
        }
    }

    /// Build the graph this definition describes: vertices in declaration
    /// order, then routes in declaration order. A route referencing an
    /// undeclared location aborts the build; no partial graph is returned.
    pub fn build_graph(&self) -> Result<Graph> {
        let mut graph = Graph::new();
        for location in &self.locations {
            if location.is_empty() {
                return Err(WayfarerError::invalid_network(
                    "location label must not be empty",
                ));
            }
            graph.add_vertex(location.clone());
        }
        for route in &self.routes {
            let weight = route.weight.map_or(Cost::DEFAULT, Cost::new);
            graph.add_edge(&route.from, &route.to, weight)?;
        }
        tracing::debug!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "network_built"
        );
        Ok(graph)
    }
}
