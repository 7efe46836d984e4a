//! Adjacency-list graph store
//!
//! Holds string-labeled vertices and undirected weighted edges. Neighbor
//! lists keep edge insertion order, which is the tie-break order every
//! traversal observes.

use std::collections::HashMap;

use crate::error::{Result, WayfarerError};
use crate::graph::types::{Cost, DegreeEntry, GraphStats};

/// One adjacency entry: the vertex on the other end of an edge and the
/// edge's weight
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub label: String,
    pub weight: Cost,
}

/// Undirected graph over string-labeled vertices.
///
/// Invariant: every adjacency entry's label is a known vertex. Adding an
/// edge inserts the entry in both endpoints' neighbor lists; re-adding an
/// existing pair overwrites the stored weight in both directions (last
/// write wins) instead of accumulating parallel entries.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<String>,
    adjacency: HashMap<String, Vec<Neighbor>>,
    edge_count: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vertex. Idempotent: re-inserting an existing label is a
    /// no-op and does not disturb insertion order.
    pub fn add_vertex(&mut self, label: impl Into<String>) {
        let label = label.into();
        if !self.adjacency.contains_key(&label) {
            self.vertices.push(label.clone());
            self.adjacency.insert(label, Vec::new());
        }
    }

    /// Insert an undirected edge between two known vertices.
    ///
    /// Rejected with `InvalidEdge` when either endpoint is unknown, when
    /// the endpoints coincide (self-loop), or when the weight is not a
    /// non-negative number.
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Cost) -> Result<()> {
        for endpoint in [a, b] {
            if !self.adjacency.contains_key(endpoint) {
                return Err(WayfarerError::invalid_edge(
                    a,
                    b,
                    format!("unknown endpoint: {}", endpoint),
                ));
            }
        }
        if a == b {
            return Err(WayfarerError::invalid_edge(a, b, "self-loop"));
        }
        if weight.value().is_nan() || weight.value() < 0.0 {
            return Err(WayfarerError::invalid_edge(
                a,
                b,
                format!("weight must be a non-negative number, got {}", weight),
            ));
        }

        let existing = self.update_weight(a, b, weight);
        if existing {
            self.update_weight(b, a, weight);
        } else {
            self.push_neighbor(a, b, weight);
            self.push_neighbor(b, a, weight);
            self.edge_count += 1;
        }
        Ok(())
    }

    fn update_weight(&mut self, from: &str, to: &str, weight: Cost) -> bool {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            if let Some(entry) = neighbors.iter_mut().find(|n| n.label == to) {
                entry.weight = weight;
                return true;
            }
        }
        false
    }

    fn push_neighbor(&mut self, from: &str, to: &str, weight: Cost) {
        if let Some(neighbors) = self.adjacency.get_mut(from) {
            neighbors.push(Neighbor {
                label: to.to_string(),
                weight,
            });
        }
    }

    /// Adjacent vertices in edge insertion order
    pub fn neighbors(&self, label: &str) -> Result<&[Neighbor]> {
        self.adjacency
            .get(label)
            .map(Vec::as_slice)
            .ok_or_else(|| WayfarerError::unknown_vertex(label))
    }

    /// Number of edges touching a vertex
    pub fn degree(&self, label: &str) -> Result<usize> {
        self.neighbors(label).map(<[Neighbor]>::len)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Vertex labels in insertion order
    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Remove all vertices and edges, returning the store to its empty
    /// state (used when switching from an unweighted to a weighted
    /// topology)
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.adjacency.clear();
        self.edge_count = 0;
    }

    /// Structural statistics for the reporting adapter
    pub fn stats(&self) -> GraphStats {
        let degrees = self
            .vertices
            .iter()
            .map(|label| DegreeEntry {
                label: label.clone(),
                degree: self.adjacency.get(label).map_or(0, Vec::len),
            })
            .collect();
        GraphStats {
            vertices: self.vertex_count(),
            edges: self.edge_count(),
            degrees,
        }
    }
}
