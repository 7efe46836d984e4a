use std::collections::HashMap;

use serde::{Serialize, Serializer};

/// Cost of traversing edges, and of whole routes.
///
/// Weights default to 1 when a route omits them, so an unweighted network
/// behaves like a hop count. `Cost::INFINITY` is the unreachable sentinel
/// carried through distance maps.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Cost(f64);

impl Cost {
    pub const ZERO: Cost = Cost(0.0);
    pub const DEFAULT: Cost = Cost(1.0);
    pub const INFINITY: Cost = Cost(f64::INFINITY);

    pub fn new(cost: f64) -> Self {
        Cost(cost)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0 + other.0)
    }
}

impl From<f64> for Cost {
    fn from(cost: f64) -> Self {
        Cost(cost)
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(f64::from(cost))
    }
}

impl std::fmt::Display for Cost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_finite() {
            write!(f, "{}", self.0)
        } else {
            write!(f, "inf")
        }
    }
}

// A raw non-finite f64 serializes to JSON null, which loses the
// unreachable sentinel. Emit the string "infinity" instead.
impl Serialize for Cost {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str("infinity")
        }
    }
}

/// Per-vertex degree in stats output
#[derive(Debug, Clone, Serialize)]
pub struct DegreeEntry {
    pub label: String,
    pub degree: usize,
}

/// Structural statistics over a graph, in vertex insertion order
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub vertices: usize,
    pub edges: usize,
    pub degrees: Vec<DegreeEntry>,
}

/// Distance to a single vertex in a route map
#[derive(Debug, Clone, Serialize)]
pub struct RouteEntry {
    pub label: String,
    pub distance: Cost,
}

/// Completed single-source shortest-path result.
///
/// Every vertex of the graph appears in `distances`, in vertex insertion
/// order; vertices with no path from the source carry `Cost::INFINITY`.
/// Predecessor pointers recorded during relaxation back path
/// reconstruction via [`RouteMap::path_to`].
#[derive(Debug, Clone, Serialize)]
pub struct RouteMap {
    pub source: String,
    pub distances: Vec<RouteEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
    #[serde(skip)]
    predecessors: HashMap<String, String>,
}

impl RouteMap {
    pub(crate) fn new(
        source: String,
        distances: Vec<RouteEntry>,
        predecessors: HashMap<String, String>,
    ) -> Self {
        let index = distances
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.label.clone(), i))
            .collect();
        RouteMap {
            source,
            distances,
            index,
            predecessors,
        }
    }

    /// Shortest distance from the source, or None if the vertex is not in
    /// the graph the map was computed over
    pub fn distance_to(&self, label: &str) -> Option<Cost> {
        self.index.get(label).map(|&i| self.distances[i].distance)
    }

    /// Whether a path from the source to this vertex exists
    pub fn is_reachable(&self, label: &str) -> bool {
        self.distance_to(label).is_some_and(|d| d.is_finite())
    }

    /// Reconstruct the source-to-target vertex sequence by walking
    /// predecessor pointers. None when the target is absent or unreachable;
    /// the source itself yields a single-element path.
    pub fn path_to(&self, target: &str) -> Option<Vec<String>> {
        let distance = self.distance_to(target)?;
        if !distance.is_finite() {
            return None;
        }

        let mut path = vec![target.to_string()];
        let mut current = target.to_string();
        while current != self.source {
            current = self.predecessors.get(&current)?.clone();
            path.push(current.clone());
        }
        path.reverse();
        Some(path)
    }
}
