//! Dijkstra single-source shortest paths
//!
//! Weights are guaranteed non-negative by the graph store, so the usual
//! Dijkstra invariant holds: once a vertex is settled its distance is
//! final. The frontier is a binary min-heap; superseded heap entries are
//! skipped on pop rather than removed in place.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::{Result, WayfarerError};
use crate::graph::store::Graph;
use crate::graph::types::{Cost, RouteEntry, RouteMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated cost)
#[derive(Debug, Clone)]
struct HeapEntry {
    label: String,
    cost: Cost,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label && self.cost.value() == other.cost.value()
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Costs are finite and never NaN by the time they reach the heap.
        // Equal costs fall back to the label so pop order is deterministic.
        self.cost
            .value()
            .partial_cmp(&other.cost.value())
            .unwrap()
            .then_with(|| self.label.cmp(&other.label))
    }
}

/// Compute shortest distances from `source` to every vertex in the graph.
///
/// Vertices with no path from the source keep `Cost::INFINITY`; they are
/// never pushed onto the frontier, so the loop drains exactly the
/// reachable component and stops. Predecessor pointers are recorded at
/// each improving relaxation for [`RouteMap::path_to`].
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn shortest_paths(graph: &Graph, source: &str) -> Result<RouteMap> {
    if !graph.contains(source) {
        return Err(WayfarerError::unknown_vertex(source));
    }

    let mut distances: HashMap<String, Cost> = graph
        .vertices()
        .iter()
        .map(|label| (label.clone(), Cost::INFINITY))
        .collect();
    distances.insert(source.to_string(), Cost::ZERO);

    let mut predecessors: HashMap<String, String> = HashMap::new();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        label: source.to_string(),
        cost: Cost::ZERO,
    }));

    let mut settled = 0usize;
    while let Some(Reverse(HeapEntry { label, cost })) = heap.pop() {
        // A cheaper entry for this vertex was already popped
        let best = distances.get(&label).copied().unwrap_or(Cost::INFINITY);
        if cost > best {
            continue;
        }
        settled += 1;

        for neighbor in graph.neighbors(&label)? {
            let candidate = cost + neighbor.weight;
            let current = distances
                .get(&neighbor.label)
                .copied()
                .unwrap_or(Cost::INFINITY);
            if candidate < current {
                distances.insert(neighbor.label.clone(), candidate);
                predecessors.insert(neighbor.label.clone(), label.clone());
                heap.push(Reverse(HeapEntry {
                    label: neighbor.label.clone(),
                    cost: candidate,
                }));
            }
        }
    }

    tracing::debug!(settled, "dijkstra_complete");

    let entries = graph
        .vertices()
        .iter()
        .map(|label| RouteEntry {
            label: label.clone(),
            distance: distances.get(label).copied().unwrap_or(Cost::INFINITY),
        })
        .collect();
    Ok(RouteMap::new(source.to_string(), entries, predecessors))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn weighted_chain() -> Graph {
        // A -1- B -2- C
        let mut graph = Graph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Cost::new(1.0)).unwrap();
        graph.add_edge("B", "C", Cost::new(2.0)).unwrap();
        graph
    }

    #[test]
    fn test_shortest_paths_chain() {
        let routes = shortest_paths(&weighted_chain(), "A").unwrap();
        assert_eq!(routes.distance_to("A").unwrap().value(), 0.0);
        assert_eq!(routes.distance_to("B").unwrap().value(), 1.0);
        assert_eq!(routes.distance_to("C").unwrap().value(), 3.0);
    }

    #[test]
    fn test_source_distance_is_zero() {
        let routes = shortest_paths(&weighted_chain(), "C").unwrap();
        assert_eq!(routes.distance_to("C").unwrap().value(), 0.0);
    }

    #[test]
    fn test_isolated_vertex_is_unreachable() {
        let mut graph = weighted_chain();
        graph.add_vertex("D");
        let routes = shortest_paths(&graph, "A").unwrap();
        assert!(!routes.distance_to("D").unwrap().is_finite());
        assert!(!routes.is_reachable("D"));
    }

    #[test]
    fn test_single_vertex_graph() {
        let mut graph = Graph::new();
        graph.add_vertex("Solo");
        let routes = shortest_paths(&graph, "Solo").unwrap();
        assert_eq!(routes.distances.len(), 1);
        assert_eq!(routes.distance_to("Solo").unwrap().value(), 0.0);
    }

    #[test]
    fn test_unknown_source() {
        let err = shortest_paths(&weighted_chain(), "Nonexistent").unwrap_err();
        assert!(matches!(err, WayfarerError::UnknownVertex { .. }));
    }

    #[test]
    fn test_picks_cheaper_indirect_route() {
        // Direct A-C costs 10, A-B-C costs 3
        let mut graph = weighted_chain();
        graph.add_edge("A", "C", Cost::new(10.0)).unwrap();
        let routes = shortest_paths(&graph, "A").unwrap();
        assert_eq!(routes.distance_to("C").unwrap().value(), 3.0);
        assert_eq!(routes.path_to("C").unwrap(), ["A", "B", "C"]);
    }

    #[test]
    fn test_relaxation_invariant_holds_at_completion() {
        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(label);
        }
        let edges = [
            ("A", "B", 4.0),
            ("A", "C", 1.0),
            ("C", "B", 2.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
            ("D", "E", 3.0),
        ];
        for (a, b, w) in edges {
            graph.add_edge(a, b, Cost::new(w)).unwrap();
        }

        let routes = shortest_paths(&graph, "A").unwrap();
        for (a, b, w) in edges {
            let du = routes.distance_to(a).unwrap().value();
            let dv = routes.distance_to(b).unwrap().value();
            // Undirected: check both directions
            assert!(dv <= du + w);
            assert!(du <= dv + w);
        }
    }

    #[test]
    fn test_zero_weight_edges() {
        let mut graph = Graph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Cost::ZERO).unwrap();
        graph.add_edge("B", "C", Cost::new(1.0)).unwrap();

        let routes = shortest_paths(&graph, "A").unwrap();
        assert_eq!(routes.distance_to("B").unwrap().value(), 0.0);
        assert_eq!(routes.distance_to("C").unwrap().value(), 1.0);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let graph = weighted_chain();
        let first = shortest_paths(&graph, "A").unwrap();
        let second = shortest_paths(&graph, "A").unwrap();
        for entry in &first.distances {
            assert_eq!(
                second.distance_to(&entry.label).unwrap().value(),
                entry.distance.value()
            );
        }
    }

    #[test]
    fn test_path_to_source_is_single_element() {
        let routes = shortest_paths(&weighted_chain(), "A").unwrap();
        assert_eq!(routes.path_to("A").unwrap(), ["A"]);
    }
}
