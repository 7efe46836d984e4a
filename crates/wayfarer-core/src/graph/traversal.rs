//! Iterative graph traversal
//!
//! Both walks use an explicit stack/queue rather than recursion so deep
//! graphs cannot exhaust the call stack. Output order is fully determined
//! by the graph's adjacency insertion order.

use std::collections::{HashSet, VecDeque};

use crate::error::{Result, WayfarerError};
use crate::graph::store::Graph;

/// Depth-first visitation order from a starting vertex.
///
/// Neighbors of each popped vertex are pushed in reverse adjacency order,
/// so the LIFO stack explores them left to right. Vertices unreachable
/// from `start` do not appear in the output.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(WayfarerError::unknown_vertex(start));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut stack = vec![start.to_string()];
    let mut order = Vec::new();

    while let Some(vertex) = stack.pop() {
        if visited.contains(&vertex) {
            continue;
        }
        order.push(vertex.clone());
        visited.insert(vertex.clone());
        for neighbor in graph.neighbors(&vertex)?.iter().rev() {
            stack.push(neighbor.label.clone());
        }
    }

    tracing::debug!(visited = order.len(), "dfs_complete");
    Ok(order)
}

/// Breadth-first visitation order from a starting vertex.
///
/// Unvisited neighbors are enqueued in adjacency order, so ties between
/// same-depth vertices resolve by edge insertion order and repeated runs
/// yield identical sequences. Vertices unreachable from `start` do not
/// appear in the output.
#[tracing::instrument(skip(graph), fields(vertices = graph.vertex_count()))]
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    if !graph.contains(start) {
        return Err(WayfarerError::unknown_vertex(start));
    }

    let mut visited: HashSet<String> = HashSet::new();
    let mut queue = VecDeque::from([start.to_string()]);
    let mut order = Vec::new();

    while let Some(vertex) = queue.pop_front() {
        if visited.contains(&vertex) {
            continue;
        }
        order.push(vertex.clone());
        visited.insert(vertex.clone());
        for neighbor in graph.neighbors(&vertex)? {
            if !visited.contains(&neighbor.label) {
                queue.push_back(neighbor.label.clone());
            }
        }
    }

    tracing::debug!(visited = order.len(), "bfs_complete");
    Ok(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Cost;

    fn chain() -> Graph {
        // A - B - C, with D isolated
        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Cost::DEFAULT).unwrap();
        graph.add_edge("B", "C", Cost::new(2.0)).unwrap();
        graph
    }

    fn branching() -> Graph {
        //     A
        //    / \
        //   B   C
        //   |   |
        //   D   E
        let mut graph = Graph::new();
        for label in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Cost::DEFAULT).unwrap();
        graph.add_edge("A", "C", Cost::DEFAULT).unwrap();
        graph.add_edge("B", "D", Cost::DEFAULT).unwrap();
        graph.add_edge("C", "E", Cost::DEFAULT).unwrap();
        graph
    }

    #[test]
    fn test_dfs_chain() {
        let order = dfs(&chain(), "A").unwrap();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn test_bfs_chain() {
        let order = bfs(&chain(), "A").unwrap();
        assert_eq!(order, ["A", "B", "C"]);
    }

    #[test]
    fn test_dfs_explores_first_branch_fully() {
        let order = dfs(&branching(), "A").unwrap();
        assert_eq!(order, ["A", "B", "D", "C", "E"]);
    }

    #[test]
    fn test_bfs_visits_level_by_level() {
        let order = bfs(&branching(), "A").unwrap();
        assert_eq!(order, ["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_unreachable_vertices_excluded() {
        let graph = chain();
        assert!(!dfs(&graph, "A").unwrap().contains(&"D".to_string()));
        assert!(!bfs(&graph, "A").unwrap().contains(&"D".to_string()));
    }

    #[test]
    fn test_orders_cover_component_without_duplicates() {
        let graph = branching();
        let dfs_order = dfs(&graph, "A").unwrap();
        let bfs_order = bfs(&graph, "A").unwrap();

        assert_eq!(dfs_order.len(), bfs_order.len());
        assert_eq!(dfs_order.len(), 5);

        let unique: std::collections::HashSet<_> = dfs_order.iter().collect();
        assert_eq!(unique.len(), dfs_order.len());
    }

    #[test]
    fn test_traversal_from_isolated_vertex() {
        let order = bfs(&chain(), "D").unwrap();
        assert_eq!(order, ["D"]);
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let graph = branching();
        let first = dfs(&graph, "A").unwrap();
        let second = dfs(&graph, "A").unwrap();
        assert_eq!(first, second);

        let first = bfs(&graph, "A").unwrap();
        let second = bfs(&graph, "A").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_start_vertex() {
        let graph = chain();
        assert!(matches!(
            dfs(&graph, "Nonexistent").unwrap_err(),
            WayfarerError::UnknownVertex { .. }
        ));
        assert!(matches!(
            bfs(&graph, "Nonexistent").unwrap_err(),
            WayfarerError::UnknownVertex { .. }
        ));
    }

    #[test]
    fn test_cycle_terminates() {
        let mut graph = Graph::new();
        for label in ["A", "B", "C"] {
            graph.add_vertex(label);
        }
        graph.add_edge("A", "B", Cost::DEFAULT).unwrap();
        graph.add_edge("B", "C", Cost::DEFAULT).unwrap();
        graph.add_edge("C", "A", Cost::DEFAULT).unwrap();

        assert_eq!(dfs(&graph, "A").unwrap(), ["A", "B", "C"]);
        assert_eq!(bfs(&graph, "A").unwrap(), ["A", "B", "C"]);
    }
}
