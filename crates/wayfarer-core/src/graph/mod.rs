//! Graph store, traversal, and shortest-path engine
//!
//! Provides the analysis core for location networks:
//! - Adjacency-list graph store with insertion-ordered neighbor lists
//! - Iterative DFS and BFS visitation orders
//! - Dijkstra shortest distances with path reconstruction

pub mod dijkstra;
pub mod store;
pub mod traversal;
pub mod types;

pub use dijkstra::shortest_paths;
pub use store::{Graph, Neighbor};
pub use traversal::{bfs, dfs};
pub use types::{Cost, DegreeEntry, GraphStats, RouteEntry, RouteMap};
