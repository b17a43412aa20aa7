//! Shortest path cost, minimum spanning tree cost and maximum flow over a
//! weighted directed graph.
//!
//! ```
//! use graph_properties::{max_flow, minimum_spanning_tree, shortest_path_cost, Graph};
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 2).unwrap();
//! graph.add_edge(1, 2, 3).unwrap();
//!
//! assert_eq!(shortest_path_cost(&graph, 0, 2).unwrap(), Some(5));
//! assert_eq!(minimum_spanning_tree(&graph).unwrap(), 5);
//! assert_eq!(max_flow(&graph, 0, 2).unwrap(), 2);
//! ```

mod adjacency;
pub mod dimacs;
pub mod error;
pub mod generator;
pub mod graph;
pub mod maximum_flow;
pub mod minimum_spanning_tree;
pub mod shortest_path;

pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use maximum_flow::max_flow;
pub use minimum_spanning_tree::minimum_spanning_tree;
pub use shortest_path::shortest_path_cost;
