use crate::error::{Error, Result};
use crate::graph::Graph;
use rand::Rng;

pub const MIN_WEIGHT: i64 = 1;
pub const MAX_WEIGHT: i64 = 50;

/// Random directed graph with exactly `num_edges` edges, no self-loops and
/// weights drawn uniformly from `MIN_WEIGHT..=MAX_WEIGHT`.
pub fn random_graph<R: Rng + ?Sized>(num_nodes: usize, num_edges: usize, rng: &mut R) -> Result<Graph<i64>> {
    if num_edges > 0 && num_nodes < 2 {
        return Err(Error::InvalidArgument(format!("cannot place {num_edges} edges without self-loops on {num_nodes} nodes")));
    }

    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_edges {
        let from = rng.gen_range(0..num_nodes);
        // shift past `from` to skip self-loops
        let mut to = rng.gen_range(0..num_nodes - 1);
        if to >= from {
            to += 1;
        }
        graph.add_edge(from, to, rng.gen_range(MIN_WEIGHT..=MAX_WEIGHT))?;
    }
    Ok(graph)
}
