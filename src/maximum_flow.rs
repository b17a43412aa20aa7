pub mod capacity;
mod csr;
pub mod edmonds_karp;

use crate::error::Result;
use crate::graph::Graph;
use capacity::Capacities;
use edmonds_karp::EdmondsKarp;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Value of a maximum flow from `source` to `sink`, treating edge weights as
/// capacities. Parallel edges add up.
pub fn max_flow<Flow>(graph: &Graph<Flow>, source: usize, sink: usize) -> Result<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug + Default,
{
    let capacities = Capacities::from_graph(graph)?;
    Ok(EdmondsKarp::default().solve(source, sink, &capacities)?.value)
}
