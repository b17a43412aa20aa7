pub mod dijkstra;

use crate::error::Result;
use crate::graph::Graph;
use dijkstra::Dijkstra;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Cost of a cheapest directed path from `source` to `target`, or `None` when
/// `target` cannot be reached. Weights must be non-negative.
pub fn shortest_path_cost<W>(graph: &Graph<W>, source: usize, target: usize) -> Result<Option<W>>
where
    W: NumAssign + CheckedAdd + Ord + Copy + Debug + Default,
{
    Dijkstra::default().solve(source, target, graph)
}
