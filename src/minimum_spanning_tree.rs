pub mod prim;

use crate::error::Result;
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use prim::Prim;
use std::fmt::Debug;

/// Total weight of a minimum spanning tree of `graph` with edge directions
/// ignored. Only the component containing node 0 is spanned.
pub fn minimum_spanning_tree<W>(graph: &Graph<W>) -> Result<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy + Debug + Default,
{
    Ok(Prim::default().solve(graph)?.total_weight)
}
