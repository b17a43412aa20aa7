use crate::error::{Error, Result};
use num_traits::NumAssign;
use std::fmt::Debug;

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct Edge<W> {
    pub from: usize,
    pub to: usize,
    pub weight: W,
}

// upper bound for node counts read from untrusted input
pub const MAX_NODES: usize = 1 << 27;

/// Directed weighted graph with a fixed number of nodes.
///
/// Algorithms only ever borrow a `Graph` immutably; edges are appended by
/// whoever builds it (the DIMACS reader, the generator, or a test).
#[derive(Default, Debug, Clone)]
pub struct Graph<W> {
    num_nodes: usize,
    edges: Vec<Edge<W>>,
}

impl<W> Graph<W>
where
    W: NumAssign + Ord + Copy + Debug,
{
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, edges: Vec::new() }
    }

    // for node counts coming from untrusted signed input
    pub fn try_with_nodes(num_nodes: i64) -> Result<Self> {
        let n = usize::try_from(num_nodes).map_err(|_| Error::InvalidArgument(format!("vertex count must be non-negative, got {num_nodes}")))?;
        if n > MAX_NODES {
            return Err(Error::InvalidArgument(format!("vertex count {n} exceeds the limit of {MAX_NODES}")));
        }
        Ok(Self::new(n))
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }

    // return edge index
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<usize> {
        if from >= self.num_nodes || to >= self.num_nodes {
            return Err(Error::InvalidArgument(format!("edge ({from}, {to}) has an endpoint outside [0, {})", self.num_nodes)));
        }
        if weight < W::zero() {
            return Err(Error::InvalidArgument(format!("edge ({from}, {to}) has negative weight {weight:?}")));
        }

        self.edges.push(Edge { from, to, weight });
        Ok(self.edges.len() - 1)
    }

    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<W>> {
        self.edges.get(edge_id).copied()
    }
}
