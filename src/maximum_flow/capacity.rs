use crate::error::{Error, Result};
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::Debug;

/// Capacity of every ordered node pair that carries at least one edge.
///
/// Parallel edges are merged by summing their weights and self-loops are
/// dropped. The neighbours of each node are kept sorted.
#[derive(Default, Debug, Clone)]
pub struct Capacities<Flow> {
    num_nodes: usize,
    start: Vec<usize>,
    arcs: Vec<(usize, Flow)>,
}

impl<Flow> Capacities<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn from_graph(graph: &Graph<Flow>) -> Result<Self> {
        let num_nodes = graph.num_nodes();

        let mut pairs: Vec<(usize, usize, Flow)> = graph.edges().iter().filter(|e| e.from != e.to).map(|e| (e.from, e.to, e.weight)).collect();
        pairs.sort_unstable_by_key(|&(from, to, _)| (from, to));

        // merge parallel edges
        let mut merged: Vec<(usize, usize, Flow)> = Vec::with_capacity(pairs.len());
        for (from, to, upper) in pairs {
            match merged.last_mut() {
                Some(last) if last.0 == from && last.1 == to => {
                    last.2 = last.2.checked_add(&upper).ok_or_else(|| Error::Overflow(format!("capacity of ({from}, {to})")))?;
                }
                _ => merged.push((from, to, upper)),
            }
        }

        let mut start = vec![0; num_nodes + 1];
        for &(from, _, _) in merged.iter() {
            start[from + 1] += 1;
        }
        for i in 1..=num_nodes {
            start[i] += start[i - 1];
        }

        let arcs = merged.into_iter().map(|(_, to, upper)| (to, upper)).collect();
        Ok(Self { num_nodes, start, arcs })
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    #[inline]
    pub fn num_arcs(&self) -> usize {
        self.arcs.len()
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, (usize, Flow)> {
        self.arcs[self.start[u]..self.start[u + 1]].iter()
    }

    pub fn capacity(&self, from: usize, to: usize) -> Flow {
        let arcs = &self.arcs[self.start[from]..self.start[from + 1]];
        match arcs.binary_search_by_key(&to, |&(v, _)| v) {
            Ok(i) => arcs[i].1,
            Err(_) => Flow::zero(),
        }
    }

    pub fn out_capacity(&self, u: usize) -> Result<Flow> {
        self.neighbors(u)
            .try_fold(Flow::zero(), |sum, &(_, upper)| sum.checked_add(&upper))
            .ok_or_else(|| Error::Overflow(format!("capacity out of node {u}")))
    }

    pub fn in_capacity(&self, v: usize) -> Result<Flow> {
        (0..self.num_nodes)
            .try_fold(Flow::zero(), |sum, u| sum.checked_add(&self.capacity(u, v)))
            .ok_or_else(|| Error::Overflow(format!("capacity into node {v}")))
    }
}
