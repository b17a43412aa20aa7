use crate::adjacency::Adjacency;
use crate::error::{check_node, Error, Result};
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

#[derive(Default)]
pub struct Dijkstra<W> {
    pub distances: Vec<Option<W>>,
    visited: Vec<bool>,
    bh: BinaryHeap<(Reverse<W>, usize)>,
}

impl<W> Dijkstra<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    // stops as soon as target is settled; distances of nodes settled so far stay in `self.distances`
    pub fn solve(&mut self, source: usize, target: usize, graph: &Graph<W>) -> Result<Option<W>> {
        check_node(source, graph.num_nodes())?;
        check_node(target, graph.num_nodes())?;

        let adj = Adjacency::directed(graph);
        self.distances.clear();
        self.distances.resize(adj.num_nodes, None);
        self.visited.clear();
        self.visited.resize(adj.num_nodes, false);
        self.bh.clear();

        self.distances[source] = Some(W::zero());
        self.bh.push((Reverse(W::zero()), source));

        while let Some((Reverse(d), u)) = self.bh.pop() {
            if self.visited[u] {
                continue;
            }
            self.visited[u] = true;

            if u == target {
                break;
            }

            // relax
            for arc in adj.neighbors(u) {
                if self.visited[arc.to] {
                    continue;
                }
                let new_dist = d.checked_add(&arc.weight).ok_or_else(|| Error::Overflow(format!("distance to node {}", arc.to)))?;
                if self.distances[arc.to].map_or(true, |old| new_dist < old) {
                    self.distances[arc.to] = Some(new_dist);
                    self.bh.push((Reverse(new_dist), arc.to));
                }
            }
        }

        tracing::trace!(source, target, settled = self.visited.iter().filter(|&&v| v).count(), "dijkstra finished");
        Ok(if self.visited[target] { self.distances[target] } else { None })
    }
}
