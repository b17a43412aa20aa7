use crate::adjacency::Adjacency;
use crate::error::{Error, Result};
use crate::graph::Graph;
use num_traits::{CheckedAdd, NumAssign};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct MinimumSpanningTree<W> {
    pub total_weight: W,
    // ids into `Graph::edges`, in the order they were selected
    pub edges: Vec<usize>,
    pub num_spanned: usize,
}

impl<W> MinimumSpanningTree<W> {
    // false when the graph is disconnected and only a part of it was spanned
    pub fn is_spanning(&self, num_nodes: usize) -> bool {
        self.num_spanned == num_nodes
    }
}

#[derive(Default)]
pub struct Prim<W> {
    visited: Vec<bool>,
    bh: BinaryHeap<(Reverse<W>, usize, usize)>,
}

impl<W> Prim<W>
where
    W: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn solve(&mut self, graph: &Graph<W>) -> Result<MinimumSpanningTree<W>> {
        let mut tree = MinimumSpanningTree { total_weight: W::zero(), edges: Vec::new(), num_spanned: 0 };
        if graph.num_nodes() == 0 {
            return Ok(tree);
        }

        let adj = Adjacency::undirected(graph);
        self.visited.clear();
        self.visited.resize(adj.num_nodes, false);
        self.bh.clear();

        self.visit(0, &adj);
        tree.num_spanned = 1;

        // cheapest edge leaving the visited set
        while let Some((Reverse(weight), v, edge_id)) = self.bh.pop() {
            if self.visited[v] {
                continue;
            }
            tree.total_weight = tree.total_weight.checked_add(&weight).ok_or_else(|| Error::Overflow("spanning tree weight".to_string()))?;
            tree.edges.push(edge_id);
            tree.num_spanned += 1;
            self.visit(v, &adj);
        }

        tracing::trace!(spanned = tree.num_spanned, num_nodes = adj.num_nodes, "prim finished");
        Ok(tree)
    }

    fn visit(&mut self, u: usize, adj: &Adjacency<W>) {
        self.visited[u] = true;
        for arc in adj.neighbors(u) {
            if !self.visited[arc.to] {
                self.bh.push((Reverse(arc.weight), arc.to, arc.edge_id));
            }
        }
    }
}
