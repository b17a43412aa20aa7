use crate::maximum_flow::capacity::Capacities;
use std::fmt::Debug;
use std::ops::Sub;

use num_traits::{CheckedAdd, NumAssign};

#[derive(Default, PartialEq, Debug, Clone)]
pub struct InsideEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> InsideEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

// Residual network. Every capacity arc u -> v becomes a forward edge in u's
// range and a paired reverse edge in v's range. A reverse edge starts with
// flow == upper so its residual capacity is 0 until flow is pushed forward.
#[derive(Default)]
pub struct CSR<Flow> {
    pub num_nodes: usize,
    pub start: Vec<usize>,
    pub inside_edge_list: Vec<InsideEdge<Flow>>,
}

impl<Flow> CSR<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn build(&mut self, capacities: &Capacities<Flow>) {
        self.num_nodes = capacities.num_nodes();

        let mut degree = vec![0; self.num_nodes];
        for u in 0..self.num_nodes {
            for &(v, _) in capacities.neighbors(u) {
                degree[u] += 1;
                degree[v] += 1;
            }
        }

        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);
        for i in 1..=self.num_nodes {
            self.start[i] = self.start[i - 1] + degree[i - 1];
        }

        self.inside_edge_list = vec![InsideEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }; 2 * capacities.num_arcs()];
        let mut counter = vec![0; self.num_nodes];
        for u in 0..self.num_nodes {
            for &(v, upper) in capacities.neighbors(u) {
                let inside_edge_index_u = self.start[u] + counter[u];
                counter[u] += 1;
                let inside_edge_index_v = self.start[v] + counter[v];
                counter[v] += 1;

                self.inside_edge_list[inside_edge_index_u] = InsideEdge { to: v, flow: Flow::zero(), upper, rev: inside_edge_index_v };
                self.inside_edge_list[inside_edge_index_v] = InsideEdge { to: u, flow: upper, upper, rev: inside_edge_index_u };
            }
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, InsideEdge<Flow>> {
        self.inside_edge_list[self.start[u]..self.start[u + 1]].iter()
    }

    #[inline]
    pub fn push_flow(&mut self, inside_edge_index: usize, flow: Flow) {
        let rev = self.inside_edge_list[inside_edge_index].rev;

        // update flow
        self.inside_edge_list[inside_edge_index].flow += flow;
        self.inside_edge_list[rev].flow -= flow;
    }
}
