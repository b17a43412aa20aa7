use crate::graph::Graph;
use num_traits::NumAssign;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone, Copy)]
pub(crate) struct Neighbor<W> {
    pub to: usize,
    pub weight: W,
    pub edge_id: usize,
}

/// Out-arcs of every node packed into one array; the arcs of `u` are
/// `arcs[start[u]..start[u + 1]]`.
#[derive(Default, Debug)]
pub(crate) struct Adjacency<W> {
    pub num_nodes: usize,
    pub start: Vec<usize>,
    pub arcs: Vec<Neighbor<W>>,
}

impl<W> Adjacency<W>
where
    W: NumAssign + Ord + Copy + Debug,
{
    pub fn directed(graph: &Graph<W>) -> Self {
        Self::build(graph, false)
    }

    // every edge usable from both endpoints
    pub fn undirected(graph: &Graph<W>) -> Self {
        Self::build(graph, true)
    }

    fn build(graph: &Graph<W>, symmetric: bool) -> Self {
        let num_nodes = graph.num_nodes();

        let mut degree = vec![0; num_nodes];
        for edge in graph.edges() {
            degree[edge.from] += 1;
            if symmetric {
                degree[edge.to] += 1;
            }
        }

        let mut start = vec![0; num_nodes + 1];
        for i in 1..=num_nodes {
            start[i] = start[i - 1] + degree[i - 1];
        }

        let mut arcs = vec![Neighbor { to: 0, weight: W::zero(), edge_id: 0 }; start[num_nodes]];
        let mut counter = vec![0; num_nodes];
        for (edge_id, e) in graph.edges().iter().enumerate() {
            arcs[start[e.from] + counter[e.from]] = Neighbor { to: e.to, weight: e.weight, edge_id };
            counter[e.from] += 1;
            if symmetric {
                arcs[start[e.to] + counter[e.to]] = Neighbor { to: e.from, weight: e.weight, edge_id };
                counter[e.to] += 1;
            }
        }

        Self { num_nodes, start, arcs }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<'_, Neighbor<W>> {
        self.arcs[self.start[u]..self.start[u + 1]].iter()
    }
}
