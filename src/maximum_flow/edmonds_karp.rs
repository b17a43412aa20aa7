use crate::error::{check_node, Error, Result};
use crate::maximum_flow::capacity::Capacities;
use crate::maximum_flow::csr::CSR;
use num_traits::{CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Debug;

#[derive(PartialEq, Debug, Clone)]
pub struct MaximumFlow<Flow> {
    pub value: Flow,
    pub augmentations: usize,
    // nodes reachable from the source in the final residual network (source side of a minimum cut)
    pub source_side: Vec<usize>,
}

#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    csr: CSR<Flow>,
    prev: Vec<(usize, usize)>,
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Debug,
{
    pub fn solve(&mut self, source: usize, sink: usize, capacities: &Capacities<Flow>) -> Result<MaximumFlow<Flow>> {
        check_node(source, capacities.num_nodes())?;
        check_node(sink, capacities.num_nodes())?;
        if source == sink {
            return Err(Error::InvalidArgument(format!("source and sink are both node {source}")));
        }

        self.csr.build(capacities);
        self.prev.clear();
        self.prev.resize(self.csr.num_nodes, (usize::MAX, usize::MAX));
        self.visited.clear();
        self.visited.resize(self.csr.num_nodes, false);

        let mut flow = Flow::zero();
        let mut augmentations = 0;
        while self.bfs(source, sink) {
            // calculate delta
            let mut delta = self.csr.inside_edge_list[self.prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.prev[v];
                delta = delta.min(self.csr.inside_edge_list[edge_id].residual_capacity());
                v = u;
            }
            debug_assert!(delta > Flow::zero());

            // update flow
            let mut v = sink;
            while v != source {
                let (u, edge_id) = self.prev[v];
                self.csr.push_flow(edge_id, delta);
                v = u;
            }

            flow = flow.checked_add(&delta).ok_or_else(|| Error::Overflow("flow value".to_string()))?;
            augmentations += 1;
            tracing::trace!(augmentations, ?delta, "augmented");
        }

        // the last search failed, so what it reached is the source side of a minimum cut
        let source_side: Vec<usize> = (0..self.csr.num_nodes).filter(|&u| self.visited[u]).collect();
        tracing::debug!(source, sink, ?flow, augmentations, "maximum flow found");

        Ok(MaximumFlow { value: flow, augmentations, source_side })
    }

    // breadth-first search over edges with positive residual capacity, returns whether sink was reached
    fn bfs(&mut self, source: usize, sink: usize) -> bool {
        self.prev.fill((usize::MAX, usize::MAX));
        self.visited.fill(false);
        self.que.clear();

        self.visited[source] = true;
        self.que.push_back(source);
        while let Some(u) = self.que.pop_front() {
            for (offset, edge) in self.csr.neighbors(u).enumerate() {
                if self.visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.prev[edge.to] = (u, self.csr.start[u] + offset);
                if edge.to == sink {
                    return true;
                }
                self.que.push_back(edge.to);
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    fn solve(graph: &Graph<i64>, source: usize, sink: usize) -> MaximumFlow<i64> {
        EdmondsKarp::default().solve(source, sink, &Capacities::from_graph(graph).unwrap()).unwrap()
    }

    #[test]
    fn two_disjoint_paths() {
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, 3).unwrap();
        graph.add_edge(1, 3, 2).unwrap();
        graph.add_edge(0, 2, 2).unwrap();
        graph.add_edge(2, 3, 3).unwrap();

        let result = solve(&graph, 0, 3);
        assert_eq!(result.value, 4);
        assert_eq!(result.augmentations, 2);
    }

    #[test]
    fn flow_is_cancelled_through_reverse_edge() {
        // first path is 0-1-3-5, the second one has to go 0-2-3-1-4-5 and undo 1->3
        //
        //   0 -> 1 -> 4 -> 5
        //   |    |         ^
        //   v    v         |
        //   2 -> 3 --------+
        let mut graph = Graph::new(6);
        graph.add_edge(0, 1, 1).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(1, 3, 1).unwrap();
        graph.add_edge(1, 4, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();
        graph.add_edge(3, 5, 1).unwrap();
        graph.add_edge(4, 5, 1).unwrap();

        let result = solve(&graph, 0, 5);
        assert_eq!(result.value, 2);
        assert_eq!(result.augmentations, 2);
    }

    #[test]
    fn classic_clrs_network() {
        let mut graph = Graph::new(6);
        for (from, to, upper) in [(0, 1, 16), (0, 2, 13), (1, 2, 10), (2, 1, 4), (1, 3, 12), (3, 2, 9), (2, 4, 14), (4, 3, 7), (3, 5, 20), (4, 5, 4)] {
            graph.add_edge(from, to, upper).unwrap();
        }

        let result = solve(&graph, 0, 5);
        assert_eq!(result.value, 23);
        assert_eq!(result.source_side, vec![0, 1, 2, 4]);
    }

    #[test]
    fn disconnected_source_and_sink() {
        let result = solve(&Graph::new(3), 0, 2);
        assert_eq!(result.value, 0);
        assert_eq!(result.augmentations, 0);
        assert_eq!(result.source_side, vec![0]);
    }

    #[test]
    fn zero_capacity_edges_carry_nothing() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 0).unwrap();
        assert_eq!(solve(&graph, 0, 1).value, 0);
    }

    #[test]
    fn rejects_bad_terminals() {
        let capacities = Capacities::from_graph(&Graph::<i64>::new(3)).unwrap();
        let mut solver = EdmondsKarp::default();
        assert!(matches!(solver.solve(0, 3, &capacities), Err(Error::OutOfRange { index: 3, num_nodes: 3 })));
        assert!(matches!(solver.solve(7, 1, &capacities), Err(Error::OutOfRange { index: 7, num_nodes: 3 })));
        assert!(matches!(solver.solve(1, 1, &capacities), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn solver_rebuilds_residual_each_call() {
        let mut graph = Graph::new(2);
        graph.add_edge(0, 1, 5).unwrap();
        let capacities = Capacities::from_graph(&graph).unwrap();

        let mut solver = EdmondsKarp::default();
        assert_eq!(solver.solve(0, 1, &capacities).unwrap().value, 5);
        assert_eq!(solver.solve(0, 1, &capacities).unwrap().value, 5);
        assert_eq!(solver.solve(1, 0, &capacities).unwrap().value, 0);
    }

    #[test]
    fn overflowing_flow_value_is_an_error() {
        // both paths fit on their own, together they exceed i64::MAX
        let mut graph = Graph::new(4);
        graph.add_edge(0, 1, i64::MAX).unwrap();
        graph.add_edge(1, 3, i64::MAX).unwrap();
        graph.add_edge(0, 2, 1).unwrap();
        graph.add_edge(2, 3, 1).unwrap();

        let capacities = Capacities::from_graph(&graph).unwrap();
        assert!(matches!(EdmondsKarp::default().solve(0, 3, &capacities), Err(Error::Overflow(_))));
        assert_eq!(EdmondsKarp::default().solve(0, 1, &capacities).unwrap().value, i64::MAX);
    }
}
