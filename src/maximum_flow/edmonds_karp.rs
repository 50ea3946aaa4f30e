use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::path_finder::PathFinder;
use crate::maximum_flow::residual::ResidualNetwork;
use crate::maximum_flow::status::Status;
use num_traits::NumAssign;
use std::collections::VecDeque;
use std::ops::Neg;

#[derive(Default)]
pub struct EdmondsKarp<Flow> {
    residual: ResidualNetwork<Flow>,
    path_finder: PathFinder,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn solve(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Status {
        if source >= graph.num_nodes() || sink >= graph.num_nodes() || source == sink {
            return Status::BadInput;
        }
        self.residual.build(graph);

        while self.path_finder.find(&self.residual, source, sink) {
            // calculate bottleneck
            let mut delta = self.residual.arena[self.path_finder.prev[sink].1].residual_capacity();
            let mut v = sink;
            while v != source {
                let (u, arena_index) = self.path_finder.prev[v];
                delta = delta.min(self.residual.arena[arena_index].residual_capacity());
                v = u;
            }

            // update flow
            let mut v = sink;
            while v != source {
                let (u, arena_index) = self.path_finder.prev[v];
                self.residual.push_flow(arena_index, delta);
                v = u;
            }
        }

        self.residual.set_flow(graph);
        Status::Optimal
    }

    // source side of a minimum cut; meaningful once solve has run
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        if source >= self.residual.num_nodes {
            return Vec::new();
        }

        let mut cut = Vec::new();
        let mut visited = vec![false; self.residual.num_nodes];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);

            for e in self.residual.neighbors(u) {
                if !visited[e.to] && e.residual_capacity() > Flow::zero() {
                    visited[e.to] = true;
                    que.push_back(e.to);
                }
            }
        }

        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn build(num_nodes: usize, edges: &[(usize, usize, i64)]) -> Graph<i64> {
        let mut graph = Graph::default();
        graph.add_nodes(num_nodes);
        for &(from, to, upper) in edges {
            graph.add_directed_edge(from, to, upper).unwrap();
        }
        graph
    }

    fn solve(graph: &mut Graph<i64>) -> (EdmondsKarp<i64>, i64, usize, usize) {
        let (source, sink) = (0, graph.num_nodes() - 1);
        let mut solver = EdmondsKarp::default();
        assert_eq!(solver.solve(source, sink, graph), Status::Optimal);
        (solver, graph.maximum_flow(source), source, sink)
    }

    // every subset containing the source and not the sink
    fn brute_force_minimum_cut(graph: &Graph<i64>, source: usize, sink: usize) -> i64 {
        let mut best = i64::MAX;
        for mask in 0u32..(1 << graph.num_nodes()) {
            if mask & (1 << source) == 0 || mask & (1 << sink) != 0 {
                continue;
            }
            let mut cut = 0;
            for edge_id in 0..graph.num_edges() {
                let edge = graph.get_edge(edge_id).unwrap();
                if mask & (1 << edge.from) != 0 && mask & (1 << edge.to) == 0 {
                    cut += edge.upper;
                }
            }
            best = best.min(cut);
        }
        best
    }

    fn assert_conservation(graph: &Graph<i64>, source: usize, sink: usize) {
        for u in 0..graph.num_nodes() {
            if u == source || u == sink {
                continue;
            }
            let mut net = 0;
            for edge_id in 0..graph.num_edges() {
                let edge = graph.get_edge(edge_id).unwrap();
                if edge.from == u {
                    net -= edge.flow;
                }
                if edge.to == u {
                    net += edge.flow;
                }
            }
            assert_eq!(net, 0, "conservation violated at node {}", u);
        }
    }

    #[rstest]
    #[case::two_disjoint_paths(4, vec![(0, 1, 10), (0, 2, 5), (1, 3, 10), (2, 3, 5)], 15)]
    #[case::rerouting_required(6, vec![(0, 1, 10), (0, 2, 10), (1, 3, 4), (1, 4, 8), (2, 4, 9), (3, 5, 10), (4, 3, 6), (4, 5, 10)], 19)]
    #[case::three_layers(7, vec![(0, 1, 10), (0, 2, 5), (1, 3, 9), (1, 4, 3), (2, 4, 7), (2, 5, 2), (3, 6, 10), (4, 6, 10), (5, 6, 5)], 15)]
    #[case::single_arc(2, vec![(0, 1, 3)], 3)]
    #[case::disconnected(4, vec![(0, 1, 10), (2, 3, 5)], 0)]
    #[case::no_edges(2, vec![], 0)]
    #[case::anti_parallel_arcs(3, vec![(0, 1, 5), (1, 0, 5), (1, 2, 3)], 3)]
    fn solve_finds_the_maximum_flow(#[case] num_nodes: usize, #[case] edges: Vec<(usize, usize, i64)>, #[case] expected: i64) {
        let mut graph = build(num_nodes, &edges);
        let (solver, total, source, sink) = solve(&mut graph);

        assert_eq!(total, expected);
        assert_eq!(total, brute_force_minimum_cut(&graph, source, sink));
        assert_conservation(&graph, source, sink);

        // capacity bound on every forward edge
        for edge_id in 0..graph.num_edges() {
            let edge = graph.get_edge(edge_id).unwrap();
            assert!(edge.flow >= 0 && edge.flow <= edge.upper);
        }

        // skew symmetry across the whole arena
        for arena_index in 0..solver.residual.arena.len() {
            let rev = solver.residual.arena[arena_index].rev;
            assert_eq!(solver.residual.arena[arena_index].flow, -solver.residual.arena[rev].flow);
        }
    }

    #[rstest]
    #[case::source_out_of_range(4, 0)]
    #[case::sink_out_of_range(0, 4)]
    #[case::source_equals_sink(1, 1)]
    fn solve_rejects_bad_terminals(#[case] source: usize, #[case] sink: usize) {
        let mut graph = build(3, &[(0, 1, 1), (1, 2, 1)]);
        assert_eq!(EdmondsKarp::default().solve(source, sink, &mut graph), Status::BadInput);
    }

    #[test]
    fn minimum_cut_separates_source_from_sink_and_matches_the_flow() {
        let edges = vec![(0, 1, 10), (0, 2, 10), (1, 3, 4), (1, 4, 8), (2, 4, 9), (3, 5, 10), (4, 3, 6), (4, 5, 10)];
        let mut graph = build(6, &edges);
        let (solver, total, source, sink) = solve(&mut graph);

        let cut = solver.minimum_cut(source);
        assert!(cut.contains(&source));
        assert!(!cut.contains(&sink));

        let crossing: i64 = (0..graph.num_edges())
            .map(|edge_id| graph.get_edge(edge_id).unwrap())
            .filter(|edge| cut.contains(&edge.from) && !cut.contains(&edge.to))
            .map(|edge| edge.upper)
            .sum();
        assert_eq!(crossing, total);
    }

    #[test]
    fn raising_one_capacity_never_lowers_the_flow() {
        let edges = vec![(0, 1, 10), (0, 2, 5), (1, 3, 9), (1, 4, 3), (2, 4, 7), (2, 5, 2), (3, 6, 10), (4, 6, 10), (5, 6, 5)];
        let base = solve(&mut build(7, &edges)).1;

        for i in 0..edges.len() {
            let mut raised = edges.clone();
            raised[i].2 += 1;
            assert!(solve(&mut build(7, &raised)).1 >= base);

            if edges[i].2 > 0 {
                let mut lowered = edges.clone();
                lowered[i].2 -= 1;
                assert!(solve(&mut build(7, &lowered)).1 <= base);
            }
        }
    }

    #[test]
    fn resolving_a_rebuilt_graph_yields_the_same_value() {
        let edges = vec![(0, 1, 10), (0, 2, 10), (1, 3, 4), (1, 4, 8), (2, 4, 9), (3, 5, 10), (4, 3, 6), (4, 5, 10)];
        let first = solve(&mut build(6, &edges)).1;
        let second = solve(&mut build(6, &edges)).1;
        assert_eq!(first, second);
    }
}
