use crate::maximum_flow::graph::Graph;
use num_traits::NumAssign;
use std::ops::{Neg, Sub};

#[derive(Default, PartialEq, Debug)]
pub struct ResidualEdge<Flow> {
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
    pub rev: usize,
}

impl<Flow> ResidualEdge<Flow>
where
    Flow: Sub<Output = Flow> + Copy,
{
    pub fn residual_capacity(&self) -> Flow {
        self.upper - self.flow
    }
}

/// Residual graph in CSR layout. Arcs live in one flat arena; each arc stores
/// the arena index of its paired reverse arc. Reverse arcs have capacity 0 and
/// go negative as flow is pushed, so a pair always satisfies
/// `arena[e].flow == -arena[arena[e].rev].flow`.
#[derive(Default)]
pub struct ResidualNetwork<Flow> {
    pub num_nodes: usize,
    pub num_edges: usize,
    pub forward_index: Vec<usize>, // graph edge id -> arena index of its forward arc

    pub start: Vec<usize>,
    pub arena: Vec<ResidualEdge<Flow>>,
}

impl<Flow> ResidualNetwork<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy,
{
    pub fn build(&mut self, graph: &Graph<Flow>) {
        self.num_nodes = graph.num_nodes();
        self.num_edges = graph.num_edges();

        // initialize
        self.forward_index.clear();
        self.forward_index.resize(self.num_edges, usize::MAX);
        self.start.clear();
        self.start.resize(self.num_nodes + 1, 0);
        self.arena = (0..2 * self.num_edges).map(|_| ResidualEdge { to: 0, flow: Flow::zero(), upper: Flow::zero(), rev: 0 }).collect();

        let mut degree = vec![0; self.num_nodes];
        for edge in graph.edges.iter() {
            degree[edge.to] += 1;
            degree[edge.from] += 1;
        }

        for i in 1..=self.num_nodes {
            self.start[i] += self.start[i - 1] + degree[i - 1];
        }

        let mut counter = vec![0; self.num_nodes];
        for (edge_index, e) in graph.edges.iter().enumerate() {
            let (u, v) = (e.from, e.to);
            let forward = self.start[u] + counter[u];
            counter[u] += 1;
            let reverse = self.start[v] + counter[v];
            counter[v] += 1;
            self.forward_index[edge_index] = forward;

            self.arena[forward] = ResidualEdge { to: v, flow: Flow::zero(), upper: e.upper, rev: reverse };
            self.arena[reverse] = ResidualEdge { to: u, flow: Flow::zero(), upper: Flow::zero(), rev: forward };
        }
    }

    // copy forward arc flows back to the graph
    pub fn set_flow(&self, graph: &mut Graph<Flow>) {
        for edge_id in 0..graph.num_edges() {
            let i = self.forward_index[edge_id];
            graph.edges[edge_id].flow = self.arena[i].flow;
        }
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> std::slice::Iter<ResidualEdge<Flow>> {
        self.arena[self.start[u]..self.start[u + 1]].iter()
    }

    // the only flow mutation; always moves an arc and its pair together
    #[inline]
    pub fn push_flow(&mut self, arena_index: usize, flow: Flow) {
        let edge = &self.arena[arena_index];
        assert!(flow >= Flow::zero() && edge.flow + flow <= edge.upper, "pushed flow exceeds residual capacity");

        let rev = edge.rev;
        self.arena[arena_index].flow += flow;
        self.arena[rev].flow -= flow;
    }
}
