use crate::maximum_flow::residual::ResidualNetwork;
use num_traits::NumAssign;
use std::collections::VecDeque;

/// Breadth-first search for an augmenting path. Arcs are examined in
/// insertion order per node, so the search is deterministic for a given
/// graph; among augmenting paths it always discovers a shortest one first.
#[derive(Default)]
pub struct PathFinder {
    pub prev: Vec<(usize, usize)>, // node -> (previous node, arena index of the arc taken)
    visited: Vec<bool>,
    que: VecDeque<usize>,
}

impl PathFinder {
    // true iff sink is reachable through arcs with positive residual
    // capacity; the path is read back by walking prev from the sink
    pub fn find<Flow>(&mut self, residual: &ResidualNetwork<Flow>, source: usize, sink: usize) -> bool
    where
        Flow: NumAssign + Ord + Copy,
    {
        self.prev.clear();
        self.prev.resize(residual.num_nodes, (usize::MAX, usize::MAX));
        self.visited.clear();
        self.visited.resize(residual.num_nodes, false);

        self.que.clear();
        self.que.push_back(source);
        self.visited[source] = true;

        while let Some(u) = self.que.pop_front() {
            for arena_index in residual.start[u]..residual.start[u + 1] {
                let edge = &residual.arena[arena_index];
                if self.visited[edge.to] || edge.residual_capacity() == Flow::zero() {
                    continue;
                }

                self.visited[edge.to] = true;
                self.prev[edge.to] = (u, arena_index);
                if edge.to == sink {
                    return true;
                }
                self.que.push_back(edge.to);
            }
        }

        false
    }
}
