use crate::evacuation::error::InputError;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::Status;
use log::debug;
use num_traits::NumAssign;
use std::fmt::Debug;
use std::ops::Neg;

/// A room network prepared for the maximum-flow solver.
///
/// Rooms `0..n` of the capacity matrix become nodes `1..=n`; node 0 is a
/// synthetic supersource feeding every entrance and node `n + 1` a synthetic
/// supersink draining every exit. Terminal edges carry a sentinel capacity
/// derived from the input so that they can never be the binding constraint.
pub struct EvacuationNetwork<Flow> {
    graph: Graph<Flow>,
    source: usize,
    sink: usize,
}

impl<Flow> EvacuationNetwork<Flow>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + Debug,
{
    pub fn new(entrances: &[usize], exits: &[usize], corridors: &[Vec<Flow>]) -> Result<Self, InputError> {
        let num_rooms = corridors.len();

        for (row, capacities) in corridors.iter().enumerate() {
            if capacities.len() != num_rooms {
                return Err(InputError::NonSquareMatrix { row, found: capacities.len(), expected: num_rooms });
            }
            for (col, &capacity) in capacities.iter().enumerate() {
                if capacity < Flow::zero() {
                    return Err(InputError::NegativeCapacity { row, col });
                }
            }
        }
        if let Some(&entrance) = entrances.iter().find(|&&room| room >= num_rooms) {
            return Err(InputError::EntranceOutOfRange(entrance));
        }
        if let Some(&exit) = exits.iter().find(|&&room| room >= num_rooms) {
            return Err(InputError::ExitOutOfRange(exit));
        }

        // larger than any feasible flow, so terminal edges never bind
        let mut unbounded = Flow::one();
        for capacities in corridors {
            for &capacity in capacities {
                unbounded += capacity;
            }
        }

        let mut graph = Graph::default();
        let nodes = graph.add_nodes(num_rooms + 2);
        let (source, sink) = (nodes[0], nodes[num_rooms + 1]);

        for &entrance in entrances {
            graph.add_directed_edge(source, entrance + 1, unbounded).unwrap();
        }
        for (i, capacities) in corridors.iter().enumerate() {
            for (j, &capacity) in capacities.iter().enumerate() {
                if capacity > Flow::zero() {
                    graph.add_directed_edge(i + 1, j + 1, capacity).unwrap();
                }
            }
        }
        for &exit in exits {
            // an exit that doubles as an entrance is capped at its
            // self-capacity, otherwise the sentinel pair would carry
            // unbounded flow through that room
            let upper = if entrances.contains(&exit) { corridors[exit][exit] } else { unbounded };
            if upper > Flow::zero() {
                graph.add_directed_edge(exit + 1, sink, upper).unwrap();
            }
        }

        debug!("evacuation network built: {} rooms, {} edges, {} entrances, {} exits", num_rooms, graph.num_edges(), entrances.len(), exits.len());

        Ok(Self { graph, source, sink })
    }

    #[inline]
    pub fn source(&self) -> usize {
        self.source
    }

    #[inline]
    pub fn sink(&self) -> usize {
        self.sink
    }

    pub fn graph(&self) -> &Graph<Flow> {
        &self.graph
    }

    pub fn maximum_throughput(&mut self) -> Flow {
        match EdmondsKarp::default().solve(self.source, self.sink, &mut self.graph) {
            Status::Optimal => {
                let total = self.graph.maximum_flow(self.source);
                debug!("maximum throughput: {:?}", total);
                total
            }
            _ => unreachable!(),
        }
    }
}

/// Maximum total flow from the entrances to the exits of a room network.
pub fn maximum_throughput<Flow>(entrances: &[usize], exits: &[usize], corridors: &[Vec<Flow>]) -> Result<Flow, InputError>
where
    Flow: NumAssign + Neg<Output = Flow> + Ord + Copy + Default + Debug,
{
    let mut network = EvacuationNetwork::new(entrances, exits, corridors)?;
    Ok(network.maximum_throughput())
}
