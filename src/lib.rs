//! Maximum-throughput routing for evacuation networks: any number of
//! entrances and exits connected by capacity-bounded corridors.

pub mod evacuation;
pub mod maximum_flow;
