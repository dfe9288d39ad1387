//! Domain Policies
//!
//! Business rules applied to the topology model.

mod topology;

pub use topology::{check_topology, TopologyViolation};
