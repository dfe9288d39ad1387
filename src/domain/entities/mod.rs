//! Domain Entities
//!
//! The network topology model and the artifacts compiled from it.

mod artifact;
mod network;

pub use artifact::{Artifact, ArtifactKind};
pub use network::{
    BatchSizeSpec, ChannelSpec, ConsortiumSpec, NetworkSpec, OrdererOrgSpec, OrganizationSpec,
};
