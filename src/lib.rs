//! fabgen - network artifact compiler for Fabric-style networks
//!
//! fabgen turns a network topology (organizations, orderer, consortiums and
//! channels) into the inputs of the Fabric toolchain (`crypto-config.yaml`,
//! `configtx.yaml` and an executable `generateConfigTx.sh`), then runs the
//! toolchain in an isolated execution context.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{ArtifactPipeline, PipelineOptions, PipelineReport, PipelineStage};
pub use config::{ExecutionEngine, Settings, SettingsWarning};
pub use domain::entities::{
    Artifact, ArtifactKind, ChannelSpec, ConsortiumSpec, NetworkSpec, OrdererOrgSpec,
    OrganizationSpec,
};
pub use domain::ports::{ContextError, ExecutionContext, RunOutput};
pub use error::{FabgenError, FabgenResult};
pub use infrastructure::{DockerContext, HostContext, TemplateRenderer};
