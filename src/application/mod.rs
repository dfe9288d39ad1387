//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, policies, ports)
//! - Does NOT render or run anything itself
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ArtifactPipeline` - Render descriptors and the provisioning script, then run the toolchain
//! - `Executor` - Run one command through an execution context

mod executor;
pub mod generate;

pub use executor::Executor;
pub use generate::{
    cryptogen_argv, ArtifactPipeline, PipelineOptions, PipelineReport, PipelineStage,
    CRYPTOGEN_COMMAND,
};
