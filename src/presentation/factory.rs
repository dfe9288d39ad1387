//! Pipeline Factory
//!
//! Wires the execution context selected in the settings into the pipeline.

use crate::application::{ArtifactPipeline, PipelineOptions};
use crate::config::{ExecutionEngine, Settings};
use crate::domain::ports::ExecutionContext;
use crate::error::FabgenResult;
use crate::infrastructure::{DockerContext, HostContext};

/// Pipeline over whichever context the settings select
pub type ConcretePipeline = ArtifactPipeline<Box<dyn ExecutionContext>>;

/// Execution context for the configured engine
pub fn create_context(settings: &Settings) -> Box<dyn ExecutionContext> {
    match settings.execution.engine {
        ExecutionEngine::Docker => Box::new(DockerContext::new(&settings.execution.docker_binary)),
        ExecutionEngine::Host => Box::new(HostContext::new()),
    }
}

/// Create the artifact pipeline with all dependencies wired up
pub fn create_pipeline(settings: &Settings) -> FabgenResult<ConcretePipeline> {
    ArtifactPipeline::new(
        create_context(settings),
        PipelineOptions::new(&settings.images.tools),
    )
}
