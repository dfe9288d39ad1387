//! Generate Module
//!
//! Drives the artifact pipeline for a network.
//!
//! ## Structure
//!
//! - `options` - Configuration types (`PipelineOptions`)
//! - `result` - Result types (`PipelineReport`, `PipelineStage`)
//! - `use_case` - Core pipeline logic (`ArtifactPipeline`)
//!
//! ## Usage
//!
//! ```ignore
//! use fabgen::application::generate::{ArtifactPipeline, PipelineOptions};
//!
//! let pipeline = ArtifactPipeline::new(DockerContext::default(), PipelineOptions::default())?;
//! let report = pipeline.generate_channel_artefacts(&spec)?;
//! ```

mod options;
mod result;
mod use_case;

pub use options::PipelineOptions;
pub use result::{PipelineReport, PipelineStage};
pub use use_case::{cryptogen_argv, ArtifactPipeline, CRYPTOGEN_COMMAND};
