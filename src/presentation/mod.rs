//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating the pipeline with infrastructure dependencies
//! - Output formatting (text/JSON)

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, SettingsArgs};
pub use factory::{create_context, create_pipeline, ConcretePipeline};
pub use output::{create_renderer, OutputFormat};
