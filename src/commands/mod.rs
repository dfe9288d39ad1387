//! Command handlers for the fabgen binary

pub mod generate;
pub mod init;

pub use generate::{cmd_pipeline, PipelineCommand};
pub use init::cmd_init;
