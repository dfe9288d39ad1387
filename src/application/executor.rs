//! Executor
//!
//! Runs one command through an `ExecutionContext` and turns anything other
//! than a clean exit into `FabgenError::ExecutionFailure`.

use std::path::Path;

use tracing::{debug, info};

use crate::domain::ports::ExecutionContext;
use crate::error::{FabgenError, FabgenResult};

/// Runs toolchain commands in a fixed image
pub struct Executor<C: ExecutionContext> {
    context: C,
    image: String,
}

impl<C: ExecutionContext> Executor<C> {
    pub fn new(context: C, image: impl Into<String>) -> Self {
        Self {
            context,
            image: image.into(),
        }
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    /// Run `argv` with `working_dir` as the current directory.
    ///
    /// Blocks until the context returns. There is no retry and no timeout.
    pub fn execute(&self, working_dir: &Path, argv: &[String]) -> FabgenResult<()> {
        let command = argv.join(" ");
        info!(image = self.image.as_str(), command = command.as_str(), "executing");

        let output = match self.context.run(&self.image, working_dir, argv) {
            Ok(output) => output,
            Err(e) => {
                return Err(FabgenError::ExecutionFailure {
                    image: self.image.clone(),
                    command,
                    status: None,
                    output: e.to_string(),
                })
            }
        };

        if !output.is_success() {
            return Err(FabgenError::ExecutionFailure {
                image: self.image.clone(),
                command,
                status: output.status,
                output: output.output,
            });
        }

        debug!(command = command.as_str(), output = output.output.as_str(), "command finished");
        Ok(())
    }
}
