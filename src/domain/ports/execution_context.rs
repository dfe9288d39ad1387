//! ExecutionContext port - runs toolchain commands in isolation
//!
//! The pipeline only needs "run this argv in this directory inside an
//! environment that has the toolchain", so the isolation technology
//! (container, host shell, mock) can be swapped without touching rendering.

use std::path::Path;

use thiserror::Error;

/// Outcome of a command run inside an execution context
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RunOutput {
    /// Exit status, `None` if the process was terminated by a signal
    pub status: Option<i32>,
    /// Combined stdout and stderr
    pub output: String,
}

impl RunOutput {
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            status: Some(0),
            output: output.into(),
        }
    }

    pub fn failure(status: i32, output: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            output: output.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == Some(0)
    }
}

/// The context could not run the command at all
#[derive(Error, Debug)]
pub enum ContextError {
    /// Runtime binary missing or not startable
    #[error("execution context unavailable: {0}")]
    Unavailable(String),

    /// Working directory or process I/O failed
    #[error("execution context I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract execution environment
///
/// Implementations:
/// - `DockerContext` - ephemeral container with the directory bind-mounted
/// - `HostContext` - local toolchain, no isolation
pub trait ExecutionContext {
    /// Run `argv` with `working_dir` as the current directory, blocking until
    /// it exits. A non-zero exit is reported through `RunOutput`, not `Err`.
    fn run(&self, image: &str, working_dir: &Path, argv: &[String])
        -> Result<RunOutput, ContextError>;
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for &T {
    fn run(
        &self,
        image: &str,
        working_dir: &Path,
        argv: &[String],
    ) -> Result<RunOutput, ContextError> {
        (**self).run(image, working_dir, argv)
    }
}

impl<T: ExecutionContext + ?Sized> ExecutionContext for Box<T> {
    fn run(
        &self,
        image: &str,
        working_dir: &Path,
        argv: &[String],
    ) -> Result<RunOutput, ContextError> {
        (**self).run(image, working_dir, argv)
    }
}
