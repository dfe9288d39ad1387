//! Docker Execution Context
//!
//! Runs each command in a fresh container (`docker run --rm`) with the
//! working directory bind-mounted, so the toolchain sees the network
//! directory at a fixed path and relative paths in the script resolve.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use super::combined_output;
use crate::domain::ports::{ContextError, ExecutionContext, RunOutput};

/// Mount point of the working directory inside the container
pub const CONTAINER_WORKDIR: &str = "/opt/fabgen/network";

/// Execution context backed by ephemeral Docker containers
#[derive(Debug, Clone)]
pub struct DockerContext {
    binary: String,
}

impl Default for DockerContext {
    fn default() -> Self {
        Self::new("docker")
    }
}

impl DockerContext {
    /// Create a context using the given docker-compatible CLI (e.g. `podman`)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check if the container CLI is installed and answers
    pub fn check_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    /// Arguments passed to the container CLI
    pub fn run_args(&self, image: &str, host_dir: &Path, argv: &[String]) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            "--rm".to_string(),
            "-v".to_string(),
            format!("{}:{}", host_dir.display(), CONTAINER_WORKDIR),
            "-w".to_string(),
            CONTAINER_WORKDIR.to_string(),
            image.to_string(),
        ];
        args.extend(argv.iter().cloned());
        args
    }
}

impl ExecutionContext for DockerContext {
    fn run(
        &self,
        image: &str,
        working_dir: &Path,
        argv: &[String],
    ) -> Result<RunOutput, ContextError> {
        // Bind mounts need an absolute host path.
        let host_dir = working_dir.canonicalize()?;
        let args = self.run_args(image, &host_dir, argv);
        debug!(binary = self.binary.as_str(), ?args, "starting container");

        let output = Command::new(&self.binary)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ContextError::Unavailable(format!("failed to start '{}': {}", self.binary, e))
            })?;

        Ok(RunOutput {
            status: output.status.code(),
            output: combined_output(&output.stdout, &output.stderr),
        })
    }
}
