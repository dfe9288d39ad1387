//! Host Execution Context
//!
//! Runs commands directly on this machine, for environments where the
//! toolchain is installed locally. The image name is ignored.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use tracing::debug;

use super::combined_output;
use crate::domain::ports::{ContextError, ExecutionContext, RunOutput};

/// Execution context without isolation
#[derive(Debug, Clone, Copy, Default)]
pub struct HostContext;

impl HostContext {
    pub fn new() -> Self {
        Self
    }
}

/// Resolve a relative program path such as `./script.sh` against the
/// working directory; bare names are left for `PATH` lookup.
fn resolve_program(working_dir: &Path, program: &str) -> PathBuf {
    let path = Path::new(program);
    if path.is_relative() && path.components().count() > 1 {
        working_dir.join(path)
    } else {
        path.to_path_buf()
    }
}

impl ExecutionContext for HostContext {
    fn run(
        &self,
        _image: &str,
        working_dir: &Path,
        argv: &[String],
    ) -> Result<RunOutput, ContextError> {
        let (program, args) = argv
            .split_first()
            .ok_or_else(|| ContextError::Unavailable("empty command".to_string()))?;
        if !working_dir.is_dir() {
            return Err(ContextError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("working directory {} does not exist", working_dir.display()),
            )));
        }

        let program = resolve_program(working_dir, program);
        debug!(program = %program.display(), ?args, cwd = %working_dir.display(), "running on host");

        let output = Command::new(&program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| {
                ContextError::Unavailable(format!("failed to start '{}': {}", program.display(), e))
            })?;

        Ok(RunOutput {
            status: output.status.code(),
            output: combined_output(&output.stdout, &output.stderr),
        })
    }
}
