//! Execution contexts for driving the pipeline without a toolchain.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use fabgen::{ContextError, ExecutionContext, RunOutput};

/// One recorded `run` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRun {
    pub image: String,
    pub working_dir: PathBuf,
    pub argv: Vec<String>,
}

/// Records every run and answers with a fixed outcome
#[derive(Debug, Default)]
pub struct RecordingContext {
    runs: RefCell<Vec<RecordedRun>>,
    exit_status: Option<i32>,
    output: String,
}

impl RecordingContext {
    /// Every run exits 0
    pub fn succeeding() -> Self {
        Self {
            exit_status: Some(0),
            ..Self::default()
        }
    }

    /// Every run exits with `status` and prints `output`
    pub fn failing(status: i32, output: &str) -> Self {
        Self {
            exit_status: Some(status),
            output: output.to_string(),
            ..Self::default()
        }
    }

    pub fn runs(&self) -> Vec<RecordedRun> {
        self.runs.borrow().clone()
    }

    pub fn commands(&self) -> Vec<String> {
        self.runs.borrow().iter().map(|r| r.argv.join(" ")).collect()
    }
}

impl ExecutionContext for RecordingContext {
    fn run(
        &self,
        image: &str,
        working_dir: &Path,
        argv: &[String],
    ) -> Result<RunOutput, ContextError> {
        self.runs.borrow_mut().push(RecordedRun {
            image: image.to_string(),
            working_dir: working_dir.to_path_buf(),
            argv: argv.to_vec(),
        });
        Ok(RunOutput {
            status: self.exit_status,
            output: self.output.clone(),
        })
    }
}

/// Context whose runtime cannot be started
#[derive(Debug, Default)]
pub struct UnavailableContext;

impl ExecutionContext for UnavailableContext {
    fn run(&self, _: &str, _: &Path, _: &[String]) -> Result<RunOutput, ContextError> {
        Err(ContextError::Unavailable(
            "failed to start 'docker': No such file or directory".to_string(),
        ))
    }
}
