//! Error types for fabgen
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`
//! at the edge.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for fabgen operations
pub type FabgenResult<T> = Result<T, FabgenError>;

/// Main error type for fabgen operations
#[derive(Error, Debug)]
pub enum FabgenError {
    /// Template text failed to parse. Templates are compiled into the
    /// binary, so this is a programming error and is never retried.
    #[error("template '{template}' failed to parse: {source}")]
    TemplateSyntax {
        template: String,
        #[source]
        source: minijinja::Error,
    },

    /// Artifact file could not be created or truncated
    #[error("cannot create {path}: {source}")]
    FileCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template referenced a field or helper the model does not provide
    #[error("template '{template}' failed while writing {path}: {source}")]
    TemplateExecution {
        template: String,
        path: PathBuf,
        #[source]
        source: minijinja::Error,
    },

    /// Execute permission could not be set on a generated script
    #[error("cannot set execute permission on {path}: {source}")]
    Permission {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Toolchain exited unsuccessfully or the execution context could not start
    #[error("`{command}` in image {image} failed ({}): {output}", describe_status(.status))]
    ExecutionFailure {
        image: String,
        command: String,
        status: Option<i32>,
        output: String,
    },

    /// Settings file could not be located
    #[error("settings file not found: {path}")]
    SettingsNotFound { path: PathBuf },

    /// Settings file is not valid YAML for the settings schema
    #[error("invalid settings in {file}: {message}")]
    InvalidSettings { file: PathBuf, message: String },

    /// Network topology failed validation
    #[error("invalid network: {}", .problems.join("; "))]
    InvalidNetwork { problems: Vec<String> },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

fn describe_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => format!("exit status {}", code),
        None => "no exit status".to_string(),
    }
}

impl FabgenError {
    /// Whether this error came from the execution step
    pub fn is_execution_failure(&self) -> bool {
        matches!(self, FabgenError::ExecutionFailure { .. })
    }
}
