//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod execution_context;

pub use execution_context::{ContextError, ExecutionContext, RunOutput};
