//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `templates/` - Template renderer and the artifact templates
//! - `execution/` - Execution contexts (Docker, Host)

pub mod execution;
pub mod templates;

// Re-export for convenience
pub use execution::{DockerContext, HostContext, DEFAULT_TOOLS_IMAGE};
pub use templates::{ScriptMaterializer, TemplateRenderer};
