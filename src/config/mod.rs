//! Settings module for fabgen
//!
//! Settings hierarchy:
//! 1. Environment variables (FABGEN_*)
//! 2. Settings file (`fabgen.yaml`, explicit or discovered upwards)
//! 3. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{find_settings, SettingsWarning};
pub use types::{ExecutionConfig, ExecutionEngine, ImagesConfig, NetworkConfig, Settings};
