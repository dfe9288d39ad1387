//! Domain Layer
//!
//! The network topology model and its rules, without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Topology model (NetworkSpec and friends) and Artifact
//! - `policies/` - Topology rules checked before compilation
//! - `ports/` - Interface definitions for infrastructure (ExecutionContext)

pub mod entities;
pub mod policies;
pub mod ports;
