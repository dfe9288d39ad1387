//! Common test utilities for fabgen integration tests.
//!
//! This module provides:
//! - Fixtures: reusable networks and settings files
//! - `RecordingContext`: execution context that records every run

#![allow(dead_code)]

pub mod context;
pub mod fixtures;

pub use context::*;
pub use fixtures::*;
