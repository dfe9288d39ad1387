//! Pipeline Options

use crate::infrastructure::DEFAULT_TOOLS_IMAGE;

/// Options for the artifact pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Image providing `cryptogen` and `configtxgen`
    pub tools_image: String,
}

impl PipelineOptions {
    pub fn new(tools_image: impl Into<String>) -> Self {
        Self {
            tools_image: tools_image.into(),
        }
    }
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self::new(DEFAULT_TOOLS_IMAGE)
    }
}
