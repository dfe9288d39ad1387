//! Pipeline Result
//!
//! Result types for pipeline runs.

use serde::Serialize;

use crate::domain::entities::Artifact;

/// Stages of a pipeline run, in the order they are reached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PipelineStage {
    /// `crypto-config.yaml` written
    CryptoSpecRendered,
    /// `generateConfigTx.sh` written and executable
    ScriptRendered,
    /// `configtx.yaml` written
    SpecRendered,
    /// Toolchain command exited successfully
    Executed,
    Done,
}

/// Result of a pipeline run
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineReport {
    /// Files written, in write order
    pub artifacts: Vec<Artifact>,
    /// Stages reached, in order
    pub stages: Vec<PipelineStage>,
    /// Commands run through the execution context
    pub commands: Vec<String>,
}

impl PipelineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.stages.last() == Some(&PipelineStage::Done)
    }

    pub(crate) fn reach(&mut self, stage: PipelineStage) {
        self.stages.push(stage);
    }

    pub(crate) fn record(&mut self, artifact: Artifact, stage: PipelineStage) {
        self.artifacts.push(artifact);
        self.stages.push(stage);
    }

    /// Append another run, keeping a single trailing `Done`
    pub(crate) fn merge(&mut self, other: PipelineReport) {
        self.stages.retain(|s| *s != PipelineStage::Done);
        self.artifacts.extend(other.artifacts);
        self.stages.extend(other.stages);
        self.commands.extend(other.commands);
    }
}
