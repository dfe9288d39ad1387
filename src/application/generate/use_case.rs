//! Artifact Pipeline
//!
//! Orchestrates one pipeline run:
//! 1. Render the provisioning script and make it executable
//! 2. Render `configtx.yaml`
//! 3. Run the script inside the execution context
//!
//! Every step returns its error unchanged and stops the run. Files written by
//! earlier steps stay on disk.

use tracing::info;

use crate::application::Executor;
use crate::domain::entities::{ArtifactKind, NetworkSpec};
use crate::domain::ports::ExecutionContext;
use crate::error::FabgenResult;
use crate::infrastructure::templates::{
    configtx_renderer, crypto_config_renderer, render_artifact, ScriptMaterializer,
};
use crate::infrastructure::TemplateRenderer;

use super::options::PipelineOptions;
use super::result::{PipelineReport, PipelineStage};

/// Command that turns `crypto-config.yaml` into MSP material
pub const CRYPTOGEN_COMMAND: [&str; 4] = [
    "cryptogen",
    "generate",
    "--config=./crypto-config.yaml",
    "--output=./crypto-config",
];

/// Artifact pipeline, parameterized by its execution context
pub struct ArtifactPipeline<C: ExecutionContext> {
    crypto_config: TemplateRenderer,
    configtx: TemplateRenderer,
    script: ScriptMaterializer,
    executor: Executor<C>,
}

impl<C: ExecutionContext> ArtifactPipeline<C> {
    /// Parse every template up front; a malformed template fails here.
    pub fn new(context: C, options: PipelineOptions) -> FabgenResult<Self> {
        Ok(Self {
            crypto_config: crypto_config_renderer()?,
            configtx: configtx_renderer()?,
            script: ScriptMaterializer::new()?,
            executor: Executor::new(context, options.tools_image),
        })
    }

    pub fn tools_image(&self) -> &str {
        self.executor.image()
    }

    /// Write the script and `configtx.yaml`, then run the script.
    pub fn generate_channel_artefacts(&self, spec: &NetworkSpec) -> FabgenResult<PipelineReport> {
        let mut report = PipelineReport::new();
        info!(network = %spec.network_path().display(), "generating channel artefacts");

        let script = self.script.render_script(spec)?;
        info!(path = %script.path().display(), "provisioning script rendered");
        report.record(script, PipelineStage::ScriptRendered);

        let configtx = render_artifact(&self.configtx, ArtifactKind::ConfigTx, spec)?;
        info!(path = %configtx.path().display(), "configtx rendered");
        report.record(configtx, PipelineStage::SpecRendered);

        let argv = ScriptMaterializer::invocation();
        self.executor.execute(spec.network_path(), &argv)?;
        report.commands.push(argv.join(" "));
        report.reach(PipelineStage::Executed);

        info!(
            channels = spec.channels().count(),
            invocations = spec.expected_invocations(),
            "channel artefacts generated"
        );
        report.reach(PipelineStage::Done);
        Ok(report)
    }

    /// Write `crypto-config.yaml`, then run `cryptogen` against it.
    pub fn generate_crypto_artefacts(&self, spec: &NetworkSpec) -> FabgenResult<PipelineReport> {
        let mut report = PipelineReport::new();
        info!(network = %spec.network_path().display(), "generating crypto artefacts");

        let crypto = render_artifact(&self.crypto_config, ArtifactKind::CryptoConfig, spec)?;
        info!(path = %crypto.path().display(), "crypto config rendered");
        report.record(crypto, PipelineStage::CryptoSpecRendered);

        let argv = cryptogen_argv();
        self.executor.execute(spec.network_path(), &argv)?;
        report.commands.push(argv.join(" "));
        report.reach(PipelineStage::Executed);

        info!(organizations = spec.organizations.len(), "crypto artefacts generated");
        report.reach(PipelineStage::Done);
        Ok(report)
    }

    /// Crypto material first, since the channel artefacts read the MSP
    /// directories it creates.
    pub fn generate_all(&self, spec: &NetworkSpec) -> FabgenResult<PipelineReport> {
        let mut report = self.generate_crypto_artefacts(spec)?;
        report.merge(self.generate_channel_artefacts(spec)?);
        Ok(report)
    }

    /// Write all three artifacts without executing anything.
    pub fn render_artefacts(&self, spec: &NetworkSpec) -> FabgenResult<PipelineReport> {
        let mut report = PipelineReport::new();

        let crypto = render_artifact(&self.crypto_config, ArtifactKind::CryptoConfig, spec)?;
        report.record(crypto, PipelineStage::CryptoSpecRendered);

        let script = self.script.render_script(spec)?;
        report.record(script, PipelineStage::ScriptRendered);

        let configtx = render_artifact(&self.configtx, ArtifactKind::ConfigTx, spec)?;
        report.record(configtx, PipelineStage::SpecRendered);

        info!(artifacts = report.artifacts.len(), "artefacts rendered");
        report.reach(PipelineStage::Done);
        Ok(report)
    }
}

/// Full `cryptogen` command line
pub fn cryptogen_argv() -> Vec<String> {
    CRYPTOGEN_COMMAND.iter().map(|s| s.to_string()).collect()
}
