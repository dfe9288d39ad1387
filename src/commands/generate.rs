//! Pipeline commands - render, crypto, channel, generate

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{info, warn};

use fabgen::application::PipelineReport;
use fabgen::config::{find_settings, ExecutionEngine, Settings};
use fabgen::infrastructure::DockerContext;
use fabgen::presentation::cli::SettingsArgs;
use fabgen::presentation::output::print_warnings;
use fabgen::presentation::{create_pipeline, create_renderer, OutputFormat};

/// Which part of the pipeline to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineCommand {
    Render,
    Crypto,
    Channel,
    Generate,
}

impl PipelineCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Render => "render",
            Self::Crypto => "crypto",
            Self::Channel => "channel",
            Self::Generate => "generate",
        }
    }
}

/// Resolve the settings file, apply env overrides and validate the network
pub fn load_settings(args: &SettingsArgs, cwd: &Path) -> Result<Settings> {
    let path = find_settings(args.settings.as_deref(), cwd)?;
    info!(path = %path.display(), "loading settings");

    let (settings, warnings) = Settings::load_with_warnings(&path)?;
    print_warnings(&warnings);
    Ok(settings.with_env_overrides())
}

pub fn cmd_pipeline(
    command: PipelineCommand,
    args: &SettingsArgs,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot read current directory")?;
    let settings = load_settings(args, &cwd)?;
    let report = run_pipeline(command, &settings)?;

    let network_path = settings.network_path();
    create_renderer(OutputFormat::from_json_flag(json), verbose).render(
        command.name(),
        &network_path,
        &report,
    );
    Ok(())
}

/// Run the selected pipeline operation for validated settings.
///
/// The network directory is created here; the pipeline itself never
/// creates directories.
pub fn run_pipeline(command: PipelineCommand, settings: &Settings) -> Result<PipelineReport> {
    let spec = settings.validated_network_spec()?;
    let network_path = spec.network_path();
    fs::create_dir_all(network_path)
        .with_context(|| format!("cannot create {}", network_path.display()))?;

    if command != PipelineCommand::Render
        && settings.execution.engine == ExecutionEngine::Docker
        && !DockerContext::new(&settings.execution.docker_binary).check_available()
    {
        warn!(
            binary = settings.execution.docker_binary.as_str(),
            "container runtime did not answer --version"
        );
    }

    let pipeline = create_pipeline(settings)?;
    info!(
        command = command.name(),
        engine = %settings.execution.engine,
        image = pipeline.tools_image(),
        "running pipeline"
    );

    let report = match command {
        PipelineCommand::Render => pipeline.render_artefacts(&spec)?,
        PipelineCommand::Crypto => pipeline.generate_crypto_artefacts(&spec)?,
        PipelineCommand::Channel => pipeline.generate_channel_artefacts(&spec)?,
        PipelineCommand::Generate => pipeline.generate_all(&spec)?,
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabgen::FabgenError;
    use tempfile::tempdir;

    const SETTINGS: &str = r#"
project_path: .
network:
  organizations:
    - name: Org1
  consortiums:
    - name: SampleConsortium
      channels:
        - name: ChannelOne
          organizations: [Org1]
"#;

    #[test]
    fn render_creates_network_dir_and_artifacts() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("fabgen.yaml"), SETTINGS).unwrap();
        let args = SettingsArgs {
            settings: Some(dir.path().join("fabgen.yaml")),
        };

        let settings = load_settings(&args, Path::new("/")).unwrap();
        let report = run_pipeline(PipelineCommand::Render, &settings).unwrap();

        assert_eq!(report.artifacts.len(), 3);
        assert!(dir.path().join("network/configtx.yaml").is_file());
        assert!(report.commands.is_empty());
    }

    #[test]
    fn invalid_network_stops_before_writing() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::new(dir.path());
        settings.network.organizations.clear();
        settings.network.domain = String::new();

        let err = run_pipeline(PipelineCommand::Render, &settings).unwrap_err();

        assert!(err.to_string().contains("invalid network"));
        assert!(!dir.path().join("network").exists());
    }

    #[cfg(unix)]
    #[test]
    fn channel_on_host_reports_missing_toolchain() {
        let dir = tempdir().unwrap();
        let mut settings = Settings::new(dir.path());
        settings.execution.engine = ExecutionEngine::Host;
        settings.network_path = Some(dir.path().join("net"));

        // No crypto material exists, so configtxgen fails even when installed.
        let err = run_pipeline(PipelineCommand::Channel, &settings).unwrap_err();

        assert!(dir.path().join("net/generateConfigTx.sh").is_file());
        match err.downcast_ref::<FabgenError>() {
            Some(FabgenError::ExecutionFailure { command, .. }) => {
                assert!(command.contains("generateConfigTx.sh"), "{command}");
            }
            other => panic!("expected ExecutionFailure, got {other:?}"),
        }
    }

    #[test]
    fn command_names() {
        assert_eq!(PipelineCommand::Render.name(), "render");
        assert_eq!(PipelineCommand::Generate.name(), "generate");
    }
}
