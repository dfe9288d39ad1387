//! Settings type definitions

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{ConsortiumSpec, NetworkSpec, OrdererOrgSpec, OrganizationSpec};
use crate::domain::policies::check_topology;
use crate::error::{FabgenError, FabgenResult};
use crate::infrastructure::DEFAULT_TOOLS_IMAGE;

use super::loader::{self, SettingsWarning};

/// Container images used by the execution step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImagesConfig {
    #[serde(default = "default_tools_image")]
    pub tools: String,
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            tools: default_tools_image(),
        }
    }
}

fn default_tools_image() -> String {
    DEFAULT_TOOLS_IMAGE.to_string()
}

/// Where toolchain commands run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionEngine {
    /// Ephemeral container per command
    #[default]
    Docker,
    /// Toolchain installed on this machine
    Host,
}

impl FromStr for ExecutionEngine {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "docker" | "container" => Ok(Self::Docker),
            "host" | "local" => Ok(Self::Host),
            other => Err(format!("unknown execution engine '{}'", other)),
        }
    }
}

impl fmt::Display for ExecutionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Docker => write!(f, "docker"),
            Self::Host => write!(f, "host"),
        }
    }
}

/// Execution configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionConfig {
    #[serde(default)]
    pub engine: ExecutionEngine,

    /// Docker-compatible CLI (`docker`, `podman`, ...)
    #[serde(default = "default_docker_binary")]
    pub docker_binary: String,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            engine: ExecutionEngine::default(),
            docker_binary: default_docker_binary(),
        }
    }
}

fn default_docker_binary() -> String {
    "docker".to_string()
}

/// Network topology as written in the settings file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    #[serde(default = "default_domain")]
    pub domain: String,

    #[serde(default)]
    pub orderer: OrdererOrgSpec,

    #[serde(default)]
    pub organizations: Vec<OrganizationSpec>,

    #[serde(default)]
    pub consortiums: Vec<ConsortiumSpec>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
            orderer: OrdererOrgSpec::default(),
            organizations: Vec::new(),
            consortiums: Vec::new(),
        }
    }
}

fn default_domain() -> String {
    "fabric.network".to_string()
}

/// Contents of `fabgen.yaml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Project root; relative paths are resolved against the settings file
    pub project_path: PathBuf,

    /// Artifact directory, defaults to `<project_path>/network`
    #[serde(default)]
    pub network_path: Option<PathBuf>,

    #[serde(default)]
    pub images: ImagesConfig,

    #[serde(default)]
    pub execution: ExecutionConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

impl Settings {
    pub fn new(project_path: impl Into<PathBuf>) -> Self {
        Self {
            project_path: project_path.into(),
            network_path: None,
            images: ImagesConfig::default(),
            execution: ExecutionConfig::default(),
            network: NetworkConfig::default(),
        }
    }

    /// Load settings from a YAML file
    pub fn load(path: &Path) -> FabgenResult<Self> {
        let (settings, _warnings) = loader::load_with_warnings(path)?;
        Ok(settings)
    }

    /// Load settings and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> FabgenResult<(Self, Vec<SettingsWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Apply environment variable overrides (FABGEN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Directory the artifacts are written into
    pub fn network_path(&self) -> PathBuf {
        self.network_path
            .clone()
            .unwrap_or_else(|| self.project_path.join("network"))
    }

    /// Build the topology model handed to the pipeline
    pub fn network_spec(&self) -> NetworkSpec {
        let mut spec = NetworkSpec::new(&self.network.domain, self.network_path())
            .with_orderer(self.network.orderer.clone());
        for organization in &self.network.organizations {
            spec = spec.with_organization(organization.clone());
        }
        for consortium in &self.network.consortiums {
            spec = spec.with_consortium(consortium.clone());
        }
        spec
    }

    /// Build the topology model and reject it if any topology rule is broken
    pub fn validated_network_spec(&self) -> FabgenResult<NetworkSpec> {
        let spec = self.network_spec();
        let violations = check_topology(&spec);
        if violations.is_empty() {
            Ok(spec)
        } else {
            Err(FabgenError::InvalidNetwork {
                problems: violations.iter().map(ToString::to_string).collect(),
            })
        }
    }
}
