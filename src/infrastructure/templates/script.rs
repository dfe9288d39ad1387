//! Provisioning script (`generateConfigTx.sh`)
//!
//! One genesis-block command, then for every channel (consortium order) a
//! channel-creation transaction followed by one anchor-peer update per
//! channel organization. The genesis command comes first because the
//! channel commands use channel IDs from the genesis profile.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::entities::{Artifact, ArtifactKind, NetworkSpec};
use crate::error::{FabgenError, FabgenResult};

use super::helpers::DOMAIN_HELPERS;
use super::renderer::TemplateRenderer;

pub const SCRIPT_TEMPLATE_NAME: &str = "generateConfigTx.sh";

/// Mode of the written script (rwxr-xr-x)
pub const SCRIPT_MODE: u32 = 0o755;

/// Toolchain binary invoked by every command line of the script
pub const SCRIPT_TOOL: &str = "configtxgen";

const SCRIPT_TEMPLATE: &str = r#"#!/bin/bash
# Generated by fabgen. Runs configtxgen against configtx.yaml in this directory.
set -e

mkdir -p ./channel-artefacts

# Genesis block
configtxgen -profile OrdererGenesis -outputBlock ./channel-artefacts/genesis.block
{% for consortium in consortiums %}
{% for channel in consortium.channels %}

# {{ channel.name }} channel transaction ({{ consortium.name }})
configtxgen -profile {{ channel.name }} -outputCreateChannelTx ./channel-artefacts/{{ channel.name | to_lower }}.tx -channelID {{ channel.name | to_lower }}
{% for org in channel.organizations %}
# {{ channel.name }} anchor peer update for {{ org }}
configtxgen -profile {{ channel.name }} -outputAnchorPeersUpdate ./channel-artefacts/{{ org }}MSPanchors_{{ channel.name | to_lower }}.tx -channelID {{ channel.name | to_lower }} -asOrg {{ org }}MSP
{% endfor %}
{% endfor %}
{% endfor %}
"#;

/// Renders the provisioning script and makes it executable
#[derive(Debug)]
pub struct ScriptMaterializer {
    renderer: TemplateRenderer,
}

impl ScriptMaterializer {
    pub fn new() -> FabgenResult<Self> {
        Ok(Self {
            renderer: TemplateRenderer::new(SCRIPT_TEMPLATE_NAME, SCRIPT_TEMPLATE, DOMAIN_HELPERS)?,
        })
    }

    /// Write `<network_path>/generateConfigTx.sh` and set its execute bits
    pub fn render_script(&self, spec: &NetworkSpec) -> FabgenResult<Artifact> {
        let path = ArtifactKind::ProvisioningScript.path_in(spec.network_path());
        self.renderer.render(&path, spec)?;
        set_executable(&path)?;
        debug!(path = %path.display(), "provisioning script is executable");
        Ok(Artifact::from_disk(ArtifactKind::ProvisioningScript, path)?)
    }

    /// Script body without touching the file system
    pub fn preview(&self, spec: &NetworkSpec) -> FabgenResult<String> {
        self.renderer.render_to_string(spec)
    }

    /// Command used to run the script from the network directory
    pub fn invocation() -> Vec<String> {
        vec![format!("./{}", ArtifactKind::ProvisioningScript.file_name())]
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> FabgenResult<()> {
    use std::os::unix::fs::PermissionsExt;

    let permission_error = |source: std::io::Error| FabgenError::Permission {
        path: PathBuf::from(path),
        source,
    };
    let mut perms = fs::metadata(path).map_err(permission_error)?.permissions();
    perms.set_mode(SCRIPT_MODE);
    fs::set_permissions(path, perms).map_err(permission_error)
}

#[cfg(not(unix))]
fn set_executable(path: &Path) -> FabgenResult<()> {
    // No execute bit outside unix; only check the file is there.
    fs::metadata(path)
        .map(|_| ())
        .map_err(|source| FabgenError::Permission {
            path: PathBuf::from(path),
            source,
        })
}
