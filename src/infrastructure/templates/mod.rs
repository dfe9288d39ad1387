//! Artifact templates
//!
//! Each artifact is a text template filled with the `NetworkSpec`:
//! - `crypto-config.yaml` - crypto material descriptor
//! - `configtx.yaml` - channel/genesis descriptor
//! - `generateConfigTx.sh` - provisioning script (executable)
//! - `fabgen.yaml` - default settings written by `init`

mod configtx;
mod crypto_config;
mod helpers;
mod renderer;
mod script;
mod settings;

pub use configtx::{configtx_renderer, CONFIGTX_TEMPLATE_NAME, GENESIS_PROFILE};
pub use crypto_config::{crypto_config_renderer, CRYPTO_CONFIG_TEMPLATE_NAME};
pub use helpers::{to_lower, to_upper, yaml_quote, DOMAIN_HELPERS, SETTINGS_HELPERS};
pub use renderer::{Helper, HelperTable, TemplateRenderer};
pub use script::{ScriptMaterializer, SCRIPT_MODE, SCRIPT_TEMPLATE_NAME, SCRIPT_TOOL};
pub use settings::{settings_renderer, SettingsTemplateModel, SETTINGS_TEMPLATE_NAME};

use crate::domain::entities::{Artifact, ArtifactKind, NetworkSpec};
use crate::error::FabgenResult;

/// Render `kind` into the network directory and record the written artifact
pub fn render_artifact(
    renderer: &TemplateRenderer,
    kind: ArtifactKind,
    spec: &NetworkSpec,
) -> FabgenResult<Artifact> {
    let path = kind.path_in(spec.network_path());
    renderer.render(&path, spec)?;
    Ok(Artifact::from_disk(kind, path)?)
}
