//! Default settings file written by `fabgen init`

use serde::Serialize;

use crate::error::FabgenResult;
use crate::infrastructure::execution::DEFAULT_TOOLS_IMAGE;

use super::helpers::SETTINGS_HELPERS;
use super::renderer::TemplateRenderer;

pub const SETTINGS_TEMPLATE_NAME: &str = "fabgen.yaml";

const SETTINGS_TEMPLATE: &str = r#"# fabgen settings
project_path: {{ project_path | yaml_quote }}
# network_path defaults to <project_path>/network
# network_path: {{ network_path | yaml_quote }}

images:
  tools: {{ tools_image }}

execution:
  # docker: run the toolchain in an ephemeral container
  # host: run the toolchain installed on this machine
  engine: docker
  docker_binary: docker

network:
  domain: fabric.network
  orderer:
    name: Orderer
    id: OrdererMSP
    hostname: orderer
  organizations:
    - name: Org1
      anchor: peer0
    - name: Org2
      anchor: peer0
  consortiums:
    - name: SampleConsortium
      channels:
        - name: ChannelOne
          organizations: [Org1, Org2]
"#;

/// Model of the settings template
#[derive(Debug, Clone, Serialize)]
pub struct SettingsTemplateModel {
    pub project_path: String,
    pub network_path: String,
    pub tools_image: String,
}

impl SettingsTemplateModel {
    pub fn new(project_path: &std::path::Path) -> Self {
        Self {
            project_path: project_path.display().to_string(),
            network_path: project_path.join("network").display().to_string(),
            tools_image: DEFAULT_TOOLS_IMAGE.to_string(),
        }
    }
}

pub fn settings_renderer() -> FabgenResult<TemplateRenderer> {
    TemplateRenderer::new(SETTINGS_TEMPLATE_NAME, SETTINGS_TEMPLATE, SETTINGS_HELPERS)
}
