//! Crypto material descriptor (`crypto-config.yaml`)
//!
//! Input for `cryptogen generate`: the orderer organization plus one peer
//! organization per network organization, each with a host template and a
//! user count.

use crate::error::FabgenResult;

use super::helpers::DOMAIN_HELPERS;
use super::renderer::TemplateRenderer;

pub const CRYPTO_CONFIG_TEMPLATE_NAME: &str = "crypto-config.yaml";

const CRYPTO_CONFIG_TEMPLATE: &str = r#"# Generated by fabgen. Input for `cryptogen generate`.

# Organizations managing orderer nodes
OrdererOrgs:
  - Name: {{ orderer.name }}
    Domain: {{ domain }}
    Specs:
      - Hostname: {{ orderer.hostname }}

# Organizations managing peer nodes. Peers are created from the host
# template as peer0..peerN-1; Users.Count excludes Admin.
PeerOrgs:
{% for org in organizations %}
  - Name: {{ org.name }}
    Domain: {{ org.name | to_lower }}.{{ domain }}
    Template:
      Count: {{ org.peers }}
    Users:
      Count: {{ org.users }}
{% endfor %}
"#;

pub fn crypto_config_renderer() -> FabgenResult<TemplateRenderer> {
    TemplateRenderer::new(
        CRYPTO_CONFIG_TEMPLATE_NAME,
        CRYPTO_CONFIG_TEMPLATE,
        DOMAIN_HELPERS,
    )
}
