//! Channel/genesis descriptor (`configtx.yaml`)
//!
//! Input for `configtxgen`. Each organization entry is anchored with its
//! name (`&Org1`) so profiles can refer to it as `*Org1`. A channel naming an
//! organization without an entry produces an alias with no anchor; the
//! renderer does not check this.

use crate::error::FabgenResult;

use super::helpers::DOMAIN_HELPERS;
use super::renderer::TemplateRenderer;

pub const CONFIGTX_TEMPLATE_NAME: &str = "configtx.yaml";

/// Profile name of the genesis block
pub const GENESIS_PROFILE: &str = "OrdererGenesis";

const CONFIGTX_TEMPLATE: &str = r#"---
# Generated by fabgen. Input for `configtxgen`.

################################################################################
#   Organizations referenced by the profiles below
################################################################################
Organizations:

    - &OrdererOrg
        Name: {{ orderer.id }}
        ID: {{ orderer.id }}
        MSPDir: crypto-config/ordererOrganizations/{{ domain }}/msp
{% for org in organizations %}

    - &{{ org.name }}
        Name: {{ org.name }}MSP
        ID: {{ org.id }}
        MSPDir: crypto-config/peerOrganizations/{{ org.name | to_lower }}.{{ domain }}/msp
        # Peers used for cross-organization gossip
        AnchorPeers:
            - Host: {{ org.anchor }}.{{ org.name | to_lower }}.{{ domain }}
              Port: {{ org.anchor_port }}
{% endfor %}

################################################################################
#   Capabilities
################################################################################
Capabilities:
    Global: &ChannelCapabilities
        V1_1: true
    Orderer: &OrdererCapabilities
        V1_1: true
    Application: &ApplicationCapabilities
        V1_1: true

################################################################################
#   Application defaults
################################################################################
Application: &ApplicationDefaults
    Organizations:

################################################################################
#   Orderer defaults
################################################################################
Orderer: &OrdererDefaults
    OrdererType: {{ orderer.orderer_type }}
    Addresses:
        - {{ orderer.hostname }}.{{ domain }}:{{ orderer.port }}
    BatchTimeout: {{ orderer.batch_timeout }}
    BatchSize:
        MaxMessageCount: {{ orderer.batch_size.max_message_count }}
        AbsoluteMaxBytes: {{ orderer.batch_size.absolute_max_bytes }}
        PreferredMaxBytes: {{ orderer.batch_size.preferred_max_bytes }}
{% if orderer.kafka_brokers %}
    Kafka:
        Brokers:
{% for broker in orderer.kafka_brokers %}
            - {{ broker }}
{% endfor %}
{% endif %}
    Organizations:

################################################################################
#   Profiles
################################################################################
Profiles:

    OrdererGenesis:
        Capabilities:
            <<: *ChannelCapabilities
        Orderer:
            <<: *OrdererDefaults
            Organizations:
                - *OrdererOrg
            Capabilities:
                <<: *OrdererCapabilities
        Consortiums:
{% for consortium in consortiums %}
            {{ consortium.name }}:
                Organizations:
{% for org in organizations %}
                    - *{{ org.name }}
{% endfor %}
{% endfor %}
{% for consortium in consortiums %}
{% for channel in consortium.channels %}

    {{ channel.name }}:
        Consortium: {{ consortium.name }}
        Application:
            <<: *ApplicationDefaults
            Organizations:
{% for org in channel.organizations %}
                - *{{ org }}
{% endfor %}
            Capabilities:
                <<: *ApplicationCapabilities
{% endfor %}
{% endfor %}
"#;

pub fn configtx_renderer() -> FabgenResult<TemplateRenderer> {
    TemplateRenderer::new(CONFIGTX_TEMPLATE_NAME, CONFIGTX_TEMPLATE, DOMAIN_HELPERS)
}
