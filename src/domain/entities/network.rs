//! Network topology entities
//!
//! The topology is built once by the settings layer and only read afterwards.
//! Every collection is an ordered `Vec` so rendered artifacts are
//! deterministic.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A peer organization taking part in the network
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationSpec {
    /// Unique name; also used as a YAML anchor label and, lower-cased, as a
    /// DNS label
    pub name: String,

    /// MSP identifier
    #[serde(default)]
    pub id: String,

    /// Hostname fragment of the anchor peer (e.g. `peer0`)
    #[serde(default = "default_anchor")]
    pub anchor: String,

    #[serde(default = "default_anchor_port")]
    pub anchor_port: u16,

    /// Number of peers created from the host template
    #[serde(default = "default_count")]
    pub peers: u32,

    /// Number of user accounts in addition to Admin
    #[serde(default = "default_count")]
    pub users: u32,
}

impl OrganizationSpec {
    /// Create an organization with default MSP id, anchor and counts
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: default_msp_id(&name),
            name,
            anchor: default_anchor(),
            anchor_port: default_anchor_port(),
            peers: default_count(),
            users: default_count(),
        }
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Fill values that depend on other fields (MSP id derived from name)
    pub(crate) fn normalized(mut self) -> Self {
        if self.id.is_empty() {
            self.id = default_msp_id(&self.name);
        }
        self
    }

    /// Organization domain: `<name lower>.<network domain>`
    pub fn domain(&self, network_domain: &str) -> String {
        format!("{}.{}", self.name.to_lowercase(), network_domain)
    }
}

/// Batch size thresholds for the ordering service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSizeSpec {
    #[serde(default = "default_max_message_count")]
    pub max_message_count: u32,
    #[serde(default = "default_absolute_max_bytes")]
    pub absolute_max_bytes: String,
    #[serde(default = "default_preferred_max_bytes")]
    pub preferred_max_bytes: String,
}

impl Default for BatchSizeSpec {
    fn default() -> Self {
        Self {
            max_message_count: default_max_message_count(),
            absolute_max_bytes: default_absolute_max_bytes(),
            preferred_max_bytes: default_preferred_max_bytes(),
        }
    }
}

/// The single organization running the ordering service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrdererOrgSpec {
    #[serde(default = "default_orderer_name")]
    pub name: String,
    #[serde(default = "default_orderer_id")]
    pub id: String,
    #[serde(default = "default_orderer_hostname")]
    pub hostname: String,
    #[serde(default = "default_orderer_port")]
    pub port: u16,
    #[serde(default = "default_orderer_type")]
    pub orderer_type: String,
    #[serde(default = "default_batch_timeout")]
    pub batch_timeout: String,
    #[serde(default)]
    pub batch_size: BatchSizeSpec,
    /// Only rendered when non-empty (kafka ordering)
    #[serde(default)]
    pub kafka_brokers: Vec<String>,
}

impl Default for OrdererOrgSpec {
    fn default() -> Self {
        Self {
            name: default_orderer_name(),
            id: default_orderer_id(),
            hostname: default_orderer_hostname(),
            port: default_orderer_port(),
            orderer_type: default_orderer_type(),
            batch_timeout: default_batch_timeout(),
            batch_size: BatchSizeSpec::default(),
            kafka_brokers: Vec::new(),
        }
    }
}

/// A channel and the organizations (by name) participating in it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelSpec {
    pub name: String,
    #[serde(default)]
    pub organizations: Vec<String>,
}

impl ChannelSpec {
    pub fn new<I, S>(name: impl Into<String>, organizations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            organizations: organizations.into_iter().map(Into::into).collect(),
        }
    }

    /// Channel ID used by the toolchain (lower-cased name)
    pub fn channel_id(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A consortium and its channels
///
/// Every organization of the network is a member of every consortium.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsortiumSpec {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<ChannelSpec>,
}

impl ConsortiumSpec {
    pub fn new(name: impl Into<String>, channels: Vec<ChannelSpec>) -> Self {
        Self {
            name: name.into(),
            channels,
        }
    }
}

/// Root of the topology model
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkSpec {
    /// Network-wide DNS suffix
    pub domain: String,
    /// Directory the artifacts are written into
    pub network_path: PathBuf,
    pub organizations: Vec<OrganizationSpec>,
    pub orderer: OrdererOrgSpec,
    pub consortiums: Vec<ConsortiumSpec>,
}

impl NetworkSpec {
    pub fn new(domain: impl Into<String>, network_path: impl Into<PathBuf>) -> Self {
        Self {
            domain: domain.into(),
            network_path: network_path.into(),
            organizations: Vec::new(),
            orderer: OrdererOrgSpec::default(),
            consortiums: Vec::new(),
        }
    }

    pub fn with_organization(mut self, organization: OrganizationSpec) -> Self {
        self.organizations.push(organization.normalized());
        self
    }

    pub fn with_orderer(mut self, orderer: OrdererOrgSpec) -> Self {
        self.orderer = orderer;
        self
    }

    pub fn with_consortium(mut self, consortium: ConsortiumSpec) -> Self {
        self.consortiums.push(consortium);
        self
    }

    pub fn network_path(&self) -> &Path {
        &self.network_path
    }

    pub fn organization(&self, name: &str) -> Option<&OrganizationSpec> {
        self.organizations.iter().find(|org| org.name == name)
    }

    /// All channels in consortium order
    pub fn channels(&self) -> impl Iterator<Item = (&ConsortiumSpec, &ChannelSpec)> {
        self.consortiums
            .iter()
            .flat_map(|c| c.channels.iter().map(move |ch| (c, ch)))
    }

    /// Number of toolchain invocations the provisioning script contains:
    /// one genesis command, one channel-tx per channel and one anchor
    /// update per channel organization.
    pub fn expected_invocations(&self) -> usize {
        1 + self
            .channels()
            .map(|(_, ch)| 1 + ch.organizations.len())
            .sum::<usize>()
    }
}

fn default_msp_id(name: &str) -> String {
    format!("{}MSP", name)
}

fn default_anchor() -> String {
    "peer0".to_string()
}

fn default_anchor_port() -> u16 {
    7051
}

fn default_count() -> u32 {
    1
}

fn default_orderer_name() -> String {
    "Orderer".to_string()
}

fn default_orderer_id() -> String {
    "OrdererMSP".to_string()
}

fn default_orderer_hostname() -> String {
    "orderer".to_string()
}

fn default_orderer_port() -> u16 {
    7050
}

fn default_orderer_type() -> String {
    "solo".to_string()
}

fn default_batch_timeout() -> String {
    "2s".to_string()
}

fn default_max_message_count() -> u32 {
    10
}

fn default_absolute_max_bytes() -> String {
    "99 MB".to_string()
}

fn default_preferred_max_bytes() -> String {
    "512 KB".to_string()
}
