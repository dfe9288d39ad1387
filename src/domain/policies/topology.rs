//! Topology Policy
//!
//! Referential and naming rules a `NetworkSpec` must satisfy before it is
//! handed to the compiler. The renderer itself never checks these: a channel
//! naming an unknown organization renders a YAML alias with no anchor.

use std::collections::HashSet;
use std::fmt;

use crate::domain::entities::NetworkSpec;

/// Anchors and profile keys `configtx.yaml` defines for itself
pub const RESERVED_NAMES: &[&str] = &[
    "OrdererOrg",
    "ChannelCapabilities",
    "OrdererCapabilities",
    "ApplicationCapabilities",
    "ApplicationDefaults",
    "OrdererDefaults",
    "OrdererGenesis",
];

/// A single rule violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopologyViolation {
    EmptyDomain,
    /// Domain is not lower-case letters, digits, '.' and '-'
    InvalidDomain(String),
    EmptyOrganizationName,
    /// Name does not lower-case into a DNS label
    InvalidOrganizationName(String),
    DuplicateOrganization(String),
    EmptyConsortiumName,
    InvalidConsortiumName(String),
    EmptyChannelName { consortium: String },
    /// Lower-cased name is not a valid channel ID
    InvalidChannelName(String),
    /// Name collides with an anchor or profile of `configtx.yaml`
    ReservedName { kind: &'static str, name: String },
    DuplicateChannel(String),
    UnknownChannelOrganization { channel: String, organization: String },
}

impl fmt::Display for TopologyViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDomain => write!(f, "network domain is empty"),
            Self::InvalidDomain(domain) => write!(
                f,
                "network domain '{}' may only contain letters, digits, '.' and '-'",
                domain
            ),
            Self::EmptyOrganizationName => write!(f, "organization with empty name"),
            Self::InvalidOrganizationName(name) => write!(
                f,
                "organization name '{}' is not a valid DNS label (use letters, digits and '-')",
                name
            ),
            Self::DuplicateOrganization(name) => {
                write!(f, "organization '{}' is defined more than once", name)
            }
            Self::EmptyConsortiumName => write!(f, "consortium with empty name"),
            Self::InvalidConsortiumName(name) => write!(
                f,
                "consortium name '{}' must start with a letter and contain only letters, digits, '.' and '-'",
                name
            ),
            Self::EmptyChannelName { consortium } => {
                write!(f, "consortium '{}' has a channel with empty name", consortium)
            }
            Self::InvalidChannelName(name) => write!(
                f,
                "channel name '{}' is not a valid channel ID (start with a letter, then letters, digits, '.' or '-')",
                name
            ),
            Self::ReservedName { kind, name } => {
                write!(f, "{} name '{}' is reserved by configtx.yaml", kind, name)
            }
            Self::DuplicateChannel(name) => {
                write!(f, "channel '{}' is defined more than once", name)
            }
            Self::UnknownChannelOrganization {
                channel,
                organization,
            } => write!(
                f,
                "channel '{}' references unknown organization '{}'",
                channel, organization
            ),
        }
    }
}

/// Check a network against the topology rules, returning every violation
pub fn check_topology(spec: &NetworkSpec) -> Vec<TopologyViolation> {
    let mut violations = Vec::new();

    if spec.domain.trim().is_empty() {
        violations.push(TopologyViolation::EmptyDomain);
    } else if !is_domain(&spec.domain.to_lowercase()) {
        violations.push(TopologyViolation::InvalidDomain(spec.domain.clone()));
    }

    // Organization names become lower-cased hostnames.
    let mut seen = HashSet::new();
    for org in &spec.organizations {
        if org.name.is_empty() {
            violations.push(TopologyViolation::EmptyOrganizationName);
            continue;
        }
        if !is_dns_label(&org.name.to_lowercase()) {
            violations.push(TopologyViolation::InvalidOrganizationName(org.name.clone()));
        }
        if is_reserved(&org.name) {
            violations.push(TopologyViolation::ReservedName {
                kind: "organization",
                name: org.name.clone(),
            });
        }
        if !seen.insert(org.name.to_lowercase()) {
            violations.push(TopologyViolation::DuplicateOrganization(org.name.clone()));
        }
    }

    // Channel IDs are lower-cased, so uniqueness is case-insensitive.
    let mut channel_ids = HashSet::new();
    for consortium in &spec.consortiums {
        if consortium.name.trim().is_empty() {
            violations.push(TopologyViolation::EmptyConsortiumName);
        } else if !is_channel_id(&consortium.name.to_lowercase()) {
            violations.push(TopologyViolation::InvalidConsortiumName(consortium.name.clone()));
        }
        for channel in &consortium.channels {
            if channel.name.trim().is_empty() {
                violations.push(TopologyViolation::EmptyChannelName {
                    consortium: consortium.name.clone(),
                });
                continue;
            }
            if !is_channel_id(&channel.channel_id()) {
                violations.push(TopologyViolation::InvalidChannelName(channel.name.clone()));
            }
            if is_reserved(&channel.name) {
                violations.push(TopologyViolation::ReservedName {
                    kind: "channel",
                    name: channel.name.clone(),
                });
            }
            if !channel_ids.insert(channel.channel_id()) {
                violations.push(TopologyViolation::DuplicateChannel(channel.name.clone()));
            }
            for organization in &channel.organizations {
                if spec.organization(organization).is_none() {
                    violations.push(TopologyViolation::UnknownChannelOrganization {
                        channel: channel.name.clone(),
                        organization: organization.clone(),
                    });
                }
            }
        }
    }

    violations
}

fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// `[a-z][a-z0-9.-]*`, the shape `configtxgen` accepts for a channel ID
fn is_channel_id(id: &str) -> bool {
    let mut chars = id.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_lowercase())
        && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
}

fn is_domain(domain: &str) -> bool {
    !domain.is_empty()
        && domain
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '.' || c == '-')
        && !domain.starts_with(['.', '-'])
        && !domain.ends_with(['.', '-'])
}

fn is_dns_label(label: &str) -> bool {
    !label.is_empty()
        && label.len() <= 63
        && label
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
