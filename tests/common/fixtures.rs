//! Reusable networks and settings content.

use std::path::Path;

use fabgen::{ChannelSpec, ConsortiumSpec, NetworkSpec, OrganizationSpec};

/// Two organizations sharing one channel
pub fn two_org_network(path: &Path) -> NetworkSpec {
    NetworkSpec::new("fabric.network", path)
        .with_organization(OrganizationSpec::new("Org1"))
        .with_organization(OrganizationSpec::new("Org2"))
        .with_consortium(ConsortiumSpec::new(
            "SampleConsortium",
            vec![ChannelSpec::new("ChannelOne", ["Org1", "Org2"])],
        ))
}

/// Three organizations, two consortiums, three channels
pub fn multi_channel_network(path: &Path) -> NetworkSpec {
    NetworkSpec::new("fabric.network", path)
        .with_organization(OrganizationSpec::new("Org1"))
        .with_organization(OrganizationSpec::new("Org2"))
        .with_organization(OrganizationSpec::new("Org3").with_anchor("peer1"))
        .with_consortium(ConsortiumSpec::new(
            "SampleConsortium",
            vec![
                ChannelSpec::new("ChannelOne", ["Org1", "Org2"]),
                ChannelSpec::new("ChannelTwo", ["Org2", "Org3"]),
            ],
        ))
        .with_consortium(ConsortiumSpec::new(
            "AuditConsortium",
            vec![ChannelSpec::new("Audit", ["Org1", "Org2", "Org3"])],
        ))
}

/// Settings file for a two-organization network, host execution
pub const HOST_SETTINGS: &str = r#"project_path: .
execution:
  engine: host
network:
  domain: fabric.network
  organizations:
    - name: Org1
    - name: Org2
  consortiums:
    - name: SampleConsortium
      channels:
        - name: ChannelOne
          organizations: [Org1, Org2]
"#;

/// Settings file whose channel references an undefined organization
pub const INVALID_SETTINGS: &str = r#"project_path: .
network:
  organizations:
    - name: Org1
  consortiums:
    - name: SampleConsortium
      channels:
        - name: ChannelOne
          organizations: [Org1, Ghost]
"#;

/// Lines of a provisioning script that invoke the toolchain
pub fn script_commands(script: &str) -> Vec<&str> {
    script
        .lines()
        .filter(|line| line.starts_with("configtxgen "))
        .collect()
}
