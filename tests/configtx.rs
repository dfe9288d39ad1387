//! Rendered descriptors read back as YAML.

mod common;

use std::fs;

use common::*;
use fabgen::infrastructure::templates::{configtx_renderer, crypto_config_renderer};
use fabgen::{NetworkSpec, OrdererOrgSpec, OrganizationSpec};
use serde_yaml_ng::Value;
use tempfile::tempdir;

fn configtx(spec: &NetworkSpec) -> Value {
    let text = configtx_renderer().unwrap().render_to_string(spec).unwrap();
    serde_yaml_ng::from_str(&text).unwrap()
}

fn organization<'a>(doc: &'a Value, name: &str) -> &'a Value {
    doc["Organizations"]
        .as_sequence()
        .unwrap()
        .iter()
        .find(|org| org["Name"].as_str() == Some(name))
        .unwrap_or_else(|| panic!("organization {name} missing"))
}

#[test]
fn org1_msp_dir_and_anchor_peer() {
    let doc = configtx(&two_org_network(std::path::Path::new("/tmp/net")));
    let org1 = organization(&doc, "Org1MSP");

    assert_eq!(
        org1["MSPDir"].as_str(),
        Some("crypto-config/peerOrganizations/org1.fabric.network/msp")
    );
    let anchor = &org1["AnchorPeers"][0];
    assert_eq!(
        format!(
            "{}:{}",
            anchor["Host"].as_str().unwrap(),
            anchor["Port"].as_u64().unwrap()
        ),
        "peer0.org1.fabric.network:7051"
    );
}

#[test]
fn channel_profiles_list_their_organizations() {
    let doc = configtx(&multi_channel_network(std::path::Path::new("/tmp/net")));
    let profiles = &doc["Profiles"];

    let names = |profile: &str| -> Vec<String> {
        profiles[profile]["Application"]["Organizations"]
            .as_sequence()
            .unwrap()
            .iter()
            .map(|org| org["Name"].as_str().unwrap().to_string())
            .collect()
    };

    assert_eq!(names("ChannelOne"), ["Org1MSP", "Org2MSP"]);
    assert_eq!(names("ChannelTwo"), ["Org2MSP", "Org3MSP"]);
    assert_eq!(names("Audit"), ["Org1MSP", "Org2MSP", "Org3MSP"]);
    assert_eq!(
        profiles["ChannelTwo"]["Consortium"].as_str(),
        Some("SampleConsortium")
    );
    assert_eq!(profiles["Audit"]["Consortium"].as_str(), Some("AuditConsortium"));
}

#[test]
fn genesis_profile_has_every_consortium_with_every_organization() {
    let doc = configtx(&multi_channel_network(std::path::Path::new("/tmp/net")));
    let consortiums = &doc["Profiles"]["OrdererGenesis"]["Consortiums"];

    for consortium in ["SampleConsortium", "AuditConsortium"] {
        assert_eq!(
            consortiums[consortium]["Organizations"]
                .as_sequence()
                .unwrap()
                .len(),
            3
        );
    }
}

#[test]
fn custom_anchor_is_rendered() {
    let doc = configtx(&multi_channel_network(std::path::Path::new("/tmp/net")));
    let org3 = organization(&doc, "Org3MSP");

    assert_eq!(
        org3["AnchorPeers"][0]["Host"].as_str(),
        Some("peer1.org3.fabric.network")
    );
}

#[test]
fn kafka_brokers_only_when_configured() {
    let plain = configtx(&two_org_network(std::path::Path::new("/tmp/net")));
    assert!(plain["Orderer"].get("Kafka").is_none());

    let mut orderer = OrdererOrgSpec::default();
    orderer.orderer_type = "kafka".to_string();
    orderer.kafka_brokers = vec!["kafka0:9092".to_string(), "kafka1:9092".to_string()];
    let kafka = configtx(
        &NetworkSpec::new("fabric.network", "/tmp/net")
            .with_organization(OrganizationSpec::new("Org1"))
            .with_orderer(orderer),
    );

    assert_eq!(kafka["Orderer"]["OrdererType"].as_str(), Some("kafka"));
    assert_eq!(
        kafka["Orderer"]["Kafka"]["Brokers"]
            .as_sequence()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn crypto_config_lists_peer_orgs() {
    let dir = tempdir().unwrap();
    let spec = multi_channel_network(dir.path());
    let path = dir.path().join("crypto-config.yaml");

    crypto_config_renderer().unwrap().render(&path, &spec).unwrap();
    let doc: Value = serde_yaml_ng::from_str(&fs::read_to_string(&path).unwrap()).unwrap();

    assert_eq!(doc["OrdererOrgs"][0]["Domain"].as_str(), Some("fabric.network"));
    let domains: Vec<&str> = doc["PeerOrgs"]
        .as_sequence()
        .unwrap()
        .iter()
        .map(|org| org["Domain"].as_str().unwrap())
        .collect();
    assert_eq!(
        domains,
        [
            "org1.fabric.network",
            "org2.fabric.network",
            "org3.fabric.network"
        ]
    );
}
