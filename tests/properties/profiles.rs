//! Property tests for channel profiles in configtx.yaml.

use proptest::prelude::*;
use serde_yaml_ng::Value;

use fabgen::infrastructure::templates::configtx_renderer;

use super::strategies::network;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: every organization of a channel appears in the channel
    /// profile as `<Org>MSP`.
    #[test]
    fn property_channel_profiles_carry_msp_names(spec in network()) {
        let text = configtx_renderer().unwrap().render_to_string(&spec).unwrap();
        let doc: Value = serde_yaml_ng::from_str(&text).unwrap();

        for (consortium, channel) in spec.channels() {
            let profile = &doc["Profiles"][channel.name.as_str()];
            prop_assert_eq!(profile["Consortium"].as_str(), Some(consortium.name.as_str()));

            let names: Vec<&str> = profile["Application"]["Organizations"]
                .as_sequence()
                .unwrap()
                .iter()
                .filter_map(|org| org["Name"].as_str())
                .collect();
            let expected: Vec<String> = channel
                .organizations
                .iter()
                .map(|org| format!("{}MSP", org))
                .collect();
            prop_assert_eq!(names, expected);
        }
    }

    /// PROPERTY: anchor peers are `<anchor>.<org lower>.<domain>:<port>`.
    #[test]
    fn property_anchor_peer_addresses(spec in network()) {
        let text = configtx_renderer().unwrap().render_to_string(&spec).unwrap();
        let doc: Value = serde_yaml_ng::from_str(&text).unwrap();
        let entries = doc["Organizations"].as_sequence().unwrap();

        for org in &spec.organizations {
            let msp = format!("{}MSP", org.name);
            let entry = entries
                .iter()
                .find(|e| e["Name"].as_str() == Some(msp.as_str()))
                .unwrap();
            let anchor = &entry["AnchorPeers"][0];
            prop_assert_eq!(
                format!(
                    "{}:{}",
                    anchor["Host"].as_str().unwrap(),
                    anchor["Port"].as_u64().unwrap()
                ),
                format!("{}.{}:{}", org.anchor, org.domain(&spec.domain), org.anchor_port)
            );
        }
    }
}
