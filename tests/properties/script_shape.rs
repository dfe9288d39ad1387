//! Property tests for the provisioning script command sequence.

use proptest::prelude::*;

use fabgen::infrastructure::ScriptMaterializer;

use super::strategies::network;

fn commands(script: &str) -> Vec<String> {
    script
        .lines()
        .filter(|line| line.starts_with("configtxgen "))
        .map(str::to_string)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: invocation count = 1 + sum over channels of (1 + organizations).
    #[test]
    fn property_invocation_count(spec in network()) {
        let script = ScriptMaterializer::new().unwrap().preview(&spec).unwrap();
        let expected = 1 + spec
            .consortiums
            .iter()
            .flat_map(|c| &c.channels)
            .map(|ch| 1 + ch.organizations.len())
            .sum::<usize>();

        prop_assert_eq!(commands(&script).len(), expected);
        prop_assert_eq!(spec.expected_invocations(), expected);
    }

    /// PROPERTY: exactly one genesis command, and it precedes every channel command.
    #[test]
    fn property_single_genesis_first(spec in network()) {
        let script = ScriptMaterializer::new().unwrap().preview(&spec).unwrap();
        let commands = commands(&script);

        let genesis: Vec<usize> = commands
            .iter()
            .enumerate()
            .filter(|(_, c)| c.contains("-outputBlock"))
            .map(|(i, _)| i)
            .collect();
        prop_assert_eq!(genesis, vec![0]);
    }

    /// PROPERTY: each channel-tx command is followed by one anchor update per
    /// channel organization, in channel order.
    #[test]
    fn property_anchor_updates_follow_channel_tx(spec in network()) {
        let script = ScriptMaterializer::new().unwrap().preview(&spec).unwrap();
        let commands = commands(&script);

        let mut index = 1;
        for (_, channel) in spec.channels() {
            let id = channel.channel_id();
            prop_assert!(commands[index].contains("-outputCreateChannelTx"));
            let expected_channel_suffix = format!("-channelID {}", id);
            prop_assert!(commands[index].ends_with(&expected_channel_suffix));
            index += 1;
            for org in &channel.organizations {
                let expected_suffix = format!("-channelID {} -asOrg {}MSP", id, org);
                prop_assert!(commands[index].contains("-outputAnchorPeersUpdate"));
                prop_assert!(commands[index].ends_with(&expected_suffix));
                index += 1;
            }
        }
        prop_assert_eq!(index, commands.len());
    }
}
