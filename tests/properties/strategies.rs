//! Random network topologies.
//!
//! Names stay YAML- and DNS-safe: organizations are `Org<suffix>` and
//! channels `Ch<suffix>`, deduplicated case-insensitively.

use std::collections::BTreeSet;

use proptest::prelude::*;

use fabgen::{ChannelSpec, ConsortiumSpec, NetworkSpec, OrganizationSpec};

fn unique_names(prefix: &'static str, pattern: &'static str, max: usize) -> BoxedStrategy<Vec<String>> {
    proptest::collection::vec(proptest::string::string_regex(pattern).unwrap(), 1..=max)
        .prop_map(move |suffixes| {
            let mut seen = BTreeSet::new();
            suffixes
                .into_iter()
                .map(|s| format!("{}{}", prefix, s))
                .filter(|name| seen.insert(name.to_lowercase()))
                .collect()
        })
        .boxed()
}

/// A valid network: every channel names a non-empty subset of organizations
pub fn network() -> impl Strategy<Value = NetworkSpec> {
    (
        unique_names("Org", "[0-9a-z]{1,4}", 5),
        unique_names("Ch", "[a-z0-9]{0,6}", 6),
        1usize..=3,
    )
        .prop_flat_map(|(orgs, channels, consortium_count)| {
            let org_count = orgs.len();
            let memberships = proptest::collection::vec(
                proptest::collection::vec(any::<bool>(), org_count),
                channels.len(),
            );
            let placement = proptest::collection::vec(0..consortium_count, channels.len());
            (
                Just(orgs),
                Just(channels),
                Just(consortium_count),
                memberships,
                placement,
            )
        })
        .prop_map(|(orgs, channels, consortium_count, memberships, placement)| {
            let mut consortiums: Vec<ConsortiumSpec> = (0..consortium_count)
                .map(|i| ConsortiumSpec::new(format!("Consortium{}", i), Vec::new()))
                .collect();

            for ((channel, members), consortium) in channels.iter().zip(memberships).zip(placement) {
                let mut selected: Vec<String> = orgs
                    .iter()
                    .zip(&members)
                    .filter(|(_, keep)| **keep)
                    .map(|(org, _)| org.clone())
                    .collect();
                if selected.is_empty() {
                    selected.push(orgs[0].clone());
                }
                consortiums[consortium]
                    .channels
                    .push(ChannelSpec::new(channel.clone(), selected));
            }

            let mut spec = NetworkSpec::new("fabric.network", "/tmp/fabgen-prop");
            for org in &orgs {
                spec = spec.with_organization(OrganizationSpec::new(org.clone()));
            }
            for consortium in consortiums {
                spec = spec.with_consortium(consortium);
            }
            spec
        })
}
