#![no_main]

use libfuzzer_sys::fuzz_target;

use fabgen::infrastructure::templates::{configtx_renderer, crypto_config_renderer};
use fabgen::infrastructure::ScriptMaterializer;
use fabgen::{ChannelSpec, ConsortiumSpec, NetworkSpec, OrganizationSpec};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let mut parts = content.splitn(3, '\n');
    let org = parts.next().unwrap_or_default();
    let channel = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    let spec = NetworkSpec::new(domain, "/tmp/fabgen-fuzz")
        .with_organization(OrganizationSpec::new(org))
        .with_consortium(ConsortiumSpec::new(
            "Fuzz",
            vec![ChannelSpec::new(channel, [org])],
        ));

    // Arbitrary names may produce invalid YAML, but rendering must not panic
    let _ = crypto_config_renderer().map(|r| r.render_to_string(&spec));
    let _ = configtx_renderer().map(|r| r.render_to_string(&spec));
    let _ = ScriptMaterializer::new().map(|s| s.preview(&spec));
});
