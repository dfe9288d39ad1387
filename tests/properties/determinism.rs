//! Property tests for rendering determinism.

use proptest::prelude::*;

use fabgen::infrastructure::templates::{configtx_renderer, crypto_config_renderer};
use fabgen::infrastructure::ScriptMaterializer;

use super::strategies::network;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering an unchanged network twice yields identical bytes.
    #[test]
    fn property_rendering_is_deterministic(spec in network()) {
        let crypto = crypto_config_renderer().unwrap();
        let configtx = configtx_renderer().unwrap();
        let script = ScriptMaterializer::new().unwrap();

        prop_assert_eq!(
            crypto.render_to_string(&spec).unwrap(),
            crypto.render_to_string(&spec).unwrap()
        );
        prop_assert_eq!(
            configtx.render_to_string(&spec).unwrap(),
            configtx.render_to_string(&spec).unwrap()
        );
        prop_assert_eq!(script.preview(&spec).unwrap(), script.preview(&spec).unwrap());
    }

    /// PROPERTY: a fresh renderer produces the same bytes as a reused one.
    #[test]
    fn property_renderers_are_stateless(spec in network()) {
        let reused = configtx_renderer().unwrap();
        let _ = reused.render_to_string(&spec).unwrap();

        prop_assert_eq!(
            reused.render_to_string(&spec).unwrap(),
            configtx_renderer().unwrap().render_to_string(&spec).unwrap()
        );
    }

    /// PROPERTY: both descriptors are valid YAML for any valid network.
    #[test]
    fn property_descriptors_parse_as_yaml(spec in network()) {
        let crypto = crypto_config_renderer().unwrap().render_to_string(&spec).unwrap();
        let configtx = configtx_renderer().unwrap().render_to_string(&spec).unwrap();

        prop_assert!(serde_yaml_ng::from_str::<serde_yaml_ng::Value>(&crypto).is_ok());
        prop_assert!(serde_yaml_ng::from_str::<serde_yaml_ng::Value>(&configtx).is_ok());
    }
}
