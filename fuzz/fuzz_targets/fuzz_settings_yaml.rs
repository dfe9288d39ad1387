#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Settings parsing and validation must never panic
        if let Ok(settings) = serde_yaml_ng::from_str::<fabgen::Settings>(content) {
            let _ = settings.validated_network_spec();
        }
    }
});
