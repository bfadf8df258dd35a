#![no_main]
use dpdp_assess::{ProfileAttributes, classify_sdf};
use libfuzzer_sys::fuzz_target;

/// Fuzz profile deserialization and SDF classification.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(profile) = serde_json::from_str::<ProfileAttributes>(s)
    {
        let sdf = classify_sdf(&profile);
        assert!(sdf.score <= 20);
    }
});
