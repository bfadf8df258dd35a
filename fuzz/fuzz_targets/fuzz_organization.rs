#![no_main]
use dpdp_assess::Organization;
use libfuzzer_sys::fuzz_target;

/// Fuzz registration deserialization and field validation.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data)
        && let Ok(org) = serde_json::from_str::<Organization>(s)
    {
        let _ = org.validate();
    }
});
