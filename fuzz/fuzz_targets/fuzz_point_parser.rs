#![no_main]

use libfuzzer_sys::fuzz_target;
use lpnp_map_core::partition::{parse_point, parse_target_prk_id};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = parse_point(text);
        let _ = parse_target_prk_id(text);
    }
});
