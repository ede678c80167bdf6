#![no_main]

use libfuzzer_sys::fuzz_target;
use lpnp_map_core::floor_map::parse_floor_map;

fuzz_target!(|data: &[u8]| {
    if let Ok(json) = std::str::from_utf8(data) {
        if let Ok(map) = parse_floor_map(json) {
            for floor in map.floors() {
                for road in &floor.roads {
                    assert_eq!(road.center.len() % 3, 0);
                    assert!(road.center.len() >= 6);
                }
            }
        }
    }
});
