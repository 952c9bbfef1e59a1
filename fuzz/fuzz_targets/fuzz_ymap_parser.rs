#![no_main]

use libfuzzer_sys::fuzz_target;
use ymap_exporter::parse_ymap;

fuzz_target!(|data: &[u8]| {
    if let Ok(xml) = std::str::from_utf8(data) {
        let _ = parse_ymap(xml);
    }
});
