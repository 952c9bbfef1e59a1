#![no_main]

use libfuzzer_sys::fuzz_target;
use ymap_exporter::{convert, detect_source_document, write_ymap, ConverterOptions, ModelNameTable};

fuzz_target!(|data: &[u8]| {
    let Ok(xml) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(document) = detect_source_document(xml) {
        let (ymap, _) = convert(&document, &ModelNameTable::new(), &ConverterOptions::default());
        let _ = write_ymap(&ymap);
    }
});
