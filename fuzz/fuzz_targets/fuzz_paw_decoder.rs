#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must decode or fail with an error, never panic
    if let Ok(dataset) = pawxml::PawDataset::from_xml_bytes(data) {
        // Rendering a decoded record must not panic either
        let _ = pawxml::dump::dump_to_string(&dataset, &pawxml::dump::DumpOptions::default());
    }

    // Same input treated as a gzip stream
    let _ = pawxml::PawDataset::from_gzip_reader(Cursor::new(data));
});
