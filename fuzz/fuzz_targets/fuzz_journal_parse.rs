#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Journal documents are YAML text; skip inputs that are not UTF-8
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = valet::journal::Journal::from_yaml_str(text);
    }
});
