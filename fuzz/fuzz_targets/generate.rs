#![no_main]

use cellgen::JavaCodegen;
use cellgen::document;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Decode arbitrary bytes; only well-formed documents reach the generator
    if let Ok(program) = document::from_slice(data) {
        let _ = JavaCodegen::new().try_generate(&program);
    }
});
