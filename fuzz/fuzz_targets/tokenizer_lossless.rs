#![no_main]

use html::Tokenizer;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut rebuilt = Vec::with_capacity(data.len());
    for token in Tokenizer::new(data) {
        let token = token.expect("unlimited tokenizer never fails");
        assert!(!token.raw().is_empty(), "empty token");
        rebuilt.extend_from_slice(token.raw());
        if let Some(tag) = token.tag() {
            for attr in tag.attrs() {
                let _ = attr.value();
            }
        }
    }
    assert_eq!(rebuilt, data, "token stream is not lossless");
});
