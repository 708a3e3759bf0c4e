#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate deckhand;

use std::str;

use deckhand::core::Hand;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            let printed: Vec<String> = h.iter().map(ToString::to_string).collect();
            let reparsed = Hand::new_from_str(&printed.join(" ")).unwrap();
            assert_eq!(h, reparsed);
        }
    }
});
