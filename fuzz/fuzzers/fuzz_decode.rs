// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![no_main]
#[macro_use]
extern crate libfuzzer_sys;
extern crate utf32_rs;

fuzz_target!(|data: &[u8]| {
    let (valid, malformed) = utf32_rs::mem::count_utf8(data);
    let (scalars, errors) = utf32_rs::decode_to_vec(data);
    assert_eq!(errors, malformed);

    // The standard library is the oracle for validity.
    match std::str::from_utf8(data) {
        Ok(s) => {
            assert_eq!(malformed, 0);
            assert_eq!(valid, s.chars().count());
            let expected: Vec<u32> = s.chars().map(|c| c as u32).collect();
            assert_eq!(scalars, expected);
        }
        Err(_) => {
            assert!(malformed > 0);
        }
    }

    // Lossy output is always valid to re-encode and re-encodes to
    // well-formed UTF-8.
    let (bytes, enc_errors) = utf32_rs::encode_to_vec(&scalars);
    assert_eq!(enc_errors, 0);
    assert!(std::str::from_utf8(&bytes).is_ok());
});
