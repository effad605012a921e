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
    let scalars: Vec<u32> = data
        .chunks_exact(4)
        .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let (valid, rejected) = utf32_rs::mem::count_utf32(&scalars);
    assert_eq!(valid + rejected, scalars.len());

    let (bytes, errors) = utf32_rs::encode_to_vec(&scalars);
    assert_eq!(errors, rejected);

    // Encoded output decodes back losslessly, with every rejected value
    // showing up as U+FFFD.
    let (back, dec_errors) = utf32_rs::decode_to_vec(&bytes);
    assert_eq!(dec_errors, 0);
    let expected: Vec<u32> = scalars
        .iter()
        .map(|&s| {
            if utf32_rs::encoded_len(s).is_some() {
                s
            } else {
                utf32_rs::REPLACEMENT_CHARACTER
            }
        })
        .collect();
    assert_eq!(back, expected);
});
