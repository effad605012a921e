// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Assertion helpers shared by the unit tests.

use crate::mem::{convert_utf32_to_utf8, convert_utf8_to_utf32};

/// Decode `bytes` into an exactly-sized buffer (expected output plus
/// terminator) and check counts, contents, and the terminator.
pub fn check_decode(bytes: &[u8], expect: &[u32], expect_errors: usize) {
    let mut dest = vec![0x5555_5555u32; expect.len() + 1];
    let (required, errors) = convert_utf8_to_utf32(bytes, &mut dest);
    assert_eq!(required, expect.len(), "required count for {:?}", bytes);
    assert_eq!(errors, expect_errors, "error count for {:?}", bytes);
    assert_eq!(&dest[..expect.len()], expect, "output for {:?}", bytes);
    assert_eq!(dest[expect.len()], 0, "terminator for {:?}", bytes);
}

/// Encode `scalars` into an exactly-sized buffer (expected output plus
/// terminator) and check counts, contents, and the terminator.
pub fn check_encode(scalars: &[u32], expect: &[u8], expect_errors: usize) {
    let mut dest = vec![0x55u8; expect.len() + 1];
    let (required, errors) = convert_utf32_to_utf8(scalars, &mut dest);
    assert_eq!(required, expect.len(), "required count for {:?}", scalars);
    assert_eq!(errors, expect_errors, "error count for {:?}", scalars);
    assert_eq!(&dest[..expect.len()], expect, "output for {:?}", scalars);
    assert_eq!(dest[expect.len()], 0, "terminator for {:?}", scalars);
}
