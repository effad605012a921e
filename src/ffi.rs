// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The C API: raw-pointer wrappers around the counting and bounded
//! conversion entry points.
//!
//! Each function takes (pointer, length) pairs for its slices and an
//! optional `errors` out-pointer; passing null for `errors` discards the
//! error count, as in the Rust API's second tuple slot. Return values
//! and truncation semantics are exactly those of the wrapped Rust
//! functions. Input pointers may be null only when the corresponding
//! length is zero.

use core::slice;

use crate::mem;

#[inline(always)]
unsafe fn byte_slice<'a>(ptr: *const u8, len: usize) -> &'a [u8] {
    if len == 0 {
        &[]
    } else {
        debug_assert!(!ptr.is_null());
        slice::from_raw_parts(ptr, len)
    }
}

#[inline(always)]
unsafe fn scalar_slice<'a>(ptr: *const u32, len: usize) -> &'a [u32] {
    if len == 0 {
        &[]
    } else {
        debug_assert!(!ptr.is_null());
        slice::from_raw_parts(ptr, len)
    }
}

#[inline(always)]
unsafe fn store_errors(errors: *mut usize, count: usize) {
    if !errors.is_null() {
        *errors = count;
    }
}

/// Count the UTF-8 sequences in `src[..src_len]`; the number of
/// malformed sequences is stored through `errors` when non-null.
///
/// # Safety
///
/// `src` must point to `src_len` readable bytes (or be null with
/// `src_len == 0`); `errors` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn utf32_count_utf8(
    src: *const u8,
    src_len: usize,
    errors: *mut usize,
) -> usize {
    let (valid, malformed) = mem::count_utf8(byte_slice(src, src_len));
    store_errors(errors, malformed);
    valid
}

/// Decode `src[..src_len]` into `dst[..dst_len]` with U+FFFD
/// substitution; returns the number of scalar values the complete result
/// requires.
///
/// # Safety
///
/// `src` must point to `src_len` readable bytes and `dst` to `dst_len`
/// writable `uint32_t` (either may be null when its length is zero);
/// `errors` must be null or writable. The buffers must not overlap.
#[no_mangle]
pub unsafe extern "C" fn utf32_convert_utf8_to_utf32(
    src: *const u8,
    src_len: usize,
    dst: *mut u32,
    dst_len: usize,
    errors: *mut usize,
) -> usize {
    let dst_slice = if dst_len == 0 {
        &mut []
    } else {
        debug_assert!(!dst.is_null());
        slice::from_raw_parts_mut(dst, dst_len)
    };
    let (required, malformed) = mem::convert_utf8_to_utf32(byte_slice(src, src_len), dst_slice);
    store_errors(errors, malformed);
    required
}

/// Count the encodable scalar values in `src[..src_len]`; the number of
/// rejected values is stored through `errors` when non-null.
///
/// # Safety
///
/// `src` must point to `src_len` readable `uint32_t` (or be null with
/// `src_len == 0`); `errors` must be null or writable.
#[no_mangle]
pub unsafe extern "C" fn utf32_count_utf32(
    src: *const u32,
    src_len: usize,
    errors: *mut usize,
) -> usize {
    let (valid, rejected) = mem::count_utf32(scalar_slice(src, src_len));
    store_errors(errors, rejected);
    valid
}

/// Encode `src[..src_len]` into `dst[..dst_len]` with U+FFFD
/// substitution; returns the number of bytes the complete result
/// requires.
///
/// # Safety
///
/// `src` must point to `src_len` readable `uint32_t` and `dst` to
/// `dst_len` writable bytes (either may be null when its length is
/// zero); `errors` must be null or writable. The buffers must not
/// overlap.
#[no_mangle]
pub unsafe extern "C" fn utf32_convert_utf32_to_utf8(
    src: *const u32,
    src_len: usize,
    dst: *mut u8,
    dst_len: usize,
    errors: *mut usize,
) -> usize {
    let dst_slice = if dst_len == 0 {
        &mut []
    } else {
        debug_assert!(!dst.is_null());
        slice::from_raw_parts_mut(dst, dst_len)
    };
    let (required, rejected) = mem::convert_utf32_to_utf8(scalar_slice(src, src_len), dst_slice);
    store_errors(errors, rejected);
    required
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/
