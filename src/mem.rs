// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Functions for converting between UTF-8 and UTF-32 in caller-allocated
//! memory.
//!
//! Every function comes in two input shapes: the plain form scans the
//! whole input slice, the `_until_nul` form scans only the prefix before
//! the first null unit (null byte for UTF-8 input, null scalar for
//! UTF-32 input) and ignores the rest. A null unit cannot occur inside a
//! multi-byte sequence, so the two shapes agree on any input without
//! embedded nulls.
//!
//! The converting functions substitute U+FFFD (or its UTF-8 encoding)
//! for every rejected input unit, write output only while the unit and a
//! trailing terminator both still fit `dst`, and return the total number
//! of output units the complete result requires. The complete result,
//! terminator included, fit exactly when the returned count is strictly
//! less than `dst.len()`; a returned count greater than or equal to
//! `dst.len()` means the output was truncated and a larger buffer is
//! needed. This is not an error condition.
//!
//! A sequence left dangling by the end of input counts as one malformed
//! sequence and produces no replacement unit.

use crate::handles::{ByteDestination, ByteSource, ScalarSource, Utf32Destination};
use crate::utf_8_core::{
    encode_scalar, encoded_len, Encoded, Step, Utf8Decoder, Utf8Validator, Validity,
};
use crate::REPLACEMENT_CHARACTER;

/// The input prefix before the first null byte.
#[inline(always)]
fn before_nul(src: &[u8]) -> &[u8] {
    match src.iter().position(|&b| b == 0) {
        Some(i) => &src[..i],
        None => src,
    }
}

/// The input prefix before the first null scalar.
#[inline(always)]
fn before_nul_scalar(src: &[u32]) -> &[u32] {
    match src.iter().position(|&s| s == 0) {
        Some(i) => &src[..i],
        None => src,
    }
}

/// Count the UTF-8 sequences in `src` without writing anything.
///
/// Returns `(valid, malformed)`: the number of well-formed sequences and
/// the number of malformed ones. `valid + malformed` is the number of
/// scalar values a converting call over the same input would produce,
/// except that a dangling tail at the end of input counts here but
/// produces no unit there.
pub fn count_utf8(src: &[u8]) -> (usize, usize) {
    let mut validator = Utf8Validator::new();
    let mut valid = 0;
    let mut malformed = 0;
    for &byte in src {
        match validator.step(byte) {
            Validity::Boundary => valid += 1,
            Validity::Malformed => malformed += 1,
            Validity::Pending => {}
        }
    }
    if !validator.at_boundary() {
        malformed += 1;
    }
    (valid, malformed)
}

/// Like [`count_utf8`], but scans only the prefix before the first null
/// byte.
pub fn count_utf8_until_nul(src: &[u8]) -> (usize, usize) {
    count_utf8(before_nul(src))
}

/// Count the scalar values in `src` that have a UTF-8 encoding, without
/// writing anything.
///
/// Returns `(valid, rejected)`: rejected values are surrogate halves and
/// values beyond U+10FFFF.
pub fn count_utf32(src: &[u32]) -> (usize, usize) {
    let mut valid = 0;
    let mut rejected = 0;
    for &scalar in src {
        if encoded_len(scalar).is_some() {
            valid += 1;
        } else {
            rejected += 1;
        }
    }
    (valid, rejected)
}

/// Like [`count_utf32`], but scans only the prefix before the first null
/// scalar.
pub fn count_utf32_until_nul(src: &[u32]) -> (usize, usize) {
    count_utf32(before_nul_scalar(src))
}

/// Decode UTF-8 from `src` into scalar values in `dst`, substituting
/// U+FFFD for each malformed sequence.
///
/// Returns `(required, malformed)`: the number of scalar values the
/// complete result requires (see the module documentation for the
/// truncation contract) and the number of malformed sequences.
pub fn convert_utf8_to_utf32(src: &[u8], dst: &mut [u32]) -> (usize, usize) {
    let mut source = ByteSource::new(src);
    let mut dest = Utf32Destination::new(dst);
    let mut decoder = Utf8Decoder::new();
    let mut malformed = 0;
    while let Some(byte) = source.read() {
        match decoder.step(byte) {
            Step::Complete(scalar) => dest.write_scalar(scalar),
            Step::Malformed => {
                malformed += 1;
                dest.write_scalar(REPLACEMENT_CHARACTER);
            }
            Step::Pending => {}
        }
    }
    if !decoder.at_boundary() {
        malformed += 1;
    }
    (dest.finish(), malformed)
}

/// Like [`convert_utf8_to_utf32`], but decodes only the prefix before
/// the first null byte.
pub fn convert_utf8_to_utf32_until_nul(src: &[u8], dst: &mut [u32]) -> (usize, usize) {
    convert_utf8_to_utf32(before_nul(src), dst)
}

/// Encode scalar values from `src` as UTF-8 in `dst`, substituting the
/// encoding of U+FFFD for each rejected value.
///
/// Returns `(required, rejected)`: the number of bytes the complete
/// result requires (see the module documentation for the truncation
/// contract) and the number of rejected scalar values.
pub fn convert_utf32_to_utf8(src: &[u32], dst: &mut [u8]) -> (usize, usize) {
    let mut source = ScalarSource::new(src);
    let mut dest = ByteDestination::new(dst);
    let mut rejected = 0;
    while let Some(scalar) = source.read() {
        let encoded = match encode_scalar(scalar) {
            Some(encoded) => encoded,
            None => {
                rejected += 1;
                Encoded::REPLACEMENT
            }
        };
        dest.write_sequence(encoded.as_bytes());
    }
    (dest.finish(), rejected)
}

/// Like [`convert_utf32_to_utf8`], but encodes only the prefix before
/// the first null scalar.
pub fn convert_utf32_to_utf8_until_nul(src: &[u32], dst: &mut [u8]) -> (usize, usize) {
    convert_utf32_to_utf8(before_nul_scalar(src), dst)
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/
