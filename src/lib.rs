// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! utf32_rs converts between UTF-8 and UTF-32 (sequences of Unicode
//! scalar values held in `u32`), validating as it goes and substituting
//! U+FFFD REPLACEMENT CHARACTER for anything malformed. It never rejects
//! a valid sequence and never panics on arbitrary input: malformed bytes
//! on the decode side and surrogate-range or out-of-range values on the
//! encode side are counted and replaced, not fatal.
//!
//! The decoder recognizes exactly the UTF-8 syntax of RFC 3629. Overlong
//! forms, UTF-16 surrogate halves, code points beyond U+10FFFF, stray
//! continuation bytes, and truncated sequences are all rejected. The
//! encoder produces minimal-length sequences only.
//!
//! # Three levels of API
//!
//! * The engines — [`Utf8Decoder`] (and its counting-only twin
//!   [`Utf8Validator`]) consume one byte per [`step`][Utf8Decoder::step]
//!   call; [`encode_scalar`] (and its counting-only twin
//!   [`encoded_len`]) turn one scalar value into one to four bytes.
//!   Engine state is a handful of bytes, owned by the caller; any number
//!   of conversions may run concurrently, each with its own engine.
//! * Bulk conversions over caller-allocated buffers — the [`mem`]
//!   module, with counting, whole-slice, and until-NUL shapes in both
//!   directions.
//! * Streaming — the [`stream`] module pulls input units from any
//!   iterator and pushes output units into a sink, which may stop the
//!   stream at any point.
//!
//! With the `alloc` feature (implied by the default `std` feature),
//! [`decode_to_vec`] and [`encode_to_vec`] cover the common
//! whole-input-to-owned-output case.
//!
//! # Truncation contract
//!
//! The bulk converting functions never fail on a too-small output
//! buffer. They store output units while the unit and a trailing
//! terminator both still fit, always terminate what they stored, and
//! return the total number of units the complete result requires. The
//! caller compares that count against the buffer length: `required <
//! dst.len()` means the whole result, terminator included, is in the
//! buffer; anything else means a larger buffer is needed. See [`mem`]
//! for details.
//!
//! # Examples
//!
//! ```
//! let (scalars, errors) = utf32_rs::decode_to_vec(b"a\xE2\x82\xACz");
//! assert_eq!(scalars, [0x61, 0x20AC, 0x7A]);
//! assert_eq!(errors, 0);
//!
//! // Malformed input is replaced, counted, and never fatal.
//! let (scalars, errors) = utf32_rs::decode_to_vec(b"a\xC0z");
//! assert_eq!(scalars, [0x61, 0xFFFD, 0x7A]);
//! assert_eq!(errors, 1);
//!
//! let (bytes, errors) = utf32_rs::encode_to_vec(&[0x48, 0x20AC, 0xD800]);
//! assert_eq!(bytes, b"H\xE2\x82\xAC\xEF\xBF\xBD");
//! assert_eq!(errors, 1);
//! ```
//!
//! Bulk conversion into a caller-allocated buffer:
//!
//! ```
//! let mut buf = [0u32; 8];
//! let (required, malformed) = utf32_rs::mem::convert_utf8_to_utf32("aä".as_bytes(), &mut buf);
//! assert_eq!(required, 2);
//! assert_eq!(malformed, 0);
//! assert!(required < buf.len()); // everything fit
//! assert_eq!(&buf[..3], &[0x61, 0xE4, 0]);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[macro_use]
extern crate cfg_if;

#[cfg(feature = "alloc")]
extern crate alloc;

mod handles;
mod utf_8_core;

pub mod ffi;
pub mod mem;
pub mod stream;

#[cfg(test)]
mod testing;

pub use crate::stream::{decode_stream, encode_stream, ByteSink, ScalarSink};
pub use crate::utf_8_core::{
    encode_scalar, encoded_len, Encoded, Step, Utf8Decoder, Utf8Validator, Validity,
};

#[cfg(feature = "std")]
pub use crate::stream::WriteSink;

/// The Unicode REPLACEMENT CHARACTER, U+FFFD, as a scalar value.
///
/// Substituted for every rejected input unit, in both directions. Its
/// UTF-8 form is [`Encoded::REPLACEMENT`].
pub const REPLACEMENT_CHARACTER: u32 = 0xFFFD;

cfg_if! {
    if #[cfg(feature = "alloc")] {
        use alloc::vec::Vec;

        /// Decode a whole UTF-8 input into owned scalar values with
        /// U+FFFD substitution.
        ///
        /// Returns the scalar values and the number of malformed
        /// sequences. No terminator is appended; the `Vec` knows its
        /// length.
        pub fn decode_to_vec(bytes: &[u8]) -> (Vec<u32>, usize) {
            let mut dest = Vec::with_capacity(bytes.len());
            let (_, malformed) = stream::decode_stream(bytes.iter().cloned(), &mut |scalar: u32| {
                dest.push(scalar);
                true
            });
            (dest, malformed)
        }

        /// Encode a whole scalar-value input into owned UTF-8 bytes with
        /// U+FFFD substitution.
        ///
        /// Returns the bytes and the number of rejected scalar values.
        /// No terminator is appended; the `Vec` knows its length.
        pub fn encode_to_vec(scalars: &[u32]) -> (Vec<u8>, usize) {
            let mut dest = Vec::with_capacity(scalars.len());
            let (_, rejected) = stream::encode_stream(scalars.iter().cloned(), &mut |bytes: &[u8]| {
                dest.extend_from_slice(bytes);
                true
            });
            (dest, rejected)
        }
    }
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_to_vec() {
        let (scalars, errors) = decode_to_vec("Hällø, wörld!".as_bytes());
        assert_eq!(errors, 0);
        assert_eq!(scalars.len(), 13);
        assert_eq!(scalars[1], 0xE4);

        let (scalars, errors) = decode_to_vec(b"");
        assert_eq!((scalars.len(), errors), (0, 0));
    }

    #[test]
    fn test_decode_to_vec_replaces() {
        let (scalars, errors) = decode_to_vec(b"\xC1\xAF");
        assert_eq!(scalars, [REPLACEMENT_CHARACTER, REPLACEMENT_CHARACTER]);
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_decode_to_vec_dangling_tail() {
        let (scalars, errors) = decode_to_vec(b"a\xE2\x82");
        assert_eq!(scalars, [0x61]);
        assert_eq!(errors, 1);
    }

    #[test]
    fn test_encode_to_vec() {
        let (bytes, errors) = encode_to_vec(&[0x61, 0xE4, 0x20AC, 0x1F4A9]);
        assert_eq!(bytes, "aä€\u{1F4A9}".as_bytes());
        assert_eq!(errors, 0);
    }

    #[test]
    fn test_encode_to_vec_replaces() {
        let (bytes, errors) = encode_to_vec(&[0xDFFF, 0x11_0000]);
        assert_eq!(bytes, b"\xEF\xBF\xBD\xEF\xBF\xBD");
        assert_eq!(errors, 2);
    }

    #[test]
    fn test_round_trip_to_vec() {
        let scalars = [0x0u32, 0x7F, 0x80, 0x7FF, 0x800, 0xD7FF, 0xE000, 0xFFFF, 0x1_0000, 0x10_FFFF];
        let (bytes, enc_errors) = encode_to_vec(&scalars);
        let (back, dec_errors) = decode_to_vec(&bytes);
        assert_eq!(enc_errors, 0);
        assert_eq!(dec_errors, 0);
        assert_eq!(back, scalars);
    }
}
