// Copyright 2016 Mozilla Foundation. See the COPYRIGHT
// file at the top-level directory of this distribution.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Streaming conversion: a pull source feeding one input unit at a time
//! into a push sink, with no buffering beyond the decoder's accumulator.
//!
//! The source side is any `IntoIterator` (end of input is the iterator
//! running out); the sink side is a [`ScalarSink`] or [`ByteSink`],
//! implemented for any `FnMut` callback and (with the `std` feature)
//! for writers. A sink returning `false` stops the stream
//! immediately: the stream function returns the counts accumulated so
//! far, including the unit the sink declined to take. Source and sink
//! run strictly in sequence on the calling thread and are never
//! reentered; if either blocks, that is the caller's concern.

use crate::utf_8_core::{encode_scalar, Encoded, Step, Utf8Decoder};
use crate::REPLACEMENT_CHARACTER;

/// Receiver of decoded scalar values.
pub trait ScalarSink {
    /// Take one scalar value. Return `false` to stop the stream.
    fn accept(&mut self, scalar: u32) -> bool;
}

impl<F> ScalarSink for F
where
    F: FnMut(u32) -> bool,
{
    #[inline]
    fn accept(&mut self, scalar: u32) -> bool {
        self(scalar)
    }
}

/// Receiver of encoded byte sequences, one scalar value's worth per
/// call.
pub trait ByteSink {
    /// Take the one-to-four-byte encoding of one scalar value. Return
    /// `false` to stop the stream.
    fn accept(&mut self, bytes: &[u8]) -> bool;
}

impl<F> ByteSink for F
where
    F: FnMut(&[u8]) -> bool,
{
    #[inline]
    fn accept(&mut self, bytes: &[u8]) -> bool {
        self(bytes)
    }
}

cfg_if! {
    if #[cfg(feature = "std")] {
        use std::io;

        /// A [`ByteSink`] over any [`std::io::Write`], stopping the
        /// stream on the first write error.
        pub struct WriteSink<W: io::Write> {
            writer: W,
            error: Option<io::Error>,
        }

        impl<W: io::Write> WriteSink<W> {
            pub fn new(writer: W) -> WriteSink<W> {
                WriteSink {
                    writer,
                    error: None,
                }
            }

            /// The error that stopped the stream, if any.
            pub fn error(&self) -> Option<&io::Error> {
                self.error.as_ref()
            }

            pub fn into_inner(self) -> W {
                self.writer
            }
        }

        impl<W: io::Write> ByteSink for WriteSink<W> {
            fn accept(&mut self, bytes: &[u8]) -> bool {
                match self.writer.write_all(bytes) {
                    Ok(()) => true,
                    Err(e) => {
                        self.error = Some(e);
                        false
                    }
                }
            }
        }
    }
}

/// Decode a stream of UTF-8 bytes into a scalar sink, substituting
/// U+FFFD for each malformed sequence.
///
/// Returns `(valid, malformed)` counts accumulated up to the end of
/// input or the sink's stop, whichever comes first. A sequence left
/// dangling by the end of input counts as one malformed sequence; the
/// sink sees nothing for it.
pub fn decode_stream<I, S>(source: I, sink: &mut S) -> (usize, usize)
where
    I: IntoIterator<Item = u8>,
    S: ScalarSink + ?Sized,
{
    let mut decoder = Utf8Decoder::new();
    let mut valid = 0;
    let mut malformed = 0;
    for byte in source {
        match decoder.step(byte) {
            Step::Complete(scalar) => {
                valid += 1;
                if !sink.accept(scalar) {
                    return (valid, malformed);
                }
            }
            Step::Malformed => {
                malformed += 1;
                if !sink.accept(REPLACEMENT_CHARACTER) {
                    return (valid, malformed);
                }
            }
            Step::Pending => {}
        }
    }
    if !decoder.at_boundary() {
        malformed += 1;
    }
    (valid, malformed)
}

/// Encode a stream of scalar values into a byte sink, substituting the
/// encoding of U+FFFD for each rejected value.
///
/// Returns `(valid, rejected)` counts accumulated up to the end of input
/// or the sink's stop, whichever comes first.
pub fn encode_stream<I, S>(source: I, sink: &mut S) -> (usize, usize)
where
    I: IntoIterator<Item = u32>,
    S: ByteSink + ?Sized,
{
    let mut valid = 0;
    let mut rejected = 0;
    for scalar in source {
        let encoded = match encode_scalar(scalar) {
            Some(encoded) => {
                valid += 1;
                encoded
            }
            None => {
                rejected += 1;
                Encoded::REPLACEMENT
            }
        };
        if !sink.accept(encoded.as_bytes()) {
            break;
        }
    }
    (valid, rejected)
}

// Any copyright to the test code below this comment is dedicated to the
// Public Domain. https://creativecommons.org/publicdomain/zero/1.0/

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_decode(bytes: &[u8]) -> (Vec<u32>, (usize, usize)) {
        let mut out = Vec::new();
        let counts = decode_stream(bytes.iter().cloned(), &mut |scalar: u32| {
            out.push(scalar);
            true
        });
        (out, counts)
    }

    #[test]
    fn test_decode_stream_collects() {
        let (out, counts) = collect_decode("aä€\u{1F4A9}".as_bytes());
        assert_eq!(counts, (4, 0));
        assert_eq!(out, vec![0x61, 0xE4, 0x20AC, 0x1F4A9]);
    }

    #[test]
    fn test_decode_stream_replaces_malformed() {
        let (out, counts) = collect_decode(b"a\xC0Z");
        assert_eq!(counts, (2, 1));
        assert_eq!(out, vec![0x61, 0xFFFD, 0x5A]);
    }

    #[test]
    fn test_decode_stream_counts_dangling_tail() {
        let (out, counts) = collect_decode(b"a\xE2\x82");
        assert_eq!(counts, (1, 1));
        assert_eq!(out, vec![0x61]);
    }

    #[test]
    fn test_decode_stream_early_stop() {
        // The sink declines the third output; the counts include it and
        // nothing past it is processed.
        let mut taken = Vec::new();
        let mut remaining = 3;
        let counts = decode_stream(b"abcdef".iter().cloned(), &mut |scalar: u32| {
            taken.push(scalar);
            remaining -= 1;
            remaining > 0
        });
        assert_eq!(counts, (3, 0));
        assert_eq!(taken, vec![0x61, 0x62, 0x63]);
    }

    #[test]
    fn test_decode_stream_stop_on_replacement() {
        let counts = decode_stream(b"\xFFabc".iter().cloned(), &mut |_: u32| false);
        assert_eq!(counts, (0, 1));
    }

    fn collect_encode(scalars: &[u32]) -> (Vec<u8>, (usize, usize)) {
        let mut out = Vec::new();
        let counts = encode_stream(scalars.iter().cloned(), &mut |bytes: &[u8]| {
            out.extend_from_slice(bytes);
            true
        });
        (out, counts)
    }

    #[test]
    fn test_encode_stream_collects() {
        let (out, counts) = collect_encode(&[0x61, 0x20AC, 0x1F4A9]);
        assert_eq!(counts, (3, 0));
        assert_eq!(out, "a€\u{1F4A9}".as_bytes());
    }

    #[test]
    fn test_encode_stream_replaces_rejected() {
        let (out, counts) = collect_encode(&[0xD800, 0x62]);
        assert_eq!(counts, (1, 1));
        assert_eq!(out, b"\xEF\xBF\xBDb");
    }

    #[test]
    fn test_encode_stream_early_stop() {
        let mut calls = 0;
        let counts = encode_stream([0x61u32, 0x62, 0x63].iter().cloned(), &mut |_: &[u8]| {
            calls += 1;
            false
        });
        assert_eq!(calls, 1);
        assert_eq!(counts, (1, 0));
    }

    #[test]
    fn test_write_sink() {
        let mut sink = WriteSink::new(Vec::new());
        let counts = encode_stream([0x61u32, 0xE4].iter().cloned(), &mut sink);
        assert_eq!(counts, (2, 0));
        assert!(sink.error().is_none());
        assert_eq!(sink.into_inner(), b"a\xC3\xA4");
    }

    #[test]
    fn test_write_sink_stops_on_error() {
        // A writer that refuses every write.
        struct Full;
        impl std::io::Write for Full {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::WriteZero, "full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }
        let mut sink = WriteSink::new(Full);
        let counts = encode_stream([0x61u32, 0x62].iter().cloned(), &mut sink);
        assert_eq!(counts, (1, 0));
        assert!(sink.error().is_some());
    }
}
