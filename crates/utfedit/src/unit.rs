//! Dispatch over the width of an encoded unit.
//!
//! Every navigation and editing operation exists once, generic over
//! [`CodeUnit`]; the encoding is picked by the element type of the buffer
//! (`u8` for UTF-8, `u16` for UTF-16).

use crate::{utf8, utf16};

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// A single encoded unit: `u8` for UTF-8 or `u16` for UTF-16.
///
/// This trait is sealed; the two implementations forward to [`utf8`] and
/// [`utf16`].
pub trait CodeUnit: Copy + Eq + Default + core::fmt::Debug + sealed::Sealed + 'static {
    /// The terminator unit.
    const ZERO: Self;

    /// Longest encoded sequence, in units.
    const MAX_UNITS: usize;

    /// Whether this unit begins a codepoint (or is a stray unit that cannot be
    /// part of one).
    fn is_start(self) -> bool;

    /// Width in units of the sequence introduced by this lead unit. Units
    /// that cannot lead a sequence report `1` so callers always make progress.
    fn sequence_width(self) -> usize;

    /// Units needed to encode `codepoint`, or `0` if it cannot be encoded.
    fn encode_units(codepoint: u32) -> usize;

    /// Encodes `codepoint` at the start of `out`, returning the units written.
    fn encode(out: &mut [Self], codepoint: u32) -> usize;

    /// Decodes the codepoint starting at `at`. See [`utf8::decode_fast`] and
    /// [`utf16::decode_fast`].
    fn decode_fast(buf: &[Self], at: usize) -> (u32, Option<usize>);
}

impl CodeUnit for u8 {
    const ZERO: Self = 0;
    const MAX_UNITS: usize = 4;

    #[inline]
    fn is_start(self) -> bool {
        utf8::is_start(self)
    }

    #[inline]
    fn sequence_width(self) -> usize {
        match self {
            b if b & 0b1000_0000 == 0 => 1,
            b if b & 0b1110_0000 == 0b1100_0000 => 2,
            b if b & 0b1111_0000 == 0b1110_0000 => 3,
            b if b & 0b1111_1000 == 0b1111_0000 => 4,
            _ => 1,
        }
    }

    #[inline]
    fn encode_units(codepoint: u32) -> usize {
        utf8::encode_units(codepoint)
    }

    #[inline]
    fn encode(out: &mut [Self], codepoint: u32) -> usize {
        utf8::encode(out, codepoint)
    }

    #[inline]
    fn decode_fast(buf: &[Self], at: usize) -> (u32, Option<usize>) {
        utf8::decode_fast(buf, at)
    }
}

impl CodeUnit for u16 {
    const ZERO: Self = 0;
    const MAX_UNITS: usize = 2;

    #[inline]
    fn is_start(self) -> bool {
        utf16::is_start(self)
    }

    #[inline]
    fn sequence_width(self) -> usize {
        if utf16::is_high_surrogate(self) { 2 } else { 1 }
    }

    #[inline]
    fn encode_units(codepoint: u32) -> usize {
        utf16::encode_units(codepoint)
    }

    #[inline]
    fn encode(out: &mut [Self], codepoint: u32) -> usize {
        utf16::encode(out, codepoint)
    }

    #[inline]
    fn decode_fast(buf: &[Self], at: usize) -> (u32, Option<usize>) {
        utf16::decode_fast(buf, at)
    }
}
