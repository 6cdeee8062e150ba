//! UTF-8 encoding and decoding over zero-terminated byte buffers.
//!
//! Two decoders are provided:
//!
//! - [`decode_fast`] drives a byte-at-a-time DFA and trusts its input. Malformed
//!   sequences end decoding with `(0, None)`.
//! - [`decode`] loads four bytes at once and reports malformed input through an
//!   [`ErrorMask`] without branching on the data. Bytes past the end of the
//!   slice read as zero, so no padding is required of the caller.

use crate::{
    edit,
    error::{DecodeError, EditError, ErrorMask},
    nav,
    tables::{LENGTHS, MASKS, MINS, SHIFTC, SHIFTE, UTF8_ACCEPT, UTF8_REJECT, UTF8D},
};

/// Whether `byte` begins a codepoint: an ASCII byte or a multibyte lead.
#[inline]
#[must_use]
pub const fn is_start(byte: u8) -> bool {
    byte & 0x80 == 0 || byte & 0xC0 == 0xC0
}

#[inline]
fn decode_byte(state: &mut u32, codepoint: &mut u32, byte: u8) -> u32 {
    let class = u32::from(UTF8D[usize::from(byte)]);

    *codepoint = if *state == UTF8_ACCEPT {
        (0xFF >> class) & u32::from(byte)
    } else {
        u32::from(byte & 0x3F) | (*codepoint << 6)
    };

    *state = u32::from(UTF8D[256 + (*state + class) as usize]);
    *state
}

/// Decodes the codepoint starting at `at`.
///
/// Returns the codepoint and the offset just past it. When the terminator (or
/// the end of `buf`) is reached before a codepoint completes, returns
/// `(0, None)`.
#[must_use]
pub fn decode_fast(buf: &[u8], at: usize) -> (u32, Option<usize>) {
    let mut state = UTF8_ACCEPT;
    let mut codepoint = 0;

    for (i, &byte) in buf.iter().enumerate().skip(at) {
        if byte == 0 {
            break;
        }
        match decode_byte(&mut state, &mut codepoint, byte) {
            UTF8_ACCEPT => return (codepoint, Some(i + 1)),
            // absorbing; nothing later can complete this sequence
            UTF8_REJECT => break,
            _ => {}
        }
    }

    (0, None)
}

/// Branchless decode of the sequence starting at `at`.
///
/// Returns the best-effort codepoint, the offset of the next sequence and the
/// error mask. The offset advances by the length implied by the lead byte, or
/// by one byte if it is not a valid lead, so a decode loop always makes
/// progress. A non-zero mask means the sequence was overlong, encoded a
/// surrogate, exceeded U+10FFFF or had a bad continuation byte.
#[must_use]
pub fn decode(buf: &[u8], at: usize) -> (u32, usize, ErrorMask) {
    let window = buf.get(at..).unwrap_or_default();
    let [b0, b1, b2, b3] = [0, 1, 2, 3].map(|i| window.get(i).copied().unwrap_or(0));

    let len = usize::from(LENGTHS[usize::from(b0 >> 3)]);
    let next = at + len + usize::from(len == 0);

    // Assume four bytes; the shift drops the payload of unused ones.
    let mut codepoint = u32::from(b0 & MASKS[len]) << 18;
    codepoint |= u32::from(b1 & 0x3F) << 12;
    codepoint |= u32::from(b2 & 0x3F) << 6;
    codepoint |= u32::from(b3 & 0x3F);
    codepoint >>= SHIFTC[len];

    let mut err = u32::from(codepoint < MINS[len]) << 6;
    err |= u32::from((codepoint >> 11) == 0x1B) << 7;
    err |= u32::from(codepoint > 0x10_FFFF) << 8;
    err |= u32::from(b1 & 0xC0) >> 2;
    err |= u32::from(b2 & 0xC0) >> 4;
    err |= u32::from(b3) >> 6;
    // Continuation bytes must read 0b10 in their top two bits.
    err ^= 0x2A;
    err >>= SHIFTE[len];

    (codepoint, next, ErrorMask::from_bits(err))
}

/// Like [`decode`], but turns a non-zero error mask into a [`DecodeError`].
///
/// # Errors
///
/// Returns a [`DecodeError`] carrying `at` and the mask when the sequence is
/// malformed.
pub fn decode_checked(buf: &[u8], at: usize) -> Result<(char, usize), DecodeError> {
    let (codepoint, next, mask) = decode(buf, at);
    let error = DecodeError { offset: at, mask };
    if !mask.is_valid() {
        return Err(error);
    }
    // A clean mask already rules out surrogates and out-of-range values.
    let ch = char::from_u32(codepoint).ok_or(error)?;
    Ok((ch, next))
}

/// Checks that the terminated content of `buf` is well-formed UTF-8 and
/// returns its length in codepoints.
///
/// # Errors
///
/// Returns the first malformed sequence.
pub fn validate(buf: &[u8]) -> Result<usize, DecodeError> {
    let end = nav::terminated_len(buf);
    let mut at = 0;
    let mut count = 0;
    while at < end {
        let (_, next) = decode_checked(&buf[..end], at)?;
        at = next;
        count += 1;
    }
    Ok(count)
}

/// Number of bytes needed to encode `codepoint`, or `0` above U+10FFFF.
#[inline]
#[must_use]
pub const fn encode_units(codepoint: u32) -> usize {
    match codepoint {
        0..=0x7F => 1,
        0x80..=0x7FF => 2,
        0x800..=0xFFFF => 3,
        0x1_0000..=0x10_FFFF => 4,
        _ => 0,
    }
}

/// Writes `codepoint` to the start of `out` and returns the number of bytes
/// written.
///
/// Writes nothing and returns `0` when the codepoint is above U+10FFFF or
/// `out` is too short to hold it. Surrogate codepoints are encoded like any
/// other three-byte value.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(out: &mut [u8], codepoint: u32) -> usize {
    let units = encode_units(codepoint);
    let Some(out) = out.get_mut(..units) else {
        return 0;
    };

    match out {
        [a] => *a = codepoint as u8,
        [a, b] => {
            *a = ((codepoint >> 6) & 0x1F) as u8 | 0xC0;
            *b = (codepoint & 0x3F) as u8 | 0x80;
        }
        [a, b, c] => {
            *a = ((codepoint >> 12) & 0x0F) as u8 | 0xE0;
            *b = ((codepoint >> 6) & 0x3F) as u8 | 0x80;
            *c = (codepoint & 0x3F) as u8 | 0x80;
        }
        [a, b, c, d] => {
            *a = ((codepoint >> 18) & 0x07) as u8 | 0xF0;
            *b = ((codepoint >> 12) & 0x3F) as u8 | 0x80;
            *c = ((codepoint >> 6) & 0x3F) as u8 | 0x80;
            *d = (codepoint & 0x3F) as u8 | 0x80;
        }
        _ => return 0,
    }
    units
}

/// Appends `codepoint` after the terminated content of `buf` and
/// re-terminates it. Returns the number of bytes appended, or `0` (with `buf`
/// untouched) if the codepoint is invalid or does not fit.
pub fn encode_append(buf: &mut [u8], codepoint: u32) -> usize {
    edit::encode_append(buf, codepoint)
}

/// Fallible form of [`encode_append`].
///
/// # Errors
///
/// See [`crate::try_encode_append`].
pub fn try_encode_append(buf: &mut [u8], codepoint: u32) -> Result<usize, EditError> {
    edit::try_encode_append(buf, codepoint)
}
