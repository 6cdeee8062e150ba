//! UTF-16 encoding and decoding over zero-terminated `u16` buffers.

use crate::{edit, error::EditError};

/// Whether `unit` is a high (leading) surrogate.
#[inline]
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, 0xD800..=0xDBFF)
}

/// Whether `unit` is a low (trailing) surrogate.
#[inline]
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, 0xDC00..=0xDFFF)
}

/// Whether `unit` begins a codepoint, i.e. is not a low surrogate.
#[inline]
#[must_use]
pub const fn is_start(unit: u16) -> bool {
    !is_low_surrogate(unit)
}

/// Decodes the codepoint starting at `at`.
///
/// A non-surrogate unit decodes to itself; a high surrogate followed by a low
/// surrogate decodes to the pair. Any other surrogate arrangement returns
/// `(0, Some(at))`: no progress, and callers must stop on a `0` codepoint. At
/// the terminator (or the end of `buf`) returns `(0, None)`.
#[must_use]
pub fn decode_fast(buf: &[u16], at: usize) -> (u32, Option<usize>) {
    let first = match buf.get(at) {
        None | Some(0) => return (0, None),
        Some(&unit) => unit,
    };

    if !matches!(first, 0xD800..=0xDFFF) {
        return (u32::from(first), Some(at + 1));
    }

    match buf.get(at + 1) {
        Some(&second) if is_high_surrogate(first) && is_low_surrogate(second) => {
            let codepoint =
                ((u32::from(first & 0x3FF) << 10) | u32::from(second & 0x3FF)) + 0x1_0000;
            (codepoint, Some(at + 2))
        }
        _ => (0, Some(at)),
    }
}

/// Number of units needed to encode `codepoint`, or `0` above U+10FFFF.
#[inline]
#[must_use]
pub const fn encode_units(codepoint: u32) -> usize {
    match codepoint {
        0..=0xFFFF => 1,
        0x1_0000..=0x10_FFFF => 2,
        _ => 0,
    }
}

/// Writes `codepoint` to the start of `out` as a single unit or a surrogate
/// pair and returns the number of units written.
///
/// Writes nothing and returns `0` when the codepoint is above U+10FFFF or
/// `out` is too short to hold it.
#[allow(clippy::cast_possible_truncation)]
pub fn encode(out: &mut [u16], codepoint: u32) -> usize {
    match out {
        [unit, ..] if codepoint < 0x1_0000 => {
            *unit = codepoint as u16;
            1
        }
        [high, low, ..] if codepoint < 0x11_0000 => {
            let c = codepoint - 0x1_0000;
            *high = ((c >> 10) & 0x3FF) as u16 | 0xD800;
            *low = (c & 0x3FF) as u16 | 0xDC00;
            2
        }
        _ => 0,
    }
}

/// Appends `codepoint` after the terminated content of `buf` and
/// re-terminates it. Returns the number of units appended, or `0` (with `buf`
/// untouched) if the codepoint is invalid or does not fit.
pub fn encode_append(buf: &mut [u16], codepoint: u32) -> usize {
    edit::encode_append(buf, codepoint)
}

/// Fallible form of [`encode_append`].
///
/// # Errors
///
/// See [`crate::try_encode_append`].
pub fn try_encode_append(buf: &mut [u16], codepoint: u32) -> Result<usize, EditError> {
    edit::try_encode_append(buf, codepoint)
}
