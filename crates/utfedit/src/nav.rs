//! Codepoint-level navigation over zero-terminated buffers.
//!
//! Content ends at the first zero unit, or at the end of the slice when there
//! is none. Offsets are in units of the buffer's element type.

use crate::unit::CodeUnit;

/// Length in units of the terminated content of `buf`.
#[inline]
#[must_use]
pub fn terminated_len<U: CodeUnit>(buf: &[U]) -> usize {
    buf.iter().position(|&u| u == U::ZERO).unwrap_or(buf.len())
}

#[inline]
fn content<U: CodeUnit>(buf: &[U]) -> &[U] {
    &buf[..terminated_len(buf)]
}

/// Number of codepoints in the terminated content of `buf`.
///
/// Only start units are counted, so a multi-unit sequence counts once.
#[must_use]
pub fn char_length<U: CodeUnit>(buf: &[U]) -> usize {
    content(buf).iter().filter(|u| u.is_start()).count()
}

/// Offset of the first unit of the `index`-th codepoint (0-based), or `None`
/// if the content holds `index` codepoints or fewer.
#[must_use]
pub fn at_char<U: CodeUnit>(buf: &[U], index: usize) -> Option<usize> {
    content(buf)
        .iter()
        .enumerate()
        .filter(|(_, u)| u.is_start())
        .nth(index)
        .map(|(at, _)| at)
}

/// Moves `count` codepoints forward from `from`.
///
/// Widths come from each lead unit alone. The walk stops at the terminator
/// that follows `from` and never lands past it, even when the last sequence is
/// truncated.
#[must_use]
pub fn advance_chars<U: CodeUnit>(buf: &[U], from: usize, count: usize) -> usize {
    let Some(tail) = buf.get(from..) else {
        return buf.len();
    };
    let end = terminated_len(tail);

    let mut at = 0;
    for _ in 0..count {
        if at >= end {
            break;
        }
        at = (at + tail[at].sequence_width()).min(end);
    }
    from + at
}

/// Moves `count` codepoints backward from `from`, stopping at the start of
/// `buf`.
#[must_use]
pub fn rewind_chars<U: CodeUnit>(buf: &[U], from: usize, count: usize) -> usize {
    let mut at = from.min(buf.len());
    for _ in 0..count {
        if at == 0 {
            break;
        }
        at -= 1;
        while at > 0 && !buf[at].is_start() {
            at -= 1;
        }
    }
    at
}
