//! In-place, codepoint-granular editing of fixed-capacity buffers.
//!
//! The slice length is the capacity. Edits shift the units that follow the
//! edit point and never grow the buffer; when an edit does not fit it is
//! refused and the buffer is left exactly as it was.

use crate::{
    error::EditError,
    nav::{advance_chars, terminated_len},
    unit::CodeUnit,
};

/// Inserts `codepoint` at unit offset `at`, shifting the rest of the content
/// (terminator included) to the right. Returns the number of units inserted.
///
/// # Errors
///
/// - [`EditError::InvalidCodepoint`] if the codepoint cannot be encoded.
/// - [`EditError::OutOfBounds`] if `at` lies past the terminator.
/// - [`EditError::InsufficientCapacity`] if the grown content and its
///   terminator would not fit in `buf`.
pub fn try_insert_char<U: CodeUnit>(
    buf: &mut [U],
    at: usize,
    codepoint: u32,
) -> Result<usize, EditError> {
    let units = U::encode_units(codepoint);
    if units == 0 {
        return Err(EditError::InvalidCodepoint(codepoint));
    }

    let end = terminated_len(buf);
    if at > end {
        return Err(EditError::OutOfBounds {
            offset: at,
            len: end,
        });
    }

    let needed = end + units + 1;
    if needed > buf.len() {
        return Err(EditError::InsufficientCapacity {
            needed,
            available: buf.len(),
        });
    }

    buf.copy_within(at..=end, at + units);
    U::encode(&mut buf[at..], codepoint);
    Ok(units)
}

/// Inserts `codepoint` at unit offset `at`. Returns `false`, leaving `buf`
/// untouched, if the codepoint is invalid, `at` is past the terminator or
/// there is not enough capacity.
pub fn insert_char<U: CodeUnit>(buf: &mut [U], at: usize, codepoint: u32) -> bool {
    try_insert_char(buf, at, codepoint).is_ok()
}

/// Removes up to `count` codepoints starting at unit offset `at` and returns
/// the number of units removed.
///
/// Removing more codepoints than remain truncates the content at `at`. The
/// units vacated at the tail are zeroed, so the buffer stays terminated even
/// if it had no terminator before.
///
/// # Errors
///
/// - [`EditError::OutOfBounds`] if `at` lies past the terminator.
/// - [`EditError::NothingToRemove`] if `at` is the terminator or `count` is 0.
pub fn try_remove_chars<U: CodeUnit>(
    buf: &mut [U],
    at: usize,
    count: usize,
) -> Result<usize, EditError> {
    let end = terminated_len(buf);
    if at > end {
        return Err(EditError::OutOfBounds {
            offset: at,
            len: end,
        });
    }

    let width = advance_chars(&buf[..end], at, count) - at;
    if width == 0 {
        return Err(EditError::NothingToRemove);
    }

    buf.copy_within(at + width..end, at);
    buf[end - width..end].fill(U::ZERO);
    Ok(width)
}

/// Removes up to `count` codepoints starting at unit offset `at`. Returns
/// whether anything was removed.
pub fn remove_chars<U: CodeUnit>(buf: &mut [U], at: usize, count: usize) -> bool {
    try_remove_chars(buf, at, count).is_ok()
}

/// Appends `codepoint` after the terminated content and re-terminates.
///
/// The append is accepted only while `len + units + 1 < buf.len()`, one unit
/// stricter than the bare fit.
///
/// # Errors
///
/// - [`EditError::InvalidCodepoint`] if the codepoint cannot be encoded.
/// - [`EditError::InsufficientCapacity`] if the check above fails.
pub fn try_encode_append<U: CodeUnit>(buf: &mut [U], codepoint: u32) -> Result<usize, EditError> {
    let units = U::encode_units(codepoint);
    if units == 0 {
        return Err(EditError::InvalidCodepoint(codepoint));
    }

    let len = terminated_len(buf);
    if len + units + 1 >= buf.len() {
        return Err(EditError::InsufficientCapacity {
            needed: len + units + 2,
            available: buf.len(),
        });
    }

    let written = U::encode(&mut buf[len..], codepoint);
    buf[len + written] = U::ZERO;
    Ok(written)
}

/// Appends `codepoint` after the terminated content. Returns the number of
/// units appended, or `0` if nothing was written.
pub fn encode_append<U: CodeUnit>(buf: &mut [U], codepoint: u32) -> usize {
    try_encode_append(buf, codepoint).unwrap_or(0)
}
