//! Codepoint-indexed editing session over a borrowed buffer.

use core::fmt;

use bstr::BStr;

use crate::{
    chars::{Codepoints, codepoints},
    edit::{try_insert_char, try_remove_chars},
    error::EditError,
    nav::{at_char, char_length, terminated_len},
    unit::CodeUnit,
};

/// Exclusive editing handle over a fixed-capacity, zero-terminated buffer.
///
/// Holding the `&mut` borrow for the whole session is what serializes access
/// to the buffer; the editor itself keeps no state besides it. Positions are
/// codepoint indices rather than unit offsets.
///
/// ```rust
/// use utfedit::Editor;
///
/// let mut buf = [0u8; 16];
/// let mut editor = Editor::new(&mut buf);
/// editor.push('h' as u32).unwrap();
/// editor.push('😀' as u32).unwrap();
/// editor.insert(1, 'é' as u32).unwrap();
/// assert_eq!(editor.char_len(), 3);
/// assert_eq!(editor.as_units(), "hé😀".as_bytes());
///
/// editor.remove(0, 2).unwrap();
/// assert_eq!(editor.as_units(), "😀".as_bytes());
/// ```
pub struct Editor<'buf, U: CodeUnit> {
    buf: &'buf mut [U],
}

impl<'buf, U: CodeUnit> Editor<'buf, U> {
    /// Starts editing `buf`. Its current terminated content is kept.
    pub fn new(buf: &'buf mut [U]) -> Self {
        Self { buf }
    }

    /// Ends the session and hands the buffer back.
    #[must_use]
    pub fn into_inner(self) -> &'buf mut [U] {
        self.buf
    }

    /// Capacity in units, terminator slot included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Content length in units.
    #[must_use]
    pub fn len_units(&self) -> usize {
        terminated_len(self.buf)
    }

    /// Content length in codepoints.
    #[must_use]
    pub fn char_len(&self) -> usize {
        char_length(self.buf)
    }

    /// Whether the content is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len_units() == 0
    }

    /// The content, without its terminator.
    #[must_use]
    pub fn as_units(&self) -> &[U] {
        &self.buf[..self.len_units()]
    }

    /// Iterates over the codepoints of the content.
    #[must_use]
    pub fn codepoints(&self) -> Codepoints<'_, U> {
        codepoints(self.buf)
    }

    fn offset_of(&self, index: usize) -> Result<usize, EditError> {
        if let Some(at) = at_char(self.buf, index) {
            return Ok(at);
        }
        let len = self.char_len();
        if index == len {
            Ok(self.len_units())
        } else {
            Err(EditError::IndexOutOfRange { index, len })
        }
    }

    /// Appends `codepoint` and returns the number of units written.
    ///
    /// # Errors
    ///
    /// See [`crate::try_insert_char`].
    pub fn push(&mut self, codepoint: u32) -> Result<usize, EditError> {
        let end = self.len_units();
        try_insert_char(self.buf, end, codepoint)
    }

    /// Inserts `codepoint` before the codepoint at `index`; `index ==
    /// char_len()` appends.
    ///
    /// # Errors
    ///
    /// [`EditError::IndexOutOfRange`] if `index > char_len()`, otherwise see
    /// [`crate::try_insert_char`].
    pub fn insert(&mut self, index: usize, codepoint: u32) -> Result<(), EditError> {
        let at = self.offset_of(index)?;
        try_insert_char(self.buf, at, codepoint)?;
        Ok(())
    }

    /// Removes up to `count` codepoints starting at `index` and returns the
    /// number of units removed.
    ///
    /// # Errors
    ///
    /// [`EditError::IndexOutOfRange`] if there is no codepoint at `index`,
    /// otherwise see [`crate::try_remove_chars`].
    pub fn remove(&mut self, index: usize, count: usize) -> Result<usize, EditError> {
        let at = at_char(self.buf, index).ok_or_else(|| EditError::IndexOutOfRange {
            index,
            len: self.char_len(),
        })?;
        try_remove_chars(self.buf, at, count)
    }

    /// Empties the content, zeroing the units it occupied.
    pub fn clear(&mut self) {
        let end = self.len_units();
        self.buf[..end].fill(U::ZERO);
    }
}

impl fmt::Debug for Editor<'_, u8> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("content", &BStr::new(self.as_units()))
            .field("capacity", &self.capacity())
            .finish()
    }
}

struct Utf16Lossy<'a>(&'a [u16]);

impl fmt::Debug for Utf16Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for ch in char::decode_utf16(self.0.iter().copied()) {
            let ch = ch.unwrap_or(char::REPLACEMENT_CHARACTER);
            fmt::Display::fmt(&ch.escape_debug(), f)?;
        }
        f.write_str("\"")
    }
}

impl fmt::Debug for Editor<'_, u16> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("content", &Utf16Lossy(self.as_units()))
            .field("capacity", &self.capacity())
            .finish()
    }
}
