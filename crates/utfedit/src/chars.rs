use core::iter::FusedIterator;

use crate::unit::CodeUnit;

/// Iterator over the codepoints of a zero-terminated buffer, built on the
/// fast decoders.
///
/// Iteration ends at the terminator, at the end of the slice, or at the first
/// sequence the fast decoder cannot make progress on (an unpaired UTF-16
/// surrogate). Malformed UTF-8 is not reported; validate first with
/// [`crate::utf8::validate`] when that matters.
#[derive(Debug, Clone)]
pub struct Codepoints<'a, U: CodeUnit> {
    buf: &'a [U],
    at: Option<usize>,
}

/// Iterates over the codepoints of `buf`.
#[must_use]
pub fn codepoints<U: CodeUnit>(buf: &[U]) -> Codepoints<'_, U> {
    Codepoints { buf, at: Some(0) }
}

impl<U: CodeUnit> Codepoints<'_, U> {
    /// Unit offset of the next codepoint, or `None` once iteration has ended.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        self.at
    }
}

impl<U: CodeUnit> Iterator for Codepoints<'_, U> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let at = self.at?;
        match U::decode_fast(self.buf, at) {
            (0, _) | (_, None) => {
                self.at = None;
                None
            }
            (codepoint, next) => {
                self.at = next;
                Some(codepoint)
            }
        }
    }
}

impl<U: CodeUnit> FusedIterator for Codepoints<'_, U> {}
