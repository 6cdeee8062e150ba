use core::fmt;

use thiserror::Error;

/// Error bits reported by [`crate::utf8::decode`].
///
/// Zero means the sequence was well formed. The individual bits are only
/// meaningful relative to the decoded sequence length, so callers normally
/// test [`ErrorMask::is_valid`] and treat any other value as "malformed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub struct ErrorMask(u32);

impl ErrorMask {
    /// The mask of a well-formed sequence.
    pub const VALID: Self = Self(0);

    #[must_use]
    pub(crate) const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw mask bits. At most the low nine bits are ever set.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Returns `true` when no error condition was detected.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ErrorMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#05x}", self.0)
    }
}

/// A malformed UTF-8 sequence found by [`crate::utf8::decode_checked`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
#[error("malformed UTF-8 sequence at byte {offset} (error mask {mask})")]
pub struct DecodeError {
    /// Offset of the lead byte of the offending sequence.
    pub offset: usize,
    /// Error bits as returned by [`crate::utf8::decode`].
    pub mask: ErrorMask,
}

/// Why an in-place edit was refused. The buffer is never modified when one of
/// these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize))]
pub enum EditError {
    /// The codepoint is above U+10FFFF.
    #[error("codepoint {0:#x} cannot be encoded")]
    InvalidCodepoint(u32),
    /// The edited content plus its terminator would not fit the buffer.
    #[error("insufficient capacity: need {needed} units, {available} available")]
    InsufficientCapacity {
        /// Units required, terminator included.
        needed: usize,
        /// Buffer capacity in units.
        available: usize,
    },
    /// A unit offset lies past the terminator.
    #[error("offset {offset} is past the end of the content ({len} units)")]
    OutOfBounds {
        /// Requested unit offset.
        offset: usize,
        /// Content length in units.
        len: usize,
    },
    /// A codepoint index lies past the last codepoint.
    #[error("codepoint index {index} out of range ({len} codepoints)")]
    IndexOutOfRange {
        /// Requested codepoint index.
        index: usize,
        /// Content length in codepoints.
        len: usize,
    },
    /// The removal started at the terminator.
    #[error("nothing to remove")]
    NothingToRemove,
}
