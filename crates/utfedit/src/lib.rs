//! Allocation-free UTF-8 and UTF-16 transcoding with codepoint-granular,
//! in-place editing of zero-terminated, fixed-capacity buffers.
//!
//! Buffers are plain slices owned by the caller: the slice length is the
//! capacity and the content ends at the first zero unit. Navigation and
//! editing are generic over [`CodeUnit`], so the same functions work on `[u8]`
//! (UTF-8) and `[u16]` (UTF-16).
//!
//! ```rust
//! use utfedit::{at_char, char_length, insert_char, remove_chars, utf8};
//!
//! let mut buf = [0u8; 16];
//! buf[..5].copy_from_slice(b"hello");
//!
//! let at = at_char(&buf, 1).unwrap();
//! assert!(insert_char(&mut buf, at, 'é' as u32));
//! assert_eq!(char_length(&buf), 6);
//! assert_eq!(utf8::decode_fast(&buf, at), ('é' as u32, Some(at + 2)));
//!
//! assert!(remove_chars(&mut buf, at, 1));
//! assert_eq!(&buf[..6], b"hello\0");
//! ```
//!
//! Failures are signalled through return values only: `0` unit counts,
//! `false`, `None`, or a non-zero [`ErrorMask`]. The `try_*` variants return
//! an [`EditError`] naming the reason instead.

#![no_std]

#[cfg(test)]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod chars;
mod edit;
mod editor;
mod error;
mod nav;
mod unit;

#[cfg(feature = "fuzzing")]
pub mod tables;
#[cfg(not(feature = "fuzzing"))]
mod tables;

pub mod utf16;
pub mod utf8;

#[cfg(test)]
mod tests;

pub use chars::{Codepoints, codepoints};
pub use edit::{
    encode_append, insert_char, remove_chars, try_encode_append, try_insert_char,
    try_remove_chars,
};
pub use editor::Editor;
pub use error::{DecodeError, EditError, ErrorMask};
pub use nav::{advance_chars, at_char, char_length, rewind_chars, terminated_len};
pub use unit::CodeUnit;
