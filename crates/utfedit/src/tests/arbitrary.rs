use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// A Unicode scalar value biased towards the encoding width boundaries.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct Scalar(pub char);

impl Arbitrary for Scalar {
    fn arbitrary(g: &mut Gen) -> Self {
        const EDGES: [u32; 10] = [
            0x01, 0x7F, 0x80, 0x7FF, 0x800, 0xD7FF, 0xE000, 0xFFFF, 0x1_0000, 0x10_FFFF,
        ];
        let value = if bool::arbitrary(g) {
            *g.choose(&EDGES).unwrap_or(&0x41)
        } else {
            u32::arbitrary(g) % 0x11_0000
        };
        // Surrogates and NUL fall back to a plain letter.
        match char::from_u32(value) {
            Some(ch) if ch != '\0' => Scalar(ch),
            _ => Scalar('x'),
        }
    }
}

/// Text without NUL, so the whole string is the terminated content.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Text(pub String);

impl Arbitrary for Text {
    fn arbitrary(g: &mut Gen) -> Self {
        let chars: Vec<Scalar> = Vec::arbitrary(g);
        Text(chars.into_iter().map(|s| s.0).collect())
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            self.0
                .shrink()
                .map(|s| Text(s.chars().filter(|&c| c != '\0').collect())),
        )
    }
}

impl Text {
    /// UTF-8 bytes followed by a terminator and `slack` spare units.
    pub(crate) fn utf8_buffer(&self, slack: usize) -> Vec<u8> {
        let mut buf = Vec::with_capacity(self.0.len() + 1 + slack);
        buf.extend_from_slice(self.0.as_bytes());
        buf.resize(self.0.len() + 1 + slack, 0);
        buf
    }

    /// UTF-16 units followed by a terminator and `slack` spare units.
    pub(crate) fn utf16_buffer(&self, slack: usize) -> Vec<u16> {
        let mut buf: Vec<u16> = self.0.encode_utf16().collect();
        buf.resize(buf.len() + 1 + slack, 0);
        buf
    }
}
