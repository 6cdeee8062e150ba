use alloc::vec::Vec;

use quickcheck::QuickCheck;
use quickcheck_macros::quickcheck;

use super::{
    arbitrary::{Scalar, Text},
    quickcheck_tests,
};
use crate::{at_char, char_length, codepoints, utf8, utf16};

/// Every non-NUL scalar value survives both encodings, and the predicted
/// width matches what the encoder writes.
#[test]
#[cfg_attr(miri, ignore)]
fn roundtrip_every_scalar() {
    for ch in (1..=0x10_FFFF).filter_map(char::from_u32) {
        let codepoint = ch as u32;

        let mut bytes = [0u8; 5];
        let n = utf8::encode(&mut bytes, codepoint);
        assert_eq!(n, utf8::encode_units(codepoint), "{codepoint:#x}");
        assert_eq!(utf8::decode_fast(&bytes, 0), (codepoint, Some(n)));
        let (decoded, next, mask) = utf8::decode(&bytes, 0);
        assert!(mask.is_valid(), "{codepoint:#x} mask {mask}");
        assert_eq!((decoded, next), (codepoint, n));

        let mut units = [0u16; 3];
        let n = utf16::encode(&mut units, codepoint);
        assert_eq!(n, utf16::encode_units(codepoint), "{codepoint:#x}");
        assert_eq!(utf16::decode_fast(&units, 0), (codepoint, Some(n)));
    }
}

/// Every encoded surrogate is reported by the branchless decoder.
#[test]
fn encoded_surrogates_are_flagged() {
    for codepoint in (0xD800..=0xDFFF).step_by(0x7F) {
        let mut bytes = [0u8; 4];
        assert_eq!(utf8::encode(&mut bytes, codepoint), 3);
        let (_, _, mask) = utf8::decode(&bytes, 0);
        assert!(!mask.is_valid(), "{codepoint:#x}");
    }
}

#[test]
fn char_length_matches_decode_steps() {
    fn steps<U: crate::CodeUnit>(buf: &[U]) -> usize {
        let mut at = 0;
        let mut n = 0;
        while let (codepoint, Some(next)) = U::decode_fast(buf, at) {
            if codepoint == 0 {
                break;
            }
            n += 1;
            at = next;
        }
        n
    }

    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let bytes = text.utf8_buffer(0);
        let units = text.utf16_buffer(0);
        let expected = text.0.chars().count();
        char_length(&bytes) == expected
            && steps(&bytes) == expected
            && char_length(&units) == expected
            && steps(&units) == expected
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}

#[test]
fn at_char_locates_each_codepoint() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let bytes = text.utf8_buffer(2);
        let units = text.utf16_buffer(2);
        let len = char_length(&bytes);

        let found = text.0.chars().enumerate().all(|(i, ch)| {
            let in_bytes = at_char(&bytes, i).map(|at| utf8::decode_fast(&bytes, at).0);
            let in_units = at_char(&units, i).map(|at| utf16::decode_fast(&units, at).0);
            in_bytes == Some(ch as u32) && in_units == Some(ch as u32)
        });

        found && at_char(&bytes, len).is_none() && at_char(&units, len).is_none()
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}

#[test]
fn codepoints_agree_with_core() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text) -> bool {
        let expected: Vec<u32> = text.0.chars().map(u32::from).collect();
        let from_bytes: Vec<u32> = codepoints(&text.utf8_buffer(1)).collect();
        let from_units: Vec<u32> = codepoints(&text.utf16_buffer(1)).collect();
        from_bytes == expected && from_units == expected
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text) -> bool);
}

/// The branchless decoder accepts exactly what `core::str` accepts and stops
/// at the same byte.
#[test]
fn validate_agrees_with_core() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(bytes: Vec<u8>) -> bool {
        let end = crate::terminated_len(&bytes);
        match (utf8::validate(&bytes), core::str::from_utf8(&bytes[..end])) {
            (Ok(count), Ok(s)) => count == s.chars().count(),
            (Err(ours), Err(theirs)) => ours.offset == theirs.valid_up_to(),
            _ => false,
        }
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

#[test]
fn validate_accepts_encoded_text() {
    #[allow(clippy::needless_pass_by_value)]
    fn prop(text: Text, extra: Scalar) -> bool {
        let mut bytes = text.utf8_buffer(8);
        let appended = utf8::encode_append(&mut bytes, extra.0 as u32);
        appended == extra.0.len_utf8() && utf8::validate(&bytes) == Ok(text.0.chars().count() + 1)
    }

    QuickCheck::new()
        .tests(quickcheck_tests())
        .quickcheck(prop as fn(Text, Scalar) -> bool);
}

/// `validate` counts codepoints, not bytes, so any multibyte text reports
/// fewer codepoints than its encoded length.
#[quickcheck]
#[allow(clippy::needless_pass_by_value)]
fn validate_counts_codepoints_not_bytes(text: Text) -> bool {
    let bytes = text.utf8_buffer(1);
    let count = text.0.chars().count();
    utf8::validate(&bytes) == Ok(count)
        && (count == text.0.len()) == text.0.is_ascii()
}
