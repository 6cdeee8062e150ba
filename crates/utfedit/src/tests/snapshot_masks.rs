//! Snapshot of the branchless decoder's output for a fixed set of well-formed
//! and malformed sequences. Any change to the tables or the mask arithmetic
//! shows up here.

use alloc::vec::Vec;

use insta::assert_yaml_snapshot;

use crate::{ErrorMask, utf8};

#[derive(serde::Serialize)]
struct Report {
    case: &'static str,
    codepoint: u32,
    next: usize,
    mask: ErrorMask,
}

#[test]
fn snapshot_error_masks() {
    let cases: [(&'static str, &[u8]); 7] = [
        ("ascii", b"A"),
        ("euro", &[0xE2, 0x82, 0xAC]),
        ("overlong_nul", &[0xC0, 0x80]),
        ("surrogate", &[0xED, 0xA0, 0x80]),
        ("above_max", &[0xF4, 0x90, 0x80, 0x80]),
        ("truncated", &[0xE2, 0x82]),
        ("stray_continuation", &[0x80]),
    ];

    let reports: Vec<Report> = cases
        .into_iter()
        .map(|(case, bytes)| {
            let (codepoint, next, mask) = utf8::decode(bytes, 0);
            Report {
                case,
                codepoint,
                next,
                mask,
            }
        })
        .collect();

    assert_yaml_snapshot!(reports, @r"
    - case: ascii
      codepoint: 65
      next: 1
      mask: 0
    - case: euro
      codepoint: 8364
      next: 3
      mask: 0
    - case: overlong_nul
      codepoint: 0
      next: 2
      mask: 4
    - case: surrogate
      codepoint: 55296
      next: 3
      mask: 32
    - case: above_max
      codepoint: 1114112
      next: 4
      mask: 256
    - case: truncated
      codepoint: 8320
      next: 3
      mask: 2
    - case: stray_continuation
      codepoint: 0
      next: 1
      mask: 106
    ");
}
