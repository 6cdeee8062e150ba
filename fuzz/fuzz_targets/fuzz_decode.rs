#![no_main]
use std::cell::RefCell;

use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use utfedit::tables::{UTF8_ACCEPT, UTF8_REJECT, UTF8D};
use utfedit::{char_length, codepoints, utf8};

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

// Sequences that sit on the edges of the decoder's ranges.
static EDGE_TABLE: &[&[u8]] = &[
    b"\x7F",
    b"\xC0\x80",
    b"\xC2\x80",
    b"\xDF\xBF",
    b"\xE0\x80\x80",
    b"\xE0\xA0\x80",
    b"\xED\x9F\xBF",
    b"\xED\xA0\x80",
    b"\xEF\xBF\xBF",
    b"\xF0\x8F\xBF\xBF",
    b"\xF0\x90\x80\x80",
    b"\xF4\x8F\xBF\xBF",
    b"\xF4\x90\x80\x80",
    b"\xF8\x88\x80\x80\x80",
    b"\x80",
    b"\xBF",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

/// Splices one edge sequence into `data` at a random offset, never writing
/// past `max_size`. Returns the new size.
fn splice_edge(data: &mut [u8], size: usize, max_size: usize) -> usize {
    with_rng(|rng| {
        let edge = EDGE_TABLE[rng.random_range(0..EDGE_TABLE.len())];
        if size + edge.len() > max_size {
            return size;
        }
        let at = rng.random_range(0..=size);
        data.copy_within(at..size, at + edge.len());
        data[at..at + edge.len()].copy_from_slice(edge);
        size + edge.len()
    })
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    if seed % 4 == 0 {
        splice_edge(data, size, max_size)
    } else {
        fuzzer_mutate(data, size, max_size)
    }
});

fn dfa_accepts(bytes: &[u8]) -> bool {
    let mut state = UTF8_ACCEPT;
    for &b in bytes {
        let class = u32::from(UTF8D[usize::from(b)]);
        state = u32::from(UTF8D[256 + (state + class) as usize]);
        if state == UTF8_REJECT {
            return false;
        }
    }
    state == UTF8_ACCEPT
}

fn check(data: &[u8]) {
    let end = utfedit::terminated_len(data);
    let content = &data[..end];
    let reference = std::str::from_utf8(content);

    // the branchless decoder and the table walk agree with core::str
    match (utf8::validate(data), &reference) {
        (Ok(count), Ok(text)) => assert_eq!(count, text.chars().count()),
        (Err(err), Err(expected)) => assert_eq!(err.offset, expected.valid_up_to()),
        (got, expected) => panic!("validate {got:?} disagrees with core {expected:?}"),
    }
    assert_eq!(dfa_accepts(content), reference.is_ok());

    if let Ok(text) = reference {
        let expected: Vec<u32> = text.chars().map(u32::from).collect();
        let got: Vec<u32> = codepoints(data).collect();
        assert_eq!(got, expected);
        assert_eq!(char_length(data), expected.len());
    }

    // the branchless decoder always makes progress
    let mut at = 0;
    while at < end {
        let (_, next, _) = utf8::decode(data, at);
        assert!(next > at && next <= at + 4);
        at = next;
    }
}

fuzz_target!(|data: &[u8]| check(data));
