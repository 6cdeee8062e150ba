//! Read-only lookup tables shared by the UTF-8 decoders.
//!
//! [`UTF8D`] is Bjoern Hoehrmann's DFA (<http://bjoern.hoehrmann.de/utf-8/decoder/dfa/>):
//! the first 256 entries map a byte to its character class, the remaining 108
//! map `state + class` to the next state. The other tables drive the
//! branchless four-byte decoder and are indexed by the sequence length derived
//! from the lead byte (`0` meaning "not a lead byte").

/// DFA state reached after a complete codepoint.
pub const UTF8_ACCEPT: u32 = 0;
/// Absorbing DFA state for malformed input.
pub const UTF8_REJECT: u32 = 12;

/// Byte classes followed by the state transition table.
#[rustfmt::skip]
pub static UTF8D: [u8; 364] = [
    // byte -> character class
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,  0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,
     1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,1,  9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,9,
     7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,  7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,7,
     8,8,2,2,2,2,2,2,2,2,2,2,2,2,2,2,  2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,2,
    10,3,3,3,3,3,3,3,3,3,3,3,3,4,3,3, 11,6,6,6,5,8,8,8,8,8,8,8,8,8,8,8,

    // state + class -> state
     0,12,24,36,60,96,84,12,12,12,48,72, 12,12,12,12,12,12,12,12,12,12,12,12,
    12, 0,12,12,12,12,12, 0,12, 0,12,12, 12,24,12,12,12,12,12,24,12,24,12,12,
    12,12,12,12,12,12,12,24,12,12,12,12, 12,24,12,12,12,12,12,12,12,24,12,12,
    12,12,12,12,12,12,12,36,12,36,12,12, 12,36,12,12,12,12,12,36,12,36,12,12,
    12,36,12,12,12,12,12,12,12,12,12,12,
];

/// Sequence length keyed by the top five bits of the lead byte.
#[rustfmt::skip]
pub static LENGTHS: [u8; 32] = [
    1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1,
    0, 0, 0, 0, 0, 0, 0, 0, 2, 2, 2, 2, 3, 3, 4, 0,
];

/// Payload bits of the lead byte.
pub static MASKS: [u8; 5] = [0x00, 0x7F, 0x1F, 0x0F, 0x07];

/// Smallest codepoint that may use a given length; anything below is overlong.
/// Length 0 uses a value no decode can reach so it always reports an error.
pub static MINS: [u32; 5] = [4_194_304, 0, 128, 2048, 65536];

/// Right shift that discards the payload of bytes past the sequence end.
pub static SHIFTC: [u32; 5] = [0, 18, 12, 6, 0];

/// Right shift that discards continuation checks for bytes past the sequence end.
pub static SHIFTE: [u32; 5] = [0, 6, 4, 2, 0];
