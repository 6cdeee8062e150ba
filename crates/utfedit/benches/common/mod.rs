use std::time::Duration;

use criterion::Criterion;

/// Deterministic text of at least `target_len` bytes mixing all four UTF-8
/// widths, followed by a terminator.
pub fn make_text(target_len: usize) -> Vec<u8> {
    const SAMPLE: &str = "plain ascii, ñandú, €uro ≠ ∞, emoji 😀🦀 ";
    let mut buf = Vec::with_capacity(target_len + SAMPLE.len() + 1);
    while buf.len() < target_len {
        buf.extend_from_slice(SAMPLE.as_bytes());
    }
    buf.push(0);
    buf
}

pub fn criterion() -> Criterion {
    let c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c.warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10)
    } else {
        c.warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5))
    }
}
