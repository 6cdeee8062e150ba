mod arbitrary;
mod property_codec;
mod snapshot_masks;

/// Number of quickcheck cases per property.
pub(crate) fn quickcheck_tests() -> u64 {
    if cfg!(miri) {
        10
    } else if cfg!(feature = "test-fast") {
        100
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}
