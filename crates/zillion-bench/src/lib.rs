//! Shared inputs for the zillion benchmarks

use zillion_core::ZeroCount;

/// Counts spanning every naming path: irregular, standard, compositional,
/// one thousand illions deep and the extended maximum
pub const SAMPLE_COUNTS: [u64; 8] = [
    3,
    33,
    100,
    303,
    3003,
    3_000_003,
    3_000_000_003,
    3_000_000_000_003,
];

pub fn sample_counts() -> impl Iterator<Item = ZeroCount> {
    SAMPLE_COUNTS.into_iter().map(ZeroCount)
}
