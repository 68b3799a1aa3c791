//! Seeded hashing of identifiers.

#[cfg(test)]
#[path = "hash_test.rs"]
mod test;

use crate::VersionIdentifier;

/// Fractional part of the golden ratio, used to spread the bits of each combined segment.
const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c15;

impl VersionIdentifier {
    /// Returns a hash of the segments, starting from `seed`.
    ///
    /// The result depends on the order of the segments. Equal identifiers hash identically for a
    /// given seed. For use in standard containers, the derived [`core::hash::Hash`] is enough.
    pub fn hash_with_seed(&self, seed: u64) -> u64 {
        self.segments().iter().fold(seed, |seed, &segment| hash_combine(seed, segment))
    }
}

fn hash_combine(seed: u64, segment: i32) -> u64 {
    let value = i64::from(segment) as u64;
    seed ^ value.wrapping_add(GOLDEN_RATIO).wrapping_add(seed << 6).wrapping_add(seed >> 2)
}
