//! Ordering and prefix relations between identifiers.
//!
//! Identifiers are compared segment by segment. When one is a strict prefix of the other, the
//! first extra segment of the longer one decides: a positive or zero segment makes the longer
//! identifier greater, a negative one makes it smaller. In particular `1.2 < 1.2.0`, even though
//! both normalize to `1.2`.

#[cfg(test)]
#[path = "compare_test.rs"]
mod test;

use core::cmp::Ordering;

use crate::VersionIdentifier;

impl VersionIdentifier {
    /// Compares `v1` with `v2`.
    ///
    /// Two identifiers are equal only if they have the same segments and the same length.
    pub fn compare(v1: &Self, v2: &Self) -> Ordering {
        if let Some((a, b)) = v1.segments().iter().zip(v2.segments()).find(|(a, b)| a != b) {
            return a.cmp(b);
        }
        let common_len = v1.segment_count().min(v2.segment_count());
        match v1.segment_count().cmp(&v2.segment_count()) {
            Ordering::Greater => extra_segment_ordering(v1.segment_at(common_len)),
            Ordering::Less => extra_segment_ordering(v2.segment_at(common_len)).reverse(),
            Ordering::Equal => Ordering::Equal,
        }
    }

    /// Returns true if every segment of `self` equals the segment of `other` at the same index.
    ///
    /// Segments of `other` past the length of `self` are ignored, so `1.2` is a prefix of
    /// `1.2.99`, and every identifier is a prefix of itself.
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.segments().starts_with(self.segments())
    }

    /// Returns the longest identifier that is a prefix of both `v1` and `v2`.
    pub fn common_prefix(v1: &Self, v2: &Self) -> Self {
        let common_len =
            v1.segments().iter().zip(v2.segments()).take_while(|(a, b)| a == b).count();
        Self::from(&v1.segments()[..common_len])
    }
}

/// How the longer of two identifiers with a common prefix orders against the shorter one.
fn extra_segment_ordering(segment: i32) -> Ordering {
    match segment.cmp(&0) {
        Ordering::Equal => Ordering::Greater,
        ordering => ordering,
    }
}

impl Ord for VersionIdentifier {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl PartialOrd for VersionIdentifier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
