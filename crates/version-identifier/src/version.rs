#[cfg(test)]
#[path = "version_test.rs"]
mod test;

#[cfg(not(feature = "std"))]
use alloc::vec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use itertools::Itertools;

/// A version number with an arbitrary number of integer segments, most significant first.
///
/// An identifier with no segments is the null version. Reading a segment past the stored ones
/// yields `0`, but comparison still tells `1.2` and `1.2.0` apart (see [`Self::compare`]).
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct VersionIdentifier {
    segments: Vec<i32>,
}

impl VersionIdentifier {
    /// Creates an identifier from the given segments.
    ///
    /// Segment values are not validated: negative values are stored as given.
    pub fn new(segments: Vec<i32>) -> Self {
        Self { segments }
    }

    /// Returns the null identifier.
    pub fn null() -> Self {
        Self::default()
    }

    pub fn from_major(major: i32) -> Self {
        Self::new(vec![major])
    }

    pub fn from_major_minor(major: i32, minor: i32) -> Self {
        Self::new(vec![major, minor])
    }

    pub fn from_major_minor_micro(major: i32, minor: i32, micro: i32) -> Self {
        Self::new(vec![major, minor, micro])
    }

    /// Returns true if there are no segments.
    pub fn is_null(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the number of stored segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns the segment at `index`, or `0` if the identifier has no such segment.
    pub fn segment_at(&self, index: usize) -> i32 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    pub fn major_version(&self) -> i32 {
        self.segment_at(0)
    }

    pub fn minor_version(&self) -> i32 {
        self.segment_at(1)
    }

    pub fn micro_version(&self) -> i32 {
        self.segment_at(2)
    }

    /// Returns all stored segments.
    pub fn segments(&self) -> &[i32] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<i32> {
        self.segments
    }

    /// Returns true if the last segment is non-zero, or there are no segments at all.
    pub fn is_normalized(&self) -> bool {
        self.segments.last() != Some(&0)
    }

    /// Returns an equivalent identifier with all trailing zero segments removed.
    ///
    /// Zero segments followed by a non-zero one are kept, so `1.0.2` is already normalized.
    /// To check whether two identifiers are equivalent, compare their normalized forms.
    pub fn normalized(&self) -> Self {
        let mut segments = self.segments.clone();
        while segments.last() == Some(&0) {
            segments.pop();
        }
        Self::new(segments)
    }
}

impl From<Vec<i32>> for VersionIdentifier {
    fn from(segments: Vec<i32>) -> Self {
        Self::new(segments)
    }
}

impl From<&[i32]> for VersionIdentifier {
    fn from(segments: &[i32]) -> Self {
        Self::new(segments.to_vec())
    }
}

impl<const N: usize> From<[i32; N]> for VersionIdentifier {
    fn from(segments: [i32; N]) -> Self {
        Self::new(segments.to_vec())
    }
}

impl FromIterator<i32> for VersionIdentifier {
    fn from_iter<T: IntoIterator<Item = i32>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<VersionIdentifier> for Vec<i32> {
    fn from(version: VersionIdentifier) -> Self {
        version.into_segments()
    }
}

/// Writes the segments delimited by `.`, in stored order. The null identifier writes nothing.
impl fmt::Display for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.iter().format("."))
    }
}

// Unquoted textual form, so identifiers read naturally inside logs and derived `Debug` output.
impl fmt::Debug for VersionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
