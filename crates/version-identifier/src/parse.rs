//! Parsing of dotted version text.
//!
//! [`VersionIdentifier::parse`] never fails: it recognizes the longest valid `SEG ('.' SEG)*`
//! prefix and reports where the unrecognized suffix starts. [`core::str::FromStr`] is the strict
//! counterpart and rejects any suffix.

#[cfg(test)]
#[path = "parse_test.rs"]
mod test;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::str::FromStr;

use thiserror::Error;

use crate::VersionIdentifier;

/// The result of a lenient parse: the recognized identifier and the start of the suffix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParsedVersion<'a> {
    version: VersionIdentifier,
    suffix_index: usize,
    text: &'a str,
}

impl<'a> ParsedVersion<'a> {
    pub fn version(&self) -> &VersionIdentifier {
        &self.version
    }

    /// Byte offset just past the last successfully parsed segment.
    pub fn suffix_index(&self) -> usize {
        self.suffix_index
    }

    /// The unparsed remainder of the input, e.g. `-beta` for `5.6.1-beta`.
    pub fn suffix(&self) -> &'a str {
        self.text.get(self.suffix_index..).unwrap_or_default()
    }

    /// Returns true if the whole input was consumed.
    pub fn is_complete(&self) -> bool {
        self.suffix_index == self.text.len()
    }

    pub fn into_version(self) -> VersionIdentifier {
        self.version
    }
}

/// Error returned when parsing an identifier strictly.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Invalid version identifier: unexpected text at offset {suffix_index}.")]
pub struct ParseVersionError {
    suffix_index: usize,
}

impl ParseVersionError {
    /// Byte offset of the first character that is not part of the version.
    pub fn suffix_index(&self) -> usize {
        self.suffix_index
    }
}

impl VersionIdentifier {
    /// Parses the leading `SEG ('.' SEG)*` run of `text`, where `SEG` is a run of ASCII digits
    /// that fits in an `i32`.
    ///
    /// Parsing stops at the first position where a segment can not be read. A `.` that is not
    /// followed by a valid segment is left in the suffix. Text that does not start with a digit
    /// yields the null identifier and a suffix index of `0`.
    pub fn parse(text: &str) -> ParsedVersion<'_> {
        let bytes = text.as_bytes();
        let mut segments = Vec::new();
        let mut suffix_index = 0;
        let mut start = 0;
        loop {
            let digits_len = bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count();
            let end = start + digits_len;
            let Some(segment) = parse_segment(&bytes[start..end]) else {
                break;
            };
            segments.push(segment);
            suffix_index = end;
            if end + 1 < bytes.len() && bytes[end] == b'.' {
                start = end + 1;
            } else {
                break;
            }
        }
        ParsedVersion { version: VersionIdentifier::new(segments), suffix_index, text }
    }
}

/// Reads a single segment from a run of ASCII digits. Returns `None` on an empty run or if the
/// value does not fit in an `i32`.
fn parse_segment(digits: &[u8]) -> Option<i32> {
    if digits.is_empty() {
        return None;
    }
    let value = digits.iter().try_fold(0i32, |value, digit| {
        value.checked_mul(10)?.checked_add(i32::from(digit - b'0'))
    });
    if value.is_none() {
        log::trace!("Version segment of {} digits is out of range.", digits.len());
    }
    value
}

impl FromStr for VersionIdentifier {
    type Err = ParseVersionError;

    /// Parses an identifier that must span the whole input. The empty string is the null
    /// identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed = Self::parse(s);
        if parsed.is_complete() {
            Ok(parsed.into_version())
        } else {
            Err(ParseVersionError { suffix_index: parsed.suffix_index })
        }
    }
}
