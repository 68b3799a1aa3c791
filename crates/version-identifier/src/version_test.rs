#[cfg(not(feature = "std"))]
use alloc::string::ToString;
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};

use pretty_assertions::assert_eq;
use test_case::test_case;

use super::VersionIdentifier;

#[test]
fn test_null() {
    let null = VersionIdentifier::default();
    assert!(null.is_null());
    assert_eq!(null.segment_count(), 0);
    assert_eq!(null, VersionIdentifier::null());
    assert_eq!(null.to_string(), "");
    assert_eq!(null.major_version(), 0);
    assert!(!VersionIdentifier::from_major(0).is_null());
}

#[test]
fn test_constructors() {
    assert_eq!(VersionIdentifier::from_major(4).segments(), &[4]);
    assert_eq!(VersionIdentifier::from_major_minor(4, 2).segments(), &[4, 2]);
    assert_eq!(VersionIdentifier::from_major_minor_micro(4, 2, 7).segments(), &[4, 2, 7]);
    assert_eq!(VersionIdentifier::from([1, 2, 3, 4, 5]).segment_count(), 5);
    assert_eq!(VersionIdentifier::from(vec![1, 2]), VersionIdentifier::from_major_minor(1, 2));
    assert_eq!(VersionIdentifier::from(&[1, 2][..]), VersionIdentifier::from_major_minor(1, 2));
    assert_eq!((1..=3).collect::<VersionIdentifier>(), VersionIdentifier::from([1, 2, 3]));
    assert_eq!(Vec::from(VersionIdentifier::from([7, 0])), vec![7, 0]);
}

#[test]
fn test_negative_segments_are_kept() {
    let version = VersionIdentifier::from([1, -1]);
    assert_eq!(version.minor_version(), -1);
    assert_eq!(version.to_string(), "1.-1");
}

#[test]
fn test_segment_at() {
    let version = VersionIdentifier::from([5, 6, 1]);
    assert_eq!(version.major_version(), 5);
    assert_eq!(version.minor_version(), 6);
    assert_eq!(version.micro_version(), 1);
    assert_eq!(version.segment_at(3), 0);
    assert_eq!(version.segment_at(usize::MAX), 0);

    let major_only = VersionIdentifier::from_major(3);
    assert_eq!(major_only.minor_version(), 0);
    assert_eq!(major_only.micro_version(), 0);
}

#[test_case(&[], &[]; "null")]
#[test_case(&[0], &[]; "single zero")]
#[test_case(&[1, 2, 0], &[1, 2]; "one trailing zero")]
#[test_case(&[1, 0, 0, 0], &[1]; "many trailing zeros")]
#[test_case(&[1, 0, 2], &[1, 0, 2]; "inner zero")]
#[test_case(&[0, 0, 3], &[0, 0, 3]; "leading zeros")]
fn test_normalized(segments: &[i32], expected: &[i32]) {
    let version = VersionIdentifier::from(segments);
    let normalized = version.normalized();
    assert_eq!(normalized.segments(), expected);
    assert!(normalized.is_normalized());
    assert_eq!(normalized.normalized(), normalized);
    assert_eq!(version.is_normalized(), version == normalized);
}

#[test_case(&[], ""; "null")]
#[test_case(&[0], "0"; "zero")]
#[test_case(&[1, 2, 0], "1.2.0"; "trailing zero kept")]
#[test_case(&[10, 200, 3000, 4], "10.200.3000.4"; "four segments")]
#[test_case(&[i32::MAX], "2147483647"; "max segment")]
fn test_display(segments: &[i32], expected: &str) {
    let version = VersionIdentifier::from(segments);
    assert_eq!(version.to_string(), expected);
    assert_eq!(format!("{version:?}"), expected);
}

#[test]
fn test_debug_is_unquoted() {
    let versions = vec![VersionIdentifier::from([1, 0]), VersionIdentifier::from([2])];
    assert_eq!(format!("{versions:?}"), "[1.0, 2]");
}
