//! Multi-segment version identifiers.
//!
//! A [`VersionIdentifier`] is a dotted sequence of integers such as `1.2.0`. It can be parsed
//! leniently from text that carries an opaque suffix (`5.6.1-beta`), ordered, tested for prefix
//! relations and normalized by dropping trailing zero segments.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

mod codec;
mod compare;
mod hash;
#[cfg(feature = "env_logger")]
pub mod logging;
pub mod parse;
mod version;

pub use parse::{ParseVersionError, ParsedVersion};
pub use version::VersionIdentifier;
