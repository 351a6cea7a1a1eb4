#![forbid(unsafe_code)]
//! Version ranges written as `[min,max)`-style intervals.
//!
//! The grammar is independent of any concrete version scheme: callers either
//! implement [`Version`] for their type and use [`parse_range`], or hand
//! their own parse and construct callbacks to [`parse_range_with`].

pub mod error;
pub mod parse;
pub mod range;

pub use error::RangeError;
pub use parse::{parse_range, parse_range_with};
pub use range::{Version, VersionRange};

#[cfg(test)]
mod testing;
