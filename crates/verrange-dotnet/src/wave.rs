//! The legacy wave version scheme (`first[.second]`).

use std::fmt;
use std::str::FromStr;

use verrange_range::{parse_range, RangeError, Version, VersionRange};

use crate::component::parse_components;
use crate::error::VersionError;

/// A wave version such as `183` or `183.2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WaveVersion {
    first: u32,
    second: u32,
}

impl WaveVersion {
    pub fn new(first: u32, second: u32) -> Self {
        Self { first, second }
    }

    pub fn first(&self) -> u32 {
        self.first
    }

    /// Minor component, 0 when absent.
    pub fn second(&self) -> u32 {
        self.second
    }
}

impl Version for WaveVersion {
    type ParseError = VersionError;

    fn parse(raw: &str) -> Result<Self, VersionError> {
        let components = parse_components("wave", raw, 1, 2)?;
        match components.as_slice() {
            [first] => Ok(Self::new(*first, 0)),
            [first, second] => Ok(Self::new(*first, *second)),
            _ => Err(VersionError {
                scheme: "wave",
                version: raw.to_owned(),
                reason: "expected 1 to 2 dot-separated components".to_owned(),
            }),
        }
    }
}

impl FromStr for WaveVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        <Self as Version>::parse(s)
    }
}

impl fmt::Display for WaveVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.second == 0 {
            write!(f, "{}", self.first)
        } else {
            write!(f, "{}.{}", self.first, self.second)
        }
    }
}

/// Parse a range of wave versions, e.g. `"[183,191)"`.
///
/// # Errors
/// Returns a `RangeError` when the range or one of its versions is invalid.
pub fn parse_wave_range(raw: &str) -> Result<VersionRange<WaveVersion>, RangeError> {
    parse_range(raw)
}
