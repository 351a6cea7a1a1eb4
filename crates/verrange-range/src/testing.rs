//! A single-number version scheme used by the unit tests.

use std::fmt;
use std::num::ParseIntError;

use crate::range::Version;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct Build(pub(crate) u32);

impl fmt::Display for Build {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Version for Build {
    type ParseError = ParseIntError;

    fn parse(raw: &str) -> Result<Self, ParseIntError> {
        raw.parse().map(Build)
    }
}
