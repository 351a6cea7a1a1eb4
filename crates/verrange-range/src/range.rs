//! The [`VersionRange`] value type and the [`Version`] capability.

use std::fmt;
use std::str::FromStr;

use crate::error::RangeError;
use crate::parse::{check_bounds, parse_range};

/// A totally ordered version scheme that can be read from text.
///
/// Implement this for a version type to parse ranges of it with
/// [`parse_range`] or `str::parse::<VersionRange<_>>()`.
pub trait Version: Ord + Clone + fmt::Display + Sized {
    /// Error returned when a single version string is malformed.
    type ParseError: std::error::Error;

    /// Parse one version from its textual form.
    ///
    /// # Errors
    /// Returns `Self::ParseError` when `raw` is not a valid version.
    fn parse(raw: &str) -> Result<Self, Self::ParseError>;
}

/// An interval over versions with independently inclusive endpoints.
///
/// `None` on either side means the range is unbounded on that side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionRange<V> {
    min: Option<V>,
    min_included: bool,
    max: Option<V>,
    max_included: bool,
}

impl<V> VersionRange<V> {
    /// Build a range from raw endpoints without checking their order.
    ///
    /// This is the default construction step of [`parse_range`], which has
    /// already validated the bounds. Use [`VersionRange::new`] for
    /// endpoints that come from anywhere else.
    pub fn from_bounds(
        min: Option<V>,
        min_included: bool,
        max: Option<V>,
        max_included: bool,
    ) -> Self {
        Self {
            min,
            min_included,
            max,
            max_included,
        }
    }

    /// Lower endpoint, `None` when unbounded below.
    pub fn min(&self) -> Option<&V> {
        self.min.as_ref()
    }

    pub fn min_included(&self) -> bool {
        self.min_included
    }

    /// Upper endpoint, `None` when unbounded above.
    pub fn max(&self) -> Option<&V> {
        self.max.as_ref()
    }

    pub fn max_included(&self) -> bool {
        self.max_included
    }

    /// Map both endpoints through `f`, keeping the inclusivity flags.
    ///
    /// Unbounded sides stay unbounded. The mapped endpoints are not
    /// re-validated, so a non-monotonic `f` can produce an inverted range.
    ///
    /// # Errors
    /// Returns the first error produced by `f`.
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<VersionRange<U>, E>
    where
        F: FnMut(&V) -> Result<U, E>,
    {
        let min = self.min.as_ref().map(&mut f).transpose()?;
        let max = self.max.as_ref().map(&mut f).transpose()?;
        Ok(VersionRange {
            min,
            min_included: self.min_included,
            max,
            max_included: self.max_included,
        })
    }
}

impl<V: Ord + fmt::Display> VersionRange<V> {
    /// Build a range, applying the same bound rules as the parser.
    ///
    /// # Errors
    /// Returns `RangeError::NoBounds` when both endpoints are `None`,
    /// `RangeError::InvertedBounds` when `min > max` and
    /// `RangeError::EmptyExclusive` when `min == max` with both sides excluded.
    pub fn new(
        min: Option<V>,
        min_included: bool,
        max: Option<V>,
        max_included: bool,
    ) -> Result<Self, RangeError> {
        let range = Self::from_bounds(min, min_included, max, max_included);
        if range.min.is_none() && range.max.is_none() {
            return Err(RangeError::NoBounds {
                range: range.to_string(),
            });
        }
        check_bounds(
            &range.to_string(),
            range.min(),
            min_included,
            range.max(),
            max_included,
        )?;
        Ok(range)
    }
}

impl<V: Ord> VersionRange<V> {
    /// Whether `version` lies inside the interval.
    pub fn contains(&self, version: &V) -> bool {
        let above_min = match &self.min {
            None => true,
            Some(min) if self.min_included => version >= min,
            Some(min) => version > min,
        };
        let below_max = match &self.max {
            None => true,
            Some(max) if self.max_included => version <= max,
            Some(max) => version < max,
        };
        above_min && below_max
    }
}

impl<V: fmt::Display> fmt::Display for VersionRange<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.min_included { "[" } else { "(" })?;
        if let Some(min) = &self.min {
            write!(f, "{min}")?;
        }
        f.write_str(",")?;
        if let Some(max) = &self.max {
            write!(f, "{max}")?;
        }
        f.write_str(if self.max_included { "]" } else { ")" })
    }
}

impl<V: Version> FromStr for VersionRange<V> {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, RangeError> {
        parse_range(s)
    }
}
