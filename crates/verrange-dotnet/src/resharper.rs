//! ReSharper versions (`baseline.build[.hotfix]`).

use std::fmt;
use std::str::FromStr;

use verrange_range::{parse_range, RangeError, Version, VersionRange};

use crate::component::parse_components;
use crate::error::VersionError;

/// A ReSharper release such as `2018.1` or `2018.1.2`.
///
/// A hotfix of 0 is the same release as no hotfix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReSharperVersion {
    baseline: u32,
    build: u32,
    hotfix: u32,
}

impl ReSharperVersion {
    pub fn new(baseline: u32, build: u32, hotfix: u32) -> Self {
        Self {
            baseline,
            build,
            hotfix,
        }
    }

    pub fn baseline(&self) -> u32 {
        self.baseline
    }

    pub fn build(&self) -> u32 {
        self.build
    }

    pub fn hotfix(&self) -> u32 {
        self.hotfix
    }

    /// `[baseline, build]`, or `[baseline, build, hotfix]` for a non-zero hotfix.
    pub fn components(&self) -> Vec<u32> {
        if self.hotfix == 0 {
            vec![self.baseline, self.build]
        } else {
            vec![self.baseline, self.build, self.hotfix]
        }
    }
}

impl Version for ReSharperVersion {
    type ParseError = VersionError;

    fn parse(raw: &str) -> Result<Self, VersionError> {
        let components = parse_components("ReSharper", raw, 2, 3)?;
        match components.as_slice() {
            [baseline, build] => Ok(Self::new(*baseline, *build, 0)),
            [baseline, build, hotfix] => Ok(Self::new(*baseline, *build, *hotfix)),
            _ => Err(VersionError {
                scheme: "ReSharper",
                version: raw.to_owned(),
                reason: "expected 2 to 3 dot-separated components".to_owned(),
            }),
        }
    }
}

impl FromStr for ReSharperVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, VersionError> {
        <Self as Version>::parse(s)
    }
}

impl fmt::Display for ReSharperVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.baseline, self.build)?;
        if self.hotfix != 0 {
            write!(f, ".{}", self.hotfix)?;
        }
        Ok(())
    }
}

/// Parse a range of ReSharper versions, e.g. `"[2018.1,2019.1)"`.
///
/// # Errors
/// Returns a `RangeError` when the range or one of its versions is invalid.
pub fn parse_resharper_range(raw: &str) -> Result<VersionRange<ReSharperVersion>, RangeError> {
    parse_range(raw)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_two_components() {
        let v: ReSharperVersion = "2018.1".parse().unwrap();
        assert_eq!(v, ReSharperVersion::new(2018, 1, 0));
        assert_eq!(v.components(), vec![2018, 1]);
    }

    #[test]
    fn parse_three_components() {
        let v: ReSharperVersion = "2018.1.3".parse().unwrap();
        assert_eq!(v.hotfix(), 3);
        assert_eq!(v.components(), vec![2018, 1, 3]);
    }

    #[test]
    fn zero_hotfix_is_dropped() {
        let v: ReSharperVersion = "2018.1.0".parse().unwrap();
        assert_eq!(v, "2018.1".parse::<ReSharperVersion>().unwrap());
        assert_eq!(v.to_string(), "2018.1");
    }

    #[test]
    fn parse_rejects_wrong_component_count() {
        for raw in ["2018", "2018.1.2.3"] {
            let err = raw.parse::<ReSharperVersion>().unwrap_err();
            assert!(
                err.to_string().contains("invalid ReSharper version"),
                "error was: {err}"
            );
        }
    }

    #[test]
    fn ordering() {
        let v = |s: &str| s.parse::<ReSharperVersion>().unwrap();
        assert!(v("9.2") < v("10.0"));
        assert!(v("2017.3") < v("2018.1"));
        assert!(v("2018.1") < v("2018.1.1"));
        assert!(v("2018.1.9") < v("2018.2"));
    }

    #[test]
    fn display() {
        assert_eq!(ReSharperVersion::new(2016, 1, 0).to_string(), "2016.1");
        assert_eq!(ReSharperVersion::new(2016, 1, 2).to_string(), "2016.1.2");
    }

    #[test]
    fn resharper_range() {
        let range = parse_resharper_range("[2018.1, 2019.1)").unwrap();
        assert!(range.contains(&ReSharperVersion::new(2018, 3, 2)));
        assert!(!range.contains(&ReSharperVersion::new(2019, 1, 0)));
    }
}
