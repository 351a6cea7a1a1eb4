//! The interval grammar.
//!
//! ```text
//! range     := bracketed | bare
//! bracketed := ('[' | '(') bound [',' bound] (']' | ')')
//! bound     := version | ""
//! bare      := version
//! ```
//!
//! Whitespace anywhere in the input is ignored.

use std::cmp::Ordering;
use std::fmt;

use crate::error::RangeError;
use crate::range::{Version, VersionRange};

/// Parse a range of a [`Version`] type.
///
/// # Errors
/// See [`parse_range_with`].
pub fn parse_range<V: Version>(raw: &str) -> Result<VersionRange<V>, RangeError> {
    parse_range_with(raw, V::parse, VersionRange::from_bounds)
}

/// Parse a range using caller-supplied version parsing and construction.
///
/// - `[a,b]`, `(a,b)`, `[a,b)`, `(a,b]` set inclusivity per bracket.
/// - An empty side (`[,b]`, `(a,]`) is unbounded.
/// - `[a]` is the single version `a`, inclusive on both sides.
/// - A bare `a` yields `min = max = a` with only the lower bound included.
///
/// `make_range` receives `(min, min_included, max, max_included)` after
/// the bounds have been validated.
///
/// # Errors
/// Returns a `RangeError` when the input is blank, the brackets are
/// malformed, there are more than two bounds, a single bound is not `[a]`,
/// both bounds are empty, a bound fails `parse_version`, the lower bound
/// exceeds the upper bound, or equal bounds are both excluded.
pub fn parse_range_with<V, E, R, P, M>(
    raw: &str,
    parse_version: P,
    make_range: M,
) -> Result<R, RangeError>
where
    V: Ord + Clone + fmt::Display,
    E: fmt::Display,
    P: Fn(&str) -> Result<V, E>,
    M: FnOnce(Option<V>, bool, Option<V>, bool) -> R,
{
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(RangeError::Blank);
    }
    let range = raw.trim();

    let (min, min_included, max, max_included) = match compact.chars().next() {
        Some(open @ ('[' | '(')) => {
            let min_included = open == '[';
            let (close, max_included) = match compact.chars().last() {
                Some(']') => (']', true),
                Some(')') => (')', false),
                _ => return Err(unclosed(range)),
            };
            let Some(body) = compact
                .strip_prefix(open)
                .and_then(|rest| rest.strip_suffix(close))
            else {
                return Err(unclosed(range));
            };

            let bounds: Vec<&str> = body.split(',').collect();
            match bounds.as_slice() {
                [single] => {
                    if !(min_included && max_included) {
                        return Err(RangeError::SingleBoundNotInclusive {
                            range: range.to_owned(),
                        });
                    }
                    let Some(version) = parse_bound(range, single, &parse_version)? else {
                        return Err(no_bounds(range));
                    };
                    (Some(version.clone()), true, Some(version), true)
                }
                [lower, upper] => {
                    let min = parse_bound(range, lower, &parse_version)?;
                    let max = parse_bound(range, upper, &parse_version)?;
                    if min.is_none() && max.is_none() {
                        return Err(no_bounds(range));
                    }
                    (min, min_included, max, max_included)
                }
                _ => {
                    return Err(RangeError::TooManyBounds {
                        range: range.to_owned(),
                        count: bounds.len(),
                    })
                }
            }
        }
        _ => {
            let Some(version) = parse_bound(range, &compact, &parse_version)? else {
                return Err(RangeError::Blank);
            };
            (Some(version.clone()), true, Some(version), false)
        }
    };

    check_bounds(range, min.as_ref(), min_included, max.as_ref(), max_included)?;
    Ok(make_range(min, min_included, max, max_included))
}

/// Reject `min > max`, and `min == max` when neither side is included.
pub(crate) fn check_bounds<V: Ord + fmt::Display>(
    range: &str,
    min: Option<&V>,
    min_included: bool,
    max: Option<&V>,
    max_included: bool,
) -> Result<(), RangeError> {
    let (Some(min), Some(max)) = (min, max) else {
        return Ok(());
    };
    match min.cmp(max) {
        Ordering::Greater => Err(RangeError::InvertedBounds {
            range: range.to_owned(),
            min: min.to_string(),
            max: max.to_string(),
        }),
        Ordering::Equal if !min_included && !max_included => Err(RangeError::EmptyExclusive {
            range: range.to_owned(),
            version: min.to_string(),
        }),
        _ => Ok(()),
    }
}

/// An empty token is an unbounded side.
fn parse_bound<V, E, P>(range: &str, token: &str, parse_version: &P) -> Result<Option<V>, RangeError>
where
    E: fmt::Display,
    P: Fn(&str) -> Result<V, E>,
{
    if token.is_empty() {
        return Ok(None);
    }
    parse_version(token)
        .map(Some)
        .map_err(|e| RangeError::InvalidVersion {
            range: range.to_owned(),
            token: token.to_owned(),
            reason: e.to_string(),
        })
}

fn unclosed(range: &str) -> RangeError {
    RangeError::UnclosedBracket {
        range: range.to_owned(),
    }
}

fn no_bounds(range: &str) -> RangeError {
    RangeError::NoBounds {
        range: range.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::testing::Build;

    fn parse(raw: &str) -> Result<VersionRange<Build>, RangeError> {
        parse_range(raw)
    }

    fn ok(raw: &str) -> VersionRange<Build> {
        parse(raw).unwrap_or_else(|e| panic!("{e}"))
    }

    #[test]
    fn closed_range() {
        let r = ok("[1,5]");
        assert_eq!(r.min(), Some(&Build(1)));
        assert_eq!(r.max(), Some(&Build(5)));
        assert!(r.min_included());
        assert!(r.max_included());
    }

    #[test]
    fn open_range() {
        let r = ok("(1,5)");
        assert_eq!(r.min(), Some(&Build(1)));
        assert_eq!(r.max(), Some(&Build(5)));
        assert!(!r.min_included());
        assert!(!r.max_included());
    }

    #[test]
    fn half_open_ranges() {
        let r = ok("[1,5)");
        assert!(r.min_included());
        assert!(!r.max_included());

        let r = ok("(1,5]");
        assert!(!r.min_included());
        assert!(r.max_included());
    }

    #[test]
    fn half_open_ranges_allow_equal_bounds() {
        let r = ok("[3,3)");
        assert_eq!(r.min(), Some(&Build(3)));
        assert_eq!(r.max(), Some(&Build(3)));

        let r = ok("(3,3]");
        assert_eq!(r.min(), r.max());
    }

    #[test]
    fn closed_range_allows_equal_bounds() {
        let r = ok("[3,3]");
        assert!(r.contains(&Build(3)));
    }

    #[test]
    fn unbounded_below() {
        let r = ok("[,5]");
        assert_eq!(r.min(), None);
        assert_eq!(r.max(), Some(&Build(5)));
        assert!(r.max_included());
    }

    #[test]
    fn unbounded_above() {
        let r = ok("[1,]");
        assert_eq!(r.min(), Some(&Build(1)));
        assert!(r.min_included());
        assert_eq!(r.max(), None);
    }

    #[test]
    fn single_inclusive_bound() {
        let r = ok("[4]");
        assert_eq!(r.min(), Some(&Build(4)));
        assert_eq!(r.max(), Some(&Build(4)));
        assert!(r.min_included());
        assert!(r.max_included());
    }

    #[test]
    fn single_bound_with_exclusive_side_is_rejected() {
        for raw in ["(4]", "[4)", "(4)"] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(err, RangeError::SingleBoundNotInclusive { .. }),
                "raw {raw} gave: {err}"
            );
        }
    }

    #[test]
    fn bare_version_includes_only_lower_bound() {
        // Kept for compatibility: a bare version is [v,v), not [v,v].
        let r = ok("4");
        assert_eq!(r.min(), Some(&Build(4)));
        assert_eq!(r.max(), Some(&Build(4)));
        assert!(r.min_included());
        assert!(!r.max_included());
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(ok("  [ 1 , 5 ) "), ok("[1,5)"));
        assert_eq!(ok(" 1 2 "), ok("12"));
        assert_eq!(ok("\t[\n7\n]"), ok("[7]"));
    }

    #[test]
    fn blank_input_is_rejected() {
        assert_eq!(parse("").unwrap_err(), RangeError::Blank);
        assert_eq!(parse("   \t\n").unwrap_err(), RangeError::Blank);
    }

    #[test]
    fn missing_close_bracket_is_rejected() {
        for raw in ["[1,5", "(1,5", "[", "(", "[1,5}", "((1,5"] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(err, RangeError::UnclosedBracket { .. }),
                "raw {raw} gave: {err}"
            );
        }
    }

    #[test]
    fn too_many_bounds_is_rejected() {
        let err = parse("[1,2,3]").unwrap_err();
        assert_eq!(
            err,
            RangeError::TooManyBounds {
                range: "[1,2,3]".to_owned(),
                count: 3,
            }
        );
    }

    #[test]
    fn no_bounds_is_rejected() {
        for raw in ["[]", "[,]", "(,)", "[ , ]"] {
            let err = parse(raw).unwrap_err();
            assert!(
                matches!(err, RangeError::NoBounds { .. }),
                "raw {raw} gave: {err}"
            );
        }
    }

    #[test]
    fn empty_single_bound_with_exclusive_side_reports_inclusivity() {
        let err = parse("(]").unwrap_err();
        assert!(
            matches!(err, RangeError::SingleBoundNotInclusive { .. }),
            "error was: {err}"
        );
    }

    #[test]
    fn inverted_bounds_are_rejected() {
        let err = parse("[5,1]").unwrap_err();
        assert_eq!(
            err,
            RangeError::InvertedBounds {
                range: "[5,1]".to_owned(),
                min: "5".to_owned(),
                max: "1".to_owned(),
            }
        );
    }

    #[test]
    fn equal_exclusive_bounds_are_rejected() {
        let err = parse("(3,3)").unwrap_err();
        assert!(
            matches!(err, RangeError::EmptyExclusive { .. }),
            "error was: {err}"
        );
    }

    #[test]
    fn invalid_version_is_reported_with_token() {
        let err = parse("[1,x]").unwrap_err();
        let RangeError::InvalidVersion { token, reason, .. } = &err else {
            panic!("unexpected error: {err}");
        };
        assert_eq!(token, "x");
        assert!(!reason.is_empty());
        assert!(err.to_string().contains("[1,x]"), "error was: {err}");
    }

    #[test]
    fn invalid_bare_version_is_reported() {
        let err = parse("abc").unwrap_err();
        assert!(
            matches!(err, RangeError::InvalidVersion { .. }),
            "error was: {err}"
        );
    }

    #[test]
    fn closing_bracket_without_opening_is_a_bare_version() {
        // Only a leading bracket switches to the bracketed grammar.
        let err = parse("1,5]").unwrap_err();
        assert!(
            matches!(err, RangeError::InvalidVersion { .. }),
            "error was: {err}"
        );
    }

    #[test]
    fn custom_factory_receives_validated_bounds() {
        let parts = parse_range_with(
            "(2,9]",
            |s: &str| s.parse::<u32>(),
            |min, min_incl, max, max_incl| (min, min_incl, max, max_incl),
        )
        .unwrap();
        assert_eq!(parts, (Some(2), false, Some(9), true));
    }

    #[test]
    fn custom_factory_not_called_on_error() {
        let mut called = false;
        let result = parse_range_with(
            "[9,2]",
            |s: &str| s.parse::<u32>(),
            |_, _, _, _| called = true,
        );
        assert!(result.is_err());
        assert!(!called);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn closed_range_keeps_bounds(a in 0u32..10_000, b in 0u32..10_000) {
                let (lo, hi) = (a.min(b), a.max(b));
                let r = ok(&format!("[{lo},{hi}]"));
                prop_assert_eq!(r.min(), Some(&Build(lo)));
                prop_assert_eq!(r.max(), Some(&Build(hi)));
                prop_assert!(r.min_included() && r.max_included());
            }

            #[test]
            fn open_range_fails_only_on_equal_bounds(a in 0u32..1_000, b in 0u32..1_000) {
                let (lo, hi) = (a.min(b), a.max(b));
                let result = parse(&format!("({lo},{hi})"));
                if lo == hi {
                    prop_assert!(
                        matches!(result, Err(RangeError::EmptyExclusive { .. })),
                        "expected EmptyExclusive error"
                    );
                } else {
                    let r = result.unwrap();
                    prop_assert!(!r.min_included() && !r.max_included());
                }
            }

            #[test]
            fn inverted_bounds_always_fail(a in 0u32..10_000, b in 0u32..10_000) {
                prop_assume!(a != b);
                let (lo, hi) = (a.min(b), a.max(b));
                for (open, close) in [('[', ']'), ('(', ')'), ('[', ')'), ('(', ']')] {
                    let result = parse(&format!("{open}{hi},{lo}{close}"));
                    prop_assert!(
                        matches!(result, Err(RangeError::InvertedBounds { .. })),
                        "expected InvertedBounds error"
                    );
                }
            }

            #[test]
            fn display_round_trips(
                a in 0u32..1_000,
                b in 0u32..1_000,
                min_included in any::<bool>(),
                max_included in any::<bool>(),
            ) {
                let (lo, hi) = (a.min(b), a.max(b));
                prop_assume!(lo != hi || min_included || max_included);
                let open = if min_included { '[' } else { '(' };
                let close = if max_included { ']' } else { ')' };
                let r = ok(&format!("{open}{lo},{hi}{close}"));
                prop_assert_eq!(ok(&r.to_string()), r);
            }

            #[test]
            fn constructed_ranges_round_trip(
                min in proptest::option::of(0u32..1_000),
                max in proptest::option::of(0u32..1_000),
                min_included in any::<bool>(),
                max_included in any::<bool>(),
            ) {
                let built = VersionRange::new(
                    min.map(Build),
                    min_included,
                    max.map(Build),
                    max_included,
                );
                if let Ok(r) = built {
                    prop_assert_eq!(ok(&r.to_string()), r);
                } else {
                    prop_assert!(parse(&VersionRange::from_bounds(
                        min.map(Build),
                        min_included,
                        max.map(Build),
                        max_included,
                    )
                    .to_string())
                    .is_err());
                }
            }
        }
    }
}
