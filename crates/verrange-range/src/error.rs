//! Error types for verrange-range.

/// Errors produced while parsing or validating a version range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Nothing left once whitespace is removed.
    #[error("version range is blank")]
    Blank,

    /// The range opens with `[` or `(` but does not close with `]` or `)`.
    #[error("invalid version range \"{range}\": expected it to end with `]` or `)`")]
    UnclosedBracket { range: String },

    /// More than two comma-separated bounds.
    #[error("invalid version range \"{range}\": expected at most 2 comma-separated bounds, got {count}")]
    TooManyBounds { range: String, count: usize },

    /// A single bracketed bound that is not `[version]`.
    #[error("invalid version range \"{range}\": a single bound must be inclusive on both sides, e.g. `[1.0]`")]
    SingleBoundNotInclusive { range: String },

    /// Both bounds are empty.
    #[error("invalid version range \"{range}\": neither bound is specified")]
    NoBounds { range: String },

    /// A bound could not be parsed by the version scheme.
    #[error("invalid version range \"{range}\": cannot parse version \"{token}\": {reason}")]
    InvalidVersion {
        range: String,
        token: String,
        reason: String,
    },

    /// The lower bound is above the upper bound.
    #[error("invalid version range \"{range}\": lower bound {min} is greater than upper bound {max}")]
    InvertedBounds {
        range: String,
        min: String,
        max: String,
    },

    /// Both bounds are the same version and both exclude it.
    #[error("invalid version range \"{range}\": both bounds exclude {version}, so the range is empty")]
    EmptyExclusive { range: String, version: String },
}
