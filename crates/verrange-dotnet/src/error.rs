//! Error types for verrange-dotnet.

use verrange_range::RangeError;

/// A single version string is malformed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {scheme} version \"{version}\": {reason}")]
pub struct VersionError {
    /// Name of the version scheme, e.g. `"wave"`.
    pub scheme: &'static str,
    pub version: String,
    pub reason: String,
}

/// A wave version has no ReSharper counterpart.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemapError {
    #[error("unknown wave version {first}: expected one of 1-9, 11, 12, or a wave above 12")]
    UnknownWave { first: u32 },
}

/// Errors from parsing a wave range and remapping it in one step.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaveRangeError {
    #[error("{0}")]
    Range(#[from] RangeError),

    #[error("{0}")]
    Remap(#[from] RemapError),
}
