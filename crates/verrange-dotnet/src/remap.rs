//! Mapping from wave versions to ReSharper versions.
//!
//! Waves up to 12 predate the year-based numbering and come from a fixed
//! table. Later waves encode the release directly: wave `183` is `2018.3`.

use tracing::debug;

use verrange_range::VersionRange;

use crate::error::{RemapError, WaveRangeError};
use crate::resharper::ReSharperVersion;
use crate::wave::{parse_wave_range, WaveVersion};

/// Highest wave covered by [`LEGACY_WAVES`].
const LAST_LEGACY_WAVE: u32 = 12;

/// `(wave, baseline, build)` for waves before the year-based numbering.
/// Wave 10 was never released and has no entry.
const LEGACY_WAVES: &[(u32, u32, u32)] = &[
    (1, 9, 0),
    (2, 9, 1),
    (3, 9, 2),
    (4, 10, 0),
    (5, 2016, 1),
    (6, 2016, 2),
    (7, 2016, 3),
    (8, 2017, 1),
    (9, 2017, 2),
    (11, 2017, 3),
    (12, 2018, 1),
];

/// Translate a wave version into the ReSharper release it ships with.
///
/// The wave's second component becomes the hotfix.
///
/// # Errors
/// Returns `RemapError::UnknownWave` for a wave of 12 or below that has no
/// table entry (0 and 10).
pub fn remap(wave: &WaveVersion) -> Result<ReSharperVersion, RemapError> {
    let first = wave.first();
    let (baseline, build) = if first <= LAST_LEGACY_WAVE {
        LEGACY_WAVES
            .iter()
            .find(|(legacy, _, _)| *legacy == first)
            .map(|&(_, baseline, build)| (baseline, build))
            .ok_or(RemapError::UnknownWave { first })?
    } else {
        (2000 + first / 10, first % 10)
    };
    Ok(ReSharperVersion::new(baseline, build, wave.second()))
}

/// Remap both endpoints of a wave range, keeping inclusivity as is.
///
/// # Errors
/// Returns `RemapError::UnknownWave` if either endpoint cannot be remapped.
pub fn remap_range(
    range: &VersionRange<WaveVersion>,
) -> Result<VersionRange<ReSharperVersion>, RemapError> {
    let remapped = range.try_map(remap)?;
    debug!(wave = %range, resharper = %remapped, "remapped wave range");
    Ok(remapped)
}

/// Parse a wave range and remap it to ReSharper versions.
///
/// # Errors
/// Returns `WaveRangeError::Range` for a malformed range and
/// `WaveRangeError::Remap` for an endpoint with no ReSharper counterpart.
pub fn resharper_range_from_wave_range(
    raw: &str,
) -> Result<VersionRange<ReSharperVersion>, WaveRangeError> {
    let waves = parse_wave_range(raw)?;
    Ok(remap_range(&waves)?)
}
