#![forbid(unsafe_code)]
//! .NET plugin version schemes: the legacy SDK "wave" numbering and the
//! ReSharper `baseline.build[.hotfix]` numbering, plus the mapping from the
//! former to the latter.

mod component;
pub mod error;
pub mod remap;
pub mod resharper;
pub mod wave;

pub use error::{RemapError, VersionError, WaveRangeError};
pub use remap::{remap, remap_range, resharper_range_from_wave_range};
pub use resharper::{parse_resharper_range, ReSharperVersion};
pub use wave::{parse_wave_range, WaveVersion};
