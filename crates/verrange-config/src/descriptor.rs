use serde::Deserialize;
use std::path::Path;
use tracing::debug;

use verrange_dotnet::{remap_range, ReSharperVersion, WaveRangeError, WaveVersion};
use verrange_range::VersionRange;

/// Dependency id under which a plugin declares its supported SDK waves.
pub const WAVE_DEPENDENCY_ID: &str = "Wave";

/// The `verrange.toml` plugin descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginDescriptor {
    pub plugin: PluginInfo,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PluginInfo {
    pub id: String,
    pub version: String,
}

/// A declared dependency and the range of its versions the plugin accepts.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Dependency {
    pub id: String,
    pub version: String,
}

impl PluginDescriptor {
    /// Read and parse a `verrange.toml` from the given path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_path(path: &Path) -> Result<Self, DescriptorError> {
        let content = std::fs::read_to_string(path).map_err(|e| DescriptorError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        let descriptor = Self::parse(&content, &path.display().to_string())?;
        debug!(
            path = %path.display(),
            plugin = %descriptor.plugin.id,
            dependencies = descriptor.dependencies.len(),
            "loaded plugin descriptor"
        );
        Ok(descriptor)
    }

    /// Parse a descriptor from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text is not a valid descriptor.
    pub fn from_toml_str(content: &str) -> Result<Self, DescriptorError> {
        Self::parse(content, "<string>")
    }

    fn parse(content: &str, path: &str) -> Result<Self, DescriptorError> {
        toml::from_str(content).map_err(|e| DescriptorError::Parse {
            path: path.to_owned(),
            source: e,
        })
    }

    /// The wave range declared by the `Wave` dependency, matched case-insensitively.
    ///
    /// Returns `Ok(None)` when the plugin declares no such dependency.
    ///
    /// # Errors
    /// Returns `DescriptorError::InvalidWaveRange` if the declared range is malformed.
    pub fn wave_range(&self) -> Result<Option<VersionRange<WaveVersion>>, DescriptorError> {
        let Some(dependency) = self
            .dependencies
            .iter()
            .find(|d| d.id.eq_ignore_ascii_case(WAVE_DEPENDENCY_ID))
        else {
            return Ok(None);
        };
        let range = verrange_dotnet::parse_wave_range(&dependency.version)
            .map_err(|e| self.invalid_wave_range(e.into()))?;
        Ok(Some(range))
    }

    /// The ReSharper releases the plugin supports, remapped from its wave range.
    ///
    /// # Errors
    /// Returns `DescriptorError::InvalidWaveRange` if the wave range is
    /// malformed or an endpoint has no ReSharper counterpart.
    pub fn compatible_resharper_range(
        &self,
    ) -> Result<Option<VersionRange<ReSharperVersion>>, DescriptorError> {
        let Some(waves) = self.wave_range()? else {
            return Ok(None);
        };
        let range = remap_range(&waves).map_err(|e| self.invalid_wave_range(e.into()))?;
        Ok(Some(range))
    }

    /// Whether the plugin can be installed into the given ReSharper release.
    ///
    /// A plugin without a `Wave` dependency is compatible with every release.
    ///
    /// # Errors
    /// See [`PluginDescriptor::compatible_resharper_range`].
    pub fn is_compatible_with(&self, ide: &ReSharperVersion) -> Result<bool, DescriptorError> {
        Ok(self
            .compatible_resharper_range()?
            .is_none_or(|range| range.contains(ide)))
    }

    fn invalid_wave_range(&self, source: WaveRangeError) -> DescriptorError {
        DescriptorError::InvalidWaveRange {
            plugin: self.plugin.id.clone(),
            source,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DescriptorError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid verrange.toml at {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("plugin {plugin} declares an invalid wave range: {source}")]
    InvalidWaveRange {
        plugin: String,
        source: WaveRangeError,
    },
}
