//! Parse `verrange.toml` plugin descriptors.

pub mod descriptor;

pub use descriptor::{DescriptorError, PluginDescriptor};
