// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder trait: the factory side of the adapter contract.

use crate::config::Config;
use crate::error::MixerError;
use crate::traits::adapter::Adapter;

/// Factory that validates configuration and produces adapters.
///
/// A builder is created once per plugin type and lives for the process. It is
/// configured at most once, before its first adapter is constructed; a second
/// `configure` is rejected with [`MixerError::AlreadyConfigured`]. The values
/// returned by `default_builder_config` and `default_adapter_config` must
/// always be accepted by `configure` and `new_adapter` respectively.
pub trait Builder: Send + Sync + 'static {
    /// Builder identity. Configurations are tagged with this name.
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    fn version(&self) -> semver::Version;

    /// Returns a builder configuration that `configure` always accepts.
    fn default_builder_config(&self) -> Config;

    /// Applies builder-level settings.
    fn configure(&self, config: &Config) -> Result<(), MixerError>;

    /// Returns an adapter configuration that `new_adapter` always accepts.
    fn default_adapter_config(&self) -> Config;

    /// Validates `config` and constructs a ready-to-use adapter.
    ///
    /// A malformed or foreign configuration yields [`MixerError::Config`].
    fn new_adapter(&self, config: &Config) -> Result<Box<dyn Adapter>, MixerError>;
}
