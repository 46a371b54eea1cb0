// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder registry.
//!
//! `BuilderRegistry` stores a `BuilderEntry` per builder name. Each entry keeps
//! the factory, its status, and, once activated, the live builder. Because a
//! builder accepts only one `configure`, certification always runs against a
//! fresh instance from the factory and never consumes the live one.

use std::collections::HashMap;
use std::sync::Arc;

use mixer_core::{Adapter, Builder, Config, MixerError, VerificationReport, verify_builder};

/// Creates a fresh, unconfigured builder.
pub type BuilderFactory = fn() -> Box<dyn Builder>;

/// Status of a builder in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Builder may be activated and used.
    Enabled,
    /// Builder is explicitly disabled by the host.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single entry in the builder registry.
pub struct BuilderEntry {
    pub name: String,
    pub description: String,
    pub version: semver::Version,
    pub status: PluginStatus,
    factory: BuilderFactory,
    live: Option<Arc<dyn Builder>>,
}

impl BuilderEntry {
    /// True once the live builder has been created and configured.
    pub fn is_active(&self) -> bool {
        self.live.is_some()
    }
}

impl std::fmt::Debug for BuilderEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BuilderEntry")
            .field("name", &self.name)
            .field("version", &self.version)
            .field("status", &self.status)
            .field("active", &self.live.is_some())
            .finish()
    }
}

/// Registry of compiled-in builders, keyed by builder name.
pub struct BuilderRegistry {
    entries: HashMap<String, BuilderEntry>,
}

impl BuilderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a builder factory with status `Enabled`.
    pub fn register(&mut self, factory: BuilderFactory) {
        self.register_with_status(factory, PluginStatus::Enabled);
    }

    /// Register a builder factory with an explicit status.
    ///
    /// The entry is keyed by the name the builder reports. Registering the
    /// same name again replaces the earlier entry.
    pub fn register_with_status(&mut self, factory: BuilderFactory, status: PluginStatus) {
        let sample = factory();
        let name = sample.name().to_string();
        tracing::debug!(builder = %name, %status, "builder registered");
        self.entries.insert(
            name.clone(),
            BuilderEntry {
                name,
                description: sample.description().to_string(),
                version: sample.version(),
                status,
                factory,
                live: None,
            },
        );
    }

    /// Get a registry entry by name.
    pub fn get(&self, name: &str) -> Option<&BuilderEntry> {
        self.entries.get(name)
    }

    /// List all entries, sorted by name.
    pub fn list_all(&self) -> Vec<&BuilderEntry> {
        let mut entries: Vec<&BuilderEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        entries
    }

    /// Names of enabled entries, sorted.
    pub fn enabled_names(&self) -> Vec<String> {
        self.list_all()
            .into_iter()
            .filter(|e| e.status == PluginStatus::Enabled)
            .map(|e| e.name.clone())
            .collect()
    }

    /// Toggle an entry's enabled status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), MixerError> {
        let entry = self.entry_mut(name)?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Certify a builder against the lifecycle contract using a fresh instance.
    pub async fn certify(&self, name: &str) -> Result<VerificationReport, MixerError> {
        let entry = self.entries.get(name).ok_or_else(|| not_found(name))?;
        let candidate = (entry.factory)();
        Ok(verify_builder(candidate.as_ref()).await)
    }

    /// Certify every registered builder, in name order.
    pub async fn certify_all(&self) -> Vec<VerificationReport> {
        let mut reports = Vec::with_capacity(self.entries.len());
        for entry in self.list_all() {
            let candidate = (entry.factory)();
            reports.push(verify_builder(candidate.as_ref()).await);
        }
        reports
    }

    /// Create and configure the live builder for `name`.
    ///
    /// `None` configures it with the builder's defaults. A builder can only be
    /// activated once.
    pub fn activate(
        &mut self,
        name: &str,
        config: Option<&Config>,
    ) -> Result<Arc<dyn Builder>, MixerError> {
        let entry = self.entry_mut(name)?;
        if entry.status == PluginStatus::Disabled {
            return Err(MixerError::PluginDisabled {
                name: name.to_string(),
            });
        }
        if entry.live.is_some() {
            return Err(MixerError::AlreadyConfigured {
                builder: name.to_string(),
            });
        }

        let builder: Arc<dyn Builder> = Arc::from((entry.factory)());
        match config {
            Some(config) => builder.configure(config)?,
            None => builder.configure(&builder.default_builder_config())?,
        }
        tracing::info!(builder = %name, "builder activated");
        entry.live = Some(Arc::clone(&builder));
        Ok(builder)
    }

    /// Construct an adapter from the live builder for `name`.
    ///
    /// Activates the builder with defaults first if needed. `None` uses the
    /// builder's default adapter configuration.
    pub fn new_adapter(
        &mut self,
        name: &str,
        config: Option<&Config>,
    ) -> Result<Box<dyn Adapter>, MixerError> {
        let (status, live) = match self.get(name) {
            Some(entry) => (entry.status, entry.live.clone()),
            None => return Err(not_found(name)),
        };
        if status == PluginStatus::Disabled {
            return Err(MixerError::PluginDisabled {
                name: name.to_string(),
            });
        }
        let builder = match live {
            Some(live) => live,
            None => self.activate(name, None)?,
        };

        match config {
            Some(config) => builder.new_adapter(config),
            None => builder.new_adapter(&builder.default_adapter_config()),
        }
    }

    /// Returns the number of registered builders.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no builders are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry_mut(&mut self, name: &str) -> Result<&mut BuilderEntry, MixerError> {
        self.entries.get_mut(name).ok_or_else(|| not_found(name))
    }
}

impl Default for BuilderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(name: &str) -> MixerError {
    MixerError::AdapterNotFound {
        name: name.to_string(),
    }
}
