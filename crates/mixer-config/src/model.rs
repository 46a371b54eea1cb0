// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model for the mixer host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` so typos are reported at
//! startup instead of being ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use mixer_core::Config;

/// Top-level host configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MixerConfig {
    /// Host process settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Per-builder sections keyed by builder name.
    #[serde(default)]
    pub adapters: BTreeMap<String, AdapterSection>,
}

impl MixerConfig {
    /// Section for `name`, if the file mentions it.
    pub fn adapter(&self, name: &str) -> Option<&AdapterSection> {
        self.adapters.get(name)
    }
}

/// Host process configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Certify every builder before activating any of them.
    #[serde(default = "default_true")]
    pub certify_on_start: bool,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            certify_on_start: true,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

/// Settings for one builder.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterSection {
    /// Disabled builders are never activated.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Builder parameter body. Omitted means the builder's defaults.
    #[serde(default)]
    pub builder: Option<serde_json::Value>,

    /// Adapter parameter body. Omitted means the builder's defaults.
    #[serde(default)]
    pub adapter: Option<serde_json::Value>,
}

impl Default for AdapterSection {
    fn default() -> Self {
        Self {
            enabled: true,
            builder: None,
            adapter: None,
        }
    }
}

impl AdapterSection {
    /// Builder configuration tagged for `name`, when parameters are given.
    pub fn builder_config(&self, name: &str) -> Option<Config> {
        self.builder
            .clone()
            .map(|params| Config::builder_config(name, params))
    }

    /// Adapter configuration tagged for `name`, when parameters are given.
    pub fn adapter_config(&self, name: &str) -> Option<Config> {
        self.adapter
            .clone()
            .map(|params| Config::adapter_config(name, params))
    }
}
