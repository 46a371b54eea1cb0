// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder-tagged configuration values.
//!
//! A [`Config`] carries the name of the builder it was produced for, whether it
//! configures the builder itself or a single adapter, and a JSON parameter
//! body. Builders decode it into their own parameter record with
//! [`Config::decode`], which rejects values meant for another builder instead of
//! accepting them by structural coincidence.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use strum::Display;

use crate::error::MixerError;

/// Which half of the contract a configuration targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ConfigKind {
    /// Consumed by `Builder::configure`.
    Builder,
    /// Consumed by `Builder::new_adapter`.
    Adapter,
}

/// Opaque configuration value owned by one builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    builder: String,
    kind: ConfigKind,
    params: serde_json::Value,
}

impl Config {
    /// Builder-level configuration for the builder named `builder`.
    pub fn builder_config(builder: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            builder: builder.into(),
            kind: ConfigKind::Builder,
            params,
        }
    }

    /// Adapter-level configuration for the builder named `builder`.
    pub fn adapter_config(builder: impl Into<String>, params: serde_json::Value) -> Self {
        Self {
            builder: builder.into(),
            kind: ConfigKind::Adapter,
            params,
        }
    }

    /// Name of the builder this configuration belongs to.
    pub fn builder(&self) -> &str {
        &self.builder
    }

    pub fn kind(&self) -> ConfigKind {
        self.kind
    }

    /// Checks the tag and kind, then decodes the body into `T`.
    pub fn decode<T: DeserializeOwned>(
        &self,
        builder: &str,
        kind: ConfigKind,
    ) -> Result<T, MixerError> {
        if self.builder != builder {
            return Err(MixerError::Config(format!(
                "configuration is for builder '{}', not '{builder}'",
                self.builder
            )));
        }
        if self.kind != kind {
            return Err(MixerError::Config(format!(
                "{builder}: expected {kind} configuration, got {}",
                self.kind
            )));
        }
        serde_json::from_value(self.params.clone())
            .map_err(|e| MixerError::Config(format!("{builder}: invalid {kind} parameters: {e}")))
    }
}
