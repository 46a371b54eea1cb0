// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the adapter contract.

use thiserror::Error;

/// The error type shared by builders, adapters, sinks and the plugin registry.
#[derive(Debug, Error)]
pub enum MixerError {
    /// Invalid or unsupported configuration passed to `configure` or `new_adapter`.
    #[error("configuration error: {0}")]
    Config(String),

    /// `configure` was called on a builder that already holds settings.
    #[error("builder {builder} is already configured")]
    AlreadyConfigured { builder: String },

    /// A capability operation could not complete because of malformed input.
    #[error("evaluation error: {message}")]
    Evaluation { message: String },

    /// A sink or other external resource was unavailable.
    #[error("resource error: {message}")]
    Resource {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A capability operation was invoked after `close`.
    #[error("adapter {adapter} is closed")]
    AdapterClosed { adapter: String },

    /// Requested builder was not found in the registry.
    #[error("adapter not found: {name}")]
    AdapterNotFound { name: String },

    /// Requested builder is registered but disabled.
    #[error("adapter {name} is disabled")]
    PluginDisabled { name: String },
}

impl MixerError {
    /// Wraps an I/O failure on a sink as a [`MixerError::Resource`].
    pub fn resource(message: impl Into<String>, source: std::io::Error) -> Self {
        MixerError::Resource {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns true for errors caused by the caller's configuration.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            MixerError::Config(_) | MixerError::AlreadyConfigured { .. }
        )
    }
}
