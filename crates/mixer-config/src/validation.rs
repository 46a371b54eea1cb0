// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation.

use crate::diagnostic::ConfigError;
use crate::model::MixerConfig;

/// Levels accepted by `host.log_level`.
pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration.
///
/// Collects every problem instead of stopping at the first one.
pub fn validate_config(config: &MixerConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    let level = config.host.log_level.trim();
    if !LOG_LEVELS.contains(&level) {
        errors.push(ConfigError::Validation {
            message: format!(
                "host.log_level `{level}` is not one of: {}",
                LOG_LEVELS.join(", ")
            ),
        });
    }

    for (name, section) in &config.adapters {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: "adapter section names must not be empty".to_string(),
            });
        }
        for (field, params) in [("builder", &section.builder), ("adapter", &section.adapter)] {
            if let Some(params) = params
                && !params.is_object()
            {
                errors.push(ConfigError::Validation {
                    message: format!("adapters.{name}.{field} must be a table"),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
