// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host configuration for mixer adapters.
//!
//! Parses `mixer.toml` with strict validation (`deny_unknown_fields`), merges
//! the file hierarchy and `MIXER_HOST_*` environment overrides, and renders
//! problems as miette diagnostics with typo suggestions.
//!
//! ```no_run
//! use mixer_config::load_and_validate;
//!
//! let config = load_and_validate(None).expect("config errors");
//! println!("log level: {}", config.host.log_level);
//! ```

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

use std::path::Path;

pub use diagnostic::{ConfigError, render_errors};
pub use loader::{load_config, load_config_from_path, load_config_from_str};
pub use model::{AdapterSection, HostConfig, MixerConfig};

/// Load configuration and validate it.
///
/// With `path`, only that file (plus env overrides) is read; otherwise the
/// standard hierarchy is searched.
pub fn load_and_validate(path: Option<&Path>) -> Result<MixerConfig, Vec<ConfigError>> {
    let loaded = match path {
        Some(path) => loader::load_config_from_path(path),
        None => loader::load_config(),
    };
    finish(loaded)
}

/// Load configuration from a TOML string and validate it.
pub fn load_and_validate_str(toml_content: &str) -> Result<MixerConfig, Vec<ConfigError>> {
    finish(loader::load_config_from_str(toml_content))
}

fn finish(loaded: Result<MixerConfig, figment::Error>) -> Result<MixerConfig, Vec<ConfigError>> {
    match loaded {
        Ok(config) => {
            validation::validate_config(&config)?;
            tracing::debug!(adapters = config.adapters.len(), "configuration loaded");
            Ok(config)
        }
        Err(err) => Err(diagnostic::figment_to_config_errors(err)),
    }
}
