// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration loading with Figment.
//!
//! Lookup order: `./mixer.toml` > `~/.config/mixer/mixer.toml` > `/etc/mixer/mixer.toml`,
//! with `MIXER_HOST_*` environment variables applied last.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::MixerConfig;

/// Load configuration from the standard hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/mixer/mixer.toml`
/// 3. `~/.config/mixer/mixer.toml`
/// 4. `./mixer.toml`
/// 5. `MIXER_HOST_*` environment variables
pub fn load_config() -> Result<MixerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixerConfig::default()))
        .merge(Toml::file("/etc/mixer/mixer.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("mixer/mixer.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("mixer.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no file lookup, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<MixerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixerConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from one explicit file with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<MixerConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(MixerConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Environment provider for the `[host]` section.
///
/// Only `MIXER_HOST_*` is read, mapped with `map()` rather than `split("_")`
/// so `MIXER_HOST_LOG_LEVEL` lands on `host.log_level`, not `host.log.level`.
/// Keys keep the case they had in the environment, so compare lowercased.
fn env_provider() -> Env {
    Env::prefixed("MIXER_")
        .filter(|key| key.as_str().to_ascii_lowercase().starts_with("host_"))
        .map(|key| {
            key.as_str()
                .to_ascii_lowercase()
                .replacen("host_", "host.", 1)
                .into()
        })
}
