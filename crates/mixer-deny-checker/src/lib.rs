// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Deny-list checker adapter.
//!
//! The rule set is empty: nothing is denied and every candidate evaluates to
//! `false`. The adapter exists to exercise the checker capability of the
//! contract without any matching logic in the way.

use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use mixer_core::{Adapter, Builder, Config, ConfigKind, ListChecker, MixerError};

/// Builder name used to tag deny-checker configurations.
pub const BUILDER_NAME: &str = "deny-checker";

/// Builder-level parameters. None are currently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderParams {}

/// Adapter-level parameters. None are currently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterParams {}

/// Builds [`DenyChecker`] adapters.
#[derive(Debug, Default)]
pub struct DenyCheckerBuilder {
    params: OnceLock<BuilderParams>,
}

impl DenyCheckerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Factory suitable for registering with a plugin registry.
    pub fn boxed() -> Box<dyn Builder> {
        Box::new(Self::new())
    }
}

impl Builder for DenyCheckerBuilder {
    fn name(&self) -> &str {
        BUILDER_NAME
    }

    fn description(&self) -> &str {
        "Deny-list checker that denies nothing"
    }

    fn version(&self) -> semver::Version {
        semver::Version::new(0, 1, 0)
    }

    fn default_builder_config(&self) -> Config {
        Config::builder_config(BUILDER_NAME, json!({}))
    }

    fn configure(&self, config: &Config) -> Result<(), MixerError> {
        let params: BuilderParams = config.decode(BUILDER_NAME, ConfigKind::Builder)?;
        self.params
            .set(params)
            .map_err(|_| MixerError::AlreadyConfigured {
                builder: BUILDER_NAME.to_string(),
            })?;
        tracing::debug!(builder = BUILDER_NAME, "builder configured");
        Ok(())
    }

    fn default_adapter_config(&self) -> Config {
        Config::adapter_config(BUILDER_NAME, json!({}))
    }

    fn new_adapter(&self, config: &Config) -> Result<Box<dyn Adapter>, MixerError> {
        let _params: AdapterParams = config.decode(BUILDER_NAME, ConfigKind::Adapter)?;
        tracing::debug!(builder = BUILDER_NAME, "adapter constructed");
        Ok(Box::new(DenyChecker::new()))
    }
}

/// Checker adapter whose rule set matches nothing.
#[derive(Debug, Default)]
pub struct DenyChecker {
    closed: AtomicBool,
}

impl DenyChecker {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Adapter for DenyChecker {
    fn name(&self) -> &str {
        BUILDER_NAME
    }

    fn as_list_checker(&self) -> Option<&dyn ListChecker> {
        Some(self)
    }

    async fn close(&self) -> Result<(), MixerError> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            tracing::debug!(adapter = BUILDER_NAME, "adapter closed");
        }
        Ok(())
    }
}

#[async_trait]
impl ListChecker for DenyChecker {
    async fn check_list(&self, _candidate: &str) -> Result<bool, MixerError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(MixerError::AdapterClosed {
                adapter: BUILDER_NAME.to_string(),
            });
        }
        Ok(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mixer_core::Capability;

    #[test]
    fn second_configure_is_rejected() {
        let builder = DenyCheckerBuilder::new();
        builder.configure(&builder.default_builder_config()).unwrap();

        let err = builder
            .configure(&builder.default_builder_config())
            .unwrap_err();
        assert!(matches!(err, MixerError::AlreadyConfigured { .. }));
    }

    #[test]
    fn foreign_configuration_is_rejected() {
        let builder = DenyCheckerBuilder::new();
        let foreign = Config::adapter_config("json-logger", json!({}));
        assert!(matches!(
            builder.new_adapter(&foreign),
            Err(MixerError::Config(_))
        ));

        // A builder config is not an adapter config, even for the same builder.
        let wrong_kind = builder.default_builder_config();
        assert!(builder.new_adapter(&wrong_kind).is_err());
    }

    #[test]
    fn unknown_parameters_are_rejected() {
        let builder = DenyCheckerBuilder::new();
        let config = Config::adapter_config(BUILDER_NAME, json!({ "deny": ["ABC"] }));
        let err = builder.new_adapter(&config).err().expect("should reject");
        assert!(err.to_string().contains("unknown field"));

        let config = Config::builder_config(BUILDER_NAME, json!("not a table"));
        assert!(builder.configure(&config).unwrap_err().is_config());
    }

    #[test]
    fn adapter_exposes_only_checker_capability() {
        let builder = DenyCheckerBuilder::new();
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();
        assert_eq!(adapter.capabilities(), vec![Capability::ListChecker]);
        assert!(adapter.as_logger().is_none());
    }

    #[tokio::test]
    async fn check_after_close_is_an_error() {
        let checker = DenyChecker::new();
        assert!(!checker.check_list("ABC").await.unwrap());

        checker.close().await.unwrap();
        checker.close().await.unwrap();
        assert!(matches!(
            checker.check_list("ABC").await,
            Err(MixerError::AdapterClosed { .. })
        ));
    }
}
