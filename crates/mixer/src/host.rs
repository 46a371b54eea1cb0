// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host wiring: builds the registry, applies configuration, and drives
//! adapters for the CLI subcommands.

use mixer_config::MixerConfig;
use mixer_core::{Adapter, Capability, LogEntry, MixerError, VerificationReport};
use mixer_plugin::BuilderRegistry;

/// Registry holding every builder compiled into this binary.
pub fn builtin_registry() -> BuilderRegistry {
    #[allow(unused_mut)]
    let mut registry = BuilderRegistry::new();
    #[cfg(feature = "deny-checker")]
    registry.register(mixer_deny_checker::DenyCheckerBuilder::boxed);
    #[cfg(feature = "json-logger")]
    registry.register(mixer_json_logger::JsonLoggerBuilder::boxed);
    registry
}

/// A registry bound to the host configuration.
pub struct Host {
    registry: BuilderRegistry,
    config: MixerConfig,
}

impl Host {
    /// Applies the `enabled` flag of every configured section.
    ///
    /// A section naming a builder that is not compiled in is an error.
    pub fn new(mut registry: BuilderRegistry, config: MixerConfig) -> Result<Self, MixerError> {
        for (name, section) in &config.adapters {
            registry.set_enabled(name, section.enabled)?;
        }
        Ok(Self { registry, config })
    }

    pub fn registry(&self) -> &BuilderRegistry {
        &self.registry
    }

    /// Certifies every builder and disables the ones that fail.
    pub async fn certify_and_gate(&mut self) -> Vec<VerificationReport> {
        let reports = self.registry.certify_all().await;
        for report in reports.iter().filter(|r| !r.passed()) {
            tracing::warn!(builder = %report.builder, "disabling builder that failed certification");
            if let Err(e) = self.registry.set_enabled(&report.builder, false) {
                tracing::warn!(builder = %report.builder, error = %e, "could not disable builder");
            }
        }
        reports
    }

    /// Activates every enabled builder with its configured builder parameters.
    pub fn activate_enabled(&mut self) -> Result<(), MixerError> {
        for name in self.registry.enabled_names() {
            let config = self
                .config
                .adapter(&name)
                .and_then(|section| section.builder_config(&name));
            self.registry.activate(&name, config.as_ref())?;
        }
        Ok(())
    }

    /// Constructs one adapter per enabled builder and keeps those exposing `capability`.
    ///
    /// Adapters without the capability are closed immediately.
    pub async fn adapters_with(
        &mut self,
        capability: Capability,
    ) -> Result<Vec<Box<dyn Adapter>>, MixerError> {
        let mut selected = Vec::new();
        for name in self.registry.enabled_names() {
            let config = self
                .config
                .adapter(&name)
                .and_then(|section| section.adapter_config(&name));
            let adapter = match self.registry.new_adapter(&name, config.as_ref()) {
                Ok(adapter) => adapter,
                Err(e) => {
                    close_all(&selected).await;
                    return Err(e);
                }
            };
            if adapter.capabilities().contains(&capability) {
                selected.push(adapter);
            } else {
                close_quietly(adapter.as_ref()).await;
            }
        }
        if selected.is_empty() {
            return Err(MixerError::Config(format!(
                "no enabled adapter provides the {capability} capability"
            )));
        }
        Ok(selected)
    }

    /// Checks every candidate against every enabled checker.
    ///
    /// A candidate is denied when any checker matches it.
    pub async fn check(&mut self, candidates: &[String]) -> Result<Vec<(String, bool)>, MixerError> {
        let adapters = self.adapters_with(Capability::ListChecker).await?;
        let result = evaluate(&adapters, candidates).await;
        close_all(&adapters).await;
        result
    }

    /// Emits `entries` through every enabled logger. Returns the number of loggers used.
    pub async fn log(&mut self, entries: &[LogEntry]) -> Result<usize, MixerError> {
        let adapters = self.adapters_with(Capability::Logger).await?;
        let mut outcome = Ok(adapters.len());
        for adapter in &adapters {
            if let Some(logger) = adapter.as_logger()
                && let Err(e) = logger.log(entries).await
            {
                outcome = Err(e);
                break;
            }
        }
        close_all(&adapters).await;
        outcome
    }
}

async fn evaluate(
    adapters: &[Box<dyn Adapter>],
    candidates: &[String],
) -> Result<Vec<(String, bool)>, MixerError> {
    let mut verdicts = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let mut denied = false;
        for checker in adapters.iter().filter_map(|a| a.as_list_checker()) {
            if checker.check_list(candidate).await? {
                denied = true;
                break;
            }
        }
        verdicts.push((candidate.clone(), denied));
    }
    Ok(verdicts)
}

async fn close_all(adapters: &[Box<dyn Adapter>]) {
    for adapter in adapters {
        close_quietly(adapter.as_ref()).await;
    }
}

/// Closes an adapter, logging rather than propagating a teardown failure.
async fn close_quietly(adapter: &dyn Adapter) {
    if let Err(e) = adapter.close().await {
        tracing::warn!(adapter = adapter.name(), error = %e, "adapter close failed");
    }
}
