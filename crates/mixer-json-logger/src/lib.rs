// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON logger adapter.
//!
//! Emits every log entry as one self-contained JSON line (see [`record`]) to a
//! [`LogSink`] chosen when the builder is created. Each `log` call encodes its
//! whole batch before writing, then hands the sink a single block, so one
//! batch is never interleaved with output from another adapter.

pub mod record;
pub mod sink;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use mixer_core::{Adapter, Builder, Config, ConfigKind, LogEntry, LogSink, Logger, MixerError};

pub use record::{encode_batch, encode_entry};
pub use sink::StdoutSink;

/// Builder name used to tag json-logger configurations.
pub const BUILDER_NAME: &str = "json-logger";

/// Builder-level parameters. None are currently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuilderParams {}

/// Adapter-level parameters. None are currently accepted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterParams {}

/// Builds [`JsonLogger`] adapters that share one sink.
pub struct JsonLoggerBuilder {
    sink: Arc<dyn LogSink>,
    params: OnceLock<BuilderParams>,
}

impl JsonLoggerBuilder {
    /// Creates a builder whose adapters write to standard output.
    pub fn new() -> Self {
        Self::with_sink(Arc::new(StdoutSink))
    }

    /// Creates a builder whose adapters write to `sink`.
    pub fn with_sink(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            params: OnceLock::new(),
        }
    }

    /// Factory suitable for registering with a plugin registry.
    pub fn boxed() -> Box<dyn Builder> {
        Box::new(Self::new())
    }
}

impl Default for JsonLoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder for JsonLoggerBuilder {
    fn name(&self) -> &str {
        BUILDER_NAME
    }

    fn description(&self) -> &str {
        "Writes log entries as JSON lines to standard output"
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
        Ok(Box::new(JsonLogger::new(Arc::clone(&self.sink))))
    }
}

/// Logger adapter writing JSON lines to a sink.
pub struct JsonLogger {
    sink: Arc<dyn LogSink>,
    closed: AtomicBool,
}

impl JsonLogger {
    pub fn new(sink: Arc<dyn LogSink>) -> Self {
        Self {
            sink,
            closed: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl Adapter for JsonLogger {
    fn name(&self) -> &str {
        BUILDER_NAME
    }

    fn as_logger(&self) -> Option<&dyn Logger> {
        Some(self)
    }

    /// Flushes the sink. The adapter counts as closed even if the flush fails.
    async fn close(&self) -> Result<(), MixerError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        if let Err(e) = self.sink.flush().await {
            tracing::warn!(adapter = BUILDER_NAME, error = %e, "sink flush failed during close");
            return Err(e);
        }
        tracing::debug!(adapter = BUILDER_NAME, "adapter closed");
        Ok(())
    }
}

#[async_trait]
impl Logger for JsonLogger {
    async fn log(&self, entries: &[LogEntry]) -> Result<(), MixerError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(MixerError::AdapterClosed {
                adapter: BUILDER_NAME.to_string(),
            });
        }
        if entries.is_empty() {
            return Ok(());
        }

        let block = encode_batch(entries)?;
        self.sink.write_block(&block).await?;
        tracing::trace!(records = entries.len(), bytes = block.len(), "log batch emitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mixer_core::Capability;
    use mixer_test_utils::{FailingSink, MemorySink};

    fn memory_builder() -> (JsonLoggerBuilder, MemorySink) {
        let sink = MemorySink::new();
        (JsonLoggerBuilder::with_sink(Arc::new(sink.clone())), sink)
    }

    #[test]
    fn second_configure_is_rejected() {
        let (builder, _) = memory_builder();
        builder.configure(&builder.default_builder_config()).unwrap();
        assert!(matches!(
            builder.configure(&builder.default_builder_config()),
            Err(MixerError::AlreadyConfigured { .. })
        ));
    }

    #[test]
    fn deny_checker_configuration_is_rejected() {
        let (builder, _) = memory_builder();
        let foreign = Config::adapter_config("deny-checker", json!({}));
        let err = builder.new_adapter(&foreign).err().expect("should reject");
        assert!(err.is_config());
    }

    #[test]
    fn adapter_exposes_only_logger_capability() {
        let (builder, _) = memory_builder();
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();
        assert_eq!(adapter.capabilities(), vec![Capability::Logger]);
        assert!(adapter.as_list_checker().is_none());
    }

    #[tokio::test]
    async fn empty_batch_writes_nothing() {
        let (builder, sink) = memory_builder();
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();
        adapter.as_logger().unwrap().log(&[]).await.unwrap();
        assert!(sink.blocks().await.is_empty());
    }

    #[tokio::test]
    async fn batch_is_written_as_one_block() {
        let (builder, sink) = memory_builder();
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();
        let now = Utc::now();
        let entries = vec![
            LogEntry::text("a", now, "INFO", "one"),
            LogEntry::text("a", now, "INFO", "two"),
        ];
        adapter.as_logger().unwrap().log(&entries).await.unwrap();

        let blocks = sink.blocks().await;
        assert_eq!(blocks.len(), 1);
        assert_eq!(sink.lines().await.len(), 2);
    }

    #[tokio::test]
    async fn close_flushes_once_and_blocks_further_logging() {
        let (builder, sink) = memory_builder();
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();

        adapter.close().await.unwrap();
        adapter.close().await.unwrap();
        assert_eq!(sink.flush_count().await, 1);

        let entry = LogEntry::text("a", Utc::now(), "INFO", "late");
        assert!(matches!(
            adapter.as_logger().unwrap().log(&[entry]).await,
            Err(MixerError::AdapterClosed { .. })
        ));
    }

    #[tokio::test]
    async fn sink_failures_surface_as_resource_errors() {
        let builder = JsonLoggerBuilder::with_sink(Arc::new(FailingSink));
        let adapter = builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap();

        let entry = LogEntry::text("a", Utc::now(), "INFO", "lost");
        assert!(matches!(
            adapter.as_logger().unwrap().log(&[entry]).await,
            Err(MixerError::Resource { .. })
        ));
        assert!(matches!(
            adapter.close().await,
            Err(MixerError::Resource { .. })
        ));
        // Released even though the flush failed.
        assert!(adapter.close().await.is_ok());
    }
}
