// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Output sink for encoded log records.

use async_trait::async_trait;

use crate::error::MixerError;

/// Destination for encoded records, injected into logger builders.
///
/// A block passed to `write_block` must reach the destination contiguously,
/// even when several adapters share one sink.
#[async_trait]
pub trait LogSink: Send + Sync + 'static {
    /// Writes one complete block of records.
    async fn write_block(&self, block: &[u8]) -> Result<(), MixerError>;

    /// Flushes buffered output.
    async fn flush(&self) -> Result<(), MixerError> {
        Ok(())
    }
}
