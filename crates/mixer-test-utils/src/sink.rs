// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory and failing log sinks.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use mixer_core::{LogSink, MixerError};

/// A sink that records every block written to it.
///
/// Clones share the same buffer, so a test can keep one handle and give
/// another to the builder under test.
#[derive(Clone, Default)]
pub struct MemorySink {
    blocks: Arc<Mutex<Vec<Vec<u8>>>>,
    flushes: Arc<Mutex<usize>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every block in write order.
    pub async fn blocks(&self) -> Vec<Vec<u8>> {
        self.blocks.lock().await.clone()
    }

    /// All output concatenated and decoded as UTF-8.
    pub async fn contents(&self) -> String {
        let blocks = self.blocks.lock().await;
        String::from_utf8_lossy(&blocks.concat()).into_owned()
    }

    /// All output split into lines, without terminators.
    pub async fn lines(&self) -> Vec<String> {
        self.contents().await.lines().map(str::to_string).collect()
    }

    /// Number of `flush` calls seen.
    pub async fn flush_count(&self) -> usize {
        *self.flushes.lock().await
    }
}

#[async_trait]
impl LogSink for MemorySink {
    async fn write_block(&self, block: &[u8]) -> Result<(), MixerError> {
        self.blocks.lock().await.push(block.to_vec());
        Ok(())
    }

    async fn flush(&self) -> Result<(), MixerError> {
        *self.flushes.lock().await += 1;
        Ok(())
    }
}

/// A sink standing in for an unavailable destination.
#[derive(Clone, Copy, Default)]
pub struct FailingSink;

#[async_trait]
impl LogSink for FailingSink {
    async fn write_block(&self, block: &[u8]) -> Result<(), MixerError> {
        tracing::debug!(bytes = block.len(), "failing sink rejected write");
        Err(MixerError::resource(
            "sink unavailable",
            std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        ))
    }

    async fn flush(&self) -> Result<(), MixerError> {
        Err(MixerError::resource(
            "sink unavailable",
            std::io::Error::from(std::io::ErrorKind::BrokenPipe),
        ))
    }
}
