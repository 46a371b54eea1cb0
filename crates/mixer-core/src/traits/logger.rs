// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logger capability.

use async_trait::async_trait;

use crate::error::MixerError;
use crate::traits::adapter::Adapter;
use crate::types::LogEntry;

/// Emits batches of log entries to the adapter's sink.
#[async_trait]
pub trait Logger: Adapter {
    /// Emits one record per entry, in input order.
    ///
    /// The entries are borrowed for the duration of the call only.
    async fn log(&self, entries: &[LogEntry]) -> Result<(), MixerError>;
}
