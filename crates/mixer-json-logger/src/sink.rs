// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Standard output sink.

use std::io::Write;

use async_trait::async_trait;

use mixer_core::{LogSink, MixerError};

/// Writes record blocks to the process's standard output.
///
/// The process-wide stdout lock is held for the whole block, so blocks from
/// different adapters never interleave. Writes run on tokio's blocking pool
/// and must be awaited from inside a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

#[async_trait]
impl LogSink for StdoutSink {
    async fn write_block(&self, block: &[u8]) -> Result<(), MixerError> {
        let block = block.to_vec();
        blocking(move || {
            let mut out = std::io::stdout().lock();
            out.write_all(&block)
                .map_err(|e| MixerError::resource("failed to write to stdout", e))?;
            out.flush()
                .map_err(|e| MixerError::resource("failed to flush stdout", e))
        })
        .await
    }

    async fn flush(&self) -> Result<(), MixerError> {
        blocking(|| {
            std::io::stdout()
                .lock()
                .flush()
                .map_err(|e| MixerError::resource("failed to flush stdout", e))
        })
        .await
    }
}

async fn blocking<F>(f: F) -> Result<(), MixerError>
where
    F: FnOnce() -> Result<(), MixerError> + Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| MixerError::Resource {
            message: "stdout writer task failed".to_string(),
            source: Some(Box::new(e)),
        })?
}
