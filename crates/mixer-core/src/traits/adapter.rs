// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Base trait that every constructed adapter implements.

use async_trait::async_trait;

use crate::error::MixerError;
use crate::traits::checker::ListChecker;
use crate::traits::logger::Logger;
use crate::types::Capability;

/// A constructed plugin instance.
///
/// Capabilities are separate traits. An adapter advertises the ones it
/// implements by overriding the matching `as_*` accessor; callers query for a
/// capability instead of downcasting to a concrete type.
#[async_trait]
pub trait Adapter: Send + Sync + 'static {
    /// Returns the name of the builder that produced this adapter.
    fn name(&self) -> &str;

    /// Returns the checker capability, if implemented.
    fn as_list_checker(&self) -> Option<&dyn ListChecker> {
        None
    }

    /// Returns the logger capability, if implemented.
    fn as_logger(&self) -> Option<&dyn Logger> {
        None
    }

    /// Lists every capability this adapter exposes.
    fn capabilities(&self) -> Vec<Capability> {
        let mut caps = Vec::new();
        if self.as_list_checker().is_some() {
            caps.push(Capability::ListChecker);
        }
        if self.as_logger().is_some() {
            caps.push(Capability::Logger);
        }
        caps
    }

    /// Releases held resources. Capability calls after this fail.
    ///
    /// Implementations in this workspace are idempotent, but callers should
    /// close an adapter exactly once.
    async fn close(&self) -> Result<(), MixerError>;
}
