// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! List-checker capability.

use async_trait::async_trait;

use crate::error::MixerError;
use crate::traits::adapter::Adapter;

/// Evaluates candidates against the adapter's configured rule set.
///
/// Checks are pure and may run concurrently. A non-matching candidate is
/// `Ok(false)`; errors are reserved for candidates the rules cannot evaluate.
#[async_trait]
pub trait ListChecker: Adapter {
    async fn check_list(&self, candidate: &str) -> Result<bool, MixerError>;
}
