// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Certification helper for adapter crate test suites.

use mixer_core::{Builder, VerificationReport, verify_builder};

/// Runs the builder verifier and panics with the full report on any violation.
///
/// Every adapter crate calls this from its tests before its builder is
/// trusted by a host.
pub async fn assert_builder_invariants(builder: &dyn Builder) -> VerificationReport {
    let report = verify_builder(builder).await;
    assert!(report.passed(), "builder invariants violated:\n{report}");
    report
}
