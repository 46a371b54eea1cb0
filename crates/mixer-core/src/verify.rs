// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder invariant verification.
//!
//! [`verify_builder`] drives any [`Builder`] through a fixed checklist that
//! certifies the lifecycle contract without looking at domain behavior:
//!
//! 1. `configure(default_builder_config())` succeeds.
//! 2. `new_adapter(default_adapter_config())` succeeds and the adapter exposes
//!    at least one capability.
//! 3. `close()` on that adapter succeeds.
//!
//! Step 2 is stricter than the bare lifecycle: capabilities are the closed
//! [`Capability`](crate::types::Capability) set, so an adapter exposing none of
//! them has nothing a host can drive and is not certified. Its `close` still
//! runs.
//!
//! Panics inside a step are caught and reported as violations. Capability
//! operations are never invoked, and the adapter is not touched after close.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use futures::FutureExt;
use strum::Display;

use crate::error::MixerError;
use crate::traits::adapter::Adapter;
use crate::traits::builder::Builder;

/// One entry of the verification checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum VerificationStep {
    #[strum(serialize = "configure")]
    Configure,
    #[strum(serialize = "new_adapter")]
    NewAdapter,
    #[strum(serialize = "close")]
    Close,
}

/// Result of a single step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    Passed,
    Failed(String),
    /// The step could not run because an earlier step failed.
    Skipped(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub step: VerificationStep,
    pub status: StepStatus,
}

/// Pass/fail report for one builder, with a reason per violated step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationReport {
    /// Name reported by the verified builder.
    pub builder: String,
    pub steps: Vec<StepOutcome>,
}

impl VerificationReport {
    /// True when every step passed.
    pub fn passed(&self) -> bool {
        self.steps.iter().all(|s| s.status == StepStatus::Passed)
    }

    /// Steps that failed or were skipped.
    pub fn violations(&self) -> Vec<&StepOutcome> {
        self.steps
            .iter()
            .filter(|s| s.status != StepStatus::Passed)
            .collect()
    }

    /// Status of a given step, if it was recorded.
    pub fn status(&self, step: VerificationStep) -> Option<&StepStatus> {
        self.steps.iter().find(|s| s.step == step).map(|s| &s.status)
    }
}

impl fmt::Display for VerificationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "{} {}", verdict, self.builder)?;
        for outcome in &self.steps {
            match &outcome.status {
                StepStatus::Passed => write!(f, "\n  ok      {}", outcome.step)?,
                StepStatus::Failed(reason) => write!(f, "\n  failed  {}: {reason}", outcome.step)?,
                StepStatus::Skipped(reason) => write!(f, "\n  skipped {}: {reason}", outcome.step)?,
            }
        }
        Ok(())
    }
}

/// Runs the lifecycle checklist against `builder`.
///
/// The builder is configured as a side effect, so pass a fresh instance
/// rather than one the host is about to configure.
pub async fn verify_builder(builder: &dyn Builder) -> VerificationReport {
    let name = builder.name().to_string();
    let mut steps = Vec::with_capacity(3);

    let configured = guard(|| {
        let config = builder.default_builder_config();
        builder.configure(&config)
    });
    steps.push(outcome(VerificationStep::Configure, configured));

    let constructed = guard(|| {
        let config = builder.default_adapter_config();
        let adapter = builder.new_adapter(&config)?;
        let caps = adapter.capabilities();
        Ok((adapter, caps))
    });
    let adapter: Option<Box<dyn Adapter>> = match constructed {
        Ok((adapter, caps)) if caps.is_empty() => {
            steps.push(StepOutcome {
                step: VerificationStep::NewAdapter,
                status: StepStatus::Failed("adapter exposes no capabilities".to_string()),
            });
            Some(adapter)
        }
        Ok((adapter, _)) => {
            steps.push(StepOutcome {
                step: VerificationStep::NewAdapter,
                status: StepStatus::Passed,
            });
            Some(adapter)
        }
        Err(reason) => {
            steps.push(StepOutcome {
                step: VerificationStep::NewAdapter,
                status: StepStatus::Failed(reason),
            });
            None
        }
    };

    let closed = match adapter {
        Some(adapter) => match AssertUnwindSafe(adapter.close()).catch_unwind().await {
            Ok(Ok(())) => StepStatus::Passed,
            Ok(Err(e)) => StepStatus::Failed(e.to_string()),
            Err(payload) => StepStatus::Failed(panicked(payload.as_ref())),
        },
        None => StepStatus::Skipped("no adapter was constructed".to_string()),
    };
    steps.push(StepOutcome {
        step: VerificationStep::Close,
        status: closed,
    });

    let report = VerificationReport {
        builder: name,
        steps,
    };
    for violation in report.violations() {
        let reason = match &violation.status {
            StepStatus::Failed(r) | StepStatus::Skipped(r) => r.as_str(),
            StepStatus::Passed => "",
        };
        tracing::warn!(
            builder = %report.builder,
            step = %violation.step,
            reason,
            "builder invariant violated"
        );
    }
    if report.passed() {
        tracing::debug!(builder = %report.builder, "builder invariants hold");
    }
    report
}

fn outcome(step: VerificationStep, result: Result<(), String>) -> StepOutcome {
    let status = match result {
        Ok(()) => StepStatus::Passed,
        Err(reason) => StepStatus::Failed(reason),
    };
    StepOutcome { step, status }
}

/// Runs a synchronous step, turning both errors and panics into a reason.
fn guard<T>(f: impl FnOnce() -> Result<T, MixerError>) -> Result<T, String> {
    match panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(e.to_string()),
        Err(payload) => Err(panicked(payload.as_ref())),
    }
}

fn panicked(payload: &(dyn Any + Send)) -> String {
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_string());
    format!("panicked: {message}")
}
