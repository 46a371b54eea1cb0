// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for mixer adapter crates.
//!
//! # Components
//!
//! - [`MemorySink`] - Sink capturing every written block for assertions
//! - [`FailingSink`] - Sink whose writes and flushes always fail
//! - [`assert_builder_invariants`] - Panicking wrapper over the builder verifier

pub mod invariants;
pub mod sink;

pub use invariants::assert_builder_invariants;
pub use sink::{FailingSink, MemorySink};
