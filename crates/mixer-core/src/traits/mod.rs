// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Builder/Adapter contract.
//!
//! Every adapter implements the [`Adapter`] base trait plus any subset of the
//! capability traits. Capability operations use `#[async_trait]` so adapters
//! stay usable behind `dyn`.

pub mod adapter;
pub mod builder;
pub mod checker;
pub mod logger;
pub mod sink;

pub use adapter::Adapter;
pub use builder::Builder;
pub use checker::ListChecker;
pub use logger::Logger;
pub use sink::LogSink;
