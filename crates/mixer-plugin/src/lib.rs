// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Builder registry for compiled-in adapter plugins.
//!
//! The registry holds one factory per builder, certifies builders against the
//! lifecycle contract, and keeps the single live builder the host configures
//! and constructs adapters from.

pub mod registry;

pub use registry::{BuilderEntry, BuilderFactory, BuilderRegistry, PluginStatus};
