// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for mixer adapters.
//!
//! Defines the Builder/Adapter lifecycle contract that every adapter plugin
//! implements, the capability traits an adapter may expose, the shared error
//! and entry types, and the generic verifier that certifies any builder
//! against the contract.

pub mod config;
pub mod error;
pub mod traits;
pub mod types;
pub mod verify;

// Re-export key items at crate root for ergonomic imports.
pub use config::{Config, ConfigKind};
pub use error::MixerError;
pub use types::{Capability, LogEntry, Payload};
pub use verify::{StepOutcome, StepStatus, VerificationReport, VerificationStep, verify_builder};

pub use traits::{Adapter, Builder, ListChecker, LogSink, Logger};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mixer_error_has_all_variants() {
        let _config = MixerError::Config("test".into());
        let _again = MixerError::AlreadyConfigured {
            builder: "test".into(),
        };
        let _eval = MixerError::Evaluation {
            message: "test".into(),
        };
        let _resource = MixerError::resource("stdout", std::io::Error::other("test"));
        let _closed = MixerError::AdapterClosed {
            adapter: "test".into(),
        };
        let _not_found = MixerError::AdapterNotFound {
            name: "test".into(),
        };
        let _disabled = MixerError::PluginDisabled {
            name: "test".into(),
        };
    }

    #[test]
    fn config_errors_are_classified() {
        assert!(MixerError::Config("x".into()).is_config());
        assert!(
            MixerError::AlreadyConfigured {
                builder: "x".into()
            }
            .is_config()
        );
        assert!(
            !MixerError::Evaluation {
                message: "x".into()
            }
            .is_config()
        );
    }

    #[test]
    fn all_traits_are_object_safe() {
        // Compiles only while every contract trait stays usable as `dyn`.
        fn _builder(_: &dyn Builder) {}
        fn _adapter(_: &dyn Adapter) {}
        fn _checker(_: &dyn ListChecker) {}
        fn _logger(_: &dyn Logger) {}
        fn _sink(_: &dyn LogSink) {}
    }
}
