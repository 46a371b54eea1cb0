// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across the capability traits.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use strum::{Display, EnumString};

/// A named operation-set an adapter may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString)]
pub enum Capability {
    ListChecker,
    Logger,
}

/// Payload of a log entry: free text or a structured mapping, never both.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Free-text message.
    Text(String),
    /// Structured key/value mapping. Keys iterate in lexicographic order.
    Struct(BTreeMap<String, serde_json::Value>),
}

/// A single log record handed to a logger adapter.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    /// Name of the log collection the entry belongs to.
    pub collection: String,
    pub timestamp: DateTime<Utc>,
    /// Severity label, e.g. `INFO` or `ERROR`.
    pub severity: String,
    pub payload: Payload,
}

impl LogEntry {
    /// Creates an entry carrying a free-text payload.
    pub fn text(
        collection: impl Into<String>,
        timestamp: DateTime<Utc>,
        severity: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            collection: collection.into(),
            timestamp,
            severity: severity.into(),
            payload: Payload::Text(text.into()),
        }
    }

    /// Creates an entry carrying a structured payload.
    pub fn structured<K, I>(
        collection: impl Into<String>,
        timestamp: DateTime<Utc>,
        severity: impl Into<String>,
        fields: I,
    ) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, serde_json::Value)>,
    {
        Self {
            collection: collection.into(),
            timestamp,
            severity: severity.into(),
            payload: Payload::Struct(fields.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }
}
