// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON line encoding for log entries.
//!
//! Each entry becomes one line:
//!
//! ```text
//! {"logsCollection":"<c>","timestamp":"<rfc3339>","severity":"<s>","textPayload":"<t>"}
//! {"logsCollection":"<c>","timestamp":"<rfc3339>","severity":"<s>","structPayload":{...}}
//! ```
//!
//! Field order is fixed. Struct payload keys come out sorted because the
//! payload is a `BTreeMap`, and nested objects are sorted by `serde_json`'s
//! default map type.

use std::collections::BTreeMap;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use mixer_core::{LogEntry, MixerError, Payload};

#[derive(Serialize)]
struct Record<'a> {
    #[serde(rename = "logsCollection")]
    logs_collection: &'a str,
    timestamp: String,
    severity: &'a str,
    #[serde(flatten)]
    payload: RecordPayload<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum RecordPayload<'a> {
    TextPayload(&'a str),
    StructPayload(&'a BTreeMap<String, serde_json::Value>),
}

impl<'a> From<&'a LogEntry> for Record<'a> {
    fn from(entry: &'a LogEntry) -> Self {
        let payload = match &entry.payload {
            Payload::Text(text) => RecordPayload::TextPayload(text),
            Payload::Struct(fields) => RecordPayload::StructPayload(fields),
        };
        Record {
            logs_collection: &entry.collection,
            timestamp: rfc3339(&entry.timestamp),
            severity: &entry.severity,
            payload,
        }
    }
}

/// UTC RFC 3339 with the fraction trimmed of trailing zeros, dropped when whole.
fn rfc3339(ts: &DateTime<Utc>) -> String {
    let full = ts.to_rfc3339_opts(SecondsFormat::Nanos, true);
    let Some(body) = full.strip_suffix('Z') else {
        return full;
    };
    match body.split_once('.') {
        Some((secs, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{secs}Z")
            } else {
                format!("{secs}.{frac}Z")
            }
        }
        None => full,
    }
}

/// Appends one newline-terminated record for `entry` to `out`.
pub fn encode_entry(entry: &LogEntry, out: &mut Vec<u8>) -> Result<(), MixerError> {
    write_record(entry, out).map_err(|e| MixerError::Evaluation {
        message: format!("failed to encode log entry: {e}"),
    })
}

/// Encodes a whole batch into one buffer, in input order.
///
/// Nothing is returned unless every entry encodes.
pub fn encode_batch(entries: &[LogEntry]) -> Result<Vec<u8>, MixerError> {
    let mut out = Vec::with_capacity(entries.len() * 128);
    for (index, entry) in entries.iter().enumerate() {
        write_record(entry, &mut out).map_err(|e| MixerError::Evaluation {
            message: format!("failed to encode log entry {index}: {e}"),
        })?;
    }
    Ok(out)
}

fn write_record(entry: &LogEntry, out: &mut Vec<u8>) -> Result<(), serde_json::Error> {
    serde_json::to_writer(&mut *out, &Record::from(entry))?;
    out.push(b'\n');
    Ok(())
}
