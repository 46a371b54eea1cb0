// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mixer host binary.
//!
//! Loads `mixer.toml`, certifies the compiled-in builders, and exposes their
//! capabilities on the command line. Diagnostics go to stderr; stdout carries
//! only command output and emitted log records.

mod host;

use std::collections::BTreeMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mixer_core::{LogEntry, Payload};

use crate::host::{Host, builtin_registry};

/// Mixer - certify and drive adapter plugins.
#[derive(Parser, Debug)]
#[command(name = "mixer", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List compiled-in builders.
    List,
    /// Run the builder invariant checklist against every builder.
    Certify,
    /// Check candidates against every enabled list checker.
    Check {
        /// Values to check.
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// Emit one log entry through every enabled logger.
    Log {
        /// Log collection name.
        #[arg(long)]
        collection: String,
        /// Severity label.
        #[arg(long, default_value = "INFO")]
        severity: String,
        /// Free-text payload.
        #[arg(long, conflicts_with = "fields", required_unless_present = "fields")]
        text: Option<String>,
        /// Structured payload field as key=value. Values parse as JSON when possible.
        #[arg(long = "field", value_parser = parse_field)]
        fields: Vec<(String, serde_json::Value)>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match mixer_config::load_and_validate(cli.config.as_deref()) {
        Ok(config) => config,
        Err(errors) => {
            mixer_config::render_errors(&errors);
            std::process::exit(1);
        }
    };
    init_tracing(&config.host.log_level);

    let certify_on_start = config.host.certify_on_start;
    let mut host = match Host::new(builtin_registry(), config) {
        Ok(host) => host,
        Err(e) => {
            eprintln!("mixer: {e}");
            std::process::exit(1);
        }
    };

    if let Err(code) = run(cli.command, &mut host, certify_on_start).await {
        std::process::exit(code);
    }
}

async fn run(command: Commands, host: &mut Host, certify_on_start: bool) -> Result<(), i32> {
    match command {
        Commands::List => {
            for entry in host.registry().list_all() {
                println!(
                    "{:<16} {:<8} {:<9} {}",
                    entry.name, entry.version, entry.status, entry.description
                );
            }
            Ok(())
        }
        Commands::Certify => {
            let reports = host.registry().certify_all().await;
            for report in &reports {
                println!("{report}");
            }
            if reports.iter().all(|r| r.passed()) {
                Ok(())
            } else {
                Err(1)
            }
        }
        Commands::Check { candidates } => {
            prepare(host, certify_on_start).await?;
            let verdicts = host.check(&candidates).await.map_err(report_error)?;
            for (candidate, denied) in verdicts {
                let verdict = if denied { "denied" } else { "allowed" };
                println!("{candidate}\t{verdict}");
            }
            Ok(())
        }
        Commands::Log {
            collection,
            severity,
            text,
            fields,
        } => {
            prepare(host, certify_on_start).await?;
            let payload = match text {
                Some(text) => Payload::Text(text),
                None => Payload::Struct(fields.into_iter().collect::<BTreeMap<_, _>>()),
            };
            let entry = LogEntry {
                collection,
                timestamp: chrono::Utc::now(),
                severity,
                payload,
            };
            let loggers = host.log(&[entry]).await.map_err(report_error)?;
            tracing::debug!(loggers, "entry emitted");
            Ok(())
        }
    }
}

/// Certifies (when configured) and activates enabled builders.
async fn prepare(host: &mut Host, certify_on_start: bool) -> Result<(), i32> {
    if certify_on_start {
        host.certify_and_gate().await;
    }
    host.activate_enabled().map_err(report_error)
}

fn report_error(e: mixer_core::MixerError) -> i32 {
    eprintln!("mixer: {e}");
    if e.is_config() { 2 } else { 1 }
}

/// Parses `key=value`, reading the value as JSON and falling back to a string.
fn parse_field(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got `{raw}`"))?;
    if key.is_empty() {
        return Err("field key must not be empty".to_string());
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

/// Initializes the tracing subscriber on stderr with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mixer={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
