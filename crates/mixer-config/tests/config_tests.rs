// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for host configuration loading.

use std::io::Write;
use std::path::Path;

use figment::Jail;
use mixer_config::diagnostic::ConfigError;
use mixer_config::{load_and_validate, load_and_validate_str, load_config_from_str};
use mixer_core::ConfigKind;
use serde_json::json;

#[test]
fn valid_toml_deserializes_into_mixer_config() {
    let toml = r#"
[host]
log_level = "debug"
certify_on_start = false

[adapters.deny-checker]
enabled = false

[adapters.json-logger]
builder = {}
adapter = {}
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.host.log_level, "debug");
    assert!(!config.host.certify_on_start);

    let deny = config.adapter("deny-checker").expect("deny-checker section");
    assert!(!deny.enabled);
    assert!(deny.builder.is_none());
    assert!(deny.builder_config("deny-checker").is_none());

    let logger = config.adapter("json-logger").expect("json-logger section");
    assert!(logger.enabled);
    assert_eq!(logger.adapter, Some(json!({})));

    let adapter_config = logger.adapter_config("json-logger").unwrap();
    assert_eq!(adapter_config.builder(), "json-logger");
    assert_eq!(adapter_config.kind(), ConfigKind::Adapter);
    assert_eq!(
        logger.builder_config("json-logger").unwrap().kind(),
        ConfigKind::Builder
    );
}

#[test]
fn missing_sections_use_defaults() {
    let config = load_config_from_str("").expect("empty config is valid");
    assert_eq!(config.host.log_level, "info");
    assert!(config.host.certify_on_start);
    assert!(config.adapters.is_empty());
}

#[test]
fn unknown_field_in_host_suggests_correction() {
    let toml = r#"
[host]
log_levle = "debug"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 1);
    match &errors[0] {
        ConfigError::UnknownKey {
            key, suggestion, ..
        } => {
            assert_eq!(key, "log_levle");
            assert_eq!(suggestion.as_deref(), Some("log_level"));
        }
        other => panic!("expected UnknownKey, got {other:?}"),
    }
}

#[test]
fn unknown_field_in_adapter_section_is_rejected() {
    let toml = r#"
[adapters.deny-checker]
enabeld = true
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(matches!(
        &errors[0],
        ConfigError::UnknownKey { suggestion: Some(s), .. } if s == "enabled"
    ));
}

#[test]
fn wrong_type_is_reported() {
    let toml = r#"
[host]
certify_on_start = "yes"
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(matches!(&errors[0], ConfigError::InvalidType { .. }));
}

#[test]
fn validation_rejects_unknown_log_level_and_scalar_params() {
    let toml = r#"
[host]
log_level = "verbose"

[adapters.json-logger]
adapter = 5
"#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert_eq!(errors.len(), 2);
    assert!(
        errors
            .iter()
            .all(|e| matches!(e, ConfigError::Validation { .. }))
    );
}

#[test]
fn host_env_var_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file("mixer.toml", "[host]\nlog_level = \"warn\"\n")?;
        jail.set_env("MIXER_HOST_LOG_LEVEL", "debug");

        let config = load_and_validate(Some(Path::new("mixer.toml"))).expect("should load");
        assert_eq!(config.host.log_level, "debug");
        Ok(())
    });
}

#[test]
fn non_host_env_vars_are_ignored() {
    Jail::expect_with(|jail| {
        jail.create_file("mixer.toml", "[host]\nlog_level = \"warn\"\n")?;
        jail.set_env("MIXER_ADAPTERS", "nonsense");
        jail.set_env("MIXER_LOG_LEVEL", "trace");

        let config = load_and_validate(Some(Path::new("mixer.toml"))).expect("should load");
        assert_eq!(config.host.log_level, "warn");
        Ok(())
    });
}

#[test]
fn explicit_path_is_loaded() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[adapters.deny-checker]\nenabled = false").unwrap();

    let config = load_and_validate(Some(file.path())).expect("file should load");
    assert!(!config.adapter("deny-checker").unwrap().enabled);
}

#[test]
fn config_error_renders_with_miette() {
    let errors = load_and_validate_str("[host]\nlog_level = \"loud\"\n").unwrap_err();
    let diagnostic: &dyn miette::Diagnostic = &errors[0];
    assert_eq!(
        diagnostic.code().map(|c| c.to_string()).as_deref(),
        Some("mixer::config::validation")
    );
}
