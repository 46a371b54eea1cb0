// SPDX-FileCopyrightText: 2026 Mixer Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the deny-checker adapter.

use std::sync::Arc;

use mixer_core::{Adapter, Builder};
use mixer_deny_checker::DenyCheckerBuilder;
use mixer_test_utils::assert_builder_invariants;
use proptest::prelude::*;

#[tokio::test]
async fn builder_invariants_hold() {
    let builder = DenyCheckerBuilder::new();
    let report = assert_builder_invariants(&builder).await;
    assert_eq!(report.builder, "deny-checker");
}

#[tokio::test]
async fn nothing_is_denied() {
    let builder = DenyCheckerBuilder::new();
    builder
        .configure(&builder.default_builder_config())
        .expect("defaults should configure");

    let adapter = builder
        .new_adapter(&builder.default_adapter_config())
        .expect("defaults should build an adapter");
    let checker = adapter.as_list_checker().expect("checker capability");

    for candidate in ["", "ABC", "ABC/DEF", "AAA", "123"] {
        let matched = checker
            .check_list(candidate)
            .await
            .unwrap_or_else(|e| panic!("check_list({candidate}) failed: {e}"));
        assert!(!matched, "check_list({candidate}) => got true, want false");
    }

    adapter.close().await.expect("close should succeed");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_checks_share_one_adapter() {
    let builder = DenyCheckerBuilder::new();
    let adapter: Arc<dyn Adapter> = Arc::from(
        builder
            .new_adapter(&builder.default_adapter_config())
            .unwrap(),
    );

    let mut tasks = Vec::new();
    for i in 0..32 {
        let adapter = Arc::clone(&adapter);
        tasks.push(tokio::spawn(async move {
            let checker = adapter.as_list_checker().unwrap();
            checker.check_list(&format!("candidate-{i}")).await
        }));
    }
    for task in tasks {
        assert!(!task.await.unwrap().unwrap());
    }

    adapter.close().await.unwrap();
}

proptest! {
    #[test]
    fn any_candidate_evaluates_to_no_match(candidate in ".*") {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let builder = DenyCheckerBuilder::new();
        let adapter = builder.new_adapter(&builder.default_adapter_config()).unwrap();
        let checker = adapter.as_list_checker().unwrap();

        let matched = runtime.block_on(checker.check_list(&candidate)).unwrap();
        prop_assert!(!matched);
    }
}
