// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for environment handling and ShellExecutor builder methods.

use super::{executor, run_shell};
use crate::exec::{ExecError, ShellExecutor};

// ---------------------------------------------------------------------------
// Request values
// ---------------------------------------------------------------------------

#[tokio::test]
async fn value_becomes_environment_variable() {
    let result = run_shell(&executor(), "echo $FOO", &[("FOO", "bar")])
        .await
        .unwrap();
    assert_eq!(result.stdout, "bar\n");
}

#[tokio::test]
async fn value_is_not_reinterpreted_by_the_shell() {
    let result = run_shell(
        &executor(),
        "printf '%s' \"$TARGET\"",
        &[("TARGET", "$(echo pwned); `id`")],
    )
    .await
    .unwrap();
    assert_eq!(result.stdout, "$(echo pwned); `id`");
}

#[tokio::test]
async fn parent_environment_is_inherited() {
    let result = run_shell(&executor(), "test -n \"$PATH\" && echo yes", &[])
        .await
        .unwrap();
    assert_eq!(result.stdout, "yes\n");
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[tokio::test]
async fn env_passes_variable_to_process() {
    let exec = ShellExecutor::new().env("TEST_VAR", "test_value");
    let result = run_shell(&exec, "printenv TEST_VAR", &[]).await.unwrap();
    assert_eq!(result.stdout, "test_value\n");
}

#[tokio::test]
async fn envs_passes_multiple_variables_to_process() {
    let exec = ShellExecutor::new().envs([("VAR_A", "alpha"), ("VAR_B", "beta")]);
    let result = run_shell(&exec, "echo $VAR_A $VAR_B", &[]).await.unwrap();
    assert_eq!(result.stdout, "alpha beta\n");
}

#[tokio::test]
async fn request_value_overrides_executor_env() {
    let exec = ShellExecutor::new().env("STAGE", "base");
    let result = run_shell(&exec, "echo $STAGE", &[("STAGE", "request")])
        .await
        .unwrap();
    assert_eq!(result.stdout, "request\n");
}

#[tokio::test]
async fn missing_shell_is_spawn_failure() {
    let exec = ShellExecutor::new().shell("/nonexistent/bin/sh");
    let err = run_shell(&exec, "echo hi", &[]).await.unwrap_err();
    assert!(
        matches!(err, ExecError::SpawnFailed { ref shell, .. } if shell == "/nonexistent/bin/sh"),
        "got: {err:?}"
    );
}
