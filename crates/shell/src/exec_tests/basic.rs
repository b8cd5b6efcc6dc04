// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for output capture and exit codes.

use super::{executor, run_async, run_shell};
use sd_core::ExecutionResult;

// ---------------------------------------------------------------------------
// Output capture
// ---------------------------------------------------------------------------

#[tokio::test]
async fn echo_captures_stdout() {
    let result = run_shell(&executor(), "echo hello", &[]).await.unwrap();
    assert_eq!(
        result,
        ExecutionResult {
            stdout: "hello\n".to_string(),
            stderr: String::new(),
            exit_code: 0,
        }
    );
}

#[tokio::test]
async fn stderr_is_captured_separately() {
    let result = run_shell(&executor(), "echo out; echo oops >&2; exit 3", &[])
        .await
        .unwrap();
    assert_eq!(result.stdout, "out\n");
    assert_eq!(result.stderr, "oops\n");
    assert_eq!(result.exit_code, 3);
}

#[tokio::test]
async fn pipelines_run_through_the_shell() {
    let result = run_shell(&executor(), "printf 'b\\na\\n' | sort", &[])
        .await
        .unwrap();
    assert_eq!(result.stdout, "a\nb\n");
}

#[tokio::test]
async fn large_output_is_fully_buffered() {
    let result = run_shell(&executor(), "seq 1 20000", &[]).await.unwrap();
    assert_eq!(result.exit_code, 0);
    assert_eq!(result.stdout.lines().count(), 20000);
    assert!(result.stdout.ends_with("20000\n"));
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

#[yare::parameterized(
    success = { "true", 0 },
    exit_one = { "exit 1", 1 },
    exit_forty_two = { "exit 42", 42 },
    not_found = { "definitely-not-a-command-xyz", 127 },
)]
fn exit_code_is_reported(script: &str, expected: i32) {
    run_async(async {
        let result = run_shell(&executor(), script, &[]).await.unwrap();
        assert_eq!(result.exit_code, expected);
    });
}

#[tokio::test]
async fn exit_one_has_empty_output() {
    let result = run_shell(&executor(), "exit 1", &[]).await.unwrap();
    assert_eq!(result.stdout, "");
    assert_eq!(result.stderr, "");
    assert_eq!(result.exit_code, 1);
}

#[tokio::test]
async fn killed_by_signal_reports_minus_one() {
    let result = run_shell(&executor(), "kill -9 $$", &[]).await.unwrap();
    assert_eq!(result.exit_code, -1);
}
