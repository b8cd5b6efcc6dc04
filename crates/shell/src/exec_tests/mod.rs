// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for the shell executor.

use super::*;

mod basic;
mod builder;
mod cancel;

/// Create a default executor for tests.
pub(crate) fn executor() -> ShellExecutor {
    ShellExecutor::new()
}

pub(crate) fn values(pairs: &[(&str, &str)]) -> Vec<InputValue> {
    pairs.iter().map(|(n, v)| InputValue::new(*n, *v)).collect()
}

/// Run with a token nobody cancels.
pub(crate) async fn run_shell(
    executor: &ShellExecutor,
    template: &str,
    pairs: &[(&str, &str)],
) -> Result<ExecutionResult, ExecError> {
    executor
        .run(template, &values(pairs), CancellationToken::new())
        .await
}

/// Sync wrapper for async execution in parameterized tests.
pub(crate) fn run_async<F: std::future::Future>(f: F) -> F::Output {
    tokio::runtime::Runtime::new().unwrap().block_on(f)
}
