// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tests for cancellation.

use std::time::{Duration, Instant};

use sd_core::{ErrorKind, ServiceError};
use tokio_util::sync::CancellationToken;

use super::executor;
use crate::exec::{CommandRunner, ExecError};

#[tokio::test]
async fn cancel_kills_long_running_process() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let start = Instant::now();
    let err = executor()
        .run("sleep 30", &[], cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Cancelled), "got: {err:?}");
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn cancel_reaches_pipeline_members() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let start = Instant::now();
    let err = executor()
        .run("sleep 30 | cat", &[], cancel)
        .await
        .unwrap_err();

    assert!(matches!(err, ExecError::Cancelled));
    assert!(start.elapsed() < Duration::from_secs(10));
}

#[tokio::test]
async fn already_cancelled_token_returns_cancelled() {
    let cancel = CancellationToken::new();
    cancel.cancel();
    let err = executor().run("echo hi", &[], cancel).await.unwrap_err();
    assert!(matches!(err, ExecError::Cancelled));
}

#[test]
fn exec_errors_map_to_unknown() {
    let err: ServiceError = ExecError::Cancelled.into();
    assert_eq!(err.kind(), ErrorKind::Unknown);
    assert_eq!(err.public_message(), "Failed for unknown reason");
}
