// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution error types.

use sd_core::ServiceError;

/// Failures of the execution machinery itself.
///
/// A nonzero exit code is not an error; it is reported in the result.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// The shell could not be spawned.
    #[error("failed to spawn `{shell}`: {source}")]
    SpawnFailed {
        shell: String,
        source: std::io::Error,
    },

    /// Waiting for the child failed.
    #[error("failed to wait for child process: {0}")]
    WaitFailed(#[source] std::io::Error),

    /// Reading captured output failed.
    #[error("failed to read {stream}: {source}")]
    ReadFailed {
        stream: &'static str,
        source: std::io::Error,
    },

    /// The caller went away and the process group was killed.
    #[error("execution cancelled")]
    Cancelled,
}

impl From<ExecError> for ServiceError {
    fn from(err: ExecError) -> Self {
        ServiceError::unknown(err.to_string())
    }
}
