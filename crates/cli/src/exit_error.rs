// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Failures that end the process with a specific exit status.
//!
//! Commands return [`ExitError`] through `anyhow`; only `main()` exits.

use std::fmt::Display;

use thiserror::Error;

/// Why the CLI gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// Bad or missing arguments.
    Usage,
    /// The catalog failed to parse, validate or link.
    InvalidCatalog,
}

impl ExitReason {
    pub const fn code(self) -> i32 {
        match self {
            ExitReason::Usage => 1,
            ExitReason::InvalidCatalog => 2,
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExitError {
    pub reason: ExitReason,
    pub message: String,
}

impl ExitError {
    pub fn usage(message: impl Into<String>) -> Self {
        Self {
            reason: ExitReason::Usage,
            message: message.into(),
        }
    }

    /// `source` names where the catalog came from (a path or `<inline>`).
    pub fn invalid_catalog(source: impl Display, err: impl Display) -> Self {
        Self {
            reason: ExitReason::InvalidCatalog,
            message: format!("{source}: {err}"),
        }
    }

    pub fn code(&self) -> i32 {
        self.reason.code()
    }
}
