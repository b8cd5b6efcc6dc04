// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process execution behind the [`CommandRunner`] seam.

mod error;
mod run;

pub use error::ExecError;

use std::path::PathBuf;

use async_trait::async_trait;
use sd_core::{ExecutionResult, InputValue};
use tokio_util::sync::CancellationToken;

/// Shell used to interpret command templates.
pub const DEFAULT_SHELL: &str = "/bin/sh";

/// Runs a command template to completion.
///
/// Implementations receive values that have already passed input
/// validation and authorization. Cancelling `cancel` must terminate the
/// work and return [`ExecError::Cancelled`].
#[async_trait]
pub trait CommandRunner: Send + Sync {
    async fn run(
        &self,
        template: &str,
        values: &[InputValue],
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, ExecError>;
}

/// Runs templates with `<shell> -c <template>`.
///
/// The child inherits the parent environment, then the executor's own
/// variables, then the request values (later entries win).
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: PathBuf,
    env: Vec<(String, String)>,
}

impl Default for ShellExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellExecutor {
    pub fn new() -> Self {
        Self {
            shell: PathBuf::from(DEFAULT_SHELL),
            env: Vec::new(),
        }
    }

    /// Use a different shell binary.
    pub fn shell(mut self, shell: impl Into<PathBuf>) -> Self {
        self.shell = shell.into();
        self
    }

    /// Set an environment variable for every process.
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Set multiple environment variables for every process.
    pub fn envs<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env
            .extend(vars.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }
}

#[async_trait]
impl CommandRunner for ShellExecutor {
    async fn run(
        &self,
        template: &str,
        values: &[InputValue],
        cancel: CancellationToken,
    ) -> Result<ExecutionResult, ExecError> {
        let env = self
            .env
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .chain(values.iter().map(|v| (v.name.as_str(), v.value.as_str())));
        run::run_template(&self.shell, env, template, &cancel).await
    }
}

#[cfg(test)]
#[path = "../exec_tests/mod.rs"]
mod tests;
