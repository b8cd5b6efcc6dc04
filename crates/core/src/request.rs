// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Execution request and result types.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Query-parameter prefix that marks an input value (`input_HOST=...`).
pub const INPUT_PARAM_PREFIX: &str = "input_";

/// A single name/value pair supplied with an execution request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputValue {
    pub name: String,
    pub value: String,
}

impl InputValue {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Collect input values from query pairs, keeping only `input_`-prefixed
    /// keys. Source order is preserved.
    pub fn from_query_pairs<'a, I>(pairs: I) -> Vec<InputValue>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        pairs
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(INPUT_PARAM_PREFIX)
                    .filter(|name| !name.is_empty())
                    .map(|name| InputValue::new(name, value))
            })
            .collect()
    }
}

/// How a successful execution is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// JSON envelope with stdout, stderr and exit code.
    #[default]
    Json,
    /// Stdout verbatim as plain text.
    Raw,
}

crate::simple_display! {
    OutputFormat {
        Json => "",
        Raw => "raw",
    }
}

impl OutputFormat {
    /// Parse the `format` request parameter. Only the empty string and `raw`
    /// are accepted.
    pub fn parse(value: &str) -> Result<Self, ServiceError> {
        match value {
            "" => Ok(OutputFormat::Json),
            "raw" => Ok(OutputFormat::Raw),
            other => Err(ServiceError::invalid(format!(
                "unsupported output format '{}'",
                other
            ))),
        }
    }
}

/// Captured output of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExecutionResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
