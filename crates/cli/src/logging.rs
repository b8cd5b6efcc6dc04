// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Resolve the log filter: flag > SHELLDECK_LOG > `info`.
pub fn filter(flag: Option<&str>) -> EnvFilter {
    flag.map(EnvFilter::try_new)
        .and_then(Result::ok)
        .or_else(|| EnvFilter::try_from_env("SHELLDECK_LOG").ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub fn init(flag: Option<&str>, json: bool) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter(flag))
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
