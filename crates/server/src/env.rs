// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the server crate.
//!
//! Command-line flags take precedence; these are the fallbacks.

use std::path::PathBuf;

/// Listen address used when neither flag nor environment sets one.
pub const DEFAULT_HTTP_ADDR: &str = "0.0.0.0:8000";

fn non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.is_empty())
}

/// Catalog file path (`SHELLDECK_CONFIG`).
pub fn config_path() -> Option<PathBuf> {
    non_empty("SHELLDECK_CONFIG").map(PathBuf::from)
}

/// Listen address: SHELLDECK_HTTP_ADDR > 0.0.0.0:8000
pub fn http_addr() -> String {
    non_empty("SHELLDECK_HTTP_ADDR").unwrap_or_else(|| DEFAULT_HTTP_ADDR.to_string())
}

/// Request header carrying the caller's user id. Enables access control
/// when set.
pub fn user_id_header() -> Option<String> {
    non_empty("SHELLDECK_USER_ID_HEADER")
}

/// User id assumed when the header is absent.
pub fn default_user_id() -> Option<String> {
    non_empty("SHELLDECK_DEFAULT_USER_ID")
}

pub fn basic_auth_username() -> Option<String> {
    non_empty("SHELLDECK_BASIC_AUTH_USERNAME")
}

pub fn basic_auth_password() -> Option<String> {
    non_empty("SHELLDECK_BASIC_AUTH_PASSWORD")
}

/// Allowed CORS origin; any origin when unset.
pub fn cors_origin() -> Option<String> {
    non_empty("SHELLDECK_CORS_ORIGIN")
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
