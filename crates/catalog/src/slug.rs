// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Slugify strings for use as catalog identifiers.

/// Slugify a display name or route.
///
/// Replaces every run of characters outside `[A-Za-z0-9]` with a single
/// hyphen, trims leading/trailing hyphens, then lowercases.
pub fn slugify(input: &str) -> String {
    input
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
        .to_ascii_lowercase()
}

#[cfg(test)]
#[path = "slug_tests.rs"]
mod tests;
