// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Catalog document parsing.

use std::path::Path;

use crate::error::ConfigError;
use crate::schema::ConfigDocument;

/// Supported document formats. YAML is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Yaml,
    Json,
    Toml,
}

sd_core::simple_display! {
    Format {
        Yaml => "yaml",
        Json => "json",
        Toml => "toml",
    }
}

/// Pick a format from a file extension.
pub fn format_for_path(path: &Path) -> Option<Format> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => Some(Format::Yaml),
        Some("json") => Some(Format::Json),
        Some("toml") => Some(Format::Toml),
        _ => None,
    }
}

/// Parse a catalog document. Structural only: no reference checks.
pub fn parse_document(content: &str, format: Format) -> Result<ConfigDocument, ConfigError> {
    let doc = match format {
        Format::Yaml => {
            // An empty YAML file is an empty catalog, not a parse error.
            if content.trim().is_empty() {
                ConfigDocument::default()
            } else {
                serde_yaml::from_str(content)?
            }
        }
        Format::Json => serde_json::from_str(content)?,
        Format::Toml => toml::from_str(content)?,
    };
    Ok(doc)
}

/// Read and parse a catalog file, choosing the format from its extension.
pub fn load_file(path: &Path) -> Result<ConfigDocument, ConfigError> {
    let format =
        format_for_path(path).ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let doc = parse_document(&content, format)?;
    tracing::debug!(path = %path.display(), %format, "parsed catalog file");
    Ok(doc)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
