// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, validating or linking a catalog.
///
/// Validation variants carry a location such as `commands[2](deploy).inputs[0]`
/// that names the collection, index and identity of the offending element.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("unsupported config file extension for {0} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{location}: {field} is empty")]
    Empty {
        location: String,
        field: &'static str,
    },

    #[error("{location}: duplicate {field} '{value}'")]
    Duplicate {
        location: String,
        field: &'static str,
        value: String,
    },

    #[error("{location}: references unknown {entity} '{slug}'")]
    UndefinedReference {
        location: String,
        entity: &'static str,
        slug: String,
    },

    #[error("{location}: {message}")]
    InvalidFormat { location: String, message: String },
}

impl ConfigError {
    /// Location of a validation failure, if this is one.
    pub fn location(&self) -> Option<&str> {
        match self {
            ConfigError::Empty { location, .. }
            | ConfigError::Duplicate { location, .. }
            | ConfigError::UndefinedReference { location, .. }
            | ConfigError::InvalidFormat { location, .. } => Some(location),
            _ => None,
        }
    }
}
