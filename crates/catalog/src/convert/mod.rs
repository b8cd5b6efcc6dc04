// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Generate catalog documents from other API descriptions.

mod swagger2;

pub use swagger2::{from_swagger2, parse_swagger2, Swagger2, DEFAULT_CATEGORY_COLOR};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid Swagger JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported swagger version '{0}' (expected 2.0)")]
    UnsupportedVersion(String),

    #[error("invalid operation {method} {path}: {source}")]
    InvalidOperation {
        path: String,
        method: String,
        source: serde_json::Error,
    },

    #[error("category name produces an empty slug: '{0}'")]
    EmptyCategory(String),
}
