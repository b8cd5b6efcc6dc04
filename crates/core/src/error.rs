// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-level error taxonomy.
//!
//! Every failure that reaches the HTTP boundary is one of four kinds. Each
//! kind has a fixed status code and a public message that never carries the
//! internal detail; the detail is for logs only.

use serde::Serialize;
use thiserror::Error;

/// Closed set of error kinds surfaced to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    NotFound,
    Invalid,
    Unauthorized,
    Unknown,
}

crate::simple_display! {
    ErrorKind {
        NotFound => "NotFound",
        Invalid => "Invalid",
        Unauthorized => "Unauthorized",
        Unknown => "Unknown",
    }
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Invalid => 422,
            ErrorKind::Unauthorized => 403,
            ErrorKind::Unknown => 500,
        }
    }
}

/// Catalog entity named in a not-found error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Command,
    Sequence,
    Step,
    View,
}

crate::simple_display! {
    Entity {
        Command => "Command",
        Sequence => "Sequence",
        Step => "Step",
        View => "View",
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} '{id}' not found")]
    NotFound { entity: Entity, id: String },

    #[error("invalid request: {0}")]
    Invalid(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("{0}")]
    Unknown(String),
}

impl ServiceError {
    pub fn not_found(entity: Entity, id: impl Into<String>) -> Self {
        ServiceError::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid(detail: impl Into<String>) -> Self {
        ServiceError::Invalid(detail.into())
    }

    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ServiceError::Unauthorized(detail.into())
    }

    pub fn unknown(detail: impl Into<String>) -> Self {
        ServiceError::Unknown(detail.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::NotFound { .. } => ErrorKind::NotFound,
            ServiceError::Invalid(_) => ErrorKind::Invalid,
            ServiceError::Unauthorized(_) => ErrorKind::Unauthorized,
            ServiceError::Unknown(_) => ErrorKind::Unknown,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Message safe to return to a client.
    ///
    /// Not-found errors echo the identifier the client sent; every other kind
    /// returns a fixed string.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::NotFound { entity, id } => {
                format!("Failed to find {} with ID {}", entity, id)
            }
            ServiceError::Invalid(_) => "Failed as invalid".to_string(),
            ServiceError::Unauthorized(_) => "Unauthorized".to_string(),
            ServiceError::Unknown(_) => "Failed for unknown reason".to_string(),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
