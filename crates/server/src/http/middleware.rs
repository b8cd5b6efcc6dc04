// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller identity and basic-auth middleware.

use std::sync::Arc;

use axum::extract::Request;
use axum::http::{header, HeaderMap, HeaderName};
use axum::middleware::Next;
use axum::response::Response;
use axum::Extension;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::debug;

use super::response::unauthenticated;

const BASIC_CHALLENGE: &str = "Basic realm=\"Restricted\"";

/// How the caller's user id is found.
#[derive(Debug, Clone, Default)]
pub struct Identity {
    /// Header carrying the user id. `None` disables identification.
    pub header: Option<HeaderName>,
    /// Used when the header is missing or empty.
    pub default_user_id: Option<String>,
}

/// The resolved caller, inserted into request extensions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(pub Option<String>);

impl Caller {
    pub fn user_id(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// Resolve the caller from the configured header, rejecting requests
/// that end up with no user id.
pub(crate) async fn identify(
    Extension(identity): Extension<Arc<Identity>>,
    mut req: Request,
    next: Next,
) -> Response {
    let caller = match &identity.header {
        None => Caller(None),
        Some(name) => {
            let user_id = req
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .or_else(|| identity.default_user_id.clone());
            match user_id {
                Some(id) => Caller(Some(id)),
                None => {
                    debug!(header = %name, "request without user id");
                    return unauthenticated(None);
                }
            }
        }
    };
    req.extensions_mut().insert(caller);
    next.run(req).await
}

/// Credentials for HTTP basic auth.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BasicAuth {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Whether the `Authorization` header carries these credentials.
    pub fn accepts(&self, headers: &HeaderMap) -> bool {
        let Some(encoded) = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Basic "))
        else {
            return false;
        };
        let Ok(decoded) = STANDARD.decode(encoded.trim()) else {
            return false;
        };
        let Ok(decoded) = String::from_utf8(decoded) else {
            return false;
        };
        decoded
            .split_once(':')
            .is_some_and(|(user, pass)| user == self.username && pass == self.password)
    }
}

pub(crate) async fn basic_auth(
    Extension(auth): Extension<Arc<BasicAuth>>,
    req: Request,
    next: Next,
) -> Response {
    if auth.accepts(req.headers()) {
        next.run(req).await
    } else {
        unauthenticated(Some(BASIC_CHALLENGE))
    }
}

#[cfg(test)]
#[path = "middleware_tests.rs"]
mod tests;
