// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Server lifecycle: startup, reload and shutdown.

mod reload;
mod startup;
pub use reload::{reload, watch_signals};
pub use startup::{startup, Server};

use std::path::PathBuf;

use axum::http::{HeaderName, HeaderValue};
use sd_catalog::{load_file, parse_document, Catalog, ConfigError, Format};
use thiserror::Error;

use crate::env;
use crate::http::{BasicAuth, HttpConfig, Identity};
use crate::repository::AccessPolicy;

/// Where the catalog document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A file; format follows the extension. Reloadable.
    File(PathBuf),
    /// Inline YAML text.
    Inline(String),
}

impl CatalogSource {
    /// Parse, validate and link the document into a catalog.
    pub fn load(&self) -> Result<Catalog, ConfigError> {
        let doc = match self {
            CatalogSource::File(path) => load_file(path)?,
            CatalogSource::Inline(text) => parse_document(text, Format::Yaml)?,
        };
        Catalog::build(&doc)
    }

    pub fn is_reloadable(&self) -> bool {
        matches!(self, CatalogSource::File(_))
    }
}

impl std::fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Inline(_) => f.write_str("<inline>"),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub source: CatalogSource,
    /// Listen address (host:port)
    pub http_addr: String,
    /// Header carrying the user id; enables access control
    pub user_id_header: Option<String>,
    pub default_user_id: Option<String>,
    pub basic_auth_username: Option<String>,
    pub basic_auth_password: Option<String>,
    pub cors_origin: Option<String>,
}

impl Config {
    /// Configuration with every setting taken from the environment.
    pub fn from_env(source: CatalogSource) -> Self {
        Self {
            source,
            http_addr: env::http_addr(),
            user_id_header: env::user_id_header(),
            default_user_id: env::default_user_id(),
            basic_auth_username: env::basic_auth_username(),
            basic_auth_password: env::basic_auth_password(),
            cors_origin: env::cors_origin(),
        }
    }

    pub fn access_policy(&self) -> AccessPolicy {
        if self.user_id_header.is_some() {
            AccessPolicy::Enforced
        } else {
            AccessPolicy::Open
        }
    }

    /// Validate the request-boundary settings.
    pub fn http_config(&self) -> Result<HttpConfig, LifecycleError> {
        let header = match &self.user_id_header {
            Some(name) => Some(HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                LifecycleError::InvalidSetting {
                    name: "user-id-header",
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        let basic_auth = match (&self.basic_auth_username, &self.basic_auth_password) {
            (Some(username), Some(password))
                if username.trim().is_empty() || password.trim().is_empty() =>
            {
                return Err(LifecycleError::InvalidSetting {
                    name: "basic-auth",
                    message: "username and password must not be blank".to_string(),
                });
            }
            (Some(username), Some(password)) => Some(BasicAuth::new(username, password)),
            (None, None) => None,
            _ => {
                return Err(LifecycleError::InvalidSetting {
                    name: "basic-auth",
                    message: "username and password must be set together".to_string(),
                });
            }
        };

        let cors_origin = match &self.cors_origin {
            Some(origin) => Some(HeaderValue::from_str(origin).map_err(|e| {
                LifecycleError::InvalidSetting {
                    name: "cors-origin",
                    message: e.to_string(),
                }
            })?),
            None => None,
        };

        Ok(HttpConfig {
            identity: Identity {
                header,
                default_user_id: self.default_user_id.clone(),
            },
            basic_auth,
            cors_origin,
        })
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("catalog error: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid {name}: {message}")]
    InvalidSetting { name: &'static str, message: String },

    #[error("Failed to bind {0}: {1}")]
    BindFailed(String, std::io::Error),

    #[error("Failed to install signal handler: {0}")]
    Signal(std::io::Error),

    #[error("server error: {0}")]
    Serve(std::io::Error),
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
