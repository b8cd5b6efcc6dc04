// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP surface: router, middleware and response mapping.

pub mod css;
mod handlers;
mod middleware;
mod response;

pub use middleware::{BasicAuth, Caller, Identity};
pub use response::ApiError;

use std::sync::Arc;

use axum::http::{HeaderValue, Method};
use axum::{middleware as axum_mw, routing::get, Extension, Router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::service::DeckService;

/// Request-boundary settings.
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    pub identity: Identity,
    pub basic_auth: Option<BasicAuth>,
    /// `None` allows any origin.
    pub cors_origin: Option<HeaderValue>,
}

/// Build the full axum router with all routes and middleware.
pub fn router(service: DeckService, config: HttpConfig) -> Router {
    // Routes that need a caller identity
    let mut protected = Router::new()
        .route("/executeCommand", get(handlers::execute_command))
        .route("/executeView", get(handlers::execute_view))
        .route("/getViewConfigs", get(handlers::get_view_configs))
        .route("/getCategoryConfigs", get(handlers::get_category_configs))
        .route("/categories.css", get(handlers::categories_css))
        .layer(axum_mw::from_fn(middleware::identify))
        .layer(Extension(Arc::new(config.identity)));

    if let Some(auth) = config.basic_auth {
        protected = protected
            .layer(axum_mw::from_fn(middleware::basic_auth))
            .layer(Extension(Arc::new(auth)));
    }

    // Public routes (no auth)
    let public = Router::new().route("/health", get(handlers::health));

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
        .allow_origin(match config.cors_origin {
            Some(origin) => AllowOrigin::exact(origin),
            None => AllowOrigin::from(Any),
        });

    public
        .merge(protected)
        .layer(Extension(service))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
