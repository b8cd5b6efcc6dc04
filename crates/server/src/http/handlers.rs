// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Thin axum handlers over [`DeckService`].

use std::future::Future;

use axum::extract::Query;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Json};
use sd_core::{ExecutionResult, InputValue, OutputFormat, ServiceError};
use tokio_util::sync::CancellationToken;

use super::middleware::Caller;
use super::response::{execution, ApiError};
use crate::service::{DeckService, ExecuteCommandRequest, ExecuteViewRequest};
use crate::wire::{GetCategoryConfigsResponse, GetViewConfigsResponse, ResponseError};

/// Query pairs in request order. Repeated keys keep the first value.
struct Params(Vec<(String, String)>);

impl Params {
    fn get(&self, key: &str) -> &str {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map_or("", |(_, v)| v.as_str())
    }

    fn optional(&self, key: &str) -> Option<String> {
        Some(self.get(key)).filter(|v| !v.is_empty()).map(str::to_string)
    }

    fn inputs(&self) -> Vec<InputValue> {
        InputValue::from_query_pairs(self.0.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    fn format(&self) -> Result<OutputFormat, ServiceError> {
        OutputFormat::parse(self.get("format"))
    }
}

/// Run an execution on its own task, cancelling it if this request future
/// is dropped (client disconnect).
async fn run_detached<F, Fut>(work: F) -> Result<ExecutionResult, ServiceError>
where
    F: FnOnce(CancellationToken) -> Fut,
    Fut: Future<Output = Result<ExecutionResult, ServiceError>> + Send + 'static,
{
    let cancel = CancellationToken::new();
    let _guard = cancel.clone().drop_guard();
    tokio::spawn(work(cancel))
        .await
        .map_err(|e| ServiceError::unknown(format!("execution task failed: {}", e)))?
}

pub(crate) async fn execute_command(
    Extension(service): Extension<DeckService>,
    Extension(caller): Extension<Caller>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = Params(params);
    let format = params.format()?;
    let request = ExecuteCommandRequest {
        command: params.get("slug").to_string(),
        inputs: params.inputs(),
    };
    let result = run_detached(move |cancel| async move {
        service
            .execute_command(caller.user_id(), request, cancel)
            .await
    })
    .await?;
    Ok(execution(format, result))
}

pub(crate) async fn execute_view(
    Extension(service): Extension<DeckService>,
    Extension(caller): Extension<Caller>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = Params(params);
    let format = params.format()?;
    let request = ExecuteViewRequest {
        view: params.get("view").to_string(),
        step: params.optional("step"),
        inputs: params.inputs(),
    };
    let result = run_detached(move |cancel| async move {
        service.execute_view(caller.user_id(), request, cancel).await
    })
    .await?;
    Ok(execution(format, result))
}

pub(crate) async fn get_view_configs(
    Extension(service): Extension<DeckService>,
    Extension(caller): Extension<Caller>,
) -> Json<GetViewConfigsResponse> {
    Json(GetViewConfigsResponse {
        view_configs: service.get_view_configs(caller.user_id()),
        error: ResponseError::none(),
    })
}

pub(crate) async fn get_category_configs(
    Extension(service): Extension<DeckService>,
    Extension(caller): Extension<Caller>,
) -> Json<GetCategoryConfigsResponse> {
    Json(GetCategoryConfigsResponse {
        category_configs: service.get_category_configs(caller.user_id()),
        error: ResponseError::none(),
    })
}

pub(crate) async fn categories_css(
    Extension(service): Extension<DeckService>,
    Extension(caller): Extension<Caller>,
) -> Response {
    (
        [(header::CONTENT_TYPE, "text/css; charset=utf-8")],
        service.category_css(caller.user_id()),
    )
        .into_response()
}

pub(crate) async fn health() -> &'static str {
    "ok"
}
