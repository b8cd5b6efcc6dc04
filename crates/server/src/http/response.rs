// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use sd_core::{ErrorKind, ExecutionResult, OutputFormat, ServiceError};
use tracing::{error, warn};

use crate::wire::{ErrorResponse, ExecuteCommandResponse, ResponseError};

/// A [`ServiceError`] on its way to the client.
///
/// The detail is logged here and never serialized.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        match err.kind() {
            ErrorKind::Unknown => error!(error = %err, "request failed"),
            kind => warn!(kind = %kind, error = %err, "request rejected"),
        }
        let status =
            StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = ErrorResponse {
            error: ResponseError::from(&err),
        };
        (status, Json(body)).into_response()
    }
}

/// 401 for requests that carry no usable identity.
pub(crate) fn unauthenticated(challenge: Option<&'static str>) -> Response {
    let body = Json(ErrorResponse {
        error: ResponseError::new("Unauthenticated", "Unauthenticated"),
    });
    match challenge {
        Some(challenge) => (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, challenge)],
            body,
        )
            .into_response(),
        None => (StatusCode::UNAUTHORIZED, body).into_response(),
    }
}

/// Render a finished execution in the requested format.
pub(crate) fn execution(format: OutputFormat, result: ExecutionResult) -> Response {
    match format {
        OutputFormat::Raw => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            result.stdout,
        )
            .into_response(),
        OutputFormat::Json => Json(ExecuteCommandResponse {
            output: result,
            error: ResponseError::none(),
        })
        .into_response(),
    }
}
