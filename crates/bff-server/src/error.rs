use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bff_core::ValidationError;
use bff_graphql::GraphqlError;
use serde::Serialize;

/// Message used when the upstream reports errors without any text.
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to fetch entries";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Parametro ausente o invalido
    #[error("bad request: {0}")]
    BadRequest(String),

    /// El upstream no encontro el contenido
    #[error("entries not found")]
    EntriesNotFound,

    /// Ruta no registrada
    #[error("route not found")]
    RouteNotFound,

    /// Error interno
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Error for a required query parameter that is absent or empty.
    pub fn missing_parameter(name: &str) -> Self {
        Self::BadRequest(format!("Missing required parameter: {}", name))
    }

    /// Maps an upstream failure: not-found becomes 404, anything else 500.
    pub fn upstream(err: &GraphqlError) -> Self {
        if err.is_not_found() {
            return Self::EntriesNotFound;
        }
        match err {
            GraphqlError::Response { messages }
                if messages.iter().all(|m| m.trim().is_empty()) =>
            {
                Self::Internal(DEFAULT_FAILURE_MESSAGE.to_string())
            },
            _ => Self::Internal(err.to_string()),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(format!("Invalid parameter: {}", err))
    }
}

/// JSON error body. Each status uses a subset of the two fields.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ErrorResponse {
    /// Body for unexpected failures: `{error:"Internal server error", message}`.
    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            error: Some("Internal server error".to_string()),
            message: Some(message.into()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: None,
                    message: Some(msg),
                },
            ),
            AppError::EntriesNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: None,
                    message: Some("Entries not found".to_string()),
                },
            ),
            AppError::RouteNotFound => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: Some("Route not found".to_string()),
                    message: None,
                },
            ),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg)),
        };

        (status, Json(body)).into_response()
    }
}
