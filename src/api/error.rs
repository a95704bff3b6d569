//! API error type and its HTTP mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use miette::Diagnostic;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

use crate::db::DbError;

/// Error response DTO
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    #[schema(example = "Board with ID 65a1f0c2e4b0a1b2c3d4e5f6 not found")]
    pub error: String,
}

/// Errors surfaced by the HTTP layer.
#[derive(Error, Diagnostic, Debug)]
pub enum ApiError {
    #[error("{entity_type} with ID {id} not found")]
    #[diagnostic(code(taskboard::api::not_found))]
    NotFound { entity_type: String, id: String },

    #[error("{0}")]
    #[diagnostic(code(taskboard::api::validation))]
    Validation(String),

    #[error("{0}")]
    #[diagnostic(code(taskboard::api::internal))]
    Internal(String),

    #[error("Server I/O error: {0}")]
    #[diagnostic(code(taskboard::api::io))]
    Io(#[from] std::io::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) | ApiError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { entity_type, id } => ApiError::NotFound { entity_type, id },
            DbError::Validation { message } => ApiError::Validation(message),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        }
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
