use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{INTERNAL_ERROR_BODY, NOT_FOUND_BODY};
use crate::shared::types::ErrorBody;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendered as a bare 404 regardless of the reason
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(ref reason) => {
                tracing::debug!("Not found: {}", reason);
                not_found()
            }
            AppError::MalformedInput(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::malformed_input(message)),
            )
                .into_response(),
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                internal_error()
            }
            AppError::Io(ref e) => {
                tracing::error!("I/O error: {:?}", e);
                internal_error()
            }
            AppError::Render(ref msg) => {
                tracing::error!("Render error: {}", msg);
                internal_error()
            }
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                internal_error()
            }
        }
    }
}

/// Plain-text 404 shared by handlers and the router fallback
pub fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        NOT_FOUND_BODY,
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        INTERNAL_ERROR_BODY,
    )
        .into_response()
}

pub type Result<T> = std::result::Result<T, AppError>;
