use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failure kinds a handler can end with. The variant alone decides the status
/// code and body; the attached message is only logged.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("resource not found")]
    NotFound,

    #[error("unprocessable request: {0}")]
    Unprocessable(String),

    #[error("internal error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl ApiError {
    pub fn unprocessable(error: impl std::fmt::Display) -> Self {
        ApiError::Unprocessable(error.to_string())
    }

    fn status_and_message(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            ApiError::Unprocessable(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessible"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::NotFound => tracing::debug!("{}", self),
            ApiError::Unprocessable(_) => tracing::warn!("{}", self),
            ApiError::Internal(_) => tracing::error!("{}", self),
        }
        let (status, message) = self.status_and_message();
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(error: sqlx::Error) -> ApiError {
        ApiError::Internal(error.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> ApiError {
        ApiError::Unprocessable(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> ApiError {
        ApiError::Unprocessable(rejection.body_text())
    }
}

// Non-numeric ids in the path never match a resource.
impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> ApiError {
        tracing::debug!("Path rejected: {}", rejection.body_text());
        ApiError::NotFound
    }
}
