//! API error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use super::envelope::ApiResponse;
use crate::domain::DomainError;

/// API error with status code and envelope body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub error: String,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            error: error.into(),
        }
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, error)
    }

    /// Not found error
    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Resource not found", error)
    }

    /// Conflict error
    pub fn conflict(error: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, "Resource conflict", error)
    }

    /// Internal server error
    pub fn internal(error: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body: ApiResponse<()> = ApiResponse::failure(self.message, self.error);

        (self.status, Json(body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match &err {
            DomainError::Validation(inner) => {
                Self::bad_request("Validation failed", inner.to_string())
            }
            DomainError::Credential(inner) => {
                Self::bad_request("Invalid credentials", inner.to_string())
            }
            DomainError::InvalidId { message } => Self::bad_request("Invalid ID format", message),
            DomainError::NotFound { message } => Self::not_found(message),
            DomainError::Conflict { message } => Self::conflict(message),
            DomainError::Storage { message } => {
                tracing::error!(error = %message, "storage error");
                Self::internal("Something went wrong")
            }
            DomainError::Internal { message } => {
                tracing::error!(error = %message, "internal error");
                Self::internal("Something went wrong")
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.status, self.error)
    }
}

impl std::error::Error for ApiError {}
