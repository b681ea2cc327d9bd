//! Unified API error handling
//!
//! This module provides a consistent error response format across all API endpoints.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

/// Standard error response format
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error type/code
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Unique request ID for tracing
    pub request_id: String,
}

/// Unified API error type
///
/// All API endpoints should return `Result<T, ApiError>` for consistent error handling.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Case not found (404)
    #[error("Case not found: {0}")]
    CaseNotFound(i64),

    /// Verdict not found (404)
    #[error("Verdict not found for case: {0}")]
    VerdictNotFound(i64),

    /// Bad request / validation error (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Missing or invalid identity (401)
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Authenticated but not allowed (403)
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Verdict generation failed (500)
    #[error("Verdict generation failed: {0}")]
    Generation(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Database error (500)
    #[error("Database error: {0}")]
    Database(String),

    /// External service error (502)
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) | ApiError::CaseNotFound(_) | ApiError::VerdictNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::ExternalService(_) => StatusCode::BAD_GATEWAY,
            ApiError::Generation(_) | ApiError::Internal(_) | ApiError::Database(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error_type = match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::CaseNotFound(_) => "case_not_found",
            ApiError::VerdictNotFound(_) => "verdict_not_found",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::Unauthorized(_) => "unauthorized",
            ApiError::Forbidden(_) => "forbidden",
            ApiError::Generation(_) => "generation_failed",
            ApiError::Internal(_) => "internal_error",
            ApiError::Database(_) => "database_error",
            ApiError::ExternalService(_) => "external_service_error",
        };

        tracing::error!(
            error_type = error_type,
            status = status.as_u16(),
            message = %self,
            "API error"
        );

        HttpResponse::build(status).json(ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            request_id: Uuid::new_v4().to_string(),
        })
    }
}

// ============================================================================
// From conversions for service errors
// ============================================================================

impl From<crate::db::DbError> for ApiError {
    fn from(err: crate::db::DbError) -> Self {
        match err {
            crate::db::DbError::NotFound(id) => ApiError::NotFound(id),
            _ => ApiError::Database(err.to_string()),
        }
    }
}

impl From<crate::service::case::CaseServiceError> for ApiError {
    fn from(err: crate::service::case::CaseServiceError) -> Self {
        match err {
            crate::service::case::CaseServiceError::Db(crate::db::DbError::NotFound(id)) => {
                ApiError::NotFound(format!("Case {}", id))
            }
            crate::service::case::CaseServiceError::Db(e) => ApiError::Database(e.to_string()),
            crate::service::case::CaseServiceError::NotOwner(id) => {
                ApiError::Forbidden(format!("Case {} belongs to another user", id))
            }
        }
    }
}

impl From<crate::service::verdict::VerdictError> for ApiError {
    fn from(err: crate::service::verdict::VerdictError) -> Self {
        match err {
            crate::service::verdict::VerdictError::CaseNotFound(id) => ApiError::CaseNotFound(id),
            crate::service::verdict::VerdictError::VerdictNotFound(id) => {
                ApiError::VerdictNotFound(id)
            }
            crate::service::verdict::VerdictError::GenerationFailed(msg)
            | crate::service::verdict::VerdictError::ValidationFailed(msg) => {
                ApiError::Generation(msg)
            }
            crate::service::verdict::VerdictError::Db(e) => ApiError::Database(e.to_string()),
        }
    }
}

impl From<crate::service::vote::VoteServiceError> for ApiError {
    fn from(err: crate::service::vote::VoteServiceError) -> Self {
        match err {
            crate::service::vote::VoteServiceError::CaseNotFound(id) => ApiError::CaseNotFound(id),
            crate::service::vote::VoteServiceError::Db(e) => ApiError::Database(e.to_string()),
        }
    }
}

impl From<crate::service::bookmark::BookmarkServiceError> for ApiError {
    fn from(err: crate::service::bookmark::BookmarkServiceError) -> Self {
        match err {
            crate::service::bookmark::BookmarkServiceError::CaseNotFound(id) => {
                ApiError::CaseNotFound(id)
            }
            crate::service::bookmark::BookmarkServiceError::Db(e) => {
                ApiError::Database(e.to_string())
            }
        }
    }
}

impl From<crate::service::comment::CommentServiceError> for ApiError {
    fn from(err: crate::service::comment::CommentServiceError) -> Self {
        match err {
            crate::service::comment::CommentServiceError::CaseNotFound(id) => {
                ApiError::CaseNotFound(id)
            }
            crate::service::comment::CommentServiceError::EmptyComment => {
                ApiError::BadRequest("Comment text must not be empty".to_string())
            }
            crate::service::comment::CommentServiceError::Db(e) => {
                ApiError::Database(e.to_string())
            }
        }
    }
}
