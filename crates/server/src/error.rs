//! Unified error handling for the storefront API.
//!
//! Every error leaves the server as JSON: `{"error": <reason>}` plus an
//! optional `details` array of per-field messages for validation failures.
//! Store internals never reach the client; 500s carry a generic body and
//! the real error goes to Sentry.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// One itemized validation failure.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application-level error type for the storefront API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// Request body failed validation.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// User is not authenticated.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// State conflict (duplicate account, referenced product).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Bad request from client.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound("resource not found".to_string()),
            RepositoryError::Conflict(reason) => Self::Conflict(reason),
            other @ RepositoryError::Database(_) => Self::Database(other),
        }
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                Self::Unauthorized("invalid username or password".to_string())
            }
            AuthError::UsernameTaken => Self::Conflict("username already exists".to_string()),
            AuthError::EmailTaken => Self::Conflict("email already exists".to_string()),
            AuthError::UserNotFound => Self::Unauthorized("session no longer valid".to_string()),
            AuthError::PasswordHash => Self::Internal("password hashing failed".to_string()),
            AuthError::Repository(repo) => Self::from(repo),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Server faults get captured; client faults are just request outcomes
        if matches!(self, Self::Database(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
        };

        let body = match &self {
            Self::Database(_) | Self::Internal(_) => json!({ "error": "internal server error" }),
            Self::Validation(details) => json!({
                "error": "validation failed",
                "details": details,
            }),
            Self::NotFound(msg) | Self::Unauthorized(msg) | Self::Conflict(msg)
            | Self::BadRequest(msg) => json!({ "error": msg }),
        };

        (status, Json(body)).into_response()
    }
}

/// Set the Sentry user context from a logged-in user.
pub fn set_sentry_user(user_id: naijamart_core::UserId, username: &str) {
    sentry::configure_scope(|scope| {
        scope.set_user(Some(sentry::User {
            id: Some(user_id.to_string()),
            username: Some(username.to_string()),
            ..Default::default()
        }));
    });
}

/// Clear the Sentry user context.
pub fn clear_sentry_user() {
    sentry::configure_scope(|scope| {
        scope.set_user(None);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("product 42".to_string());
        assert_eq!(err.to_string(), "not found: product 42");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        assert_eq!(
            status_of(AppError::Validation(vec![FieldError::new(
                "quantity",
                "must be at least 1"
            )])),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(AppError::Unauthorized("test".to_string())),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Conflict("test".to_string())),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repository_error_mapping() {
        assert_eq!(
            status_of(RepositoryError::NotFound.into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(RepositoryError::Conflict("taken".to_string()).into()),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_auth_error_mapping() {
        assert_eq!(
            status_of(AuthError::InvalidCredentials.into()),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AuthError::UsernameTaken.into()),
            StatusCode::CONFLICT
        );
        assert_eq!(status_of(AuthError::EmailTaken.into()), StatusCode::CONFLICT);
    }
}
