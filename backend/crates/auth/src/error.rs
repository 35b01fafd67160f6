//! Auth Error Types
//!
//! This module provides auth-specific error variants that integrate
//! with the unified `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
///
/// Registration and login deliberately return distinct errors for
/// "username taken", "user not found" and "invalid password". Username
/// enumeration is the accepted usability tradeoff here.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Password failed the registration strength policy
    #[error(
        "Password must be at least 8 characters long and contain an uppercase letter, a lowercase letter, and a number"
    )]
    WeakPassword,

    /// Username failed validation
    #[error("Invalid username: {0}")]
    InvalidUserName(String),

    /// Username already exists
    #[error("Username already exists")]
    UsernameTaken,

    /// User not found (login)
    #[error("User not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("Invalid password")]
    InvalidPassword,

    /// Session missing, not found, or expired
    #[error("You need to log in to access this page")]
    SessionInvalid,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    ///
    /// The credential failures are all 400 Bad Request on purpose: the
    /// external contract distinguishes them by message, not status.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::WeakPassword
            | AuthError::InvalidUserName(_)
            | AuthError::UsernameTaken
            | AuthError::UserNotFound
            | AuthError::InvalidPassword => StatusCode::BAD_REQUEST,
            AuthError::SessionInvalid => StatusCode::UNAUTHORIZED,
            AuthError::Database(_) | AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::WeakPassword
            | AuthError::InvalidUserName(_)
            | AuthError::UsernameTaken
            | AuthError::UserNotFound
            | AuthError::InvalidPassword => ErrorKind::BadRequest,
            AuthError::SessionInvalid => ErrorKind::Unauthorized,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidPassword | AuthError::UserNotFound => {
                tracing::warn!("Invalid login attempt");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
