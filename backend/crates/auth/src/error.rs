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
#[derive(Debug, Error)]
pub enum AuthError {
    /// Request field failed validation (username or password shape)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// No credential record for the username.
    ///
    /// Surfaced to clients exactly like [`AuthError::InvalidCredentials`]
    /// so the two are not distinguishable from the outside.
    #[error("User not found")]
    UserNotFound,

    /// Wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Protected request carried no token header
    #[error("Missing token header")]
    MissingToken,

    /// Token rejected: structurally broken, badly signed, or expired
    #[error("Token invalid")]
    TokenInvalid,

    /// Signing-secret backend failure
    #[error("Signing secret unavailable: {0}")]
    SecretUnavailable(#[from] platform::secret::SecretError),

    /// Password hashing failure
    #[error("Password hashing error: {0}")]
    Hashing(#[from] platform::password::PasswordHashError),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::Validation(_) => StatusCode::BAD_REQUEST,
            // Unknown user and wrong password answer identically
            AuthError::UserNotFound | AuthError::InvalidCredentials => StatusCode::FORBIDDEN,
            AuthError::MissingToken | AuthError::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }
            AuthError::SecretUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AuthError::Hashing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound | AuthError::InvalidCredentials => ErrorKind::Forbidden,
            AuthError::MissingToken | AuthError::TokenInvalid => {
                ErrorKind::Unauthorized
            }
            AuthError::SecretUnavailable(_) => ErrorKind::ServiceUnavailable,
            AuthError::Hashing(_) | AuthError::Database(_) | AuthError::Internal(_) => {
                ErrorKind::InternalServerError
            }
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
            AuthError::SecretUnavailable(e) => {
                tracing::error!(error = %e, "Signing secret unavailable");
            }
            AuthError::Hashing(e) => {
                tracing::error!(error = %e, "Password hashing error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials | AuthError::UserNotFound => {
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
