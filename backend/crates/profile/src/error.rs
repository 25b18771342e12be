//! Profile Error Types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::app_error::AppError;
use kernel::error::kind::ErrorKind;

/// Profile-specific errors
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid object key")]
    InvalidObjectKey,

    #[error("Profile not found")]
    ProfileNotFound,

    #[error("Stored object not found")]
    ObjectNotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Blob storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ProfileResult<T> = Result<T, ProfileError>;

impl ProfileError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ProfileError::Validation(_) | ProfileError::InvalidObjectKey => {
                StatusCode::BAD_REQUEST
            }
            ProfileError::ProfileNotFound | ProfileError::ObjectNotFound => StatusCode::NOT_FOUND,
            ProfileError::Database(_) | ProfileError::Storage(_) | ProfileError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Map error to kernel ErrorKind
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProfileError::Validation(_) | ProfileError::InvalidObjectKey => ErrorKind::BadRequest,
            ProfileError::ProfileNotFound | ProfileError::ObjectNotFound => ErrorKind::NotFound,
            ProfileError::Database(_) | ProfileError::Storage(_) | ProfileError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to kernel AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log at a severity that matches the failure class
    pub fn log(&self) {
        match self {
            ProfileError::Database(_) | ProfileError::Storage(_) | ProfileError::Internal(_) => {
                tracing::error!(error = %self, "Profile infrastructure error");
            }
            _ => {
                tracing::debug!(error = %self, "Profile request rejected");
            }
        }
    }
}

impl IntoResponse for ProfileError {
    fn into_response(self) -> Response {
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ProfileError {
    fn from(err: AppError) -> Self {
        ProfileError::Internal(err.to_string())
    }
}
