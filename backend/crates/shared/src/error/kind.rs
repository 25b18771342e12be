//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum that maps to HTTP status codes.

use serde::Serialize;

/// Error classification mapped to HTTP status codes.
///
/// Every variant corresponds to an RFC 7231/9110 status code. Handlers
/// never pick raw status codes; they pick a kind and let the response
/// layer do the mapping.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.status_code(), 404);
/// assert_eq!(kind.as_str(), "Not Found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// 400 - the request itself is malformed
    BadRequest,
    /// 401 - authentication required or failed
    Unauthorized,
    /// 403 - authenticated but not allowed
    Forbidden,
    /// 404 - resource does not exist
    NotFound,
    /// 408 - request timed out
    RequestTimeout,
    /// 409 - conflicts with current state
    Conflict,
    /// 422 - well-formed but semantically invalid
    UnprocessableEntity,
    /// 500 - server-side fault
    InternalServerError,
    /// 503 - a backing service is unavailable
    ServiceUnavailable,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    #[inline]
    pub const fn status_code(&self) -> u16 {
        match self {
            ErrorKind::BadRequest => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::NotFound => 404,
            ErrorKind::RequestTimeout => 408,
            ErrorKind::Conflict => 409,
            ErrorKind::UnprocessableEntity => 422,
            ErrorKind::InternalServerError => 500,
            ErrorKind::ServiceUnavailable => 503,
        }
    }

    /// Standard reason phrase for this kind.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "Bad Request",
            ErrorKind::Unauthorized => "Unauthorized",
            ErrorKind::Forbidden => "Forbidden",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::RequestTimeout => "Request Timeout",
            ErrorKind::Conflict => "Conflict",
            ErrorKind::UnprocessableEntity => "Unprocessable Entity",
            ErrorKind::InternalServerError => "Internal Server Error",
            ErrorKind::ServiceUnavailable => "Service Unavailable",
        }
    }

    /// 5xx errors. These should be logged.
    #[inline]
    pub const fn is_server_error(&self) -> bool {
        self.status_code() >= 500
    }

    /// 4xx errors.
    #[inline]
    pub const fn is_client_error(&self) -> bool {
        let code = self.status_code();
        code >= 400 && code < 500
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ErrorKind::BadRequest.status_code(), 400);
        assert_eq!(ErrorKind::Unauthorized.status_code(), 401);
        assert_eq!(ErrorKind::Forbidden.status_code(), 403);
        assert_eq!(ErrorKind::NotFound.status_code(), 404);
        assert_eq!(ErrorKind::RequestTimeout.status_code(), 408);
        assert_eq!(ErrorKind::Conflict.status_code(), 409);
        assert_eq!(ErrorKind::UnprocessableEntity.status_code(), 422);
        assert_eq!(ErrorKind::InternalServerError.status_code(), 500);
        assert_eq!(ErrorKind::ServiceUnavailable.status_code(), 503);
    }

    #[test]
    fn test_is_server_error() {
        assert!(!ErrorKind::BadRequest.is_server_error());
        assert!(!ErrorKind::NotFound.is_server_error());
        assert!(ErrorKind::InternalServerError.is_server_error());
        assert!(ErrorKind::ServiceUnavailable.is_server_error());
    }

    #[test]
    fn test_is_client_error() {
        assert!(ErrorKind::BadRequest.is_client_error());
        assert!(ErrorKind::Unauthorized.is_client_error());
        assert!(!ErrorKind::InternalServerError.is_client_error());
    }
}
