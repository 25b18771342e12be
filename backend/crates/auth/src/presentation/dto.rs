//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

// ============================================================================
// Sign Up
// ============================================================================

/// Sign up request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

// ============================================================================
// Sign In
// ============================================================================

/// Sign in request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInRequest {
    pub username: String,
    pub password: String,
}

/// Sign in response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInResponse {
    /// Signed bearer session token
    pub token: String,
}

// ============================================================================
// Delegate Verification (internal boundary, not client-facing)
// ============================================================================

/// Verification request: the raw token string, nothing else
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub token: String,
}

/// Verification response.
///
/// `{username}` when the token checked out, `{}` otherwise. The boundary
/// never carries an error; a missing username means "unauthenticated".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}
