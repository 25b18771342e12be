//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use platform::secret::SecretProvider;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{SignInInput, SignInUseCase, SignUpInput, SignUpUseCase};
use crate::domain::repository::CredentialRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{SignInRequest, SignInResponse, SignUpRequest};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R, S>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub secrets: Arc<S>,
    pub config: Arc<AuthConfig>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /api/auth/signup
///
/// 200 with an empty body, also for duplicate usernames (idempotent).
pub async fn sign_up<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<StatusCode>
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(state.repo.clone());

    let input = SignUpInput {
        username: req.username,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::OK)
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /api/auth/signin
///
/// 200 `{token}` on valid credentials; bare 403 on invalid ones. Unknown
/// usernames take the same 403 path as wrong passwords.
pub async fn sign_in<R, S>(
    State(state): State<AuthAppState<R, S>>,
    Json(req): Json<SignInRequest>,
) -> Response
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.secrets.clone(),
        state.config.clone(),
    );

    let input = SignInInput {
        username: req.username,
        password: req.password,
    };

    match use_case.execute(input).await {
        Ok(output) => (
            StatusCode::OK,
            Json(SignInResponse {
                token: output.token,
            }),
        )
            .into_response(),
        Err(AuthError::InvalidCredentials | AuthError::UserNotFound) => {
            tracing::warn!("Invalid login attempt");
            StatusCode::FORBIDDEN.into_response()
        }
        Err(e) => e.into_response(),
    }
}
