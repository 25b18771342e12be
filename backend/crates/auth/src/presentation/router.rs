//! Auth Router

use axum::{Router, routing::post};
use platform::secret::SecretProvider;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::infra::postgres::PgCredentialRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router<S>(repo: PgCredentialRepository, secrets: Arc<S>, config: AuthConfig) -> Router
where
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    auth_router_generic(repo, secrets, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R, S>(repo: R, secrets: Arc<S>, config: AuthConfig) -> Router
where
    R: CredentialRepository + Clone + Send + Sync + 'static,
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo: Arc::new(repo),
        secrets,
        config: Arc::new(config),
    };

    Router::new()
        .route("/signup", post(handlers::sign_up::<R, S>))
        .route("/signin", post(handlers::sign_in::<R, S>))
        .with_state(state)
}
