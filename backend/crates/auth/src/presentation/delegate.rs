//! Verification Delegate Service
//!
//! Server side of the delegate boundary. Verification always answers
//! 200 with either `{username}` or `{}`; the caller cannot distinguish
//! an expired token from a forged one. Only a secret-backend outage
//! surfaces as an error status.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use platform::secret::SecretProvider;
use std::sync::Arc;

use crate::application::{TokenOutcome, VerifyTokenUseCase};
use crate::presentation::dto::{VerifyRequest, VerifyResponse};

/// Shared state for the delegate service
#[derive(Clone)]
pub struct DelegateState<S>
where
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    pub secrets: Arc<S>,
}

/// POST /verify
pub async fn verify<S>(
    State(state): State<DelegateState<S>>,
    Json(req): Json<VerifyRequest>,
) -> Response
where
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    let use_case = VerifyTokenUseCase::new(state.secrets.clone());

    match use_case.execute(&req.token).await {
        Ok(TokenOutcome::Valid(username)) => Json(VerifyResponse {
            username: Some(username),
        })
        .into_response(),
        Ok(TokenOutcome::Expired) => {
            tracing::debug!("Expired token presented to delegate");
            Json(VerifyResponse::default()).into_response()
        }
        Ok(TokenOutcome::Invalid) => {
            tracing::debug!("Invalid token presented to delegate");
            Json(VerifyResponse::default()).into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Build the delegate router
pub fn delegate_router<S>(secrets: Arc<S>) -> Router
where
    S: SecretProvider + Clone + Send + Sync + 'static,
{
    let state = DelegateState { secrets };

    Router::new().route("/verify", post(verify::<S>)).with_state(state)
}
