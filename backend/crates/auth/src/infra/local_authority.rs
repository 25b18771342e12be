//! In-Process Token Authority
//!
//! Runs the verifier directly instead of crossing the delegate
//! boundary. Used by tests and by deployments that co-locate the gate
//! with the verifier; the api server always talks to authd through
//! [`RemoteTokenAuthority`](super::RemoteTokenAuthority).

use std::sync::Arc;

use platform::secret::SecretProvider;

use crate::application::VerifyTokenUseCase;
use crate::domain::repository::TokenAuthority;

/// Token authority backed by the local verifier
#[derive(Clone)]
pub struct InProcessTokenAuthority<S>
where
    S: SecretProvider + Send + Sync + 'static,
{
    secrets: Arc<S>,
}

impl<S> InProcessTokenAuthority<S>
where
    S: SecretProvider + Send + Sync + 'static,
{
    pub fn new(secrets: Arc<S>) -> Self {
        Self { secrets }
    }
}

impl<S> TokenAuthority for InProcessTokenAuthority<S>
where
    S: SecretProvider + Send + Sync + 'static,
{
    async fn authenticate(&self, token: &str) -> Option<String> {
        let use_case = VerifyTokenUseCase::new(self.secrets.clone());

        match use_case.execute(token).await {
            Ok(outcome) => outcome.username(),
            Err(e) => {
                tracing::error!(error = %e, "Token verification unavailable");
                None
            }
        }
    }
}
