//! Verify Token Use Case
//!
//! Validates a session token's signature and expiry and recovers the
//! embedded username. The result is an explicit outcome value, checked at
//! each boundary; expiry is not an exception path.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::secret::SecretProvider;

use crate::domain::token::{self, TokenError};
use crate::error::AuthResult;

/// Verification outcome.
///
/// Only infrastructure faults (secret backend) surface as errors; every
/// property of the token itself maps onto a variant here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenOutcome {
    /// Signature and expiry check out; carries the username claim
    Valid(String),
    /// Well-signed but past its expiry instant
    Expired,
    /// Structurally broken, unsigned, or signed with another secret
    Invalid,
}

impl TokenOutcome {
    /// Username for a valid token, `None` otherwise
    pub fn username(self) -> Option<String> {
        match self {
            TokenOutcome::Valid(username) => Some(username),
            TokenOutcome::Expired | TokenOutcome::Invalid => None,
        }
    }
}

/// Verify token use case
pub struct VerifyTokenUseCase<S>
where
    S: SecretProvider,
{
    secrets: Arc<S>,
}

impl<S> VerifyTokenUseCase<S>
where
    S: SecretProvider + Sync,
{
    pub fn new(secrets: Arc<S>) -> Self {
        Self { secrets }
    }

    pub async fn execute(&self, token: &str) -> AuthResult<TokenOutcome> {
        self.execute_at(token, Utc::now()).await
    }

    /// Verify against an explicit clock (testable expiry)
    pub async fn execute_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<TokenOutcome> {
        let secret = self.secrets.fetch().await?;

        let outcome = match token::verify(token, &secret, now) {
            Ok(claims) => TokenOutcome::Valid(claims.username),
            Err(TokenError::Expired) => TokenOutcome::Expired,
            Err(TokenError::Invalid) => TokenOutcome::Invalid,
        };

        Ok(outcome)
    }
}
