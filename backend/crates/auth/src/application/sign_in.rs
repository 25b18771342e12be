//! Sign In Use Case
//!
//! Authenticates a user and issues a signed session token.

use std::sync::Arc;

use chrono::Utc;
use platform::password::{PasswordDigest, PasswordSalt, PlainPassword};
use platform::secret::SecretProvider;

use crate::application::config::AuthConfig;
use crate::domain::repository::CredentialRepository;
use crate::domain::token::{self, TokenClaims};
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// Fixed salt for the unknown-user derivation; the digest is discarded
const UNKNOWN_USER_SALT_B64: &str = "Zm9ybXdvcmstdW5rbm93bg";

/// Sign in input
pub struct SignInInput {
    pub username: String,
    pub password: String,
}

/// Sign in output
pub struct SignInOutput {
    /// Signed bearer session token
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R, S>
where
    R: CredentialRepository,
    S: SecretProvider,
{
    repo: Arc<R>,
    secrets: Arc<S>,
    config: Arc<AuthConfig>,
}

impl<R, S> SignInUseCase<R, S>
where
    R: CredentialRepository,
    S: SecretProvider + Sync,
{
    pub fn new(repo: Arc<R>, secrets: Arc<S>, config: Arc<AuthConfig>) -> Self {
        Self {
            repo,
            secrets,
            config,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        // A name that cannot exist in the store answers like a wrong
        // password; clients cannot probe the username space
        let username =
            UserName::new(&input.username).map_err(|_| AuthError::InvalidCredentials)?;

        let password =
            PlainPassword::new(input.password).map_err(|_| AuthError::InvalidCredentials)?;

        let Some(credential) = self.repo.find_by_username(&username).await? else {
            // Pay the same hashing cost as a wrong password so response
            // timing does not reveal whether the username exists
            Self::equalize_hash_cost(&password);
            return Err(AuthError::UserNotFound);
        };

        if !credential.verify_password(&password)? {
            return Err(AuthError::InvalidCredentials);
        }

        let secret = self.secrets.fetch().await?;

        let expires_at = Utc::now() + self.config.token_ttl_chrono();
        let claims = TokenClaims::new(username.as_str(), expires_at);
        let token = token::sign(&claims, &secret);

        tracing::info!(
            username = %username,
            expires_at = %expires_at,
            "User signed in"
        );

        Ok(SignInOutput { token })
    }

    /// Derive against a fixed salt and discard the result.
    ///
    /// Runs only when the username has no record, so both failure paths
    /// perform one Argon2 derivation.
    fn equalize_hash_cost(password: &PlainPassword) {
        if let Ok(salt) = PasswordSalt::from_stored(UNKNOWN_USER_SALT_B64) {
            let _ = PasswordDigest::derive(password, &salt);
        }
    }
}
