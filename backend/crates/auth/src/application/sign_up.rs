//! Sign Up Use Case
//!
//! Registers a new credential record. Registration is idempotent: a
//! duplicate username is a silent no-op, never an overwrite of the stored
//! salt and hash.

use std::sync::Arc;

use platform::password::PlainPassword;

use crate::domain::entity::UserCredential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::UserName;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub username: String,
    pub password: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: CredentialRepository,
{
    repo: Arc<R>,
}

impl<R> SignUpUseCase<R>
where
    R: CredentialRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<()> {
        let username = UserName::new(&input.username)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let password = PlainPassword::new(input.password)
            .map_err(|e| AuthError::Validation(e.to_string()))?;

        let credential = UserCredential::new(username.clone(), &password)?;

        let created = self.repo.create_if_absent(&credential).await?;

        if created {
            tracing::info!(username = %username, "User registered");
        } else {
            // Existing record wins; re-registration must not rotate the hash
            tracing::debug!(username = %username, "Duplicate registration suppressed");
        }

        Ok(())
    }
}
