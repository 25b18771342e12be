//! In-Memory Repository Implementation
//!
//! Backs tests and local development; the write lock makes the
//! conditional insert atomic the way the database's primary-key
//! constraint does in production.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::entity::UserCredential;
use crate::domain::repository::CredentialRepository;
use crate::domain::value_object::UserName;
use crate::error::AuthResult;

/// In-memory credential repository
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    records: Arc<RwLock<HashMap<String, UserCredential>>>,
}

impl InMemoryCredentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialRepository for InMemoryCredentialRepository {
    async fn create_if_absent(&self, credential: &UserCredential) -> AuthResult<bool> {
        let mut records = self.records.write().await;
        let key = credential.username.as_str().to_string();

        if records.contains_key(&key) {
            return Ok(false);
        }

        records.insert(key, credential.clone());
        Ok(true)
    }

    async fn find_by_username(&self, username: &UserName) -> AuthResult<Option<UserCredential>> {
        let records = self.records.read().await;
        Ok(records.get(username.as_str()).cloned())
    }
}
