//! In-Memory Implementations
//!
//! Back tests and local development.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use crate::domain::entity::GeneralProfile;
use crate::domain::repository::{CvStore, ProfileRepository};
use crate::domain::value_object::ObjectKey;
use crate::error::{ProfileError, ProfileResult};

/// In-memory profile repository
#[derive(Clone, Default)]
pub struct InMemoryProfileRepository {
    records: Arc<RwLock<HashMap<String, GeneralProfile>>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProfileRepository for InMemoryProfileRepository {
    async fn put(&self, username: &str, profile: &GeneralProfile) -> ProfileResult<()> {
        let mut records = self.records.write().await;
        records.insert(username.to_string(), profile.clone());
        Ok(())
    }

    async fn get(&self, username: &str) -> ProfileResult<Option<GeneralProfile>> {
        let records = self.records.read().await;
        Ok(records.get(username).cloned())
    }
}

/// In-memory CV store handing out unsigned fake URLs
#[derive(Clone, Default)]
pub struct InMemoryCvStore {
    objects: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryCvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn object(&self, key: &ObjectKey) -> Option<Vec<u8>> {
        self.objects.read().await.get(key.as_str()).cloned()
    }
}

impl CvStore for InMemoryCvStore {
    async fn put(&self, key: &ObjectKey, bytes: &[u8]) -> ProfileResult<()> {
        let mut objects = self.objects.write().await;
        objects.insert(key.as_str().to_string(), bytes.to_vec());
        Ok(())
    }

    async fn presigned_get_url(&self, key: &ObjectKey, _ttl: Duration) -> ProfileResult<String> {
        let objects = self.objects.read().await;
        if !objects.contains_key(key.as_str()) {
            return Err(ProfileError::ObjectNotFound);
        }
        Ok(format!("memory://{key}"))
    }
}
