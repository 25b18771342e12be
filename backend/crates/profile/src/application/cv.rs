//! CV Use Cases
//!
//! Each user owns exactly one CV object, keyed by username. Uploading
//! again replaces the previous file.

use std::sync::Arc;

use crate::application::config::ProfileConfig;
use crate::domain::repository::CvStore;
use crate::domain::value_object::ObjectKey;
use crate::error::{ProfileError, ProfileResult};

/// Object key for a user's CV
pub fn cv_key(username: &str) -> ProfileResult<ObjectKey> {
    ObjectKey::new(format!("cv/{username}"))
}

/// Store CV use case
pub struct StoreCvUseCase<C>
where
    C: CvStore,
{
    store: Arc<C>,
    config: Arc<ProfileConfig>,
}

impl<C> StoreCvUseCase<C>
where
    C: CvStore + Sync,
{
    pub fn new(store: Arc<C>, config: Arc<ProfileConfig>) -> Self {
        Self { store, config }
    }

    pub async fn execute(&self, username: &str, bytes: &[u8]) -> ProfileResult<()> {
        if bytes.is_empty() {
            return Err(ProfileError::Validation("CV upload is empty".into()));
        }
        if bytes.len() > self.config.max_cv_bytes {
            return Err(ProfileError::Validation(format!(
                "CV exceeds {} bytes",
                self.config.max_cv_bytes
            )));
        }

        let key = cv_key(username)?;
        self.store.put(&key, bytes).await?;

        tracing::info!(username = %username, size = bytes.len(), "CV stored");
        Ok(())
    }
}

/// CV URL use case
pub struct CvUrlUseCase<C>
where
    C: CvStore,
{
    store: Arc<C>,
    config: Arc<ProfileConfig>,
}

impl<C> CvUrlUseCase<C>
where
    C: CvStore + Sync,
{
    pub fn new(store: Arc<C>, config: Arc<ProfileConfig>) -> Self {
        Self { store, config }
    }

    /// Mint a short-lived download URL for the caller's CV
    pub async fn execute(&self, username: &str) -> ProfileResult<String> {
        let key = cv_key(username)?;
        self.store.presigned_get_url(&key, self.config.cv_url_ttl).await
    }
}
