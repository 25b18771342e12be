//! Put Profile Use Case

use std::sync::Arc;

use crate::domain::entity::GeneralProfile;
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// Put profile use case
pub struct PutProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> PutProfileUseCase<R>
where
    R: ProfileRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Validate and store the profile, overwriting any previous one
    pub async fn execute(&self, username: &str, profile: &GeneralProfile) -> ProfileResult<()> {
        profile.validate()?;

        self.repo.put(username, profile).await?;

        tracing::info!(username = %username, "Profile stored");
        Ok(())
    }
}
