//! Get Profile Use Case

use std::sync::Arc;

use crate::domain::entity::GeneralProfile;
use crate::domain::repository::ProfileRepository;
use crate::error::{ProfileError, ProfileResult};

/// Get profile use case
pub struct GetProfileUseCase<R>
where
    R: ProfileRepository,
{
    repo: Arc<R>,
}

impl<R> GetProfileUseCase<R>
where
    R: ProfileRepository + Sync,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, username: &str) -> ProfileResult<GeneralProfile> {
        self.repo
            .get(username)
            .await?
            .ok_or(ProfileError::ProfileNotFound)
    }
}
