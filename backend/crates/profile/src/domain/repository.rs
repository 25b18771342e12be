//! Repository Traits
//!
//! Storage contracts for profiles and CV blobs.

use std::time::Duration;

use crate::domain::entity::GeneralProfile;
use crate::domain::value_object::ObjectKey;
use crate::error::ProfileResult;

/// General-profile key/value store. `put` overwrites an existing record.
#[trait_variant::make(ProfileRepository: Send)]
pub trait LocalProfileRepository {
    async fn put(&self, username: &str, profile: &GeneralProfile) -> ProfileResult<()>;

    async fn get(&self, username: &str) -> ProfileResult<Option<GeneralProfile>>;
}

/// Blob store for CV files.
///
/// Retrieval happens out of band through a presigned URL; the store never
/// streams object bytes back through the API.
#[trait_variant::make(CvStore: Send)]
pub trait LocalCvStore {
    async fn put(&self, key: &ObjectKey, bytes: &[u8]) -> ProfileResult<()>;

    async fn presigned_get_url(&self, key: &ObjectKey, ttl: Duration) -> ProfileResult<String>;
}
