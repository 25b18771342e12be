//! User Credential Entity
//!
//! One record per username: the per-user salt and the digest derived from
//! `(salt, password)` at registration. Records are created once and never
//! mutated or deleted.

use chrono::{DateTime, Utc};
use platform::password::{PasswordDigest, PasswordHashError, PasswordSalt, PlainPassword};

use crate::domain::value_object::UserName;

/// Stored credential record
#[derive(Debug, Clone)]
pub struct UserCredential {
    /// Primary key
    pub username: UserName,
    /// Per-user salt, generated exactly once at registration
    pub salt: PasswordSalt,
    /// Argon2id digest of `(salt, password)`
    pub password_digest: PasswordDigest,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl UserCredential {
    /// Build a fresh credential record: new salt, new digest.
    pub fn new(username: UserName, password: &PlainPassword) -> Result<Self, PasswordHashError> {
        let salt = PasswordSalt::generate();
        let password_digest = PasswordDigest::derive(password, &salt)?;

        Ok(Self {
            username,
            salt,
            password_digest,
            created_at: Utc::now(),
        })
    }

    /// Verify a candidate password against this record.
    ///
    /// Re-derives with the stored salt; the digest comparison is
    /// constant-time.
    pub fn verify_password(&self, candidate: &PlainPassword) -> Result<bool, PasswordHashError> {
        self.password_digest.matches(candidate, &self.salt)
    }
}
