//! Blob Object Key
//!
//! Keys address objects in the blob store and end up embedded in URLs
//! and filesystem paths, so the accepted alphabet is deliberately
//! narrow and path traversal is rejected outright.

use crate::error::{ProfileError, ProfileResult};

/// Validated key for an object in the blob store
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectKey(String);

impl ObjectKey {
    pub const MAX_LEN: usize = 512;

    pub fn new(raw: impl Into<String>) -> ProfileResult<Self> {
        let raw = raw.into();

        if raw.is_empty() || raw.len() > Self::MAX_LEN {
            return Err(ProfileError::InvalidObjectKey);
        }
        if raw.starts_with('/') || raw.ends_with('/') {
            return Err(ProfileError::InvalidObjectKey);
        }

        for segment in raw.split('/') {
            if segment.is_empty() || segment == "." || segment == ".." {
                return Err(ProfileError::InvalidObjectKey);
            }
            let ok = segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '+'));
            if !ok {
                return Err(ProfileError::InvalidObjectKey);
            }
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
