//! Salted Password Hashing and Verification
//!
//! Credential records store the salt and the derived hash as two separate
//! attributes; the salt is generated exactly once per user at registration
//! and the hash is re-derived from the stored salt at every verification.
//!
//! ## Security Features
//! - Argon2id derivation (memory-hard, recommended by OWASP)
//! - Zeroization of clear-text passwords
//! - Constant-time digest comparison (via `password_hash::Output`)

use std::fmt;

use argon2::{Argon2, PasswordHasher, password_hash::{Output, SaltString}};
use rand::rngs::OsRng;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Maximum password length in characters (bounds hashing input)
pub const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Error Types
// ============================================================================

/// Password input violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is empty or whitespace only
    #[error("Password cannot be empty or contain only whitespace")]
    EmptyOrWhitespace,

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },
}

/// Hashing/decoding errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Derivation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored salt is not valid B64
    #[error("Invalid stored salt")]
    InvalidSalt,

    /// Stored digest is not valid B64
    #[error("Invalid stored password digest")]
    InvalidDigest,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization.
///
/// Does not implement `Clone`; Debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PlainPassword(String);

impl PlainPassword {
    /// Create a new clear text password.
    ///
    /// Unicode is normalized with NFKC so that the same visible password
    /// always derives the same hash. Rejects empty/whitespace-only input
    /// and input over [`MAX_PASSWORD_LENGTH`] characters.
    pub fn new(raw: impl Into<String>) -> Result<Self, PasswordPolicyError> {
        let raw = raw.into();
        let normalized: String = raw.nfkc().collect();

        if normalized.trim().is_empty() {
            return Err(PasswordPolicyError::EmptyOrWhitespace);
        }

        let char_count = normalized.chars().count();
        if char_count > MAX_PASSWORD_LENGTH {
            return Err(PasswordPolicyError::TooLong {
                max: MAX_PASSWORD_LENGTH,
                actual: char_count,
            });
        }

        Ok(Self(normalized))
    }

    /// Get the password as bytes for hashing
    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Debug for PlainPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PlainPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Per-user Salt
// ============================================================================

/// Per-user salt, generated once at registration and stored alongside the
/// derived hash.
#[derive(Clone)]
pub struct PasswordSalt(SaltString);

impl PasswordSalt {
    /// Generate a fresh random salt (128 bits)
    pub fn generate() -> Self {
        Self(SaltString::generate(OsRng))
    }

    /// Restore a salt from its stored form
    pub fn from_stored(s: &str) -> Result<Self, PasswordHashError> {
        SaltString::from_b64(s)
            .map(Self)
            .map_err(|_| PasswordHashError::InvalidSalt)
    }

    /// Storage form of the salt
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordSalt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PasswordSalt").field(&self.0.as_str()).finish()
    }
}

// ============================================================================
// Derived Digest (Safe to store)
// ============================================================================

/// Argon2id digest of `(salt, password)`.
///
/// Comparison goes through `password_hash::Output`, which is constant-time;
/// never compare digests through their encoded strings.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(Output);

impl PasswordDigest {
    /// Derive a digest from a password and a salt.
    ///
    /// Uses the default Argon2id parameters of the `argon2` crate
    /// (OWASP-recommended m=19456, t=2, p=1).
    pub fn derive(
        password: &PlainPassword,
        salt: &PasswordSalt,
    ) -> Result<Self, PasswordHashError> {
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), salt.0.as_salt())
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        let output = hash
            .hash
            .ok_or_else(|| PasswordHashError::HashingFailed("missing digest output".into()))?;

        Ok(Self(output))
    }

    /// Restore a digest from its stored form
    pub fn from_stored(s: &str) -> Result<Self, PasswordHashError> {
        Output::b64_decode(s)
            .map(Self)
            .map_err(|_| PasswordHashError::InvalidDigest)
    }

    /// Storage form of the digest (B64)
    pub fn encoded(&self) -> String {
        self.0.to_string()
    }

    /// Verify a candidate password against this digest.
    ///
    /// Re-derives with the stored salt and compares in constant time.
    pub fn matches(
        &self,
        candidate: &PlainPassword,
        salt: &PasswordSalt,
    ) -> Result<bool, PasswordHashError> {
        let derived = Self::derive(candidate, salt)?;
        Ok(derived.0 == self.0)
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordDigest").field("digest", &"[HASH]").finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_empty() {
        let result = PlainPassword::new("");
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_whitespace_only() {
        let result = PlainPassword::new("        ");
        assert!(matches!(result, Err(PasswordPolicyError::EmptyOrWhitespace)));
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(MAX_PASSWORD_LENGTH + 1);
        let result = PlainPassword::new(long_password);
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_derive_and_verify() {
        let password = PlainPassword::new("correct horse battery staple").unwrap();
        let salt = PasswordSalt::generate();
        let digest = PasswordDigest::derive(&password, &salt).unwrap();

        assert!(digest.matches(&password, &salt).unwrap());

        let wrong = PlainPassword::new("incorrect horse").unwrap();
        assert!(!digest.matches(&wrong, &salt).unwrap());
    }

    #[test]
    fn test_same_password_different_salts() {
        let password = PlainPassword::new("correct horse battery staple").unwrap();
        let salt_a = PasswordSalt::generate();
        let salt_b = PasswordSalt::generate();

        let digest_a = PasswordDigest::derive(&password, &salt_a).unwrap();
        let digest_b = PasswordDigest::derive(&password, &salt_b).unwrap();

        assert_ne!(digest_a.encoded(), digest_b.encoded());
    }

    #[test]
    fn test_storage_roundtrip() {
        let password = PlainPassword::new("correct horse battery staple").unwrap();
        let salt = PasswordSalt::generate();
        let digest = PasswordDigest::derive(&password, &salt).unwrap();

        let salt_restored = PasswordSalt::from_stored(salt.as_str()).unwrap();
        let digest_restored = PasswordDigest::from_stored(&digest.encoded()).unwrap();

        assert!(digest_restored.matches(&password, &salt_restored).unwrap());
    }

    #[test]
    fn test_invalid_stored_forms() {
        assert!(PasswordSalt::from_stored("not salt!!").is_err());
        assert!(PasswordDigest::from_stored("not a digest!!").is_err());
    }

    #[test]
    fn test_nfkc_normalization() {
        // Full-width and half-width forms normalize to the same bytes
        let a = PlainPassword::new("ｐａｓｓｗｏｒｄ漢字").unwrap();
        let b = PlainPassword::new("password漢字").unwrap();
        assert_eq!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn test_debug_redaction() {
        let password = PlainPassword::new("hunter22").unwrap();
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("hunter22"));
    }
}
