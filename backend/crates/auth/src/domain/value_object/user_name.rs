//! User Name Value Object
//!
//! The username is the credential record's primary key and the subject
//! claim of issued tokens.
//!
//! ## Invariants
//! - 3 to 30 characters after NFKC normalization
//! - ASCII letters, digits and `_ . - +` only
//! - Starts and ends with a letter, digit or `_`
//! - Case-insensitive: the canonical (stored) form is lowercase

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use unicode_normalization::UnicodeNormalization;

// ============================================================================
// Constants
// ============================================================================

/// Minimum length for user name (in characters)
pub const USER_NAME_MIN_LENGTH: usize = 3;

/// Maximum length for user name (in characters)
pub const USER_NAME_MAX_LENGTH: usize = 30;

/// Allowed special characters in user name
const ALLOWED_SPECIAL_CHARS: &[char] = &['_', '.', '-', '+'];

// ============================================================================
// Error Type
// ============================================================================

/// User name validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserNameError {
    #[error("User name must be at least {USER_NAME_MIN_LENGTH} characters")]
    TooShort,

    #[error("User name must be at most {USER_NAME_MAX_LENGTH} characters")]
    TooLong,

    #[error("User name contains an invalid character: '{0}'")]
    InvalidCharacter(char),

    #[error("User name must start and end with a letter, digit or underscore")]
    InvalidBoundary,
}

// ============================================================================
// Value Object
// ============================================================================

/// Validated, canonical (lowercase) user name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and canonicalize a raw user name.
    ///
    /// Processing order: NFKC normalization, validation, lowercasing.
    pub fn new(raw: impl AsRef<str>) -> Result<Self, UserNameError> {
        let normalized: String = raw.as_ref().nfkc().collect();

        let char_count = normalized.chars().count();
        if char_count < USER_NAME_MIN_LENGTH {
            return Err(UserNameError::TooShort);
        }
        if char_count > USER_NAME_MAX_LENGTH {
            return Err(UserNameError::TooLong);
        }

        for ch in normalized.chars() {
            if !ch.is_ascii_alphanumeric() && !ALLOWED_SPECIAL_CHARS.contains(&ch) {
                return Err(UserNameError::InvalidCharacter(ch));
            }
        }

        let first = normalized.chars().next().unwrap_or(' ');
        let last = normalized.chars().last().unwrap_or(' ');
        for boundary in [first, last] {
            if !boundary.is_ascii_alphanumeric() && boundary != '_' {
                return Err(UserNameError::InvalidBoundary);
            }
        }

        Ok(Self(normalized.to_ascii_lowercase()))
    }

    /// Restore a canonical user name from the database.
    ///
    /// Stored values went through [`UserName::new`] at registration, so
    /// this re-applies the same validation to catch corrupt rows.
    pub fn from_db(stored: &str) -> Result<Self, UserNameError> {
        Self::new(stored)
    }

    /// Canonical form
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for UserName {
    type Error = UserNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}
