//! Application Configuration
//!
//! Configuration for the Auth application layer.

use std::time::Duration;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Session token lifetime (5 days)
    pub token_ttl: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_ttl: Duration::from_secs(5 * 24 * 3600),
        }
    }
}

impl AuthConfig {
    /// Token TTL as a chrono duration for expiry arithmetic
    pub fn token_ttl_chrono(&self) -> chrono::Duration {
        chrono::Duration::from_std(self.token_ttl)
            .unwrap_or_else(|_| chrono::Duration::days(5))
    }
}
