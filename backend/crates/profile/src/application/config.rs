//! Application Configuration

use std::time::Duration;

/// Profile application configuration
#[derive(Debug, Clone)]
pub struct ProfileConfig {
    /// Lifetime of a presigned CV download URL
    pub cv_url_ttl: Duration,
    /// Upper bound for an uploaded CV
    pub max_cv_bytes: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            cv_url_ttl: Duration::from_secs(15 * 60),
            max_cv_bytes: 5 * 1024 * 1024,
        }
    }
}
