//! Signing-Secret Providers
//!
//! The token signing secret lives in a secret-management backend, not in
//! process configuration. Issuers and verifiers receive a provider at
//! construction and fetch on demand; an optional TTL cache bounds backend
//! round trips. A backend failure never degrades into a default secret.

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::Deserialize;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::crypto;

// ============================================================================
// Error Types
// ============================================================================

/// Secret retrieval errors
#[derive(Debug, Error)]
pub enum SecretError {
    /// The backend could not be reached or answered with an error
    #[error("Secret backend request failed: {0}")]
    Backend(String),

    /// The backend answered, but the payload carries no usable secret
    #[error("Secret payload is malformed")]
    MalformedPayload,

    /// The provider has no secret source configured
    #[error("Secret source not configured: {0}")]
    NotConfigured(String),
}

// ============================================================================
// Provider Trait
// ============================================================================

/// Source of the token signing secret
#[trait_variant::make(SecretProvider: Send)]
pub trait LocalSecretProvider {
    /// Fetch the current signing secret as raw bytes
    async fn fetch(&self) -> Result<Vec<u8>, SecretError>;
}

// ============================================================================
// Static Provider (tests, development)
// ============================================================================

/// Fixed in-memory secret
#[derive(Clone)]
pub struct StaticSecretProvider {
    bytes: Vec<u8>,
}

impl StaticSecretProvider {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl SecretProvider for StaticSecretProvider {
    async fn fetch(&self) -> Result<Vec<u8>, SecretError> {
        Ok(self.bytes.clone())
    }
}

// ============================================================================
// Environment Provider
// ============================================================================

/// Secret read from an environment variable on every fetch
#[derive(Clone)]
pub struct EnvSecretProvider {
    var: String,
}

impl EnvSecretProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl SecretProvider for EnvSecretProvider {
    async fn fetch(&self) -> Result<Vec<u8>, SecretError> {
        std::env::var(&self.var)
            .map(String::into_bytes)
            .map_err(|_| SecretError::NotConfigured(self.var.clone()))
    }
}

// ============================================================================
// HTTP Backend Provider
// ============================================================================

/// Secret-value payload as returned by the secret-management backend.
///
/// Exactly one of the two fields is populated; binary secrets arrive
/// base64-encoded and must be decoded before use as key material.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SecretValuePayload {
    secret_string: Option<String>,
    secret_binary: Option<String>,
}

fn decode_payload(payload: SecretValuePayload) -> Result<Vec<u8>, SecretError> {
    if let Some(s) = payload.secret_string {
        return Ok(s.into_bytes());
    }
    if let Some(b64) = payload.secret_binary {
        return crypto::from_base64(&b64).map_err(|_| SecretError::MalformedPayload);
    }
    Err(SecretError::MalformedPayload)
}

/// Secret fetched from an HTTP secret-management backend by fixed id
#[derive(Clone)]
pub struct HttpSecretProvider {
    client: reqwest::Client,
    endpoint: String,
    secret_id: String,
}

impl HttpSecretProvider {
    /// Default timeout for a secret fetch round trip
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(
        endpoint: impl Into<String>,
        secret_id: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, SecretError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SecretError::Backend(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            secret_id: secret_id.into(),
        })
    }
}

impl SecretProvider for HttpSecretProvider {
    async fn fetch(&self) -> Result<Vec<u8>, SecretError> {
        let url = format!(
            "{}/secrets/{}",
            self.endpoint.trim_end_matches('/'),
            self.secret_id
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            tracing::warn!(error = %e, "Secret backend unreachable");
            SecretError::Backend(e.to_string())
        })?;

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                "Secret backend returned non-success status"
            );
            return Err(SecretError::Backend(format!(
                "backend returned status {}",
                response.status()
            )));
        }

        let payload: SecretValuePayload = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Secret backend payload unparseable");
            SecretError::MalformedPayload
        })?;

        decode_payload(payload)
    }
}

// ============================================================================
// TTL Cache Wrapper
// ============================================================================

struct CacheEntry {
    bytes: Vec<u8>,
    fetched_at: Instant,
}

/// Caches the wrapped provider's secret for a fixed TTL.
///
/// Invalidation policy: entries expire after `ttl` and are refetched on the
/// next access; there is no active refresh. A failed refetch surfaces the
/// error instead of serving the stale entry.
#[derive(Clone)]
pub struct CachedSecretProvider<P> {
    inner: P,
    ttl: Duration,
    cache: Arc<RwLock<Option<CacheEntry>>>,
}

impl<P> CachedSecretProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cache: Arc::new(RwLock::new(None)),
        }
    }
}

impl<P> SecretProvider for CachedSecretProvider<P>
where
    P: SecretProvider + Send + Sync,
{
    async fn fetch(&self) -> Result<Vec<u8>, SecretError> {
        {
            let guard = self.cache.read().await;
            if let Some(entry) = guard.as_ref() {
                if entry.fetched_at.elapsed() < self.ttl {
                    return Ok(entry.bytes.clone());
                }
            }
        }

        let bytes = self.inner.fetch().await?;

        let mut guard = self.cache.write().await;
        *guard = Some(CacheEntry {
            bytes: bytes.clone(),
            fetched_at: Instant::now(),
        });

        Ok(bytes)
    }
}

// ============================================================================
// Tests
// ============================================================================
