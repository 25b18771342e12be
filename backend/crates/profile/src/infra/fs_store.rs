//! Filesystem CV Store
//!
//! Stores CV blobs under a root directory and mints presigned download
//! URLs. The URL carries an expiry instant and an HMAC over the key and
//! expiry, so whatever serves `/files/` can authorize the download
//! without shared session state.

use std::path::PathBuf;
use std::time::Duration;

use chrono::{DateTime, Utc};
use platform::crypto::{hmac_sha256, hmac_sha256_verify, to_base64url};

use crate::domain::repository::CvStore;
use crate::domain::value_object::ObjectKey;
use crate::error::{ProfileError, ProfileResult};

// ============================================================================
// URL Signer
// ============================================================================

/// Signs and checks expiring download URLs for blob objects
#[derive(Clone)]
pub struct UrlSigner {
    secret: Vec<u8>,
    base_url: String,
}

impl UrlSigner {
    pub fn new(secret: impl Into<Vec<u8>>, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }

        Self {
            secret: secret.into(),
            base_url,
        }
    }

    fn mac(&self, key: &ObjectKey, expires_at: i64) -> [u8; 32] {
        let payload = format!("{key}\n{expires_at}");
        hmac_sha256(&self.secret, payload.as_bytes())
    }

    /// Presigned GET URL valid until `now + ttl`
    pub fn sign(&self, key: &ObjectKey, ttl: Duration, now: DateTime<Utc>) -> String {
        let expires_at = now.timestamp() + ttl.as_secs() as i64;
        let sig = to_base64url(&self.mac(key, expires_at));

        format!("{}/files/{key}?exp={expires_at}&sig={sig}", self.base_url)
    }

    /// Check a presented signature against the key and expiry instant.
    /// The signature is checked before the expiry so a forged URL learns
    /// nothing from the response.
    pub fn verify(
        &self,
        key: &ObjectKey,
        expires_at: i64,
        sig: &[u8],
        now: DateTime<Utc>,
    ) -> bool {
        if !hmac_sha256_verify(&self.secret, format!("{key}\n{expires_at}").as_bytes(), sig) {
            return false;
        }
        now.timestamp() < expires_at
    }
}

// ============================================================================
// Filesystem store
// ============================================================================

/// CV store backed by a directory tree
#[derive(Clone)]
pub struct FsCvStore {
    root: PathBuf,
    signer: UrlSigner,
}

impl FsCvStore {
    pub fn new(root: impl Into<PathBuf>, signer: UrlSigner) -> Self {
        Self {
            root: root.into(),
            signer,
        }
    }

    fn object_path(&self, key: &ObjectKey) -> PathBuf {
        // ObjectKey validation already rejected traversal segments.
        self.root.join(key.as_str())
    }

    pub fn signer(&self) -> &UrlSigner {
        &self.signer
    }

    /// Read an object's bytes, `None` if it does not exist
    pub async fn read(&self, key: &ObjectKey) -> ProfileResult<Option<Vec<u8>>> {
        match tokio::fs::read(self.object_path(key)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl CvStore for FsCvStore {
    async fn put(&self, key: &ObjectKey, bytes: &[u8]) -> ProfileResult<()> {
        let path = self.object_path(key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;

        Ok(())
    }

    async fn presigned_get_url(&self, key: &ObjectKey, ttl: Duration) -> ProfileResult<String> {
        let path = self.object_path(key);

        if !tokio::fs::try_exists(&path).await? {
            return Err(ProfileError::ObjectNotFound);
        }

        Ok(self.signer.sign(key, ttl, Utc::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use platform::crypto::from_base64url;

    const SECRET: &[u8] = b"url-signer-test-secret";

    fn signer() -> UrlSigner {
        UrlSigner::new(SECRET, "https://files.example.test/")
    }

    fn parse(url: &str) -> (i64, Vec<u8>) {
        let query = url.split_once('?').unwrap().1;
        let mut exp = None;
        let mut sig = None;
        for pair in query.split('&') {
            match pair.split_once('=').unwrap() {
                ("exp", v) => exp = Some(v.parse().unwrap()),
                ("sig", v) => sig = Some(from_base64url(v).unwrap()),
                _ => {}
            }
        }
        (exp.unwrap(), sig.unwrap())
    }

    #[test]
    fn test_signed_url_shape() {
        let key = ObjectKey::new("cv/alice").unwrap();
        let url = signer().sign(&key, Duration::from_secs(900), Utc::now());

        assert!(url.starts_with("https://files.example.test/files/cv/alice?exp="));
        assert!(url.contains("&sig="));
    }

    #[test]
    fn test_signature_verifies_until_expiry() {
        let signer = signer();
        let key = ObjectKey::new("cv/alice").unwrap();
        let now = Utc::now();
        let url = signer.sign(&key, Duration::from_secs(900), now);
        let (exp, sig) = parse(&url);

        assert!(signer.verify(&key, exp, &sig, now));
        assert!(!signer.verify(&key, exp, &sig, now + chrono::Duration::seconds(901)));
    }

    #[test]
    fn test_signature_bound_to_key_and_expiry() {
        let signer = signer();
        let key = ObjectKey::new("cv/alice").unwrap();
        let other = ObjectKey::new("cv/mallory").unwrap();
        let now = Utc::now();
        let url = signer.sign(&key, Duration::from_secs(900), now);
        let (exp, sig) = parse(&url);

        assert!(!signer.verify(&other, exp, &sig, now));
        assert!(!signer.verify(&key, exp + 3600, &sig, now));
    }

    #[test]
    fn test_foreign_secret_rejected() {
        let key = ObjectKey::new("cv/alice").unwrap();
        let now = Utc::now();
        let url = signer().sign(&key, Duration::from_secs(900), now);
        let (exp, sig) = parse(&url);

        let other = UrlSigner::new(b"another-secret".as_slice(), "https://files.example.test");
        assert!(!other.verify(&key, exp, &sig, now));
    }

    #[tokio::test]
    async fn test_fs_store_put_and_presign() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsCvStore::new(dir.path(), signer());
        let key = ObjectKey::new("cv/alice").unwrap();

        store.put(&key, b"%PDF-1.7 fake").await.unwrap();
        assert_eq!(
            tokio::fs::read(dir.path().join("cv/alice")).await.unwrap(),
            b"%PDF-1.7 fake"
        );

        let url = store
            .presigned_get_url(&key, Duration::from_secs(900))
            .await
            .unwrap();
        assert!(url.contains("/files/cv/alice?exp="));
    }

    #[tokio::test]
    async fn test_fs_store_presign_missing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsCvStore::new(dir.path(), signer());
        let key = ObjectKey::new("cv/nobody").unwrap();

        let result = store.presigned_get_url(&key, Duration::from_secs(900)).await;
        assert!(matches!(result, Err(ProfileError::ObjectNotFound)));
    }

    #[tokio::test]
    async fn test_fs_store_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let store = FsCvStore::new(dir.path(), signer());
        let key = ObjectKey::new("cv/alice").unwrap();

        store.put(&key, b"first").await.unwrap();
        store.put(&key, b"second").await.unwrap();

        assert_eq!(store.object_path(&key), dir.path().join("cv/alice"));
        assert_eq!(
            tokio::fs::read(dir.path().join("cv/alice")).await.unwrap(),
            b"second"
        );
    }
}
