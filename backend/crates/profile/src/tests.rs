//! Unit and router tests for the Profile crate

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use crate::application::config::ProfileConfig;
    use crate::application::cv::cv_key;
    use crate::application::{CvUrlUseCase, GetProfileUseCase, PutProfileUseCase, StoreCvUseCase};
    use crate::domain::entity::GeneralProfile;
    use crate::error::ProfileError;
    use crate::infra::memory::{InMemoryCvStore, InMemoryProfileRepository};

    fn profile(first: &str) -> GeneralProfile {
        GeneralProfile {
            first_name: first.to_string(),
            last_name: "Lovelace".to_string(),
            country_iso: "US".to_string(),
            address: None,
        }
    }

    #[tokio::test]
    async fn test_put_then_get_roundtrip() {
        let repo = Arc::new(InMemoryProfileRepository::new());

        PutProfileUseCase::new(repo.clone())
            .execute("alice", &profile("Ada"))
            .await
            .unwrap();

        let stored = GetProfileUseCase::new(repo).execute("alice").await.unwrap();
        assert_eq!(stored.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let put = PutProfileUseCase::new(repo.clone());

        put.execute("alice", &profile("Ada")).await.unwrap();
        put.execute("alice", &profile("Augusta")).await.unwrap();

        let stored = GetProfileUseCase::new(repo).execute("alice").await.unwrap();
        assert_eq!(stored.first_name, "Augusta");
    }

    #[tokio::test]
    async fn test_put_rejects_invalid_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());

        let mut bad = profile("Ada");
        bad.country_iso = "ZZ".to_string();

        let result = PutProfileUseCase::new(repo.clone())
            .execute("alice", &bad)
            .await;
        assert!(matches!(result, Err(ProfileError::Validation(_))));

        // Nothing was persisted.
        let lookup = GetProfileUseCase::new(repo).execute("alice").await;
        assert!(matches!(lookup, Err(ProfileError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_get_missing_profile() {
        let repo = Arc::new(InMemoryProfileRepository::new());
        let result = GetProfileUseCase::new(repo).execute("nobody").await;
        assert!(matches!(result, Err(ProfileError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_cv_store_and_url() {
        let store = Arc::new(InMemoryCvStore::new());
        let config = Arc::new(ProfileConfig::default());

        StoreCvUseCase::new(store.clone(), config.clone())
            .execute("alice", b"%PDF-1.7 fake")
            .await
            .unwrap();

        let key = cv_key("alice").unwrap();
        assert_eq!(store.object(&key).await.unwrap(), b"%PDF-1.7 fake");

        let url = CvUrlUseCase::new(store, config)
            .execute("alice")
            .await
            .unwrap();
        assert_eq!(url, "memory://cv/alice");
    }

    #[tokio::test]
    async fn test_cv_upload_size_limits() {
        let store = Arc::new(InMemoryCvStore::new());
        let config = Arc::new(ProfileConfig {
            max_cv_bytes: 16,
            ..ProfileConfig::default()
        });
        let use_case = StoreCvUseCase::new(store, config);

        let empty = use_case.execute("alice", b"").await;
        assert!(matches!(empty, Err(ProfileError::Validation(_))));

        let oversized = use_case.execute("alice", &[0u8; 17]).await;
        assert!(matches!(oversized, Err(ProfileError::Validation(_))));

        assert!(use_case.execute("alice", &[0u8; 16]).await.is_ok());
    }

    #[tokio::test]
    async fn test_cv_url_without_upload() {
        let store = Arc::new(InMemoryCvStore::new());
        let config = Arc::new(ProfileConfig::default());

        let result = CvUrlUseCase::new(store, config).execute("alice").await;
        assert!(matches!(result, Err(ProfileError::ObjectNotFound)));
    }
}

#[cfg(test)]
mod router_tests {
    use auth::middleware::AuthUser;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::{Extension, Router};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::application::config::ProfileConfig;
    use crate::domain::entity::GeneralProfile;
    use crate::infra::memory::{InMemoryCvStore, InMemoryProfileRepository};
    use crate::presentation::dto::CvUrlResponse;
    use crate::presentation::router::profile_router_generic;

    /// Router with the gate replaced by a fixed principal
    fn test_router() -> Router {
        profile_router_generic(
            InMemoryProfileRepository::new(),
            InMemoryCvStore::new(),
            ProfileConfig::default(),
        )
        .layer(Extension(AuthUser("alice".to_string())))
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    const PUT_BODY: &str = r#"{
        "profile": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "countryISO": "US",
            "address": {"city": "Boston", "state": "MA"}
        }
    }"#;

    #[tokio::test]
    async fn test_put_then_get_profile() {
        let router = test_router();

        let put = router
            .clone()
            .oneshot(json_request("PUT", "/profile", PUT_BODY))
            .await
            .unwrap();
        assert_eq!(put.status(), StatusCode::OK);

        let get = router.oneshot(get_request("/profile")).await.unwrap();
        assert_eq!(get.status(), StatusCode::OK);

        let bytes = get.into_body().collect().await.unwrap().to_bytes();
        let profile: GeneralProfile = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(profile.first_name, "Ada");
        assert_eq!(profile.address.unwrap().city.as_deref(), Some("Boston"));
    }

    #[tokio::test]
    async fn test_put_invalid_profile_returns_400() {
        let router = test_router();
        let body = r#"{"profile":{"firstName":"Ada","lastName":"Lovelace","countryISO":"FR"}}"#;

        let response = router
            .oneshot(json_request("PUT", "/profile", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_profile_before_put_returns_404() {
        let router = test_router();
        let response = router.oneshot(get_request("/profile")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cv_upload_then_url() {
        let router = test_router();

        let upload = Request::builder()
            .method("POST")
            .uri("/cv")
            .body(Body::from("%PDF-1.7 fake"))
            .unwrap();
        let response = router.clone().oneshot(upload).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = router.oneshot(get_request("/cv/url")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let payload: CvUrlResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(payload.url, "memory://cv/alice");
    }

    #[tokio::test]
    async fn test_cv_url_before_upload_returns_404() {
        let router = test_router();
        let response = router.oneshot(get_request("/cv/url")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}

#[cfg(test)]
mod files_router_tests {
    use std::time::Duration;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use chrono::Utc;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::domain::repository::CvStore;
    use crate::domain::value_object::ObjectKey;
    use crate::infra::fs_store::{FsCvStore, UrlSigner};
    use crate::presentation::files::files_router;

    const SECRET: &[u8] = b"files-router-test-secret";

    async fn store_with_object(dir: &tempfile::TempDir) -> FsCvStore {
        let signer = UrlSigner::new(SECRET, "http://localhost");
        let store = FsCvStore::new(dir.path(), signer);
        let key = ObjectKey::new("cv/alice").unwrap();
        store.put(&key, b"%PDF-1.7 fake").await.unwrap();
        store
    }

    fn path_of(url: &str) -> String {
        url.strip_prefix("http://localhost").unwrap().to_string()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_presigned_download() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_object(&dir).await;
        let key = ObjectKey::new("cv/alice").unwrap();
        let url = store
            .presigned_get_url(&key, Duration::from_secs(900))
            .await
            .unwrap();

        let response = files_router(store).oneshot(get(&path_of(&url))).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"%PDF-1.7 fake");
    }

    #[tokio::test]
    async fn test_tampered_signature_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_object(&dir).await;
        let key = ObjectKey::new("cv/alice").unwrap();
        let url = store
            .presigned_get_url(&key, Duration::from_secs(900))
            .await
            .unwrap();

        let tampered = format!("{}AAAA", path_of(&url));
        let response = files_router(store).oneshot(get(&tampered)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_expired_url_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_object(&dir).await;
        let key = ObjectKey::new("cv/alice").unwrap();

        // Signed in the past, already beyond its lifetime
        let url = store.signer().sign(
            &key,
            Duration::from_secs(900),
            Utc::now() - chrono::Duration::hours(1),
        );

        let response = files_router(store).oneshot(get(&path_of(&url))).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_signed_url_for_missing_object() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_with_object(&dir).await;
        let key = ObjectKey::new("cv/nobody").unwrap();

        // A valid signature does not conjure the object
        let url = store.signer().sign(&key, Duration::from_secs(900), Utc::now());

        let response = files_router(store).oneshot(get(&path_of(&url))).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
