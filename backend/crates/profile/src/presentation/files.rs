//! Presigned File Downloads
//!
//! Serves the URLs minted by [`UrlSigner`]. The route is public; the
//! signature in the query string is the whole authorization, so it is
//! checked before anything touches the filesystem.
//!
//! [`UrlSigner`]: crate::infra::fs_store::UrlSigner

use axum::Router;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use chrono::Utc;
use platform::crypto::from_base64url;
use serde::Deserialize;

use crate::domain::value_object::ObjectKey;
use crate::infra::fs_store::FsCvStore;

/// Query parameters of a presigned URL
#[derive(Debug, Deserialize)]
pub struct PresignedQuery {
    exp: i64,
    sig: String,
}

/// GET /files/{*key}
pub async fn download(
    State(store): State<FsCvStore>,
    Path(key): Path<String>,
    Query(query): Query<PresignedQuery>,
) -> Response {
    let Ok(key) = ObjectKey::new(key) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let Ok(sig) = from_base64url(&query.sig) else {
        return StatusCode::FORBIDDEN.into_response();
    };

    if !store.signer().verify(&key, query.exp, &sig, Utc::now()) {
        tracing::debug!(key = %key, "Presigned download rejected");
        return StatusCode::FORBIDDEN.into_response();
    }

    match store.read(&key).await {
        Ok(Some(bytes)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/octet-stream")],
            bytes,
        )
            .into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}

/// Build the public download router
pub fn files_router(store: FsCvStore) -> Router {
    Router::new()
        .route("/files/{*key}", get(download))
        .with_state(store)
}
