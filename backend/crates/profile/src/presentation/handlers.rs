//! HTTP Handlers
//!
//! All routes here sit behind the auth gate; the authenticated username
//! arrives as an `AuthUser` request extension and scopes every
//! operation to the caller's own data.

use auth::middleware::AuthUser;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::{Extension, Json};
use std::sync::Arc;

use crate::application::config::ProfileConfig;
use crate::application::{CvUrlUseCase, GetProfileUseCase, PutProfileUseCase, StoreCvUseCase};
use crate::domain::entity::GeneralProfile;
use crate::domain::repository::{CvStore, ProfileRepository};
use crate::error::ProfileResult;
use crate::presentation::dto::{CvUrlResponse, PutProfileRequest};

/// Shared state for profile handlers
#[derive(Clone)]
pub struct ProfileAppState<R, C>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub cv_store: Arc<C>,
    pub config: Arc<ProfileConfig>,
}

// ============================================================================
// General profile
// ============================================================================

/// PUT /api/profile
pub async fn put_profile<R, C>(
    State(state): State<ProfileAppState<R, C>>,
    Extension(user): Extension<AuthUser>,
    Json(req): Json<PutProfileRequest>,
) -> ProfileResult<StatusCode>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    let use_case = PutProfileUseCase::new(state.repo.clone());
    use_case.execute(&user.0, &req.profile).await?;

    Ok(StatusCode::OK)
}

/// GET /api/profile
pub async fn get_profile<R, C>(
    State(state): State<ProfileAppState<R, C>>,
    Extension(user): Extension<AuthUser>,
) -> ProfileResult<Json<GeneralProfile>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    let use_case = GetProfileUseCase::new(state.repo.clone());
    let profile = use_case.execute(&user.0).await?;

    Ok(Json(profile))
}

// ============================================================================
// CV
// ============================================================================

/// POST /api/cv
pub async fn upload_cv<R, C>(
    State(state): State<ProfileAppState<R, C>>,
    Extension(user): Extension<AuthUser>,
    body: Bytes,
) -> ProfileResult<StatusCode>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    let use_case = StoreCvUseCase::new(state.cv_store.clone(), state.config.clone());
    use_case.execute(&user.0, &body).await?;

    Ok(StatusCode::OK)
}

/// GET /api/cv/url
pub async fn cv_url<R, C>(
    State(state): State<ProfileAppState<R, C>>,
    Extension(user): Extension<AuthUser>,
) -> ProfileResult<Json<CvUrlResponse>>
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    let use_case = CvUrlUseCase::new(state.cv_store.clone(), state.config.clone());
    let url = use_case.execute(&user.0).await?;

    Ok(Json(CvUrlResponse { url }))
}
