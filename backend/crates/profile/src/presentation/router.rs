//! Profile Router
//!
//! Routes are unguarded here; the api binary wraps this router in the
//! auth gate so every handler can rely on the `AuthUser` extension.

use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;

use crate::application::config::ProfileConfig;
use crate::domain::repository::{CvStore, ProfileRepository};
use crate::infra::fs_store::FsCvStore;
use crate::infra::postgres::PgProfileRepository;
use crate::presentation::handlers::{self, ProfileAppState};

/// Create the Profile router with PostgreSQL and filesystem backends
pub fn profile_router(
    repo: PgProfileRepository,
    cv_store: FsCvStore,
    config: ProfileConfig,
) -> Router {
    profile_router_generic(repo, cv_store, config)
}

/// Create a generic Profile router for any backend implementations
pub fn profile_router_generic<R, C>(repo: R, cv_store: C, config: ProfileConfig) -> Router
where
    R: ProfileRepository + Clone + Send + Sync + 'static,
    C: CvStore + Clone + Send + Sync + 'static,
{
    let state = ProfileAppState {
        repo: Arc::new(repo),
        cv_store: Arc::new(cv_store),
        config: Arc::new(config),
    };

    Router::new()
        .route(
            "/profile",
            put(handlers::put_profile::<R, C>).get(handlers::get_profile::<R, C>),
        )
        .route("/cv", post(handlers::upload_cv::<R, C>))
        .route("/cv/url", get(handlers::cv_url::<R, C>))
        .with_state(state)
}
