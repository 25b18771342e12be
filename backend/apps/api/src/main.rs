//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use auth::middleware::{AuthGateState, TOKEN_HEADER, require_token};
use auth::{AuthConfig, PgCredentialRepository, auth_router};
use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use platform::secret::{CachedSecretProvider, HttpSecretProvider};
use profile::{
    FsCvStore, PgProfileRepository, ProfileConfig, UrlSigner, files_router, profile_router,
};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

/// How long a fetched signing secret may be reused before a refetch
const SECRET_CACHE_TTL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,profile=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Token signing secret, fetched from the secret backend and cached
    let secret_backend_url =
        env::var("SECRET_BACKEND_URL").expect("SECRET_BACKEND_URL must be set in environment");
    let token_secret_id =
        env::var("TOKEN_SECRET_ID").expect("TOKEN_SECRET_ID must be set in environment");

    let secrets = Arc::new(CachedSecretProvider::new(
        HttpSecretProvider::new(
            secret_backend_url,
            token_secret_id,
            HttpSecretProvider::DEFAULT_TIMEOUT,
        )?,
        SECRET_CACHE_TTL,
    ));

    // Token verification is delegated to the authd service
    let verify_url = env::var("AUTH_VERIFY_URL")
        .unwrap_or_else(|_| "http://localhost:31114/verify".to_string());
    let authority = auth::infra::RemoteTokenAuthority::new(
        verify_url,
        auth::infra::RemoteTokenAuthority::DEFAULT_TIMEOUT,
    )?;
    let gate = AuthGateState::new(Arc::new(authority));

    // CV blob storage
    let cv_root = env::var("CV_STORAGE_ROOT").unwrap_or_else(|_| "./data/cv".to_string());
    let cv_url_secret =
        env::var("CV_URL_SECRET").expect("CV_URL_SECRET must be set in environment");
    let files_base_url =
        env::var("FILES_BASE_URL").unwrap_or_else(|_| "http://localhost:31113".to_string());
    let cv_store = FsCvStore::new(cv_root, UrlSigner::new(cv_url_secret, files_base_url));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:40922,http://127.0.0.1:40922".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(TOKEN_HEADER),
        ]));

    // Protected routes sit behind the auth gate
    let protected = profile_router(
        PgProfileRepository::new(pool.clone()),
        cv_store.clone(),
        ProfileConfig::default(),
    )
    .layer(axum::middleware::from_fn_with_state(
        gate,
        require_token::<auth::infra::RemoteTokenAuthority>,
    ));

    // Build router
    let app = Router::new()
        .nest(
            "/api/auth",
            auth_router(
                PgCredentialRepository::new(pool.clone()),
                secrets,
                AuthConfig::default(),
            ),
        )
        .nest("/api", protected)
        .merge(files_router(cv_store))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], 31113));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
