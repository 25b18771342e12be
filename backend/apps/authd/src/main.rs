//! Token Verification Delegate Entry Point
//!
//! Standalone service answering `POST /verify` for the api server's
//! auth gate. Runs with no database; all it needs is the token signing
//! secret.

use auth::delegate_router;
use platform::secret::{CachedSecretProvider, HttpSecretProvider};
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

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
                .unwrap_or_else(|_| "authd=info,auth=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

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

    let app = delegate_router(secrets);

    let addr = SocketAddr::from(([0, 0, 0, 0], 31114));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
