//! Auth Gate Middleware
//!
//! Guards protected routes by delegating token verification to a
//! [`TokenAuthority`]. Requests without the token header are rejected
//! up front, before the authority is consulted.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use crate::domain::repository::TokenAuthority;
use crate::error::AuthError;

/// Header carrying the session token on protected requests
pub const TOKEN_HEADER: &str = "x-formwork-token";

/// Authenticated principal, inserted as a request extension by the gate
#[derive(Debug, Clone)]
pub struct AuthUser(pub String);

/// State captured by the auth gate layer
#[derive(Clone)]
pub struct AuthGateState<A>
where
    A: TokenAuthority + Send + Sync + 'static,
{
    pub authority: Arc<A>,
}

impl<A> AuthGateState<A>
where
    A: TokenAuthority + Send + Sync + 'static,
{
    pub fn new(authority: Arc<A>) -> Self {
        Self { authority }
    }
}

/// Rejects the request with 401 unless the token header is present and
/// the authority vouches for it. On success the resolved username is
/// attached to the request as an [`AuthUser`] extension.
///
/// Compose with `axum::middleware::from_fn_with_state`.
pub async fn require_token<A>(
    State(state): State<AuthGateState<A>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response>
where
    A: TokenAuthority + Send + Sync + 'static,
{
    // No header means no delegate round trip; a header that is not
    // valid UTF-8 cannot be a real token and is rejected the same way
    // a forged one would be.
    let token = match req.headers().get(TOKEN_HEADER) {
        None => return Err(AuthError::MissingToken.into_response()),
        Some(value) => match value.to_str() {
            Ok(token) => token.to_string(),
            Err(_) => return Err(AuthError::TokenInvalid.into_response()),
        },
    };

    let Some(username) = state.authority.authenticate(&token).await else {
        return Err(AuthError::TokenInvalid.into_response());
    };

    req.extensions_mut().insert(AuthUser(username));

    Ok(next.run(req).await)
}
