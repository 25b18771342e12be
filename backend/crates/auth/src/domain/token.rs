//! Session Token Codec
//!
//! Self-contained bearer tokens: `base64url(header).base64url(claims).
//! base64url(signature)` with an HMAC-SHA256 signature over the first two
//! parts (HS256 wire format). Validity is decided entirely by signature
//! and expiry against the current secret and clock; nothing is persisted
//! server-side.

use chrono::{DateTime, Utc};
use platform::crypto;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const TOKEN_ALG: &str = "HS256";
const TOKEN_TYP: &str = "JWT";

/// Token decode failures.
///
/// `Expired` is only reported for tokens whose signature already checked
/// out; anything structurally wrong or unsigned is `Invalid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TokenError {
    #[error("token expired")]
    Expired,

    #[error("token invalid")]
    Invalid,
}

#[derive(Debug, Serialize, Deserialize)]
struct TokenHeader {
    alg: String,
    typ: String,
}

/// Claims carried by a session token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject: the authenticated username
    pub username: String,
    /// Absolute expiry instant, unix seconds
    pub exp: i64,
}

impl TokenClaims {
    pub fn new(username: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            username: username.into(),
            exp: expires_at.timestamp(),
        }
    }
}

/// Serialize and sign a claims set with the given secret.
pub fn sign(claims: &TokenClaims, secret: &[u8]) -> String {
    let header = TokenHeader {
        alg: TOKEN_ALG.to_string(),
        typ: TOKEN_TYP.to_string(),
    };

    // serde_json cannot fail on these plain structs
    let header_b64 =
        crypto::to_base64url(&serde_json::to_vec(&header).expect("header serializes"));
    let claims_b64 =
        crypto::to_base64url(&serde_json::to_vec(claims).expect("claims serialize"));

    let signing_input = format!("{header_b64}.{claims_b64}");
    let signature = crypto::hmac_sha256(secret, signing_input.as_bytes());

    format!("{signing_input}.{}", crypto::to_base64url(&signature))
}

/// Verify a token's signature and expiry, recovering the claims.
///
/// The signature is checked before any claim is inspected; unverified
/// claims are never trusted, so a tampered token with a readable payload
/// still comes back [`TokenError::Invalid`].
pub fn verify(token: &str, secret: &[u8], now: DateTime<Utc>) -> Result<TokenClaims, TokenError> {
    let mut parts = token.split('.');
    let (Some(header_b64), Some(claims_b64), Some(signature_b64), None) =
        (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(TokenError::Invalid);
    };

    let signing_input = format!("{header_b64}.{claims_b64}");
    let signature = crypto::from_base64url(signature_b64).map_err(|_| TokenError::Invalid)?;

    if !crypto::hmac_sha256_verify(secret, signing_input.as_bytes(), &signature) {
        return Err(TokenError::Invalid);
    }

    // Signature is good; the claims can be trusted from here on.
    let header_bytes = crypto::from_base64url(header_b64).map_err(|_| TokenError::Invalid)?;
    let header: TokenHeader =
        serde_json::from_slice(&header_bytes).map_err(|_| TokenError::Invalid)?;
    if header.alg != TOKEN_ALG {
        return Err(TokenError::Invalid);
    }

    let claims_bytes = crypto::from_base64url(claims_b64).map_err(|_| TokenError::Invalid)?;
    let claims: TokenClaims =
        serde_json::from_slice(&claims_bytes).map_err(|_| TokenError::Invalid)?;

    if now.timestamp() >= claims.exp {
        return Err(TokenError::Expired);
    }

    Ok(claims)
}
