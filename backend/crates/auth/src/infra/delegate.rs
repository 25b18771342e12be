//! Remote Verification Delegate Client
//!
//! The auth gate's side of the delegate boundary. Any failure to get a
//! definite username out of the delegate — timeout, transport error,
//! non-success status, unparseable body — is treated as unauthenticated.

use std::time::Duration;

use crate::domain::repository::TokenAuthority;
use crate::presentation::dto::{VerifyRequest, VerifyResponse};

/// Client for the standalone token-verification delegate service
#[derive(Clone)]
pub struct RemoteTokenAuthority {
    client: reqwest::Client,
    verify_url: String,
}

impl RemoteTokenAuthority {
    /// Default timeout for a delegate round trip
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

    pub fn new(verify_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            verify_url: verify_url.into(),
        })
    }
}

impl TokenAuthority for RemoteTokenAuthority {
    async fn authenticate(&self, token: &str) -> Option<String> {
        let request = VerifyRequest {
            token: token.to_string(),
        };

        let response = match self.client.post(&self.verify_url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(error = %e, "Verification delegate unreachable");
                return None;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                "Verification delegate returned non-success status"
            );
            return None;
        }

        match response.json::<VerifyResponse>().await {
            Ok(payload) => payload.username,
            Err(e) => {
                tracing::warn!(error = %e, "Verification delegate response unparseable");
                None
            }
        }
    }
}
