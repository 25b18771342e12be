//! General Profile Entity

use serde::{Deserialize, Serialize};

use crate::error::{ProfileError, ProfileResult};

/// Countries the profile form currently accepts
pub const SUPPORTED_COUNTRIES: &[&str] = &["US"];

/// Postal address, every field optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street_address.is_none()
            && self.extra_address.is_none()
            && self.city.is_none()
            && self.state.is_none()
            && self.postal_code.is_none()
    }
}

/// General profile as submitted and returned over the API.
///
/// `country_iso` stays a plain string through deserialization so that an
/// unsupported country is a 400 validation failure, not a decode failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneralProfile {
    pub first_name: String,
    pub last_name: String,
    #[serde(rename = "countryISO")]
    pub country_iso: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

impl GeneralProfile {
    /// Check required fields and the country allowlist before persistence
    pub fn validate(&self) -> ProfileResult<()> {
        if self.first_name.trim().is_empty() {
            return Err(ProfileError::Validation("firstName is required".into()));
        }
        if self.last_name.trim().is_empty() {
            return Err(ProfileError::Validation("lastName is required".into()));
        }
        if !SUPPORTED_COUNTRIES.contains(&self.country_iso.as_str()) {
            return Err(ProfileError::Validation(format!(
                "countryISO must be one of {SUPPORTED_COUNTRIES:?}"
            )));
        }
        Ok(())
    }
}
