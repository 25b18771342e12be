//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::entity::GeneralProfile;

/// Put profile request, wrapping the profile payload
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PutProfileRequest {
    pub profile: GeneralProfile,
}

/// Presigned CV download URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CvUrlResponse {
    pub url: String,
}
