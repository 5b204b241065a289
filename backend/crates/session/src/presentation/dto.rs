//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

/// Request for POST /api/session/refresh
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub session_id: String,
}

/// Response for a successful refresh
///
/// The refresh token itself never appears in the body; it travels only
/// as the three segment cookies.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub status: &'static str,
    pub access_token: String,
}

impl RefreshResponse {
    pub fn success(access_token: String) -> Self {
        Self {
            status: "SUCCESS",
            access_token,
        }
    }
}

/// Request for POST /api/session/logout
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutRequest {
    pub session_id: String,
}
