//! IoT device API key extractor.
//!
//! Sensor boards authenticate with a single shared secret sent in the
//! `X-IoT-API-Key` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use shared::crypto::sha256_hex;

use crate::app::AppState;
use crate::error::ApiError;

/// Header carrying the device secret.
pub const IOT_API_KEY_HEADER: &str = "X-IoT-API-Key";

/// Marker for a request carrying the configured device secret.
#[derive(Debug, Clone, Copy)]
pub struct IotApiKey;

impl IotApiKey {
    /// Checks a presented key against the configured one.
    ///
    /// An empty configured key rejects every request. Both sides are hashed
    /// before comparison so the comparison time does not depend on how much
    /// of the secret matched.
    pub fn validate(expected: &str, presented: Option<&str>) -> Result<Self, ApiError> {
        let presented = presented.unwrap_or_default();
        if expected.is_empty() || presented.is_empty() {
            return Err(ApiError::Unauthorized("Invalid or missing API key".to_string()));
        }

        if sha256_hex(presented) == sha256_hex(expected) {
            Ok(IotApiKey)
        } else {
            Err(ApiError::Unauthorized("Invalid or missing API key".to_string()))
        }
    }
}

#[async_trait]
impl FromRequestParts<AppState> for IotApiKey {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(IOT_API_KEY_HEADER)
            .and_then(|v| v.to_str().ok());

        Self::validate(&state.config.iot.api_key, presented)
    }
}
