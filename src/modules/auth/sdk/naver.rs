use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const NAVER_API_BASE: &str = "https://openapi.naver.com";

/// Errors from the Naver SDK. The vendor reports through two distinct
/// channels (an HTTP-level failure callback and a client error callback);
/// both shapes are preserved because the adapter maps them to different
/// user-facing messages.
#[derive(Error, Debug, Clone)]
pub enum NaverAuthError {
    #[error("{message} (HTTP: {http_status})")]
    Failure { http_status: u16, message: String },
    #[error("{message} (code: {error_code})")]
    Error { error_code: i32, message: String },
}

#[derive(Deserialize, Debug, Clone)]
pub struct NaverProfile {
    pub id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub profile_image: Option<String>,
}

/// Envelope returned by `/v1/nid/me`. `response` can be null even when the
/// call itself succeeds.
#[derive(Deserialize, Debug, Clone)]
pub struct NaverProfileResponse {
    pub resultcode: String,
    pub message: String,
    pub response: Option<NaverProfile>,
}

/// Naver identity SDK boundary. `authenticate` runs the interactive flow;
/// the access token it acquires is held behind this boundary and read back
/// through `access_token`. `logout` only clears the local token, so it is
/// synchronous and infallible.
#[async_trait]
pub trait NaverAuth: Send + Sync {
    async fn authenticate(&self) -> Result<(), NaverAuthError>;
    fn access_token(&self) -> Option<String>;
    fn logout(&self);
}

/// Naver profile API (`/v1/nid/me`).
#[async_trait]
pub trait NaverProfileApi: Send + Sync {
    async fn profile(&self, access_token: &str) -> Result<NaverProfileResponse, NaverAuthError>;
}

/// reqwest-backed implementation of the Naver profile API.
pub struct NaverRestApi {
    client: Client,
    base_url: String,
}

impl NaverRestApi {
    pub fn new() -> Self {
        Self::with_base_url(NAVER_API_BASE.to_string())
    }

    /// Base URL override for tests against a local stub server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for NaverRestApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NaverProfileApi for NaverRestApi {
    async fn profile(&self, access_token: &str) -> Result<NaverProfileResponse, NaverAuthError> {
        let response = self
            .client
            .get(format!("{}/v1/nid/me", self.base_url))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| NaverAuthError::Failure {
                http_status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                message: format!("Naver profile request failed: {}", e),
            })?
            .error_for_status()
            .map_err(|e| NaverAuthError::Failure {
                http_status: e.status().map(|s| s.as_u16()).unwrap_or(0),
                message: format!("Naver profile request failed: {}", e),
            })?
            .json::<NaverProfileResponse>()
            .await
            .map_err(|e| NaverAuthError::Error {
                error_code: 0,
                message: format!("Naver profile parse failed: {}", e),
            })?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_envelope_deserializes() {
        let json = r#"{
            "resultcode": "00",
            "message": "success",
            "response": {
                "id": "naver-1",
                "name": "홍길동",
                "email": "hong@naver.com",
                "profile_image": "https://phinf.pstatic.net/p.png"
            }
        }"#;

        let envelope: NaverProfileResponse = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.resultcode, "00");
        let profile = envelope.response.unwrap();
        assert_eq!(profile.id.as_deref(), Some("naver-1"));
        assert_eq!(
            profile.profile_image.as_deref(),
            Some("https://phinf.pstatic.net/p.png")
        );
    }

    #[test]
    fn profile_envelope_tolerates_null_response() {
        let json = r#"{"resultcode": "00", "message": "success", "response": null}"#;
        let envelope: NaverProfileResponse = serde_json::from_str(json).unwrap();
        assert!(envelope.response.is_none());
    }
}
