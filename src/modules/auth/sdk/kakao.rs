use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

const KAKAO_API_BASE: &str = "https://kapi.kakao.com";

/// Token yielded by either Kakao login flow.
#[derive(Debug, Clone)]
pub struct OAuthToken {
    pub access_token: String,
}

/// Errors raised by the Kakao login entry points. `Cancelled` is the typed
/// signal the SDK raises when the user dismisses the login screen, and it
/// must stay distinguishable: the adapter's fallback policy depends on it.
#[derive(Error, Debug, Clone)]
pub enum KakaoAuthError {
    #[error("user cancelled")]
    Cancelled,
    #[error("{0}")]
    Client(String),
}

/// Error from the Kakao user API.
#[derive(Error, Debug, Clone)]
#[error("{0}")]
pub struct KakaoApiError(pub String);

#[derive(Deserialize, Debug, Clone)]
pub struct KakaoProfile {
    pub nickname: Option<String>,
    pub thumbnail_image_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct KakaoAccount {
    pub email: Option<String>,
    pub profile: Option<KakaoProfile>,
}

/// User payload returned by `/v2/user/me`. Everything below `id` is
/// optional depending on the consent items the user granted.
#[derive(Deserialize, Debug, Clone)]
pub struct KakaoUser {
    pub id: i64,
    pub kakao_account: Option<KakaoAccount>,
}

/// Kakao login entry points. Two flows exist: the KakaoTalk app hand-off
/// and the account (browser) flow. The session token lives behind this
/// boundary, which is why `logout` takes no token argument.
#[async_trait]
pub trait KakaoAuth: Send + Sync {
    fn is_talk_login_available(&self) -> bool;
    async fn login_with_talk(&self) -> Result<OAuthToken, KakaoAuthError>;
    async fn login_with_account(&self) -> Result<OAuthToken, KakaoAuthError>;
    async fn logout(&self) -> Result<(), KakaoAuthError>;
}

/// Kakao user API (`/v2/user/me`). `Ok(None)` mirrors the vendor callback
/// completing with neither a user nor an error.
#[async_trait]
pub trait KakaoUserApi: Send + Sync {
    async fn me(&self, token: &OAuthToken) -> Result<Option<KakaoUser>, KakaoApiError>;
}

/// reqwest-backed implementation of the Kakao user API.
pub struct KakaoRestApi {
    client: Client,
    base_url: String,
}

impl KakaoRestApi {
    pub fn new() -> Self {
        Self::with_base_url(KAKAO_API_BASE.to_string())
    }

    /// Base URL override for tests against a local stub server.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl Default for KakaoRestApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KakaoUserApi for KakaoRestApi {
    async fn me(&self, token: &OAuthToken) -> Result<Option<KakaoUser>, KakaoApiError> {
        let user = self
            .client
            .get(format!("{}/v2/user/me", self.base_url))
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| KakaoApiError(format!("Kakao user info request failed: {}", e)))?
            .error_for_status()
            .map_err(|e| KakaoApiError(format!("Kakao user info request failed: {}", e)))?
            .json::<KakaoUser>()
            .await
            .map_err(|e| KakaoApiError(format!("Kakao user info parse failed: {}", e)))?;

        Ok(Some(user))
    }
}
