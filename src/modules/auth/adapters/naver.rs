use std::sync::Arc;

use async_trait::async_trait;

use super::LoginAdapter;
use crate::modules::auth::sdk::naver::{NaverAuth, NaverAuthError, NaverProfileApi};
use crate::modules::users::profile::{Platform, UserProfile};
use crate::shared::error::{AuthError, AuthResult};

/// Naver adapter. Authentication yields only a token; the profile comes
/// from a second round trip to the profile API.
pub struct NaverLoginAdapter {
    auth: Arc<dyn NaverAuth>,
    profile_api: Arc<dyn NaverProfileApi>,
}

impl NaverLoginAdapter {
    pub fn new(auth: Arc<dyn NaverAuth>, profile_api: Arc<dyn NaverProfileApi>) -> Self {
        Self { auth, profile_api }
    }

    async fn fetch_profile(&self, access_token: &str) -> AuthResult<UserProfile> {
        let envelope = self
            .profile_api
            .profile(access_token)
            .await
            .map_err(|e| match e {
                NaverAuthError::Failure { message, .. } => AuthError::ProfileFetchFailed(
                    format!("네이버 프로필 요청에 실패했습니다: {}", message),
                ),
                NaverAuthError::Error { message, .. } => {
                    AuthError::Unknown(format!("네이버 에러: {}", message))
                }
            })?;

        let Some(profile) = envelope.response else {
            return Err(AuthError::EmptyProfile(
                "네이버 프로필 정보가 비어있습니다.".to_string(),
            ));
        };

        Ok(UserProfile {
            id: profile.id.unwrap_or_default(),
            name: profile.name.unwrap_or_default(),
            email: profile.email.unwrap_or_default(),
            profile_image_url: profile.profile_image,
            platform: Platform::Naver,
        })
    }
}

#[async_trait]
impl LoginAdapter for NaverLoginAdapter {
    fn platform(&self) -> Platform {
        Platform::Naver
    }

    async fn login(&self) -> AuthResult<UserProfile> {
        self.auth.authenticate().await.map_err(|e| match e {
            NaverAuthError::Failure { message, .. } => {
                AuthError::ProviderAuthFailed(format!("네이버 로그인에 실패했습니다: {}", message))
            }
            NaverAuthError::Error { message, .. } => {
                AuthError::Unknown(format!("네이버 에러: {}", message))
            }
        })?;

        let Some(access_token) = self.auth.access_token() else {
            return Err(AuthError::ProviderAuthFailed(
                "네이버 토큰을 받지 못했습니다.".to_string(),
            ));
        };

        self.fetch_profile(&access_token).await
    }

    async fn logout(&self) {
        self.auth.logout();
    }
}
