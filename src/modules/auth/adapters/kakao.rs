use std::sync::Arc;

use async_trait::async_trait;

use super::LoginAdapter;
use crate::modules::auth::sdk::kakao::{KakaoAuth, KakaoAuthError, KakaoUserApi, OAuthToken};
use crate::modules::users::profile::{Platform, UserProfile};
use crate::shared::error::{AuthError, AuthResult};

/// Kakao adapter.
///
/// Login policy: if the KakaoTalk app flow is available it is tried first.
/// A cancellation there terminates the attempt immediately; any other
/// failure falls back to the account (browser) flow exactly once. The
/// profile comes from a second round trip to the user API.
pub struct KakaoLoginAdapter {
    auth: Arc<dyn KakaoAuth>,
    user_api: Arc<dyn KakaoUserApi>,
}

impl KakaoLoginAdapter {
    pub fn new(auth: Arc<dyn KakaoAuth>, user_api: Arc<dyn KakaoUserApi>) -> Self {
        Self { auth, user_api }
    }

    async fn login_with_account(&self) -> AuthResult<OAuthToken> {
        self.auth.login_with_account().await.map_err(|e| {
            AuthError::ProviderAuthFailed(format!("카카오 로그인에 실패했습니다: {}", e))
        })
    }

    async fn fetch_profile(&self, token: &OAuthToken) -> AuthResult<UserProfile> {
        let user = self.user_api.me(token).await.map_err(|e| {
            AuthError::ProfileFetchFailed(format!("사용자 정보 요청에 실패했습니다: {}", e))
        })?;

        let Some(user) = user else {
            return Err(AuthError::EmptyProfile("사용자 정보가 없습니다.".to_string()));
        };

        let account = user.kakao_account;
        let profile = account.as_ref().and_then(|a| a.profile.as_ref());
        Ok(UserProfile {
            id: user.id.to_string(),
            name: profile
                .and_then(|p| p.nickname.clone())
                .unwrap_or_default(),
            email: account
                .as_ref()
                .and_then(|a| a.email.clone())
                .unwrap_or_default(),
            profile_image_url: profile.and_then(|p| p.thumbnail_image_url.clone()),
            platform: Platform::Kakao,
        })
    }
}

#[async_trait]
impl LoginAdapter for KakaoLoginAdapter {
    fn platform(&self) -> Platform {
        Platform::Kakao
    }

    async fn login(&self) -> AuthResult<UserProfile> {
        let token = if self.auth.is_talk_login_available() {
            match self.auth.login_with_talk().await {
                Ok(token) => token,
                Err(KakaoAuthError::Cancelled) => return Err(AuthError::Cancelled),
                Err(e) => {
                    // Single fallback: app hand-off failed for a reason other
                    // than the user backing out, so retry through the account
                    // flow and terminate on that outcome.
                    tracing::warn!("kakaotalk login failed, falling back to account login: {}", e);
                    self.login_with_account().await?
                }
            }
        } else {
            self.login_with_account().await?
        };

        self.fetch_profile(&token).await
    }

    async fn logout(&self) {
        if let Err(e) = self.auth.logout().await {
            tracing::warn!("kakao logout failed: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::sdk::kakao::{KakaoApiError, KakaoUser};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeKakaoAuth {
        talk_available: bool,
        talk_result: Result<OAuthToken, KakaoAuthError>,
        account_result: Result<OAuthToken, KakaoAuthError>,
        talk_calls: AtomicUsize,
        account_calls: AtomicUsize,
        logout_calls: AtomicUsize,
    }

    impl FakeKakaoAuth {
        fn new(
            talk_available: bool,
            talk_result: Result<OAuthToken, KakaoAuthError>,
            account_result: Result<OAuthToken, KakaoAuthError>,
        ) -> Self {
            Self {
                talk_available,
                talk_result,
                account_result,
                talk_calls: AtomicUsize::new(0),
                account_calls: AtomicUsize::new(0),
                logout_calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl KakaoAuth for FakeKakaoAuth {
        fn is_talk_login_available(&self) -> bool {
            self.talk_available
        }

        async fn login_with_talk(&self) -> Result<OAuthToken, KakaoAuthError> {
            self.talk_calls.fetch_add(1, Ordering::SeqCst);
            self.talk_result.clone()
        }

        async fn login_with_account(&self) -> Result<OAuthToken, KakaoAuthError> {
            self.account_calls.fetch_add(1, Ordering::SeqCst);
            self.account_result.clone()
        }

        async fn logout(&self) -> Result<(), KakaoAuthError> {
            self.logout_calls.fetch_add(1, Ordering::SeqCst);
            Err(KakaoAuthError::Client("expired token".into()))
        }
    }

    struct FakeUserApi {
        result: Result<Option<KakaoUser>, KakaoApiError>,
    }

    #[async_trait]
    impl KakaoUserApi for FakeUserApi {
        async fn me(&self, _token: &OAuthToken) -> Result<Option<KakaoUser>, KakaoApiError> {
            self.result.clone()
        }
    }

    fn token() -> OAuthToken {
        OAuthToken {
            access_token: "t".into(),
        }
    }

    fn alice() -> KakaoUser {
        serde_json::from_str(
            r#"{
                "id": 123,
                "kakao_account": {
                    "email": "a@x.com",
                    "profile": { "nickname": "Alice", "thumbnail_image_url": null }
                }
            }"#,
        )
        .unwrap()
    }

    fn adapter(
        auth: Arc<FakeKakaoAuth>,
        result: Result<Option<KakaoUser>, KakaoApiError>,
    ) -> KakaoLoginAdapter {
        KakaoLoginAdapter::new(auth, Arc::new(FakeUserApi { result }))
    }

    #[tokio::test]
    async fn talk_login_success_maps_me_payload() {
        let auth = Arc::new(FakeKakaoAuth::new(true, Ok(token()), Ok(token())));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        let profile = adapter.login().await.unwrap();
        assert_eq!(
            profile,
            UserProfile {
                id: "123".into(),
                name: "Alice".into(),
                email: "a@x.com".into(),
                profile_image_url: None,
                platform: Platform::Kakao,
            }
        );
        assert_eq!(auth.talk_calls.load(Ordering::SeqCst), 1);
        assert_eq!(auth.account_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn talk_failure_falls_back_to_account_exactly_once() {
        let auth = Arc::new(FakeKakaoAuth::new(
            true,
            Err(KakaoAuthError::Client("KakaoTalk not installed".into())),
            Ok(token()),
        ));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        let profile = adapter.login().await.unwrap();
        assert_eq!(profile.platform, Platform::Kakao);
        assert_eq!(auth.talk_calls.load(Ordering::SeqCst), 1);
        assert_eq!(auth.account_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancellation_does_not_fall_back() {
        let auth = Arc::new(FakeKakaoAuth::new(
            true,
            Err(KakaoAuthError::Cancelled),
            Ok(token()),
        ));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        let err = adapter.login().await.unwrap_err();
        assert_eq!(err, AuthError::Cancelled);
        assert_eq!(auth.account_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn account_flow_used_directly_when_talk_unavailable() {
        let auth = Arc::new(FakeKakaoAuth::new(
            false,
            Err(KakaoAuthError::Client("unreachable".into())),
            Ok(token()),
        ));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        adapter.login().await.unwrap();
        assert_eq!(auth.talk_calls.load(Ordering::SeqCst), 0);
        assert_eq!(auth.account_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn account_failure_terminates_with_auth_error() {
        let auth = Arc::new(FakeKakaoAuth::new(
            true,
            Err(KakaoAuthError::Client("app crashed".into())),
            Err(KakaoAuthError::Client("network down".into())),
        ));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        let err = adapter.login().await.unwrap_err();
        assert_eq!(
            err,
            AuthError::ProviderAuthFailed("카카오 로그인에 실패했습니다: network down".into())
        );
        assert_eq!(auth.account_calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_me_payload_is_an_empty_profile_error_not_a_success() {
        let auth = Arc::new(FakeKakaoAuth::new(true, Ok(token()), Ok(token())));
        let adapter = adapter(auth, Ok(None));

        let err = adapter.login().await.unwrap_err();
        assert_eq!(err, AuthError::EmptyProfile("사용자 정보가 없습니다.".into()));
    }

    #[tokio::test]
    async fn profile_fetch_failure_after_auth_surfaces_as_failure() {
        let auth = Arc::new(FakeKakaoAuth::new(true, Ok(token()), Ok(token())));
        let adapter = adapter(auth, Err(KakaoApiError("timeout".into())));

        let err = adapter.login().await.unwrap_err();
        assert_eq!(
            err,
            AuthError::ProfileFetchFailed("사용자 정보 요청에 실패했습니다: timeout".into())
        );
    }

    #[tokio::test]
    async fn logout_completes_even_when_vendor_reports_an_error() {
        let auth = Arc::new(FakeKakaoAuth::new(true, Ok(token()), Ok(token())));
        let adapter = adapter(auth.clone(), Ok(Some(alice())));

        adapter.logout().await;
        assert_eq!(auth.logout_calls.load(Ordering::SeqCst), 1);
    }
}
