use std::sync::Arc;

use async_trait::async_trait;

use super::LoginAdapter;
use crate::modules::auth::sdk::google::{GoogleAccount, GoogleSignIn};
use crate::modules::users::profile::{Platform, UserProfile};
use crate::shared::error::{AuthError, AuthResult};

/// Google adapter. The sign-in result already carries id, name, email and
/// avatar, so no profile round trip follows the auth step.
pub struct GoogleLoginAdapter {
    sign_in: Arc<dyn GoogleSignIn>,
}

impl GoogleLoginAdapter {
    pub fn new(sign_in: Arc<dyn GoogleSignIn>) -> Self {
        Self { sign_in }
    }

    fn to_profile(account: GoogleAccount) -> UserProfile {
        UserProfile {
            id: account.id.unwrap_or_default(),
            name: account.display_name.unwrap_or_default(),
            email: account.email.unwrap_or_default(),
            profile_image_url: account.photo_url,
            platform: Platform::Google,
        }
    }
}

#[async_trait]
impl LoginAdapter for GoogleLoginAdapter {
    fn platform(&self) -> Platform {
        Platform::Google
    }

    async fn login(&self) -> AuthResult<UserProfile> {
        let account = self.sign_in.sign_in().await.map_err(|e| {
            AuthError::ProviderAuthFailed(format!("구글 로그인에 실패했습니다: {}", e.message))
        })?;

        let profile = Self::to_profile(account);
        tracing::debug!(name = %profile.name, "google sign-in succeeded");
        Ok(profile)
    }

    async fn logout(&self) {
        if let Err(e) = self.sign_in.sign_out().await {
            tracing::warn!("google sign-out failed: {}", e);
        }
    }
}
