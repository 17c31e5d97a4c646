use async_trait::async_trait;
use thiserror::Error;

/// Account object yielded by the Google sign-in flow. Unlike Kakao and
/// Naver, the sign-in result already carries the profile fields, so no
/// second round trip is needed.
#[derive(Debug, Clone, Default)]
pub struct GoogleAccount {
    pub id: Option<String>,
    pub display_name: Option<String>,
    pub email: Option<String>,
    pub photo_url: Option<String>,
}

/// Error reported by the Google sign-in client.
#[derive(Error, Debug, Clone)]
#[error("{message} (status: {code})")]
pub struct GoogleApiError {
    pub code: i32,
    pub message: String,
}

/// Google identity SDK boundary. Implemented by the embedding application
/// on top of the platform sign-in client; tests substitute a fake.
#[async_trait]
pub trait GoogleSignIn: Send + Sync {
    /// Runs the interactive sign-in flow and resolves with the account.
    async fn sign_in(&self) -> Result<GoogleAccount, GoogleApiError>;

    /// Invalidates the provider-side session.
    async fn sign_out(&self) -> Result<(), GoogleApiError>;
}
