use thiserror::Error;

use crate::modules::users::profile::Platform;

/// Errors surfaced by the login adapters and the coordinator.
///
/// Every vendor-side failure is converted into one of these variants before
/// it crosses the adapter boundary. The display string is the user-facing
/// message the presentation layer shows, so the message-carrying variants
/// render their payload as-is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// The user backed out of the provider's login screen.
    #[error("로그인이 취소되었습니다.")]
    Cancelled,

    /// The provider's authentication step itself failed.
    #[error("{0}")]
    ProviderAuthFailed(String),

    /// Authentication succeeded but the follow-up profile fetch failed.
    #[error("{0}")]
    ProfileFetchFailed(String),

    /// The provider reported success but returned no usable profile payload.
    #[error("{0}")]
    EmptyProfile(String),

    /// A login was requested while another attempt is still in flight.
    #[error("이미 로그인이 진행 중입니다.")]
    LoginInProgress,

    /// No adapter is registered for the requested platform.
    #[error("지원하지 않는 플랫폼입니다: {0}")]
    UnsupportedPlatform(Platform),

    #[error("{0}")]
    Unknown(String),
}

pub type AuthResult<T> = Result<T, AuthError>;
