use async_trait::async_trait;

use crate::modules::users::profile::{Platform, UserProfile};
use crate::shared::error::AuthResult;

pub mod google;
pub mod kakao;
pub mod naver;

/// Unified login contract every provider adapter implements.
///
/// `login` resolves exactly once per call, with either the normalized
/// profile or a terminal [`AuthError`](crate::shared::error::AuthError).
/// `logout` is best-effort: vendor-side failures are logged and swallowed
/// so the caller can always clear its local session.
#[async_trait]
pub trait LoginAdapter: Send + Sync {
    fn platform(&self) -> Platform;

    async fn login(&self) -> AuthResult<UserProfile>;

    async fn logout(&self);
}
