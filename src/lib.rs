//! Social login core.
//!
//! Normalizes the Google, Kakao and Naver identity SDKs behind a single
//! login/logout contract and exposes the current session as observable
//! state. The interactive vendor flows stay behind injectable trait
//! boundaries; this crate owns the result normalization, the Kakao
//! app→account fallback policy and the session state machine.

pub mod bootstrap;
pub mod config;
pub mod modules;
pub mod shared;

pub use modules::auth::coordinator::{AuthCoordinator, SessionState};
pub use modules::users::profile::{Platform, UserProfile};
pub use shared::error::{AuthError, AuthResult};
