//! Vendor SDK boundaries.
//!
//! One trait per provider models the opaque vendor surface. The interactive
//! entry points (sign-in screens, app hand-offs) are implemented by the
//! embedding application and injected into the adapters; the profile REST
//! endpoints have reqwest-backed implementations bundled here.

pub mod google;
pub mod kakao;
pub mod naver;
