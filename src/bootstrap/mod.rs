//! Wiring helpers for embedding applications.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::modules::auth::adapters::{
    google::GoogleLoginAdapter, kakao::KakaoLoginAdapter, naver::NaverLoginAdapter,
};
use crate::modules::auth::coordinator::AuthCoordinator;
use crate::modules::auth::registry::AdapterRegistry;
use crate::modules::auth::sdk::google::GoogleSignIn;
use crate::modules::auth::sdk::kakao::{KakaoAuth, KakaoRestApi};
use crate::modules::auth::sdk::naver::{NaverAuth, NaverRestApi};

/// Installs the global tracing subscriber using the configured filter.
pub fn init_tracing(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Wires the three provider adapters.
///
/// The interactive SDK entry points are injected by the embedder, which
/// reads the vendor credentials from [`Config`] when constructing them
/// (this crate never touches the credentials itself). Profile lookups go
/// through the bundled REST clients.
pub fn init_registry(
    google: Arc<dyn GoogleSignIn>,
    kakao: Arc<dyn KakaoAuth>,
    naver: Arc<dyn NaverAuth>,
) -> AdapterRegistry {
    AdapterRegistry::new()
        .register(Arc::new(GoogleLoginAdapter::new(google)))
        .register(Arc::new(KakaoLoginAdapter::new(
            kakao,
            Arc::new(KakaoRestApi::new()),
        )))
        .register(Arc::new(NaverLoginAdapter::new(
            naver,
            Arc::new(NaverRestApi::new()),
        )))
}

pub fn init_coordinator(registry: AdapterRegistry) -> AuthCoordinator {
    AuthCoordinator::new(registry)
}
