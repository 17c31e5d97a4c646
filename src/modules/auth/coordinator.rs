use serde::Serialize;
use tokio::sync::{watch, Mutex};

use super::registry::AdapterRegistry;
use crate::modules::users::profile::{Platform, UserProfile};
use crate::shared::error::{AuthError, AuthResult};

/// Observable session state.
///
/// `profile` is present iff a session is authenticated. `is_loading` is
/// true strictly between a login request and its terminal outcome.
/// `last_error` holds the user-facing message of the last failure until
/// [`AuthCoordinator::clear_error`] or the next login attempt.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SessionState {
    pub profile: Option<UserProfile>,
    pub is_loading: bool,
    pub last_error: Option<String>,
}

/// Single owner of the session state.
///
/// Routes login/logout requests to the matching adapter and publishes every
/// state change through a watch channel, so presentation code can either
/// poll [`state`](Self::state) or await changes on a
/// [`subscribe`](Self::subscribe)d receiver.
///
/// All mutations go through the watch sender, which serializes them
/// internally; adapter futures may therefore complete on any runtime
/// thread. A login that arrives while another is still in flight is
/// rejected with [`AuthError::LoginInProgress`] rather than racing the
/// shared state.
pub struct AuthCoordinator {
    registry: AdapterRegistry,
    state: watch::Sender<SessionState>,
    login_gate: Mutex<()>,
}

impl AuthCoordinator {
    pub fn new(registry: AdapterRegistry) -> Self {
        Self {
            registry,
            state: watch::Sender::new(SessionState::default()),
            login_gate: Mutex::new(()),
        }
    }

    /// Snapshot of the current session state.
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver that observes every state change.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Runs the selected provider's login flow to completion.
    ///
    /// Loading is set before the adapter future is first polled and cleared
    /// on its terminal outcome, success or failure. A lingering error from
    /// a previous attempt is superseded at this point without requiring a
    /// `clear_error` call first.
    pub async fn login_with(&self, platform: Platform) -> AuthResult<UserProfile> {
        let _in_flight = self
            .login_gate
            .try_lock()
            .map_err(|_| AuthError::LoginInProgress)?;

        let adapter = self
            .registry
            .get(platform)
            .ok_or(AuthError::UnsupportedPlatform(platform))?;

        self.state.send_modify(|s| {
            s.is_loading = true;
            s.last_error = None;
        });

        match adapter.login().await {
            Ok(profile) => {
                self.state.send_modify(|s| {
                    s.is_loading = false;
                    s.profile = Some(profile.clone());
                });
                tracing::info!(platform = %profile.platform, name = %profile.name, "login succeeded");
                Ok(profile)
            }
            Err(e) => {
                self.state.send_modify(|s| {
                    s.is_loading = false;
                    s.last_error = Some(e.to_string());
                });
                tracing::error!(platform = %platform, "login failed: {}", e);
                Err(e)
            }
        }
    }

    /// Ends the current session.
    ///
    /// Routes to the adapter matching the active profile's platform and
    /// clears the local session regardless of the vendor outcome. With no
    /// active profile this resets the state without any adapter call.
    pub async fn logout(&self) {
        let platform = self.state.borrow().profile.as_ref().map(|p| p.platform);
        if let Some(adapter) = platform.and_then(|p| self.registry.get(p)) {
            adapter.logout().await;
        }

        self.state.send_modify(|s| {
            s.profile = None;
            s.last_error = None;
        });
        tracing::debug!("logout complete");
    }

    /// Acknowledges the last error.
    pub fn clear_error(&self) {
        self.state.send_modify(|s| s.last_error = None);
    }
}
