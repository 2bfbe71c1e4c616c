#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::api::{self, AuthError};
use crate::net::types::{AuthResponse, LoginRequest, User};
use crate::util::storage::{SessionStorage, StoredSession};

/// Who is signed in, if anyone.
///
/// `token` and `user` are always both present or both absent; `loading` is
/// true only between construction and the one-time [`SessionState::hydrate`]
/// at startup. Provided app-wide as `RwSignal<SessionState>` via context;
/// consumers read through the accessors and mutate only through the
/// methods here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
    user: Option<User>,
    loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    /// Empty session awaiting hydration.
    pub fn new() -> Self {
        Self {
            token: None,
            user: None,
            loading: true,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// One-time startup read of the persisted session.
    ///
    /// Installs the stored record when one is present; corrupt or partial
    /// records were already wiped by the adapter and read back as absent.
    /// Always ends the hydration window, whatever the outcome. Calling it
    /// on an already-hydrated session is a no-op.
    pub fn hydrate(&mut self, storage: &dyn SessionStorage) {
        if !self.loading {
            return;
        }
        if let Some(record) = storage.read() {
            self.token = Some(record.token);
            self.user = Some(record.user);
        }
        self.loading = false;
    }

    /// Install a successful gateway response, writing through to storage
    /// in the same mutation so memory and disk never diverge.
    pub fn commit_login(&mut self, response: AuthResponse, storage: &dyn SessionStorage) {
        storage.write(&StoredSession {
            token: response.token.clone(),
            user: response.user.clone(),
        });
        self.token = Some(response.token);
        self.user = Some(response.user);
    }

    /// Sign out, clearing memory and storage together. Idempotent.
    pub fn logout(&mut self, storage: &dyn SessionStorage) {
        storage.clear();
        self.token = None;
        self.user = None;
    }
}

/// Log in against the gateway and commit the result into the session.
///
/// On rejection or transport failure the session is left untouched and the
/// error propagates to the caller, which owns the user-facing message.
///
/// # Errors
///
/// Returns the gateway's [`AuthError`] unchanged.
pub async fn login(
    session: RwSignal<SessionState>,
    storage: &dyn SessionStorage,
    credentials: LoginRequest,
) -> Result<(), AuthError> {
    let response = api::login(&credentials).await?;
    session.update(|s| s.commit_login(response, storage));
    Ok(())
}
