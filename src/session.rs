//! Session Store
//!
//! Persisted authentication state in browser localStorage, exposed to
//! components through a narrow context interface.

use leptos::prelude::*;

const TOKEN_KEY: &str = "token";
const USERNAME_KEY: &str = "username";

/// localStorage handle; None when the medium is unavailable, which the
/// callers treat the same as an empty session
fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Read the persisted session token, if any
pub fn token() -> Option<String> {
    storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

/// Read the persisted display name, if any
pub fn display_name() -> Option<String> {
    storage().and_then(|s| s.get_item(USERNAME_KEY).ok().flatten())
}

fn persist(token: &str, name: &str) {
    if let Some(s) = storage() {
        let _ = s.set_item(TOKEN_KEY, token);
        let _ = s.set_item(USERNAME_KEY, name);
    }
}

fn wipe() {
    if let Some(s) = storage() {
        let _ = s.remove_item(TOKEN_KEY);
        let _ = s.remove_item(USERNAME_KEY);
    }
}

/// Session state provided via context
///
/// Components read the display name reactively; writes go through
/// `set_session`/`clear_session` so storage and signals stay in step.
/// The single UI thread is the only writer.
#[derive(Clone, Copy)]
pub struct SessionContext {
    username: ReadSignal<Option<String>>,
    set_username: WriteSignal<Option<String>>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (username, set_username) = signal(display_name());
        Self {
            username,
            set_username,
        }
    }

    /// Current display name (reactive)
    pub fn username(&self) -> Option<String> {
        self.username.get()
    }

    /// Persist a fresh session after login
    pub fn set_session(&self, token: &str, name: &str) {
        persist(token, name);
        self.set_username.set(Some(name.to_string()));
    }

    /// Drop the persisted session (logout or expiry)
    pub fn clear_session(&self) {
        wipe();
        self.set_username.set(None);
    }
}

/// Get the session context
pub fn use_session() -> SessionContext {
    expect_context::<SessionContext>()
}
