//! Auth Guard
//!
//! Check-and-redirect gate for views that require an active session.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::session::{self, SessionContext};

/// Replace navigation so the guarded view is not reachable via
/// back-navigation
pub fn replace_nav() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}

/// Redirect to the login view when no session token is stored.
///
/// The check runs in an Effect, after the view has mounted and
/// localStorage is reachable; an unavailable medium reads as "no
/// session" rather than crashing a pre-render pass. The returned
/// signal stays false until a token has been seen, so callers can
/// hold back protected content until the check has passed.
pub fn use_auth_guard() -> Signal<bool> {
    let navigate = use_navigate();
    let (authed, set_authed) = signal(false);
    Effect::new(move |_| {
        if session::token().is_none() {
            web_sys::console::log_1(&"[AUTH] No session token, redirecting to login".into());
            navigate("/login", replace_nav());
        } else {
            set_authed.set(true);
        }
    });
    authed.into()
}

/// Handle an Unauthorized gateway response.
///
/// The stored token is no longer accepted, so it is wiped before the
/// redirect; otherwise the login view would bounce an
/// "already authenticated" visitor straight back here.
pub fn expire_session(session: SessionContext, navigate: impl Fn(&str, NavigateOptions)) {
    web_sys::console::log_1(&"[AUTH] Session rejected by API, redirecting to login".into());
    session.clear_session();
    navigate("/login", replace_nav());
}
