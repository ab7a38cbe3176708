//! Navbar Component
//!
//! Top bar with the signed-in user and logout action.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::session::use_session;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        session.clear_session();
        navigate("/login", Default::default());
    };

    view! {
        <div class="navbar">
            <a href="/" class="navbar-brand">"Task Management App"</a>
            {move || match session.username() {
                Some(name) => {
                    let initial = name
                        .chars()
                        .next()
                        .map(|c| c.to_uppercase().to_string())
                        .unwrap_or_default();
                    view! {
                        <div class="navbar-user">
                            <span class="navbar-avatar">{initial}</span>
                            <span class="navbar-greeting">"Hi, " {name}</span>
                            <button class="logout-btn" on:click=logout.clone()>"Logout"</button>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <a href="/login" class="login-link">"Login"</a>
                }
                .into_any(),
            }}
        </div>
    }
}
