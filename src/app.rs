//! Task Manager Frontend App
//!
//! Root component wiring the session context and routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::{LoginPage, RegisterPage, TasksPage};
use crate::session::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    // Provide the session to all children
    provide_context(SessionContext::new());

    view! {
        <Router>
            <main class="app-shell">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=TasksPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                </Routes>
            </main>
        </Router>
    }
}

/// 404 fallback
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Go Home"</a>
        </div>
    }
}
