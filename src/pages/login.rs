//! Login Page
//!
//! Email/password sign-in; stores the session and redirects home.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::auth::replace_nav;
use crate::session::{self, use_session};
use crate::validate::{validate_email, validate_password};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();
    let navigate_guard = navigate.clone();
    let navigate_submit = navigate;

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (email_error, set_email_error) = signal::<Option<&'static str>>(None);
    let (password_error, set_password_error) = signal::<Option<&'static str>>(None);
    let (error, set_error) = signal::<Option<&'static str>>(None);
    let (busy, set_busy) = signal(false);

    // Already-authenticated visitors go straight to the task list
    Effect::new(move |_| {
        if session::token().is_some() {
            navigate_guard("/", replace_nav());
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let email_check = validate_email(&email_value);
        let password_check = validate_password(&password_value);
        set_email_error.set(email_check);
        set_password_error.set(password_check);
        if email_check.is_some() || password_check.is_some() {
            return;
        }

        set_busy.set(true);
        set_error.set(None);
        let navigate = navigate_submit.clone();
        spawn_local(async move {
            match api::login(email_value.trim(), &password_value).await {
                Ok(response) => {
                    session.set_session(&response.token, &response.username);
                    navigate("/", replace_nav());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[LOGIN] {e}").into());
                    set_error.set(Some("Invalid email or password"));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card-header">
                    <h1>"Welcome Back"</h1>
                    <p>"Sign in to your account"</p>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                        {move || email_error.get().map(|message| view! {
                            <div class="field-error">{message}</div>
                        })}
                    </div>

                    <div class="form-field">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Enter your password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                        {move || password_error.get().map(|message| view! {
                            <div class="field-error">{message}</div>
                        })}
                    </div>

                    <button type="submit" class="submit-btn" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <a href="/register">"Register"</a>
                </p>
            </div>
        </div>
    }
}
