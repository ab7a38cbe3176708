//! Register Page
//!
//! Account creation; success lands on the login page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api;
use crate::validate::{validate_confirm, validate_email, validate_password, validate_username};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (confirm, set_confirm) = signal(String::new());

    let (username_error, set_username_error) = signal::<Option<&'static str>>(None);
    let (email_error, set_email_error) = signal::<Option<&'static str>>(None);
    let (password_error, set_password_error) = signal::<Option<&'static str>>(None);
    let (confirm_error, set_confirm_error) = signal::<Option<&'static str>>(None);

    let (error, set_error) = signal::<Option<&'static str>>(None);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }

        let username_value = username.get_untracked();
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();
        let confirm_value = confirm.get_untracked();

        let username_check = validate_username(&username_value);
        let email_check = validate_email(&email_value);
        let password_check = validate_password(&password_value);
        let confirm_check = validate_confirm(&password_value, &confirm_value);
        set_username_error.set(username_check);
        set_email_error.set(email_check);
        set_password_error.set(password_check);
        set_confirm_error.set(confirm_check);
        if username_check.is_some()
            || email_check.is_some()
            || password_check.is_some()
            || confirm_check.is_some()
        {
            return;
        }

        set_busy.set(true);
        set_error.set(None);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(
                username_value.trim(),
                email_value.trim(),
                &password_value,
            )
            .await
            {
                Ok(()) => navigate("/login", Default::default()),
                Err(e) => {
                    web_sys::console::error_1(&format!("[REGISTER] {e}").into());
                    set_error.set(Some("Registration failed. Please try again."));
                }
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card-header">
                    <h1>"Create an Account"</h1>
                    <p>"Register to get started"</p>
                </div>

                {move || error.get().map(|message| view! {
                    <div class="error-banner">{message}</div>
                })}

                <form class="auth-form" on:submit=on_submit>
                    <div class="form-field">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Enter your username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                        />
                        {move || username_error.get().map(|message| view! {
                            <div class="field-error">{message}</div>
                        })}
                    </div>

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

                    <div class="form-field">
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            placeholder="Confirm your password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| set_confirm.set(event_target_value(&ev))
                        />
                        {move || confirm_error.get().map(|message| view! {
                            <div class="field-error">{message}</div>
                        })}
                    </div>

                    <button type="submit" class="submit-btn" disabled=move || busy.get()>
                        {move || if busy.get() { "Registering..." } else { "Register" }}
                    </button>
                </form>

                <p class="auth-switch">
                    "Already have an account? "
                    <a href="/login">"Login"</a>
                </p>
            </div>
        </div>
    }
}
