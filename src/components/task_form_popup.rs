//! Task Form Popup Component
//!
//! Dual-mode (create/edit) popup form submitting through the task API.
//! Edit mode pre-fills its fields from the server before allowing a
//! submit; either mode signals the list view to re-fetch on success.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError, TaskPayload};
use crate::auth;
use crate::components::{FormMode, StatusSelect};
use crate::context::TaskListContext;
use crate::models::TaskStatus;
use crate::session::use_session;
use crate::validate::{validate_description, validate_title};

/// Popup form for creating or editing one task
#[component]
pub fn TaskFormPopup(mode: FormMode) -> impl IntoView {
    let ctx = use_context::<TaskListContext>().expect("TaskListContext should be provided");
    let session = use_session();
    let navigate = use_navigate();
    let navigate_open = navigate.clone();
    let navigate_submit = navigate;

    let (is_open, set_is_open) = signal(false);

    // Field state survives a failed submit so nothing has to be retyped
    let (title, set_title) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (status, set_status) = signal(TaskStatus::Pending);

    let (title_error, set_title_error) = signal::<Option<&'static str>>(None);
    let (description_error, set_description_error) = signal::<Option<&'static str>>(None);

    // Edit-mode pre-fill in flight; suppresses submission
    let (loading, set_loading) = signal(false);
    // Submission in flight; at most one per form instance
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal::<Option<&'static str>>(None);

    // Pre-fill generation; a response belonging to a closed or reopened
    // popup run must not clobber newer field state
    let (fetch_generation, set_fetch_generation) = signal(0u32);

    let open_popup = move |_| {
        set_error.set(None);
        set_title_error.set(None);
        set_description_error.set(None);
        set_is_open.set(true);

        if let Some(id) = mode.task_id() {
            let generation = fetch_generation.get_untracked() + 1;
            set_fetch_generation.set(generation);
            set_loading.set(true);
            let navigate = navigate_open.clone();
            spawn_local(async move {
                match api::get_task(id).await {
                    Ok(task) => {
                        if fetch_generation.get_untracked() == generation {
                            set_title.set(task.title);
                            set_description.set(task.description);
                            set_status.set(task.status);
                        }
                    }
                    Err(ApiError::Unauthorized) => auth::expire_session(session, navigate),
                    Err(e) => {
                        web_sys::console::error_1(
                            &format!("[FORM] Error fetching task {id}: {e}").into(),
                        );
                        set_error.set(Some("Failed to load task. Please try again."));
                    }
                }
                if fetch_generation.get_untracked() == generation {
                    set_loading.set(false);
                }
            });
        }
    };

    let close_popup = move |_| {
        // Orphan any pre-fill still in flight
        set_fetch_generation.update(|g| *g += 1);
        set_loading.set(false);
        set_is_open.set(false);
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() || loading.get_untracked() {
            return;
        }

        let title_value = title.get_untracked();
        let description_value = description.get_untracked();
        let title_check = validate_title(&title_value);
        let description_check = validate_description(&description_value);
        set_title_error.set(title_check);
        set_description_error.set(description_check);
        if title_check.is_some() || description_check.is_some() {
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        let navigate = navigate_submit.clone();
        spawn_local(async move {
            let payload = TaskPayload {
                title: title_value.trim(),
                description: description_value.trim(),
                status: status.get_untracked(),
            };
            let result = match mode {
                FormMode::Create => api::create_task(&payload).await.map(|_| ()),
                FormMode::Edit(id) => api::update_task(id, &payload).await.map(|_| ()),
            };
            set_saving.set(false);
            match result {
                Ok(()) => {
                    set_is_open.set(false);
                    if mode == FormMode::Create {
                        set_title.set(String::new());
                        set_description.set(String::new());
                        set_status.set(TaskStatus::Pending);
                    }
                    ctx.reload();
                }
                Err(ApiError::Unauthorized) => auth::expire_session(session, navigate),
                Err(e) => {
                    web_sys::console::error_1(&format!("[FORM] Error saving task: {e}").into());
                    // Popup stays open with the fields intact for retry
                    set_error.set(Some("Failed to save task. Please try again."));
                }
            }
        });
    };

    view! {
        <button
            class=match mode {
                FormMode::Create => "create-task-btn",
                FormMode::Edit(_) => "update-task-btn",
            }
            on:click=open_popup
        >
            {mode.trigger_label()}
        </button>

        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal task-form">
                    <div class="modal-header">
                        <h2 class="modal-title">{mode.title()}</h2>
                        <button class="close-btn" on:click=close_popup>"×"</button>
                    </div>

                    {move || error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <Show when=move || loading.get()>
                        <div class="form-loading">"Loading task..."</div>
                    </Show>

                    <form class="task-form-body" on:submit=on_submit.clone()>
                        <div class="form-field">
                            <label for="title">"Title"</label>
                            <input
                                type="text"
                                id="title"
                                placeholder="Enter task title"
                                prop:value=move || title.get()
                                on:input=move |ev| set_title.set(event_target_value(&ev))
                            />
                            {move || title_error.get().map(|message| view! {
                                <div class="field-error">{message}</div>
                            })}
                        </div>

                        <div class="form-field">
                            <label for="description">"Description"</label>
                            <textarea
                                id="description"
                                placeholder="Enter task description"
                                prop:value=move || description.get()
                                on:input=move |ev| set_description.set(event_target_value(&ev))
                            ></textarea>
                            {move || description_error.get().map(|message| view! {
                                <div class="field-error">{message}</div>
                            })}
                        </div>

                        <div class="form-field">
                            <label>"Status"</label>
                            <StatusSelect
                                current=status
                                on_change=move |new_status| set_status.set(new_status)
                            />
                        </div>

                        <button
                            type="submit"
                            class="submit-btn"
                            disabled=move || saving.get() || loading.get()
                        >
                            {move || if saving.get() { mode.pending_label() } else { mode.title() }}
                        </button>
                    </form>
                </div>
            </div>
        </Show>
    }
}
