//! Task List Page
//!
//! Protected view listing all tasks with create/update/delete actions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::api::{self, ApiError};
use crate::auth::{self, use_auth_guard};
use crate::components::{ConfirmModal, FormMode, Navbar, TaskCard, TaskFormPopup};
use crate::context::TaskListContext;
use crate::models::Task;
use crate::session::use_session;

#[component]
pub fn TasksPage() -> impl IntoView {
    let authed = use_auth_guard();

    let session = use_session();
    let navigate = use_navigate();
    let navigate_fetch = navigate.clone();
    let navigate_delete = navigate;

    let (tasks, set_tasks) = signal(Vec::<Task>::new());
    let (fetch_error, set_fetch_error) = signal::<Option<&'static str>>(None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (task_to_delete, set_task_to_delete) = signal::<Option<u32>>(None);
    let (deleting, set_deleting) = signal(false);

    // Provide the refresh channel to the form popups below
    let ctx = TaskListContext::new((reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Full re-fetch once the guard passes and whenever a mutation bumps
    // the trigger
    Effect::new(move |_| {
        if !authed.get() {
            return;
        }
        let trigger = reload_trigger.get();
        let navigate = navigate_fetch.clone();
        spawn_local(async move {
            match api::list_tasks().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[TASKS] Loaded {} tasks, trigger={}", loaded.len(), trigger)
                            .into(),
                    );
                    set_tasks.set(loaded);
                    set_fetch_error.set(None);
                }
                Err(ApiError::Unauthorized) => auth::expire_session(session, navigate),
                Err(e) => {
                    web_sys::console::error_1(&format!("[TASKS] Error fetching tasks: {e}").into());
                    set_fetch_error.set(Some("Failed to load tasks. Please try again."));
                }
            }
        });
    });

    let confirm_delete = move |_| {
        let Some(id) = task_to_delete.get_untracked() else {
            return;
        };
        if deleting.get_untracked() {
            return;
        }
        set_deleting.set(true);
        let navigate = navigate_delete.clone();
        spawn_local(async move {
            match api::delete_task(id).await {
                Ok(()) => ctx.reload(),
                Err(ApiError::Unauthorized) => auth::expire_session(session, navigate),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[TASKS] Error deleting task {id}: {e}").into(),
                    );
                    set_fetch_error.set(Some("Failed to delete task. Please try again."));
                }
            }
            set_deleting.set(false);
            set_task_to_delete.set(None);
        });
    };

    view! {
        <div class="tasks-page">
            <Navbar />

            // Nothing protected renders until the guard has passed
            <Show when=move || authed.get()>
                <div class="tasks-content">
                    <h1 class="tasks-heading">
                        "🌟 \"The secret to getting ahead is getting started.\" – Mark Twain"
                    </h1>
                    <p class="tasks-subheading">
                        "Every task you complete brings you one step closer to your goals. Let's make today count!"
                    </p>

                    {move || fetch_error.get().map(|message| view! {
                        <div class="error-banner">{message}</div>
                    })}

                    <div class="tasks-toolbar">
                        <TaskFormPopup mode=FormMode::Create />
                    </div>

                    <div class="task-list">
                        <For
                            each=move || tasks.get()
                            key=|task| {
                                // Key on every mutable field so an edit with an
                                // unchanged id still re-renders the card
                                (
                                    task.id,
                                    task.title.clone(),
                                    task.description.clone(),
                                    task.status,
                                )
                            }
                            children=move |task| {
                                view! {
                                    <TaskCard
                                        task=task
                                        on_delete=move |id| set_task_to_delete.set(Some(id))
                                    />
                                }
                            }
                        />
                    </div>
                </div>
            </Show>

            <ConfirmModal
                open=Signal::derive(move || task_to_delete.get().is_some())
                busy=deleting
                title="Delete Task"
                description="Are you sure you want to delete this task? This action cannot be undone."
                on_confirm=confirm_delete
                on_cancel=move |_| set_task_to_delete.set(None)
            />
        </div>
    }
}
