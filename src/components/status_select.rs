//! Status Selector Component
//!
//! Reusable task status selector buttons.

use leptos::prelude::*;

use crate::models::TaskStatus;

/// Status options in lifecycle order
pub const STATUS_OPTIONS: &[TaskStatus] = &[
    TaskStatus::Pending,
    TaskStatus::InProgress,
    TaskStatus::Completed,
];

/// Status selector buttons for the task form
#[component]
pub fn StatusSelect(
    current: ReadSignal<TaskStatus>,
    on_change: impl Fn(TaskStatus) + Copy + 'static,
) -> impl IntoView {
    view! {
        <div class="status-select">
            {STATUS_OPTIONS.iter().map(|status| {
                let status = *status;
                let is_selected = move || current.get() == status;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "status-btn active" } else { "status-btn" }
                        on:click=move |_| on_change(status)
                    >
                        {status.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
