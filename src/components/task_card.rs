//! Task Card Component
//!
//! One task in the list with status progress and actions.

use leptos::prelude::*;

use crate::components::{FormMode, TaskFormPopup};
use crate::models::{Task, TaskStatus};

#[component]
pub fn TaskCard(task: Task, #[prop(into)] on_delete: Callback<u32>) -> impl IntoView {
    let id = task.id;
    let status = task.status;

    let status_class = match status {
        TaskStatus::Completed => "task-status completed",
        TaskStatus::InProgress => "task-status in-progress",
        TaskStatus::Pending => "task-status pending",
    };

    view! {
        <div class="task-card">
            <h2 class="task-title">{task.title}</h2>
            <p class="task-description">{task.description}</p>

            <div class="task-progress">
                <div class="task-progress-row">
                    <span class="task-progress-label">"Progress"</span>
                    <span class=status_class>{status.label()}</span>
                </div>
                <div class="progress-track">
                    <div
                        class="progress-fill"
                        style=format!("width: {}%;", status.progress_percent())
                    ></div>
                </div>
            </div>

            <div class="task-actions">
                <TaskFormPopup mode=FormMode::Edit(id) />
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
