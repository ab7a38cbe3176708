//! Confirmation Modal Component
//!
//! Blocking confirm/cancel dialog for destructive actions.

use leptos::prelude::*;

#[component]
pub fn ConfirmModal(
    #[prop(into)] open: Signal<bool>,
    busy: ReadSignal<bool>,
    #[prop(into)] title: String,
    #[prop(into)] description: String,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-overlay">
                <div class="modal">
                    <h2 class="modal-title">{title.clone()}</h2>
                    <p class="modal-description">{description.clone()}</p>
                    <div class="modal-actions">
                        <button
                            class="cancel-btn"
                            disabled=move || busy.get()
                            on:click=move |_| on_cancel.run(())
                        >
                            "Cancel"
                        </button>
                        <button
                            class="confirm-btn danger"
                            disabled=move || busy.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            {move || if busy.get() { "Deleting..." } else { "Delete" }}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
