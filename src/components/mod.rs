//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod form_mode;
mod navbar;
mod status_select;
mod task_card;
mod task_form_popup;

pub use confirm_modal::ConfirmModal;
pub use form_mode::FormMode;
pub use navbar::Navbar;
pub use status_select::StatusSelect;
pub use task_card::TaskCard;
pub use task_form_popup::TaskFormPopup;
