//! Form Mode
//!
//! Which mode the task form popup operates in.

/// Form mode - create a new task or edit an existing one
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    /// Creating a new task
    Create,
    /// Editing the task with this id
    Edit(u32),
}

impl FormMode {
    /// Task id in edit mode
    pub fn task_id(&self) -> Option<u32> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }

    /// Popup heading, doubles as the submit label
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Task",
            FormMode::Edit(_) => "Update Task",
        }
    }

    /// Label on the trigger button
    pub fn trigger_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Create Task",
            FormMode::Edit(_) => "Update",
        }
    }

    /// Submit label while a request is in flight
    pub fn pending_label(&self) -> &'static str {
        match self {
            FormMode::Create => "Creating...",
            FormMode::Edit(_) => "Updating...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_id_by_mode() {
        assert_eq!(FormMode::Create.task_id(), None);
        assert_eq!(FormMode::Edit(9).task_id(), Some(9));
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(FormMode::Create.title(), "Create Task");
        assert_eq!(FormMode::Edit(1).title(), "Update Task");
        assert_eq!(FormMode::Edit(1).trigger_label(), "Update");
        assert_eq!(FormMode::Create.pending_label(), "Creating...");
    }
}
