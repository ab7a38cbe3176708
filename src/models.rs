//! Frontend Models
//!
//! Data structures matching the task API wire format.

use serde::{Deserialize, Serialize};

/// Task lifecycle status (closed three-value set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Being worked on
    InProgress,
    /// Done
    Completed,
}

impl TaskStatus {
    /// Human-readable label for cards and the status selector
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Coarse progress shown by the card progress bar
    pub fn progress_percent(&self) -> u8 {
        match self {
            TaskStatus::Pending => 0,
            TaskStatus::InProgress => 50,
            TaskStatus::Completed => 100,
        }
    }
}

/// Task data structure (matches the API)
///
/// The id is server-assigned and immutable; updates replace the other
/// three fields wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::from_str::<TaskStatus>("\"completed\"").unwrap(),
            TaskStatus::Completed
        );
    }

    #[test]
    fn test_task_deserialization() {
        let json = r#"{"id":7,"title":"Write report","description":"Quarterly numbers","status":"pending"}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Write report");
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_progress_tracks_status() {
        assert_eq!(TaskStatus::Pending.progress_percent(), 0);
        assert_eq!(TaskStatus::InProgress.progress_percent(), 50);
        assert_eq!(TaskStatus::Completed.progress_percent(), 100);
    }
}
