//! Core types for the taskline CLI.

use serde::{Deserialize, Serialize};

/// A single task list entry.
///
/// Serialized field names are `Description` and `Completed`; the data file
/// is a plain JSON array of these objects and array order defines task
/// order on reload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    pub description: String,
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            completed: false,
        }
    }

    /// Status label used in list output.
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Complete" } else { "Incomplete" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_starts_incomplete() {
        let task = Task::new("write report");
        assert_eq!(task.description, "write report");
        assert!(!task.completed);
    }

    #[test]
    fn status_label_tracks_completion() {
        let mut task = Task::new("x");
        assert_eq!(task.status_label(), "Incomplete");
        task.completed = true;
        assert_eq!(task.status_label(), "Complete");
    }

    #[test]
    fn serializes_with_pascal_case_field_names() {
        let json = serde_json::to_string(&Task::new("buy milk")).unwrap();
        assert!(json.contains("\"Description\""));
        assert!(json.contains("\"Completed\""));
    }
}
