//! Types for the remote task service.

use serde::{Deserialize, Serialize};

/// A task list the operator owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    pub id: String,
    pub title: String,
}

/// One task inside a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub due: Option<String>,
}

/// Task completion status. Absent in a response means `needsAction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "needsAction")]
    NeedsAction,
    #[serde(rename = "completed")]
    Completed,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NeedsAction => write!(f, "needsAction"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_status_defaults_to_needs_action() {
        let task: Task = serde_json::from_str(r#"{"id": "t1", "title": "Read chapter 3"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::NeedsAction);
        assert!(task.notes.is_none());
    }

    #[test]
    fn test_task_deserializes_full_shape() {
        let raw = r#"{
            "id": "t1",
            "title": "Read chapter 3",
            "status": "completed",
            "notes": "pages 40-60",
            "due": "2024-01-15T00:00:00.000Z"
        }"#;
        let task: Task = serde_json::from_str(raw).unwrap();
        assert_eq!(task.status, TaskStatus::Completed);
        assert_eq!(task.notes.as_deref(), Some("pages 40-60"));
        assert!(task.due.is_some());
    }

    #[test]
    fn test_task_list_deserializes() {
        let list: TaskList =
            serde_json::from_str(r#"{"id": "l1", "title": "School"}"#).unwrap();
        assert_eq!(list.title, "School");
    }

    #[test]
    fn test_task_status_display() {
        assert_eq!(TaskStatus::NeedsAction.to_string(), "needsAction");
        assert_eq!(TaskStatus::Completed.to_string(), "completed");
    }
}
