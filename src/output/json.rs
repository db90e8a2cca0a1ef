//! JSON output formatting for sesh.

use serde::Serialize;
use serde_json::json;

use crate::error::SeshError;
use crate::gtasks::{Task, TaskList};

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[Task], list_title: &str) -> Result<String, SeshError> {
    let output = json!({
        "list": list_title,
        "count": tasks.len(),
        "items": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format task lists as JSON
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn format_task_lists_json(lists: &[TaskList]) -> Result<String, SeshError> {
    let output = json!({
        "count": lists.len(),
        "items": lists
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SeshError> {
    Ok(serde_json::to_string_pretty(value)?)
}
