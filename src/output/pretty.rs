use colored::Colorize;

use crate::gtasks::{Task, TaskList, TaskStatus};

/// Format tasks as a human-readable list.
#[must_use]
pub fn format_tasks_pretty(tasks: &[Task], list_title: &str) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let mut output = Vec::new();
    output.push(format!("📝 Tasks in {}", list_title.bold()));
    output.push("─".repeat(40));

    for task in tasks {
        let status = match task.status {
            TaskStatus::NeedsAction => task.status.to_string().yellow(),
            TaskStatus::Completed => task.status.to_string().green(),
        };
        output.push(format!("- {} (Status: {status})", task.title));
        if let Some(ref notes) = task.notes {
            if !notes.is_empty() {
                output.push(format!("    {}", notes.dimmed()));
            }
        }
    }

    output.join("\n")
}

/// Format task lists as a human-readable list.
#[must_use]
pub fn format_task_lists_pretty(lists: &[TaskList]) -> String {
    if lists.is_empty() {
        return "No task lists found.".to_string();
    }

    let mut output = Vec::new();
    output.push("📋 Task Lists".bold().to_string());
    output.push("─".repeat(40));
    for list in lists {
        output.push(format!("- {} ({})", list.title, list.id.dimmed()));
    }

    output.join("\n")
}

/// Format a newly created task.
#[must_use]
pub fn format_created_task_pretty(task: &Task) -> String {
    format!("Created task: {} (ID: {})", task.title.bold(), task.id)
}
