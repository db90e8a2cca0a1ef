//! Output formatting for sesh.
//!
//! This module provides formatters for displaying task data in various
//! formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::SeshError;
use crate::gtasks::{Task, TaskList};

pub use json::*;
pub use pretty::*;

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[Task],
    list_title: &str,
    format: OutputFormat,
) -> Result<String, SeshError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, list_title)),
        OutputFormat::Json => format_tasks_json(tasks, list_title),
    }
}

/// Format task lists based on output format
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn format_task_lists(
    lists: &[TaskList],
    format: OutputFormat,
) -> Result<String, SeshError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_lists_pretty(lists)),
        OutputFormat::Json => format_task_lists_json(lists),
    }
}

/// Format a newly created task based on output format
///
/// # Errors
///
/// Returns `SeshError::Parse` if JSON serialization fails.
pub fn format_created_task(task: &Task, format: OutputFormat) -> Result<String, SeshError> {
    match format {
        OutputFormat::Pretty => Ok(format_created_task_pretty(task)),
        OutputFormat::Json => to_json(task),
    }
}
