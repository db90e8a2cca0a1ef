//! Tasks command implementation.
//!
//! Remote and auth failures are caught here and reported to the
//! operator; the command then returns an empty result instead of
//! propagating, so expected service problems never crash the process.
//! A missing list title is a `NotFound` error, surfaced through `main`.

use colored::Colorize;

use crate::cli::args::{OutputFormat, TasksArgs, TasksCommands};
use crate::config::{Config, Paths};
use crate::error::SeshError;
use crate::gtasks::{find_list_by_title, load_access_token, TaskList, TasksClient};
use crate::output::{format_created_task, format_task_lists, format_tasks};

/// Execute tasks subcommands.
///
/// # Errors
///
/// Returns `SeshError::NotFound` when the requested list title does not
/// exist, or an error for local configuration problems; remote and auth
/// failures are reported in the command output.
pub fn tasks(args: TasksArgs, format: OutputFormat) -> Result<String, SeshError> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;
    let config = Config::load(&paths)?;

    let list_title = args
        .list
        .unwrap_or_else(|| config.tasks.list_title.clone());

    let client = match connect(&paths) {
        Ok(client) => client,
        Err(e) => return Ok(report_remote_error(&e)),
    };

    match args.command {
        None | Some(TasksCommands::List) => {
            list(&client, &list_title, config.tasks.page_size, format)
        }
        Some(TasksCommands::Lists) => lists(&client, config.tasks.page_size, format),
        Some(TasksCommands::Add(add)) => create(
            &client,
            &list_title,
            config.tasks.page_size,
            &add.title,
            add.notes.as_deref(),
            format,
        ),
    }
}

/// Build an authenticated client from the stored tokens.
fn connect(paths: &Paths) -> Result<TasksClient, SeshError> {
    let http = reqwest::blocking::Client::new();
    let access_token = load_access_token(&paths.token_file, &http)?;
    TasksClient::new(access_token)
}

/// Resolve the configured list by title.
///
/// `Ok(None)` means the title is absent; `Err` carries an
/// already-formatted remote-failure report.
fn resolve_list(
    client: &TasksClient,
    list_title: &str,
    page_size: u32,
) -> Result<Option<TaskList>, String> {
    let lists = client
        .list_task_lists(page_size)
        .map_err(|e| report_remote_error(&e))?;

    if lists.is_empty() {
        return Err("No task lists found.".to_string());
    }

    Ok(find_list_by_title(&lists, list_title).cloned())
}

fn lists(
    client: &TasksClient,
    page_size: u32,
    format: OutputFormat,
) -> Result<String, SeshError> {
    match client.list_task_lists(page_size) {
        Ok(lists) => format_task_lists(&lists, format),
        Err(e) => Ok(report_remote_error(&e)),
    }
}

fn list(
    client: &TasksClient,
    list_title: &str,
    page_size: u32,
    format: OutputFormat,
) -> Result<String, SeshError> {
    let list = match resolve_list(client, list_title, page_size) {
        Ok(Some(list)) => list,
        Ok(None) => return Err(not_found(list_title)),
        Err(report) => return Ok(report),
    };

    let tasks = match client.list_tasks(&list.id) {
        Ok(tasks) => tasks,
        Err(e) => return Ok(report_remote_error(&e)),
    };

    format_tasks(&tasks, &list.title, format)
}

fn create(
    client: &TasksClient,
    list_title: &str,
    page_size: u32,
    title: &str,
    notes: Option<&str>,
    format: OutputFormat,
) -> Result<String, SeshError> {
    let list = match resolve_list(client, list_title, page_size) {
        Ok(Some(list)) => list,
        Ok(None) => return Err(not_found(list_title)),
        Err(report) => return Ok(report),
    };

    match client.create_task(&list.id, title, notes) {
        Ok(task) => format_created_task(&task, format),
        Err(e) => Ok(report_remote_error(&e)),
    }
}

fn not_found(list_title: &str) -> SeshError {
    SeshError::NotFound(format!("task list \"{list_title}\""))
}

fn report_remote_error(error: &SeshError) -> String {
    log::warn!("task service unavailable: {error}");
    format!(
        "{}\n{}",
        format!("Could not reach the task service: {error}").red(),
        "Check your stored credentials and network connection.".yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_names_the_list() {
        let err = not_found("School");
        assert!(matches!(err, SeshError::NotFound(_)));
        assert!(err.to_string().contains("School"));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_remote_error_report_mentions_cause() {
        let report = report_remote_error(&SeshError::Auth("token expired".to_string()));
        assert!(report.contains("token expired"));
    }
}
