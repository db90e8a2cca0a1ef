//! Blocking client for the task service REST API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;

use crate::error::SeshError;

use super::types::{Task, TaskList};

const API_BASE: &str = "https://www.googleapis.com/tasks/v1";

/// Envelope for list endpoints; `items` is absent when the list is empty.
#[derive(Debug, Deserialize)]
struct ListEnvelope<T> {
    #[serde(default = "Vec::new")]
    items: Vec<T>,
}

/// Narrow client over the remote task service.
///
/// One request per call: no retries, no pagination beyond the page-size
/// cap passed to [`TasksClient::list_task_lists`].
pub struct TasksClient {
    http: reqwest::blocking::Client,
    base_url: String,
    access_token: String,
}

impl TasksClient {
    /// Client against the production API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(access_token: String) -> Result<Self, SeshError> {
        Self::with_base_url(access_token, API_BASE.to_string())
    }

    /// Client against an explicit base URL (used by tests).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn with_base_url(access_token: String, base_url: String) -> Result<Self, SeshError> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(Duration::from_secs(15))
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| SeshError::Tasks(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url,
            access_token,
        })
    }

    /// Fetch the operator's task lists, capped at `max_results`.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::Auth` on rejected credentials and
    /// `SeshError::Tasks` on any other request or response failure.
    pub fn list_task_lists(&self, max_results: u32) -> Result<Vec<TaskList>, SeshError> {
        let url = format!("{}/users/@me/lists", self.base_url);
        let envelope: ListEnvelope<TaskList> =
            self.get(&url, &[("maxResults", max_results.to_string())])?;
        Ok(envelope.items)
    }

    /// Fetch the tasks in one list.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::Auth` on rejected credentials and
    /// `SeshError::Tasks` on any other request or response failure.
    pub fn list_tasks(&self, list_id: &str) -> Result<Vec<Task>, SeshError> {
        let url = format!("{}/lists/{list_id}/tasks", self.base_url);
        let envelope: ListEnvelope<Task> = self.get(&url, &[])?;
        Ok(envelope.items)
    }

    /// Create a task with a title and optional notes.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::Auth` on rejected credentials and
    /// `SeshError::Tasks` on any other request or response failure.
    pub fn create_task(
        &self,
        list_id: &str,
        title: &str,
        notes: Option<&str>,
    ) -> Result<Task, SeshError> {
        let url = format!("{}/lists/{list_id}/tasks", self.base_url);

        let mut body = json!({ "title": title });
        if let Some(notes) = notes {
            body["notes"] = json!(notes);
        }

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .map_err(|e| SeshError::Tasks(format!("request failed: {e}")))?;
        Self::parse(response)
    }

    fn get<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, SeshError> {
        let response = self
            .http
            .get(url)
            .query(query)
            .bearer_auth(&self.access_token)
            .send()
            .map_err(|e| SeshError::Tasks(format!("request failed: {e}")))?;
        Self::parse(response)
    }

    fn parse<T: DeserializeOwned>(response: reqwest::blocking::Response) -> Result<T, SeshError> {
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(SeshError::Auth(format!(
                "task service rejected the credentials ({status})"
            )));
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SeshError::Tasks(format!(
                "task service error ({status}): {body}"
            )));
        }

        response
            .json()
            .map_err(|e| SeshError::Tasks(format!("malformed response: {e}")))
    }
}

/// Find a task list by exact title match.
#[must_use]
pub fn find_list_by_title<'a>(lists: &'a [TaskList], title: &str) -> Option<&'a TaskList> {
    lists.iter().find(|list| list.title == title)
}
