//! Collaborator seams for the session controller.
//!
//! The controller drives one session through prompts, website blocking,
//! notification, and reflection storage. Each collaborator sits behind a
//! trait so tests can substitute fakes.

use std::path::PathBuf;

#[cfg(test)]
use mockall::automock;

use crate::error::SeshError;
use crate::features::reflection::ReflectionRecord;

/// Captured output of one blocker script invocation.
#[derive(Debug, Clone, Default)]
pub struct BlockerOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Reads free-text answers and confirmations from the operator.
#[cfg_attr(test, automock)]
pub trait PromptSource {
    /// Ask a free-text question and return the trimmed answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails.
    fn ask(&mut self, question: &str) -> Result<String, SeshError>;

    /// Ask a yes/no question; empty input picks the default.
    ///
    /// # Errors
    ///
    /// Returns an error if the input stream fails.
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, SeshError>;
}

/// Toggles the OS-level website block list.
#[cfg_attr(test, automock)]
pub trait SiteBlocker {
    /// Invoke the blocker with mode `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if the script is missing or exits non-zero.
    fn block(&self) -> Result<BlockerOutput, SeshError>;

    /// Invoke the blocker with mode `end`.
    ///
    /// # Errors
    ///
    /// Returns an error if the script is missing or exits non-zero.
    fn unblock(&self) -> Result<BlockerOutput, SeshError>;
}

/// Plays the notification sound. Fire-and-forget; failures are swallowed
/// by the implementation.
#[cfg_attr(test, automock)]
pub trait Notifier {
    fn notify(&self);
}

/// Appends reflection records to per-subject storage.
#[cfg_attr(test, automock)]
pub trait ReflectionSink {
    /// Append one record, returning the path written to.
    ///
    /// # Errors
    ///
    /// Returns an error if the record cannot be written.
    fn append(&self, record: &ReflectionRecord) -> Result<PathBuf, SeshError>;
}
