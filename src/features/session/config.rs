//! Session parameters collected during setup.

use serde::{Deserialize, Serialize};

use crate::error::SeshError;

/// Parameters for one study session.
///
/// Built once from operator input during the setup phase; immutable for
/// the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Subject studied; also the per-subject reflection directory name.
    pub subject: String,
    /// Free-text description of what the session focuses on.
    pub focus: String,
    /// Planned session length. Zero is legal and finishes immediately.
    pub duration_minutes: i64,
}

impl SessionConfig {
    /// Build a validated config.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::InvalidInput` for a blank subject or a
    /// negative duration.
    pub fn new(subject: &str, focus: &str, duration_minutes: i64) -> Result<Self, SeshError> {
        let subject = Self::validate_subject(subject)?;
        if duration_minutes < 0 {
            return Err(SeshError::InvalidInput(
                "Duration must not be negative".to_string(),
            ));
        }
        Ok(Self {
            subject,
            focus: focus.trim().to_string(),
            duration_minutes,
        })
    }

    /// Validate and normalize a subject answer.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::InvalidInput` when the trimmed answer is empty.
    pub fn validate_subject(raw: &str) -> Result<String, SeshError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(SeshError::InvalidInput(
                "Subject must not be empty".to_string(),
            ));
        }
        Ok(trimmed.to_string())
    }

    /// Parse a duration answer as whole minutes.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::InvalidInput` for non-numeric or negative
    /// input.
    pub fn parse_duration_minutes(raw: &str) -> Result<i64, SeshError> {
        let minutes: i64 = raw.trim().parse().map_err(|_| {
            SeshError::InvalidInput(format!("\"{}\" is not a whole number of minutes", raw.trim()))
        })?;
        if minutes < 0 {
            return Err(SeshError::InvalidInput(
                "Duration must not be negative".to_string(),
            ));
        }
        Ok(minutes)
    }

    /// Session length in seconds.
    #[must_use]
    pub const fn duration_seconds(&self) -> i64 {
        self.duration_minutes * 60
    }
}
