//! Stored OAuth tokens for the task service.
//!
//! Credential acquisition (the interactive consent flow) happens outside
//! this tool. This module only loads tokens that flow produced, refreshes
//! the access token when it has expired, and persists the result.

use std::path::Path;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::SeshError;

const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Refresh this many seconds before the recorded expiry.
const EXPIRY_SLACK_SECS: i64 = 60;

/// Tokens persisted at `~/.sesh/token.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredTokens {
    #[serde(alias = "access_token")]
    pub access_token: String,
    #[serde(default, alias = "refresh_token")]
    pub refresh_token: Option<String>,
    #[serde(default, alias = "expires_at")]
    pub expires_at: Option<i64>,
}

impl StoredTokens {
    /// Load tokens from disk.
    ///
    /// # Errors
    ///
    /// Returns `SeshError::Auth` when no token file exists, or a
    /// parse/IO error when it is unreadable.
    pub fn load(path: &Path) -> Result<Self, SeshError> {
        if !path.exists() {
            return Err(SeshError::Auth(format!(
                "no stored credentials at {}; run the provider's consent flow first",
                path.display()
            )));
        }
        let raw = std::fs::read_to_string(path)?;
        serde_json::from_str(&raw).map_err(SeshError::Parse)
    }

    /// Persist tokens, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SeshError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Whether the access token is expired (or about to be) at
    /// `now_unix`. Tokens without a recorded expiry are assumed valid.
    #[must_use]
    pub fn is_expired(&self, now_unix: i64) -> bool {
        self.expires_at
            .is_some_and(|at| now_unix + EXPIRY_SLACK_SECS >= at)
    }
}

/// Response from the OAuth token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Load a usable access token, refreshing and re-persisting if expired.
///
/// # Errors
///
/// Returns `SeshError::Auth` when no credentials are stored, the access
/// token is expired with no refresh token, the OAuth client id/secret
/// env vars are missing, or the token endpoint rejects the refresh.
pub fn load_access_token(
    token_file: &Path,
    http: &reqwest::blocking::Client,
) -> Result<String, SeshError> {
    let mut tokens = StoredTokens::load(token_file)?;

    if !tokens.is_expired(Utc::now().timestamp()) {
        return Ok(tokens.access_token);
    }

    let Some(refresh_token) = tokens.refresh_token.clone() else {
        return Err(SeshError::Auth(
            "stored access token is expired and no refresh token is available".to_string(),
        ));
    };

    let client_id = std::env::var("GOOGLE_CLIENT_ID")
        .map_err(|_| SeshError::Auth("GOOGLE_CLIENT_ID is not set".to_string()))?;
    let client_secret = std::env::var("GOOGLE_CLIENT_SECRET")
        .map_err(|_| SeshError::Auth("GOOGLE_CLIENT_SECRET is not set".to_string()))?;

    log::debug!("refreshing expired access token");
    let response = http
        .post(TOKEN_URL)
        .form(&[
            ("client_id", client_id.as_str()),
            ("client_secret", client_secret.as_str()),
            ("refresh_token", refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ])
        .send()
        .map_err(|e| SeshError::Auth(format!("token refresh request failed: {e}")))?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().unwrap_or_default();
        return Err(SeshError::Auth(format!(
            "token refresh rejected ({status}): {body}"
        )));
    }

    let refreshed: TokenResponse = response
        .json()
        .map_err(|e| SeshError::Auth(format!("malformed token response: {e}")))?;

    tokens.access_token = refreshed.access_token;
    tokens.expires_at = refreshed.expires_in.map(|s| Utc::now().timestamp() + s);
    tokens.save(token_file)?;

    Ok(tokens.access_token)
}
