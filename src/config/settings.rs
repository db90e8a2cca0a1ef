//! Configuration settings for sesh.
//!
//! Settings are loaded from `~/.sesh/config.yaml`. A missing file yields
//! defaults; every section and field is individually defaulted so sparse
//! configs stay valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Paths;
use crate::error::SeshError;
use crate::features::session::DEFAULT_PREP_SECONDS;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Study session settings.
    pub session: SessionSettings,
    /// Website blocker settings.
    pub blocker: BlockerSettings,
    /// Notification sound settings.
    pub notify: NotifySettings,
    /// Remote task list settings.
    pub tasks: TasksSettings,
}

/// Study session settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Preparation countdown before blocking starts, in seconds.
    #[serde(default = "default_prep_seconds")]
    pub prep_seconds: i64,
    /// Root directory for reflection files. Defaults to `~/Desktop/study`.
    #[serde(default)]
    pub study_root: Option<PathBuf>,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            prep_seconds: default_prep_seconds(),
            study_root: None,
        }
    }
}

/// Website blocker settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockerSettings {
    /// Path to the blocking script. `None` runs sessions unblocked.
    #[serde(default)]
    pub script: Option<PathBuf>,
    /// Run the script through sudo.
    #[serde(default = "default_true")]
    pub use_sudo: bool,
}

impl Default for BlockerSettings {
    fn default() -> Self {
        Self {
            script: None,
            use_sudo: default_true(),
        }
    }
}

/// Notification sound settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifySettings {
    /// External audio player binary.
    #[serde(default = "default_player")]
    pub player: String,
    /// Extra arguments passed to the player.
    #[serde(default = "default_player_args")]
    pub player_args: Vec<String>,
    /// Sound file. Defaults to `~/.sesh/bell-notification.mp3`.
    #[serde(default)]
    pub sound: Option<PathBuf>,
}

impl Default for NotifySettings {
    fn default() -> Self {
        Self {
            player: default_player(),
            player_args: default_player_args(),
            sound: None,
        }
    }
}

/// Remote task list settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksSettings {
    /// Task list consulted by `sesh tasks`.
    #[serde(default = "default_list_title")]
    pub list_title: String,
    /// Page-size cap for task list queries.
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for TasksSettings {
    fn default() -> Self {
        Self {
            list_title: default_list_title(),
            page_size: default_page_size(),
        }
    }
}

impl Config {
    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(paths: &Paths) -> Result<Self, SeshError> {
        if !paths.config_file.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&paths.config_file)?;
        serde_yaml::from_str(&raw)
            .map_err(|e| SeshError::Config(format!("invalid config file: {e}")))
    }

    /// Resolved study root.
    #[must_use]
    pub fn study_root(&self, paths: &Paths) -> PathBuf {
        self.session
            .study_root
            .clone()
            .unwrap_or_else(|| paths.default_study_root.clone())
    }

    /// Resolved notification sound file.
    #[must_use]
    pub fn sound_file(&self, paths: &Paths) -> PathBuf {
        self.notify
            .sound
            .clone()
            .unwrap_or_else(|| paths.root.join("bell-notification.mp3"))
    }
}

const fn default_prep_seconds() -> i64 {
    DEFAULT_PREP_SECONDS
}

const fn default_true() -> bool {
    true
}

fn default_player() -> String {
    "mpv".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["--really-quiet".to_string()]
}

fn default_list_title() -> String {
    "School".to_string()
}

const fn default_page_size() -> u32 {
    10
}
