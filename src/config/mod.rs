//! Configuration management for sesh.
//!
//! This module handles loading configuration from `~/.sesh/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{BlockerSettings, Config, NotifySettings, SessionSettings, TasksSettings};
