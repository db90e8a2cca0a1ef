//! Core abstractions for sesh.
//!
//! Shared collaborator traits and the cancellation token used across
//! features.

pub mod cancel;
pub mod traits;

pub use cancel::{install_ctrl_c_handler, CancelToken};
pub use traits::{BlockerOutput, Notifier, PromptSource, ReflectionSink, SiteBlocker};
