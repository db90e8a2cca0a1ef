//! Command implementations for sesh.
//!
//! This module contains the implementation of all CLI commands.

mod study;
mod tasks;

pub use study::study;
pub use tasks::tasks;
