//! Feature implementations for sesh.
//!
//! This module contains the implementation of the main features:
//! - Interactive console prompts
//! - Study session lifecycle
//! - Post-session reflection

pub mod interactive;
pub mod reflection;
pub mod session;
