//! Command-line interface for sesh.

pub mod args;
pub mod commands;
