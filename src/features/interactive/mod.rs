//! Interactive console prompts.

pub mod console;

pub use console::ConsolePrompt;
