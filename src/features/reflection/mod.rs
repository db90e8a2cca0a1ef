//! Post-session reflection.
//!
//! A fixed ordered question list answered after completed sessions, with
//! answers appended to a per-subject daily log file.

pub mod record;
pub mod store;

pub use record::{ReflectionRecord, QUESTIONS};
pub use store::FileReflectionStore;
