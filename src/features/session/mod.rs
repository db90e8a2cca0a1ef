//! Study session lifecycle.
//!
//! The controller drives one session from setup through cleanup:
//! preparation countdown, website blocking, the main countdown, and the
//! reflection hand-off. Cleanup of the block list is guaranteed on every
//! exit path.

pub mod config;
pub mod controller;
pub mod countdown;
pub mod state;

pub use config::SessionConfig;
pub use controller::{SessionController, DEFAULT_PREP_SECONDS};
pub use countdown::{format_mmss, render_progress_bar, Countdown, CountdownOutcome};
pub use state::{SessionOutcome, SessionPhase};
