//! Countdown plumbing for study sessions.
//!
//! A pure second-granularity countdown plus the blocking driver loop
//! that repaints one console line per tick and polls the cancel token.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;

use crate::core::cancel::CancelToken;

/// Result of driving a countdown to its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownOutcome {
    /// The countdown ran to zero.
    Finished,
    /// The cancel token was triggered before the countdown reached zero.
    Interrupted,
}

/// A second-granularity countdown.
#[derive(Debug, Clone)]
pub struct Countdown {
    total_seconds: i64,
    remaining_seconds: i64,
}

impl Countdown {
    /// Create a countdown over the given number of seconds.
    ///
    /// Negative values are treated as zero.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        let seconds = if seconds < 0 { 0 } else { seconds };
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns true if the countdown just completed.
    pub fn tick(&mut self) -> bool {
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        self.remaining_seconds == 0
    }

    #[must_use]
    pub const fn remaining_seconds(&self) -> i64 {
        self.remaining_seconds
    }

    #[must_use]
    pub const fn is_finished(&self) -> bool {
        self.remaining_seconds == 0
    }

    /// Progress as a fraction (0.0 - 1.0).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.total_seconds as f64)
    }

    /// Format remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_mmss(self.remaining_seconds)
    }
}

/// Format a number of seconds as MM:SS.
#[must_use]
pub fn format_mmss(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let minutes = seconds / 60;
    let secs = seconds % 60;
    format!("{minutes:02}:{secs:02}")
}

/// Render a progress bar.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(progress: f64, width: usize) -> String {
    let filled = (progress.clamp(0.0, 1.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

/// Drive a countdown at one tick per second, repainting a single console
/// line, until it finishes or the token is triggered.
///
/// The token is polled before every sleep, so a pre-triggered token
/// short-circuits without waiting out the first tick.
pub fn run_countdown(label: &str, seconds: i64, cancel: &CancelToken) -> CountdownOutcome {
    let mut countdown = Countdown::from_seconds(seconds);

    while !countdown.is_finished() {
        if cancel.is_triggered() {
            println!();
            return CountdownOutcome::Interrupted;
        }

        print!(
            "\r  {} {} {}  ",
            label.cyan(),
            countdown.format_remaining().bold(),
            render_progress_bar(countdown.progress(), 30).dimmed()
        );
        let _ = io::stdout().flush();

        thread::sleep(Duration::from_secs(1));
        countdown.tick();
    }

    println!();
    CountdownOutcome::Finished
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_countdown_from_seconds() {
        let countdown = Countdown::from_seconds(1500);
        assert_eq!(countdown.remaining_seconds(), 1500);
        assert!(!countdown.is_finished());
    }

    #[test]
    fn test_countdown_tick_to_completion() {
        let mut countdown = Countdown::from_seconds(3);
        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());
        assert!(countdown.is_finished());

        // Further ticks stay at zero.
        assert!(countdown.tick());
        assert_eq!(countdown.remaining_seconds(), 0);
    }

    #[test]
    fn test_zero_countdown_is_finished_immediately() {
        let countdown = Countdown::from_seconds(0);
        assert!(countdown.is_finished());
        assert!((countdown.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_seconds_clamped() {
        let countdown = Countdown::from_seconds(-10);
        assert!(countdown.is_finished());
    }

    #[test]
    fn test_progress() {
        let mut countdown = Countdown::from_seconds(100);
        assert!(countdown.progress().abs() < f64::EPSILON);

        for _ in 0..50 {
            countdown.tick();
        }
        assert!((countdown.progress() - 0.5).abs() < 0.01);
    }

    #[test]
    fn test_format_mmss() {
        assert_eq!(format_mmss(1500), "25:00");
        assert_eq!(format_mmss(90), "01:30");
        assert_eq!(format_mmss(0), "00:00");
        assert_eq!(format_mmss(-5), "00:00");
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(0.5, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));
    }

    #[test]
    fn test_run_countdown_zero_finishes_without_cancel_check() {
        let cancel = CancelToken::new();
        cancel.trigger();
        // Zero seconds never enters the loop, so even a triggered token
        // yields a natural finish.
        assert_eq!(
            run_countdown("Test", 0, &cancel),
            CountdownOutcome::Finished
        );
    }

    #[test]
    fn test_run_countdown_pre_triggered_short_circuits() {
        let cancel = CancelToken::new();
        cancel.trigger();
        assert_eq!(
            run_countdown("Test", 600, &cancel),
            CountdownOutcome::Interrupted
        );
    }
}
