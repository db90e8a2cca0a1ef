//! The session controller.
//!
//! Drives one study session from setup through cleanup and owns the
//! blocking invariant: once the blocker has been started, it is ended
//! exactly once before the run returns, on every exit path.

use colored::Colorize;

use crate::core::cancel::CancelToken;
use crate::core::traits::{BlockerOutput, Notifier, PromptSource, ReflectionSink, SiteBlocker};
use crate::error::SeshError;
use crate::features::reflection::{ReflectionRecord, QUESTIONS};

use super::config::SessionConfig;
use super::countdown::{format_mmss, run_countdown, CountdownOutcome};
use super::state::{SessionOutcome, SessionPhase};

/// Default preparation window before blocking starts.
pub const DEFAULT_PREP_SECONDS: i64 = 120;

/// Drives one study session against injected collaborators.
pub struct SessionController<'a> {
    prompts: &'a mut dyn PromptSource,
    blocker: &'a dyn SiteBlocker,
    notifier: &'a dyn Notifier,
    reflections: &'a dyn ReflectionSink,
    cancel: CancelToken,
    prep_seconds: i64,
    phase: SessionPhase,
}

impl<'a> SessionController<'a> {
    pub fn new(
        prompts: &'a mut dyn PromptSource,
        blocker: &'a dyn SiteBlocker,
        notifier: &'a dyn Notifier,
        reflections: &'a dyn ReflectionSink,
        cancel: CancelToken,
    ) -> Self {
        Self {
            prompts,
            blocker,
            notifier,
            reflections,
            cancel,
            prep_seconds: DEFAULT_PREP_SECONDS,
            phase: SessionPhase::Setup,
        }
    }

    /// Override the preparation window length.
    #[must_use]
    pub fn prep_seconds(mut self, seconds: i64) -> Self {
        self.prep_seconds = seconds;
        self
    }

    /// Current lifecycle phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Run one session from setup to its terminal phase.
    ///
    /// # Errors
    ///
    /// Returns an error only for console input failures; collaborator
    /// failures (blocker, notifier, reflection store) are reported to the
    /// operator and the run continues.
    pub fn run(&mut self) -> Result<SessionOutcome, SeshError> {
        let Some(config) = self.setup()? else {
            println!("\n{}", "Study mode cancelled.".red());
            return Ok(SessionOutcome::Cancelled);
        };

        self.advance(SessionPhase::Preparing);
        self.prepare();

        self.advance(SessionPhase::BlockingActive);
        let outcome = self.blocking_active(&config);

        match outcome {
            CountdownOutcome::Finished => {
                self.advance(SessionPhase::Completed);
                self.notifier.notify();
                println!(
                    "\n{}\n{}",
                    "🎉 Time's up!".green().bold(),
                    "Great job on completing your study session!".green()
                );

                self.reflect(&config)?;

                println!("\n{}", "✨ Session complete. Keep up the great work!".green());
                Ok(SessionOutcome::Completed)
            }
            CountdownOutcome::Interrupted => {
                self.advance(SessionPhase::Interrupted);
                println!("\n{}", "Session interrupted by user.".yellow());
                self.advance(SessionPhase::Completed);
                Ok(SessionOutcome::Interrupted)
            }
        }
    }

    /// Collect a validated `SessionConfig`, re-prompting on bad answers.
    ///
    /// Returns `None` when the operator interrupts before the session
    /// proper begins.
    fn setup(&mut self) -> Result<Option<SessionConfig>, SeshError> {
        println!("{}", "🎯 Welcome to Study Mode!".green().bold());
        println!("Let's set up your focused study session.\n");

        let subject = loop {
            let raw = self.prompts.ask("What subject would you like to focus on today?")?;
            match SessionConfig::validate_subject(&raw) {
                Ok(subject) => break subject,
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        };

        let focus = self.prompts.ask("What exactly will you work on?")?;

        let duration_minutes = loop {
            let raw = self
                .prompts
                .ask("How long should the session last (in minutes)?")?;
            match SessionConfig::parse_duration_minutes(&raw) {
                Ok(minutes) => break minutes,
                Err(e) => println!("{}", e.to_string().yellow()),
            }
        };

        if self.cancel.is_triggered() {
            return Ok(None);
        }

        let config = SessionConfig::new(&subject, &focus, duration_minutes)?;

        println!("\n{}", "📋 Session Summary".blue().bold());
        println!("{}", "─".repeat(40).dimmed());
        println!("Subject:  {}", config.subject.bold());
        println!("Focus:    {}", config.focus);
        println!("Duration: {} minutes", config.duration_minutes);
        println!();

        Ok(Some(config))
    }

    /// Preparation window; an interrupt skips ahead instead of failing.
    fn prepare(&mut self) {
        println!("{}", "🛠️  Preparation time!".yellow().bold());
        println!(
            "Gather your materials. {} to skip ahead. ({})",
            "Ctrl-C".bold(),
            format_mmss(self.prep_seconds)
        );

        match run_countdown("Preparation", self.prep_seconds, &self.cancel) {
            CountdownOutcome::Finished => println!("{}", "Preparation complete!".green()),
            CountdownOutcome::Interrupted => {
                println!("{}", "Preparation skipped.".yellow());
                // The skip must not count against the main countdown.
                self.cancel.reset();
            }
        }
    }

    /// Start blocking, run the main countdown, and end blocking exactly
    /// once before returning.
    fn blocking_active(&mut self, config: &SessionConfig) -> CountdownOutcome {
        println!("\n{}", "Blocking websites...".blue());
        match self.blocker.block() {
            Ok(output) => report_blocker_output(&output),
            Err(e) => {
                log::warn!("website blocker start failed: {e}");
                println!(
                    "{}",
                    format!("Warning: could not enable blocking: {e}").yellow()
                );
            }
        }

        // One `end` per `start`, even on panic unwind.
        let guard = BlockGuard::new(self.blocker);

        self.notifier.notify();
        println!("\n{}", "🚀 Study session started!".green().bold());
        println!(
            "Subject: {} ({} minutes). Stay focused! 💪\n",
            config.subject.bold(),
            config.duration_minutes
        );

        let label = format!("Study: {}", config.subject);
        let outcome = run_countdown(&label, config.duration_seconds(), &self.cancel);

        guard.release();
        outcome
    }

    /// Offer reflection after a natural finish and store the answers.
    fn reflect(&mut self, config: &SessionConfig) -> Result<(), SeshError> {
        self.advance(SessionPhase::Reflecting);

        let wants = self
            .prompts
            .confirm("Would you like to do a quick reflection on your session?", true)?;
        if !wants {
            self.advance(SessionPhase::Completed);
            return Ok(());
        }

        println!("\n{}", "📝 Session Reflection".cyan().bold());
        println!("{}", "─".repeat(40).dimmed());

        let today = chrono::Local::now().date_naive();
        let mut record = ReflectionRecord::new(&config.subject, today);
        for question in QUESTIONS {
            let answer = self.prompts.ask(question)?;
            record.push(question, &answer);
        }

        match self.reflections.append(&record) {
            Ok(path) => println!("{}", format!("✅ Reflection saved to {}", path.display()).green()),
            Err(e) => {
                log::warn!("failed to store reflection: {e}");
                println!(
                    "{}",
                    format!("Warning: could not save reflection: {e}").yellow()
                );
            }
        }

        self.advance(SessionPhase::Completed);
        Ok(())
    }

    fn advance(&mut self, next: SessionPhase) {
        debug_assert!(
            self.phase.can_transition_to(next),
            "illegal session transition {} -> {}",
            self.phase,
            next
        );
        log::debug!("session phase {} -> {}", self.phase, next);
        self.phase = next;
    }
}

/// Surface blocker script output as informational/warning text.
fn report_blocker_output(output: &BlockerOutput) {
    if !output.stdout.is_empty() {
        println!("{}", output.stdout.green());
    }
    if !output.stderr.is_empty() {
        println!("{}", format!("Warning: {}", output.stderr).yellow());
    }
}

/// Ends blocking exactly once.
///
/// `release` is the normal path and reports the script output; the
/// `Drop` arm covers unwinds so the block list is restored regardless.
struct BlockGuard<'b> {
    blocker: &'b dyn SiteBlocker,
    released: bool,
}

impl<'b> BlockGuard<'b> {
    fn new(blocker: &'b dyn SiteBlocker) -> Self {
        Self {
            blocker,
            released: false,
        }
    }

    fn release(mut self) {
        self.released = true;
        println!("\n{}", "Unblocking websites...".blue());
        match self.blocker.unblock() {
            Ok(output) => report_blocker_output(&output),
            Err(e) => {
                log::warn!("website blocker end failed: {e}");
                println!(
                    "{}",
                    format!("Warning: could not disable blocking: {e}").yellow()
                );
            }
        }
    }
}

impl Drop for BlockGuard<'_> {
    fn drop(&mut self) {
        if !self.released {
            if let Err(e) = self.blocker.unblock() {
                log::warn!("website blocker end failed during cleanup: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::core::traits::{
        MockNotifier, MockReflectionSink, MockSiteBlocker, PromptSource,
    };

    use super::*;

    /// Prompt source fed from a fixed script of answers.
    struct ScriptedPrompt {
        answers: VecDeque<String>,
        confirms: VecDeque<bool>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str], confirms: &[bool]) -> Self {
            Self {
                answers: answers.iter().map(ToString::to_string).collect(),
                confirms: confirms.iter().copied().collect(),
                asked: Vec::new(),
            }
        }
    }

    impl PromptSource for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String, SeshError> {
            self.asked.push(question.to_string());
            self.answers
                .pop_front()
                .ok_or_else(|| SeshError::InvalidInput("prompt script exhausted".to_string()))
        }

        fn confirm(&mut self, _question: &str, default: bool) -> Result<bool, SeshError> {
            Ok(self.confirms.pop_front().unwrap_or(default))
        }
    }

    fn quiet_notifier(times: usize) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_notify().times(times).return_const(());
        notifier
    }

    fn untouched_sink() -> MockReflectionSink {
        let mut sink = MockReflectionSink::new();
        sink.expect_append().times(0);
        sink
    }

    #[test]
    fn test_completed_run_ends_block_exactly_once() {
        let mut prompts = ScriptedPrompt::new(&["Math", "integrals", "0"], &[false]);

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        // Start chime plus end chime on natural expiry.
        let notifier = quiet_notifier(2);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(controller.phase(), SessionPhase::Completed);
    }

    #[test]
    fn test_interrupt_skips_end_notification_and_ends_once() {
        let mut prompts = ScriptedPrompt::new(&["Math", "integrals", "10"], &[]);

        let cancel = CancelToken::new();
        let trigger = cancel.clone();

        let mut blocker = MockSiteBlocker::new();
        // The interrupt lands right as blocking starts, so the main
        // countdown sees it on its first poll.
        blocker.expect_block().times(1).returning(move || {
            trigger.trigger();
            Ok(BlockerOutput::default())
        });
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        // Start chime only; no end chime on interruption.
        let notifier = quiet_notifier(1);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, cancel)
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Interrupted);
    }

    #[test]
    fn test_zero_duration_offers_reflection() {
        let mut prompts = ScriptedPrompt::new(
            &["Math", "integrals", "0", "Learned X", "4", "Because Y", "Z next time"],
            &[true],
        );

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        let notifier = quiet_notifier(2);

        let mut sink = MockReflectionSink::new();
        sink.expect_append()
            .times(1)
            .withf(|record| {
                record.subject == "Math"
                    && record.entries().len() == QUESTIONS.len()
                    && record.entries()[0].1 == "Learned X"
                    && record.entries()[3].1 == "Z next time"
            })
            .returning(|record| Ok(std::path::PathBuf::from(record.file_name())));

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
    }

    #[test]
    fn test_setup_reprompts_on_invalid_answers() {
        // Blank subject, then a valid one; non-numeric and negative
        // durations, then zero.
        let mut prompts = ScriptedPrompt::new(
            &["  ", "Math", "integrals", "abc", "-5", "0"],
            &[false],
        );

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        let notifier = quiet_notifier(2);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
        // Two subject prompts, one focus prompt, three duration prompts.
        assert_eq!(prompts.asked.len(), 6);
    }

    #[test]
    fn test_blocker_start_failure_still_ends_once() {
        let mut prompts = ScriptedPrompt::new(&["Math", "integrals", "0"], &[false]);

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Err(SeshError::Blocker("script not found".to_string())));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        let notifier = quiet_notifier(2);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
    }

    #[test]
    fn test_reflection_write_failure_is_reported_not_propagated() {
        let mut prompts = ScriptedPrompt::new(
            &["Math", "integrals", "0", "a", "b", "c", "d"],
            &[true],
        );

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        let notifier = quiet_notifier(2);

        let mut sink = MockReflectionSink::new();
        sink.expect_append()
            .times(1)
            .returning(|_| Err(SeshError::Config("disk full".to_string())));

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
    }

    #[test]
    fn test_interrupt_during_setup_never_touches_blocker() {
        let mut prompts = ScriptedPrompt::new(&["Math", "integrals", "5"], &[]);

        let cancel = CancelToken::new();
        cancel.trigger();

        let mut blocker = MockSiteBlocker::new();
        blocker.expect_block().times(0);
        blocker.expect_unblock().times(0);

        let notifier = quiet_notifier(0);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, cancel)
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Cancelled);
    }

    #[test]
    fn test_declined_reflection_skips_sink() {
        let mut prompts = ScriptedPrompt::new(&["Math", "integrals", "0"], &[false]);

        let mut blocker = MockSiteBlocker::new();
        blocker
            .expect_block()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));
        blocker
            .expect_unblock()
            .times(1)
            .returning(|| Ok(BlockerOutput::default()));

        let notifier = quiet_notifier(2);
        let sink = untouched_sink();

        let mut controller =
            SessionController::new(&mut prompts, &blocker, &notifier, &sink, CancelToken::new())
                .prep_seconds(0);

        let outcome = controller.run().unwrap();
        assert_eq!(outcome, SessionOutcome::Completed);
        // Only the three setup questions were asked.
        assert_eq!(prompts.asked.len(), 3);
    }
}
