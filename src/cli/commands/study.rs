//! Study session command implementation.
//!
//! Wires the real collaborators (console prompts, blocking script, sound
//! player, reflection files) into the session controller.

use colored::Colorize;

use crate::blocker::{NullBlocker, ScriptBlocker};
use crate::cli::args::StudyArgs;
use crate::config::{Config, Paths};
use crate::core::cancel::{install_ctrl_c_handler, CancelToken};
use crate::core::traits::{Notifier, SiteBlocker};
use crate::error::SeshError;
use crate::features::interactive::ConsolePrompt;
use crate::features::reflection::FileReflectionStore;
use crate::features::session::SessionController;
use crate::notify::{SilentNotifier, SoundNotifier};

/// Execute the study command.
///
/// # Errors
///
/// Returns an error for configuration problems or console input
/// failures. Collaborator failures during the session are reported to
/// the operator instead.
pub fn study(args: &StudyArgs) -> Result<String, SeshError> {
    let paths = Paths::new()?;
    paths.ensure_dirs()?;
    let config = Config::load(&paths)?;

    let cancel = CancelToken::new();
    install_ctrl_c_handler(&cancel)?;

    let script_blocker = if args.no_block {
        None
    } else if let Some(script) = config.blocker.script.clone() {
        Some(ScriptBlocker::new(script, config.blocker.use_sudo))
    } else {
        println!(
            "{}",
            "No blocking script configured; websites will not be blocked.".yellow()
        );
        None
    };
    let null_blocker = NullBlocker;
    let blocker: &dyn SiteBlocker = match script_blocker.as_ref() {
        Some(blocker) => blocker,
        None => &null_blocker,
    };

    let sound_notifier = (!args.no_sound).then(|| {
        SoundNotifier::new(
            config.notify.player.clone(),
            config.notify.player_args.clone(),
            config.sound_file(&paths),
        )
    });
    let silent_notifier = SilentNotifier;
    let notifier: &dyn Notifier = match sound_notifier.as_ref() {
        Some(notifier) => notifier,
        None => &silent_notifier,
    };

    let store = FileReflectionStore::new(config.study_root(&paths));
    let mut prompts = ConsolePrompt::new();

    let mut controller = SessionController::new(&mut prompts, blocker, notifier, &store, cancel)
        .prep_seconds(config.session.prep_seconds);

    let outcome = controller.run()?;
    log::debug!("session finished with outcome {outcome:?}");

    // The controller narrates the session itself; nothing left to print.
    Ok(String::new())
}
