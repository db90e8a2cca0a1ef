//! Notification sound playback.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use colored::Colorize;

use crate::core::traits::Notifier;

/// Plays the session chime through an external player.
///
/// Playback is fire-and-forget: a missing player or sound file produces
/// a warning and nothing else.
#[derive(Debug, Clone)]
pub struct SoundNotifier {
    player: String,
    player_args: Vec<String>,
    sound: PathBuf,
}

impl SoundNotifier {
    #[must_use]
    pub const fn new(player: String, player_args: Vec<String>, sound: PathBuf) -> Self {
        Self {
            player,
            player_args,
            sound,
        }
    }
}

impl Notifier for SoundNotifier {
    fn notify(&self) {
        if !self.sound.exists() {
            log::warn!("notification sound not found at {}", self.sound.display());
            return;
        }

        let result = Command::new(&self.player)
            .args(&self.player_args)
            .arg(&self.sound)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status();

        match result {
            Ok(status) if !status.success() => {
                log::warn!("sound player exited with {status}");
            }
            Ok(_) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                println!(
                    "{}",
                    format!(
                        "{} not found. Install it to enable notification sounds.",
                        self.player
                    )
                    .yellow()
                );
            }
            Err(e) => log::warn!("failed to play notification sound: {e}"),
        }
    }
}

/// Silent notifier for `--no-sound` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self) {}
}
