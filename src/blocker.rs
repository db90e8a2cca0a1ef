//! Website blocker adapter.
//!
//! Shells out to the external block-list script with a mode argument
//! (`start` or `end`). The script runs with elevated privilege and owns
//! the actual hosts-file changes; this adapter only captures its output.
//! No timeout is applied: the session waits as long as the script does.

use std::path::PathBuf;
use std::process::Command;

use crate::core::traits::{BlockerOutput, SiteBlocker};
use crate::error::SeshError;

/// Runs the configured blocking script, through `sudo` by default.
#[derive(Debug, Clone)]
pub struct ScriptBlocker {
    script: PathBuf,
    use_sudo: bool,
}

impl ScriptBlocker {
    #[must_use]
    pub const fn new(script: PathBuf, use_sudo: bool) -> Self {
        Self { script, use_sudo }
    }

    fn run(&self, mode: &str) -> Result<BlockerOutput, SeshError> {
        if !self.script.exists() {
            return Err(SeshError::Blocker(format!(
                "blocking script not found at {}",
                self.script.display()
            )));
        }

        let mut command = if self.use_sudo {
            let mut cmd = Command::new("sudo");
            cmd.arg(&self.script);
            cmd
        } else {
            Command::new(&self.script)
        };

        let output = command.arg(mode).output().map_err(|e| {
            SeshError::Blocker(format!("failed to run {}: {e}", self.script.display()))
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(SeshError::Blocker(format!(
                "script exited with {}: {stderr}",
                output.status
            )));
        }

        Ok(BlockerOutput { stdout, stderr })
    }
}

impl SiteBlocker for ScriptBlocker {
    fn block(&self) -> Result<BlockerOutput, SeshError> {
        self.run("start")
    }

    fn unblock(&self) -> Result<BlockerOutput, SeshError> {
        self.run("end")
    }
}

/// No-op blocker for `--no-block` runs and unconfigured setups.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullBlocker;

impl SiteBlocker for NullBlocker {
    fn block(&self) -> Result<BlockerOutput, SeshError> {
        Ok(BlockerOutput::default())
    }

    fn unblock(&self) -> Result<BlockerOutput, SeshError> {
        Ok(BlockerOutput::default())
    }
}
