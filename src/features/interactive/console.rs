//! Console prompt provider.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::traits::PromptSource;
use crate::error::SeshError;

/// Prompts the operator on stdin/stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsolePrompt;

impl ConsolePrompt {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn read_line() -> Result<String, SeshError> {
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

impl PromptSource for ConsolePrompt {
    fn ask(&mut self, question: &str) -> Result<String, SeshError> {
        print!("{} {} ", ">".green(), question.cyan().bold());
        io::stdout().flush()?;
        Self::read_line()
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool, SeshError> {
        let hint = if default { "[Y/n]" } else { "[y/N]" };
        print!(
            "{} {} {} ",
            ">".green(),
            question.cyan().bold(),
            hint.dimmed()
        );
        io::stdout().flush()?;

        let answer = Self::read_line()?;
        Ok(match answer.to_ascii_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        })
    }
}
