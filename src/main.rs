use std::io::{self, Write};

use clap::{CommandFactory, Parser};
use colored::Colorize;

use sesh::cli::args::{Cli, Commands, StudyArgs, TasksArgs};
use sesh::cli::commands;
use sesh::error::SeshError;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), SeshError> {
    let cli = Cli::parse();
    let format = cli.output;

    let Some(command) = cli.command else {
        return interactive_menu(format);
    };

    let output = match command {
        Commands::Study(args) => commands::study(&args)?,
        Commands::Tasks(args) => commands::tasks(args, format)?,
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
            String::new()
        }
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Interactive fallback when no subcommand is given: keep prompting for
/// `study`, `tasks`, or `exit`.
fn interactive_menu(format: sesh::OutputFormat) -> Result<(), SeshError> {
    println!("{}", "🎯 Welcome to sesh!".green().bold());
    println!();
    println!("{}", "Available commands:".bold());
    println!("  {} - Start a focused study session", "study".cyan());
    println!("  {} - View your remote tasks", "tasks".cyan());
    println!("  {} - Leave", "exit".cyan());
    println!();

    loop {
        print!("What would you like to do? ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF behaves like an explicit exit.
            println!();
            return Ok(());
        }

        match input.trim().to_lowercase().as_str() {
            "study" => {
                let output = commands::study(&StudyArgs::default())?;
                if !output.is_empty() {
                    println!("{output}");
                }
                return Ok(());
            }
            "tasks" => {
                let output = commands::tasks(TasksArgs::default(), format)?;
                if !output.is_empty() {
                    println!("{output}");
                }
                return Ok(());
            }
            "exit" | "quit" | "q" => {
                println!("{}", "👋 See you later! Stay productive!".dimmed());
                return Ok(());
            }
            other => {
                println!(
                    "{}",
                    format!("Unknown choice \"{other}\". Try study, tasks, or exit.").yellow()
                );
            }
        }
    }
}
