use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "sesh")]
#[command(about = "A friendly CLI for focused study sessions")]
#[command(long_about = "sesh - focused study sessions from your terminal

Runs timed study sessions with website blocking, a notification chime,
and a written reflection saved per subject. A companion command reads
and creates tasks in your remote task list.

QUICK START:
  sesh study               Start a focused study session
  sesh tasks               Show the tasks in your configured list
  sesh tasks add \"Essay\"   Add a task to that list
  sesh                     Interactive menu (study / tasks / exit)

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  sesh <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output (default),
    /// or 'json' for machine-readable output suitable for scripting.
    #[arg(short, long, value_enum, default_value = "pretty", global = true)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start a focused study session
    ///
    /// Walks you through session setup (subject, focus, duration), gives
    /// you a preparation window, blocks distracting websites for the
    /// duration, and offers a short written reflection afterwards.
    ///
    /// Websites are unblocked when the session ends, including when you
    /// interrupt it with Ctrl-C.
    ///
    /// # Examples
    ///
    ///   sesh study               Full session with blocking and sound
    ///   sesh study --no-block    Skip website blocking
    ///   sesh study --no-sound    Skip the notification chime
    #[command(alias = "s")]
    Study(StudyArgs),

    /// View or create tasks in your remote task list
    ///
    /// Reads the task list configured in `~/.sesh/config.yaml` (default:
    /// "School"). Requires stored credentials at `~/.sesh/token.json`;
    /// the consent flow that produces them lives outside this tool.
    ///
    /// # Examples
    ///
    ///   sesh tasks                         List tasks
    ///   sesh tasks lists                   Show all of your task lists
    ///   sesh tasks add "Essay" -n "Draft"  Create a task with notes
    ///   sesh tasks --list Work             Read a different list
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   sesh completions bash > /etc/bash_completion.d/sesh
    ///   sesh completions zsh > ~/.zfunc/_sesh
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

/// Arguments for the study command.
#[derive(Args, Default)]
pub struct StudyArgs {
    /// Skip website blocking for this session
    #[arg(long)]
    pub no_block: bool,

    /// Skip the notification chime for this session
    #[arg(long)]
    pub no_sound: bool,
}

/// Arguments for the tasks command.
#[derive(Args, Default)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: Option<TasksCommands>,

    /// Task list title to read (defaults to the configured list)
    #[arg(short, long, global = true)]
    pub list: Option<String>,
}

#[derive(Subcommand)]
pub enum TasksCommands {
    /// List tasks in the configured task list
    List,

    /// Show all of your task lists
    Lists,

    /// Add a task to the configured task list
    Add(AddTaskArgs),
}

/// Arguments for adding a task.
#[derive(Args)]
pub struct AddTaskArgs {
    /// Task title
    pub title: String,

    /// Optional notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_study_flags() {
        let cli = Cli::try_parse_from(["sesh", "study", "--no-block"]).unwrap();
        match cli.command {
            Some(Commands::Study(args)) => {
                assert!(args.no_block);
                assert!(!args.no_sound);
            }
            _ => panic!("expected study command"),
        }
    }

    #[test]
    fn test_tasks_lists_subcommand() {
        let cli = Cli::try_parse_from(["sesh", "tasks", "lists"]).unwrap();
        match cli.command {
            Some(Commands::Tasks(args)) => {
                assert!(matches!(args.command, Some(TasksCommands::Lists)));
            }
            _ => panic!("expected tasks command"),
        }
    }

    #[test]
    fn test_tasks_defaults_to_list() {
        let cli = Cli::try_parse_from(["sesh", "tasks"]).unwrap();
        match cli.command {
            Some(Commands::Tasks(args)) => {
                assert!(args.command.is_none());
                assert!(args.list.is_none());
            }
            _ => panic!("expected tasks command"),
        }
    }

    #[test]
    fn test_tasks_add_with_notes() {
        let cli =
            Cli::try_parse_from(["sesh", "tasks", "add", "Essay", "--notes", "Draft"]).unwrap();
        match cli.command {
            Some(Commands::Tasks(args)) => match args.command {
                Some(TasksCommands::Add(add)) => {
                    assert_eq!(add.title, "Essay");
                    assert_eq!(add.notes.as_deref(), Some("Draft"));
                }
                _ => panic!("expected tasks add"),
            },
            _ => panic!("expected tasks command"),
        }
    }

    #[test]
    fn test_no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["sesh"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.output, OutputFormat::Pretty);
    }

    #[test]
    fn test_json_output_flag() {
        let cli = Cli::try_parse_from(["sesh", "--output", "json", "tasks"]).unwrap();
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
