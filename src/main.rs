//! # standup CLI
//!
//! Command-line interface for the standup task list.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use owo_colors::OwoColorize;

use standup::{
    commands::{self, AddArgs, UpdateArgs},
    item::{datetime, FieldPatch, ItemPatch, Priority},
    Config,
};

const GLOBAL_HELP: &str = "\
Configuration Files:
  ~/.standup.yaml            Default store file (the full item list)
  ~/.config/standup/config   Optional global configuration (data_file override)

Store Format:
  The store is a single YAML file holding the full list. Items are addressed
  by their zero-based position; the newest item is always index 0. Removing
  an item shifts the indices of everything after it.

Field Formats:
  Priority   1/2/3 or low/normal/high
  Date-time  YYYY/MM/DD HH:MM:SS (local time, no timezone)

Getting Started:
  sup init                       Create an empty store
  sup add \"Prepare standup\"      Add a new item
  sup list                       List all items with their indices
  sup view 0                     Show the newest item

Learn more:
  sup <COMMAND> --help           Show detailed help for a command";

#[derive(Parser)]
#[command(name = "sup")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Minimal command-line standup task list stored in a single YAML file")]
#[command(
    long_about = "standup is a minimal task-list manager for daily standups. The whole list \
lives in one human-readable YAML file, so it is easy to grep, diff, and sync like any other \
dotfile.

Items carry a title plus an optional description, priority, and due date. They are addressed \
by their zero-based list position: new items are prepended, so index 0 is always the newest. \
Every command loads the list fresh from the file and mutating commands rewrite it in full."
)]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Path to the store file (default: ~/.standup.yaml)
    #[arg(short, long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the store path, whether it exists, and the item count
    #[command(after_help = "Examples:\n  \
sup info                        Inspect the default store\n  \
sup -f ./team.yaml info         Inspect an alternate store")]
    Info,

    /// Initialize the store with an empty list
    #[command(
        long_about = "Initialize the store with an empty list.\n\n\
Overwrites the store file if it already exists; any current items are lost. \
Running commands against a missing store also works (it reads as empty), so \
init is only needed to reset an existing list or to create the file eagerly.",
        after_help = "Examples:\n  \
sup init                        Reset the default store\n  \
sup -f ./team.yaml init         Create an alternate store"
    )]
    Init,

    /// List all items with their indices
    #[command(after_help = "Examples:\n  \
sup list                        Show every item, newest first")]
    List,

    /// Add a new item to the front of the list
    #[command(
        long_about = "Add a new item to the front of the list.\n\n\
The new item always lands at index 0; existing items shift down by one. Only \
the title is required.",
        after_help = "Examples:\n  \
sup add \"Prepare standup\"\n  \
sup add \"Review PR #42\" --description \"blocking the release\"\n  \
sup add \"Deploy fix\" --priority 3 --due-by \"2024/01/15 09:00:00\"\n  \
sup add \"Tidy backlog\" --priority low"
    )]
    Add {
        /// Title of the item
        title: String,

        /// Longer free-form description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Priority: 1/2/3 or low/normal/high
        #[arg(long, value_name = "PRIORITY")]
        priority: Option<Priority>,

        /// Due date-time: YYYY/MM/DD HH:MM:SS
        #[arg(long, value_name = "DATETIME", value_parser = parse_datetime)]
        due_by: Option<NaiveDateTime>,
    },

    /// Show the single item at the given index
    #[command(after_help = "Examples:\n  \
sup view 0                      Show the newest item\n  \
sup view 2                      Show the item at index 2")]
    View {
        /// Zero-based index of the item
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        index: usize,
    },

    /// Update fields of the item at the given index
    #[command(
        long_about = "Update fields of the item at the given index.\n\n\
Only the fields you pass change. Each optional field has a matching \
--clear-* flag that resets it to unset; setting and clearing the same field \
in one call is rejected. Clearing a field that is already unset is a no-op.",
        after_help = "Examples:\n  \
sup update 0 --title \"New title\"\n  \
sup update 1 --priority high --due-by \"2024/01/15 09:00:00\"\n  \
sup update 1 --clear-priority\n  \
sup update 2 --description \"more detail\" --clear-due-by"
    )]
    Update {
        /// Zero-based index of the item
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        index: usize,

        /// New title
        #[arg(long, value_name = "TEXT")]
        title: Option<String>,

        /// New description
        #[arg(long, value_name = "TEXT")]
        description: Option<String>,

        /// Reset the description to unset
        #[arg(long, conflicts_with = "description")]
        clear_description: bool,

        /// New priority: 1/2/3 or low/normal/high
        #[arg(long, value_name = "PRIORITY")]
        priority: Option<Priority>,

        /// Reset the priority to unset
        #[arg(long, conflicts_with = "priority")]
        clear_priority: bool,

        /// New due date-time: YYYY/MM/DD HH:MM:SS
        #[arg(long, value_name = "DATETIME", value_parser = parse_datetime)]
        due_by: Option<NaiveDateTime>,

        /// Reset the due date-time to unset
        #[arg(long, conflicts_with = "due_by")]
        clear_due_by: bool,
    },

    /// Delete the item at the given index
    #[command(
        long_about = "Delete the item at the given index.\n\n\
Items after the removed one shift down by one, so their indices change.",
        after_help = "Examples:\n  \
sup remove 0                    Delete the newest item"
    )]
    Remove {
        /// Zero-based index of the item
        #[arg(value_parser = parse_index, allow_hyphen_values = true)]
        index: usize,
    },

    /// Generate a shell completion script on stdout
    #[command(after_help = "Examples:\n  \
sup completions zsh > ~/.zfunc/_sup\n  \
sup completions bash > ~/.local/share/bash-completion/completions/sup")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Parses a zero-based item index.
///
/// Negative and non-numeric input both report "invalid index" at parse time,
/// before any command runs.
fn parse_index(s: &str) -> Result<usize, String> {
    s.trim()
        .parse()
        .map_err(|_| format!("invalid index '{s}' (expected a non-negative number)"))
}

/// Parses a due date-time in the fixed store format.
fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    datetime::parse(s).map_err(|_| format!("expected `YYYY/MM/DD HH:MM:SS`, got '{s}'"))
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.file)?;

    match cli.command {
        Commands::Info => commands::info(&config),

        Commands::Init => commands::init(&config),

        Commands::List => commands::list(&config),

        Commands::Add {
            title,
            description,
            priority,
            due_by,
        } => commands::add(
            &config,
            AddArgs {
                title,
                description,
                priority,
                due_by,
            },
        ),

        Commands::View { index } => commands::view(&config, index),

        Commands::Update {
            index,
            title,
            description,
            clear_description,
            priority,
            clear_priority,
            due_by,
            clear_due_by,
        } => commands::update(
            &config,
            UpdateArgs {
                index,
                patch: ItemPatch {
                    title,
                    description: FieldPatch::from_flags(description, clear_description),
                    priority: FieldPatch::from_flags(priority, clear_priority),
                    due_by: FieldPatch::from_flags(due_by, clear_due_by),
                },
            },
        ),

        Commands::Remove { index } => commands::remove(&config, index),

        Commands::Completions { shell } => commands::completions(shell, &mut Cli::command()),
    }
}
