// src/cli.rs
use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::core::config::Config;
use crate::core::install::{bundled_rule_path, install_rule};
use crate::core::store::Store;
use crate::utils::{parse_task_id, print_items};

#[derive(Parser, Debug)]
#[command(name = "agent-checklist", author, version, about, long_about = None)]
pub struct Args {
    /// Checklist database file (defaults to checklist.sqlite in the current directory)
    #[arg(long, global = true, env = "AGENT_CHECKLIST_DB")]
    pub database: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new task to the checklist
    Add {
        /// Text of the task
        task: String,
    },
    /// List all tasks in the checklist
    List,
    /// Mark a task as completed
    Complete {
        /// ID of the task, as shown by `list`
        id: String,
    },
    /// Remove a task from the checklist
    Remove {
        /// ID of the task, as shown by `list`
        id: String,
    },
    /// Install the agent-checklist rule into .cursor/rules/ of the current directory
    InstallRule,
}

/// Resolves configuration, opens the store and runs one command against the
/// process's stdout and stderr.
///
/// # Errors
///
/// This function may return an error if:
/// * The current directory cannot be determined
/// * A config file exists but is unreadable or invalid
/// * The store cannot be opened or its schema cannot be created
/// * Writing to the console fails
#[inline]
pub fn run(args: Args) -> Result<()> {
    let cwd = env::current_dir().context("Failed to determine the current directory")?;
    let config = Config::resolve(&cwd, args.database.as_deref())?;
    let store = Store::open(&config.database).with_context(|| {
        format!("Failed to open checklist store: {}", config.database.display())
    })?;

    let stdout = io::stdout();
    let stderr = io::stderr();
    dispatch(
        &args.command,
        &store,
        &config,
        &cwd,
        &mut stdout.lock(),
        &mut stderr.lock(),
    )?;
    Ok(())
}

/// Runs a single command. Failures of the command itself are reported on
/// `err` and swallowed; only console write failures are returned.
///
/// # Errors
///
/// Returns an error if writing to `out` or `err` fails.
#[inline]
pub fn dispatch(
    command: &Command,
    store: &Store,
    config: &Config,
    cwd: &Path,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> io::Result<()> {
    match command {
        Command::Add { task } => match store.insert(task) {
            Ok(_) => writeln!(out, "Added task: \"{task}\""),
            Err(e) => writeln!(err, "Failed to add task: {e}"),
        },
        Command::List => match store.list_all() {
            Ok(items) => print_items(out, &items),
            Err(e) => writeln!(err, "Failed to list tasks: {e}"),
        },
        Command::Complete { id } => {
            let Some(id) = parse_task_id(id) else {
                return writeln!(err, "Invalid task ID.");
            };
            match store.set_completed(id) {
                Ok(_) => writeln!(out, "Marked task {id} as completed."),
                Err(e) => writeln!(err, "Failed to complete task: {e}"),
            }
        }
        Command::Remove { id } => {
            let Some(id) = parse_task_id(id) else {
                return writeln!(err, "Invalid task ID.");
            };
            match store.delete(id) {
                Ok(_) => writeln!(out, "Removed task {id}."),
                Err(e) => writeln!(err, "Failed to remove task: {e}"),
            }
        }
        Command::InstallRule => {
            let source = match &config.rule_source {
                Some(path) => Ok(path.clone()),
                None => bundled_rule_path(),
            };
            match source.and_then(|source| install_rule(&source, cwd)) {
                Ok(dest) => writeln!(out, "Installed rule to {}", dest.display()),
                Err(e) => writeln!(err, "Failed to install rule: {e}"),
            }
        }
    }
}
