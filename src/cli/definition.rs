//! Top-level CLI definition

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use super::add::AddArgs;
use super::bulk::ClearArgs;
use super::config::ConfigCommands;
use super::edit::EditArgs;
use super::list::ListArgs;
use super::remove::RemoveArgs;
use super::show::ShowArgs;
use super::toggle::TaskRefArgs;

#[derive(Parser)]
#[command(name = "errand")]
#[command(version, about = "Personal task tracker with categories and due dates")]
pub struct Cli {
    /// Profile to use (defaults to `default_profile` from config.toml)
    #[arg(short, long, global = true, env = "ERRAND_PROFILE")]
    pub profile: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    Add(AddArgs),

    /// List tasks, grouped by category
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show task details
    Show(ShowArgs),

    /// Edit a task's title, due date, category or details
    Edit(EditArgs),

    /// Flip a task between pending and completed
    Toggle(TaskRefArgs),

    /// Mark a task as completed
    Done(TaskRefArgs),

    /// Delete tasks by id/title or by list position
    #[command(alias = "remove")]
    Rm(RemoveArgs),

    /// Mark every task as completed
    CompleteAll,

    /// Delete every completed task
    ClearCompleted(ClearArgs),

    /// Inspect or create the config file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell to generate completions for
        shell: Shell,
    },
}
