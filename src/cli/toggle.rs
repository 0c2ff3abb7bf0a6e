//! `errand toggle` and `errand done` command implementations

use anyhow::{bail, Result};
use clap::Args;

use crate::config::Config;

#[derive(Args)]
pub struct TaskRefArgs {
    /// Task ID, ID prefix or title
    task: String,
}

pub fn run_toggle(profile: &str, config: &Config, args: TaskRefArgs) -> Result<()> {
    let mut store = super::open_store(profile, config)?;
    let task = super::resolve_task(&args.task, store.tasks())?;
    let (id, title) = (task.id(), task.title.clone());

    match store.toggle_completion(id)? {
        Some(true) => println!("✓ Completed: {}", title),
        Some(false) => println!("↺ Reopened: {}", title),
        None => bail!("Task not found: {}", args.task),
    }
    Ok(())
}

pub fn run_done(profile: &str, config: &Config, args: TaskRefArgs) -> Result<()> {
    let mut store = super::open_store(profile, config)?;
    let task = super::resolve_task(&args.task, store.tasks())?;
    let (id, title, was_completed) = (task.id(), task.title.clone(), task.is_completed);

    if was_completed {
        println!("Already completed: {}", title);
        return Ok(());
    }

    if !store.mark_completed(id)? {
        bail!("Task not found: {}", args.task);
    }
    println!("✓ Completed: {}", title);
    Ok(())
}
