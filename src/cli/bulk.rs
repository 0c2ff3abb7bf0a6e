//! `errand complete-all` and `errand clear-completed` command implementations

use anyhow::Result;
use clap::Args;

use crate::config::Config;

#[derive(Args)]
pub struct ClearArgs {
    /// Print what would be deleted without deleting
    #[arg(long)]
    dry_run: bool,
}

pub fn run_complete_all(profile: &str, config: &Config) -> Result<()> {
    let mut store = super::open_store(profile, config)?;
    let changed = store.mark_all_complete()?;

    if changed == 0 {
        println!("Nothing to complete.");
    } else {
        println!("✓ Marked {} task(s) complete", changed);
    }
    Ok(())
}

pub fn run_clear_completed(profile: &str, config: &Config, args: ClearArgs) -> Result<()> {
    let mut store = super::open_store(profile, config)?;

    if args.dry_run {
        let done: Vec<&str> = store
            .tasks()
            .iter()
            .filter(|t| t.is_completed)
            .map(|t| t.title.as_str())
            .collect();
        if done.is_empty() {
            println!("No completed tasks.");
        } else {
            println!("Would delete {} completed task(s):", done.len());
            for title in done {
                println!("  • {}", title);
            }
        }
        return Ok(());
    }

    let removed = store.clear_completed()?;
    if removed == 0 {
        println!("No completed tasks.");
    } else {
        println!("✓ Deleted {} completed task(s)", removed);
    }
    Ok(())
}
