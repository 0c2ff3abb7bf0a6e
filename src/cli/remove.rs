//! `errand rm` command implementation

use anyhow::{bail, Result};
use clap::Args;
use std::collections::HashSet;

use crate::config::Config;
use crate::task::TaskId;

#[derive(Args)]
pub struct RemoveArgs {
    /// Task IDs, ID prefixes or titles
    #[arg(required_unless_present = "index")]
    tasks: Vec<String>,

    /// Positions as shown by `errand list` (1-based, raw store order)
    #[arg(short, long, num_args = 1.., conflicts_with = "tasks")]
    index: Vec<usize>,
}

pub fn run(profile: &str, config: &Config, args: RemoveArgs) -> Result<()> {
    let mut store = super::open_store(profile, config)?;

    if !args.index.is_empty() {
        if args.index.contains(&0) {
            bail!("Positions start at 1");
        }
        let removed = store.delete_at(args.index.iter().map(|i| i - 1))?;
        if removed < args.index.len() {
            println!(
                "Ignored {} duplicate or out-of-range position(s)",
                args.index.len() - removed
            );
        }
        println!("✓ Deleted {} task(s)", removed);
        return Ok(());
    }

    // Resolve everything first so a typo deletes nothing
    let mut targets: Vec<(TaskId, String)> = args
        .tasks
        .iter()
        .map(|ident| {
            super::resolve_task(ident, store.tasks()).map(|t| (t.id(), t.title.clone()))
        })
        .collect::<Result<_>>()?;
    let mut seen = HashSet::new();
    targets.retain(|(id, _)| seen.insert(*id));

    store.delete_many(targets.iter().map(|(id, _)| *id))?;
    for (_, title) in &targets {
        println!("✓ Deleted: {}", title);
    }
    Ok(())
}
