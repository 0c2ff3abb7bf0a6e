//! `errand show` command implementation

use anyhow::Result;
use chrono::Local;
use clap::Args;

use crate::config::Config;

#[derive(Args)]
pub struct ShowArgs {
    /// Task ID, ID prefix or title
    task: String,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

pub fn run(profile: &str, config: &Config, args: ShowArgs) -> Result<()> {
    let store = super::open_store(profile, config)?;
    let task = super::resolve_task(&args.task, store.tasks())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(task)?);
        return Ok(());
    }

    let status = if task.is_completed {
        "completed"
    } else {
        "pending"
    };
    let overdue = if task.is_overdue_on(Local::now().date_naive()) {
        " (overdue)"
    } else {
        ""
    };

    println!("{}", task.title);
    println!("  ID:       {}", task.id());
    println!("  Category: {}", task.category);
    println!("  Status:   {}", status);
    println!(
        "  Due:      {}{}",
        super::format_date(task.due_date, &config.display.date_format),
        overdue
    );
    if let Some((label, value)) = task.details().and_then(|d| d.summary()) {
        println!("  {}: {}", label, value);
    }
    if let Some(position) = store.position(task.id()) {
        println!("  Position: #{}", position + 1);
    }

    Ok(())
}
