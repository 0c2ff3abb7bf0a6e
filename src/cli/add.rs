//! `errand add` command implementation

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Config;
use crate::task::Category;

#[derive(Args)]
pub struct AddArgs {
    /// Task title
    title: String,

    /// Due date (YYYY-MM-DD, today, tomorrow)
    #[arg(short, long, value_parser = super::parse_due_date)]
    due: Option<NaiveDate>,

    /// Category (personal, work, shopping, fitness, study, finance)
    #[arg(short, long)]
    category: Option<Category>,

    /// Notes (personal tasks)
    #[arg(long)]
    notes: Option<String>,

    /// Project (work tasks)
    #[arg(long)]
    project: Option<String>,

    /// Store name (shopping tasks)
    #[arg(long = "store")]
    store_name: Option<String>,
}

pub fn run(profile: &str, config: &Config, args: AddArgs) -> Result<()> {
    let category = args.category.unwrap_or(config.defaults.category);
    let due = args
        .due
        .unwrap_or_else(|| config.defaults.due_date(Local::now().date_naive()));
    let details = super::details_from_flags(category, args.notes, args.project, args.store_name)?;

    let mut store = super::open_store(profile, config)?;
    let task = store.add_with_details(&args.title, due, category, details)?;

    println!("✓ Added task: {}", task.title);
    println!("  Category: {}", task.category);
    println!("  Due:      {}", super::format_date(task.due_date, &config.display.date_format));
    if let Some((label, value)) = task.details().and_then(|d| d.summary()) {
        println!("  {}: {}", label, value);
    }
    println!("  ID:       {}", task.id());

    Ok(())
}
