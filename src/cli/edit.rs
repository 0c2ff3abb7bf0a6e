//! `errand edit` command implementation

use anyhow::{bail, Result};
use chrono::NaiveDate;
use clap::Args;

use crate::config::Config;
use crate::task::Category;

#[derive(Args)]
pub struct EditArgs {
    /// Task ID, ID prefix or title
    task: String,

    /// New title
    #[arg(short, long)]
    title: Option<String>,

    /// New due date (YYYY-MM-DD, today, tomorrow)
    #[arg(short, long, value_parser = super::parse_due_date)]
    due: Option<NaiveDate>,

    /// New category; details from the old category are dropped
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

    /// Remove category details
    #[arg(long, conflicts_with_all = ["notes", "project", "store_name"])]
    clear_details: bool,
}

impl EditArgs {
    fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.due.is_none()
            && self.category.is_none()
            && self.notes.is_none()
            && self.project.is_none()
            && self.store_name.is_none()
            && !self.clear_details
    }
}

pub fn run(profile: &str, config: &Config, args: EditArgs) -> Result<()> {
    if args.is_empty() {
        bail!("Nothing to change. Pass --title, --due, --category or a details flag.");
    }

    let mut store = super::open_store(profile, config)?;
    let mut task = super::resolve_task(&args.task, store.tasks())?.clone();

    if let Some(title) = args.title {
        task.title = title;
    }
    if let Some(due) = args.due {
        task.due_date = due;
    }
    if let Some(category) = args.category {
        task.category = category;
    }

    if args.clear_details {
        task.set_details(None)?;
    } else if let Some(details) =
        super::details_from_flags(task.category, args.notes, args.project, args.store_name)?
    {
        task.set_details(Some(details))?;
    }

    store.update(task.clone())?;

    println!("✓ Updated task: {}", task.title);
    println!("  Category: {}", task.category);
    println!(
        "  Due:      {}",
        super::format_date(task.due_date, &config.display.date_format)
    );
    Ok(())
}
