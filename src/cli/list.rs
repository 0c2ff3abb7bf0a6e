//! `errand list` command implementation

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use serde::Serialize;

use crate::config::Config;
use crate::task::{Category, Task, TaskDetails};

const TABLE_COL_TITLE: usize = 32;
const TABLE_COL_DUE: usize = 12;

#[derive(Args, Default)]
pub struct ListArgs {
    /// Only show this category
    #[arg(short, long)]
    category: Option<Category>,

    /// Only show pending tasks
    #[arg(long, conflicts_with = "completed")]
    pending: bool,

    /// Only show completed tasks
    #[arg(long)]
    completed: bool,

    /// Only show overdue tasks
    #[arg(long, conflicts_with = "completed")]
    overdue: bool,

    /// Show pending and completed tasks regardless of `display.show_completed`
    #[arg(short, long, conflicts_with_all = ["pending", "completed", "overdue"])]
    all: bool,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct TaskJson<'a> {
    position: usize,
    id: String,
    title: &'a str,
    due_date: NaiveDate,
    is_completed: bool,
    category: Category,
    overdue: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a TaskDetails>,
}

/// Which tasks of a category get printed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Filter {
    pending: bool,
    completed: bool,
    overdue_only: bool,
}

impl Filter {
    fn from_args(args: &ListArgs, config: &Config) -> Self {
        if args.pending || args.overdue {
            Self {
                pending: true,
                completed: false,
                overdue_only: args.overdue,
            }
        } else if args.completed {
            Self {
                pending: false,
                completed: true,
                overdue_only: false,
            }
        } else {
            Self {
                pending: true,
                completed: args.all || config.display.show_completed,
                overdue_only: false,
            }
        }
    }

    fn keep(&self, task: &Task, today: NaiveDate) -> bool {
        if self.overdue_only && !task.is_overdue_on(today) {
            return false;
        }
        if task.is_completed {
            self.completed
        } else {
            self.pending
        }
    }
}

/// One listing row. `position` is the 1-based raw store position that
/// `errand rm --index` accepts.
fn print_task_row(position: usize, task: &Task, today: NaiveDate, date_format: &str) {
    let check = if task.is_completed { "x" } else { " " };
    let title = super::truncate(&task.title, TABLE_COL_TITLE);
    let due = super::format_date(task.due_date, date_format);
    let overdue = if task.is_overdue_on(today) {
        "overdue"
    } else {
        ""
    };
    println!(
        "  #{:<3} [{}] {:<width_title$} {:<width_due$} {:<8} {}",
        position,
        check,
        title,
        due,
        overdue,
        task.id().short(),
        width_title = TABLE_COL_TITLE,
        width_due = TABLE_COL_DUE
    );
}

pub fn run(profile: &str, config: &Config, args: ListArgs) -> Result<()> {
    let store = super::open_store(profile, config)?;
    let today = Local::now().date_naive();
    let filter = Filter::from_args(&args, config);

    let categories: Vec<Category> = match args.category {
        Some(c) => vec![c],
        None => Category::ALL.to_vec(),
    };

    if args.json {
        let tasks: Vec<TaskJson> = store
            .tasks()
            .iter()
            .enumerate()
            .filter(|(_, t)| categories.contains(&t.category) && filter.keep(t, today))
            .map(|(i, t)| TaskJson {
                position: i + 1,
                id: t.id().to_string(),
                title: &t.title,
                due_date: t.due_date,
                is_completed: t.is_completed,
                category: t.category,
                overdue: t.is_overdue_on(today),
                details: t.details(),
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&tasks)?);
        return Ok(());
    }

    if store.is_empty() {
        println!("No tasks in profile '{}'.", profile);
        println!("Add one with: errand add \"<title>\"");
        return Ok(());
    }

    let mut shown = 0;
    for section in store.sections() {
        if !categories.contains(&section.category) {
            continue;
        }

        let rows: Vec<&Task> = section
            .pending
            .iter()
            .chain(section.completed.iter())
            .copied()
            .filter(|t| filter.keep(t, today))
            .collect();
        if rows.is_empty() {
            continue;
        }

        if shown > 0 {
            println!();
        }
        println!(
            "{} ({} pending, {} completed)",
            section.category,
            section.pending.len(),
            section.completed.len()
        );
        for task in rows {
            let position = store.position(task.id()).map_or(0, |p| p + 1);
            print_task_row(position, task, today, &config.display.date_format);
            shown += 1;
        }
    }

    if shown == 0 {
        println!("No matching tasks.");
    } else {
        println!("\nShowing {} of {} tasks", shown, store.len());
    }

    Ok(())
}
