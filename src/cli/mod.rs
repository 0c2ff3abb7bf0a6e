//! CLI command implementations

pub mod add;
pub mod bulk;
pub mod config;
pub mod definition;
pub mod edit;
pub mod list;
pub mod remove;
pub mod show;
pub mod toggle;

pub use definition::{Cli, Commands};

use anyhow::{bail, Result};
use chrono::{Local, NaiveDate};
use std::fmt::Write;

use crate::config::Config;
use crate::settings::{get_settings_path, FileSettings};
use crate::task::{Category, Task, TaskDetails, TaskStore};

/// Open the task store for `profile`, holding its settings lock until dropped.
pub fn open_store(profile: &str, config: &Config) -> Result<TaskStore<FileSettings>> {
    let path = get_settings_path(profile)?;
    let settings = FileSettings::open(path)?;
    Ok(TaskStore::open_with_key(settings, config.store.key.clone()))
}

/// Shortest id prefix `resolve_task` will match on.
pub const MIN_ID_PREFIX: usize = 4;

/// Resolve by exact id, then exact title, then a unique id prefix of at least
/// [`MIN_ID_PREFIX`] characters.
pub fn resolve_task<'a>(identifier: &str, tasks: &'a [Task]) -> Result<&'a Task> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        bail!("Task identifier cannot be empty");
    }

    // Try exact ID match
    if let Some(task) = tasks.iter().find(|t| t.id().to_string() == identifier) {
        return Ok(task);
    }

    // Try exact title match
    if let Some(task) = tasks.iter().find(|t| t.title.trim() == identifier) {
        return Ok(task);
    }

    // Try ID prefix match, which must be unambiguous
    if identifier.chars().count() >= MIN_ID_PREFIX {
        let needle = identifier.to_lowercase();
        let by_prefix: Vec<&Task> = tasks
            .iter()
            .filter(|t| t.id().to_string().starts_with(&needle))
            .collect();
        match by_prefix.as_slice() {
            [task] => return Ok(*task),
            [] => {}
            matches => bail!(
                "Ambiguous task id '{}' matches {} tasks",
                identifier,
                matches.len()
            ),
        }
    }

    bail!("Task not found: {}", identifier)
}

/// Accepts `YYYY-MM-DD`, `today`, `tomorrow` or `yesterday`.
pub fn parse_due_date(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_due_date_from(s, Local::now().date_naive())
}

fn parse_due_date_from(s: &str, today: NaiveDate) -> std::result::Result<NaiveDate, String> {
    match s.trim().to_lowercase().as_str() {
        "today" => Ok(today),
        "tomorrow" => today.succ_opt().ok_or_else(|| "date out of range".to_string()),
        "yesterday" => today.pred_opt().ok_or_else(|| "date out of range".to_string()),
        other => NaiveDate::parse_from_str(other, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{}', expected YYYY-MM-DD", s)),
    }
}

/// Build a details payload from the per-category flags.
///
/// Returns `Ok(None)` when no flag is given. A flag that belongs to another
/// category is an error.
pub fn details_from_flags(
    category: Category,
    notes: Option<String>,
    project: Option<String>,
    store_name: Option<String>,
) -> Result<Option<TaskDetails>> {
    let (flag, details) = match (notes, project, store_name) {
        (None, None, None) => return Ok(None),
        (Some(notes), None, None) => ("--notes", TaskDetails::Personal { notes: Some(notes) }),
        (None, Some(project), None) => ("--project", TaskDetails::Work {
            project: Some(project),
        }),
        (None, None, Some(store_name)) => ("--store", TaskDetails::Shopping {
            store_name: Some(store_name),
        }),
        _ => bail!("Only one of --notes, --project or --store can be given"),
    };

    if details.category() != category {
        bail!(
            "{} only applies to {} tasks, not {}",
            flag,
            details.category(),
            category
        );
    }
    Ok(Some(details))
}

/// Format with the configured pattern, falling back to ISO dates if the
/// pattern cannot render a plain date.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max <= 3 {
        s.chars().take(max).collect()
    } else {
        let head: String = s.chars().take(max - 3).collect();
        format!("{}...", head)
    }
}
