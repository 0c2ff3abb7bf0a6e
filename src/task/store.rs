//! Ordered task list persisted to a settings slot
//!
//! Every mutating method changes the in-memory list first and then writes the
//! whole list back to the slot. Reads never touch the backend.

use chrono::{Local, NaiveDate};
use std::collections::{BTreeSet, HashSet};
use tracing::{debug, warn};

use super::error::{Result, ValidationError};
use super::model::{Category, Task, TaskDetails, TaskId};
use crate::settings::Settings;

/// Settings key the task list is stored under unless configured otherwise
pub const DEFAULT_SLOT: &str = "savedTasks";

/// Tasks of one category split by completion, for sectioned listings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySection<'a> {
    pub category: Category,
    pub pending: Vec<&'a Task>,
    pub completed: Vec<&'a Task>,
}

pub struct TaskStore<S: Settings> {
    settings: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: Settings> TaskStore<S> {
    /// Open the store on the default slot
    pub fn open(settings: S) -> Self {
        Self::open_with_key(settings, DEFAULT_SLOT)
    }

    /// Open the store on `key`. A missing or undecodable slot yields an empty store.
    pub fn open_with_key(mut settings: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let tasks = load_tasks(&mut settings, &key);
        Self {
            settings,
            key,
            tasks,
        }
    }

    /// Discard in-memory state and read the slot again
    pub fn reload(&mut self) {
        self.tasks = load_tasks(&mut self.settings, &self.key);
    }

    /// Write the current list to the slot
    pub fn save(&mut self) -> Result<()> {
        let value = serde_json::to_value(&self.tasks)?;
        self.settings.set(&self.key, value)?;
        debug!("Saved {} tasks to '{}'", self.tasks.len(), self.key);
        Ok(())
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn into_settings(self) -> S {
        self.settings
    }

    /// All tasks in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Position of a task in insertion order
    pub fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id() == id)
    }

    pub fn add(&mut self, title: &str, due_date: NaiveDate, category: Category) -> Result<Task> {
        self.add_with_details(title, due_date, category, None)
    }

    /// Append a new incomplete task. The title must not be blank and the
    /// details, if any, must belong to `category`.
    pub fn add_with_details(
        &mut self,
        title: &str,
        due_date: NaiveDate,
        category: Category,
        details: Option<TaskDetails>,
    ) -> Result<Task> {
        validate_title(title)?;

        let mut task = Task::new(title, due_date, category);
        task.set_details(details)?;

        self.tasks.push(task.clone());
        debug!("Added task {} ({})", task.id(), category);
        self.save()?;
        Ok(task)
    }

    /// Replace the stored task with the same id. Returns false if there is none.
    pub fn update(&mut self, task: Task) -> Result<bool> {
        validate_title(&task.title)?;

        let mut task = task;
        task.normalize_details();

        let found = match self.tasks.iter_mut().find(|t| t.id() == task.id()) {
            Some(slot) => {
                *slot = task;
                true
            }
            None => {
                debug!("Update skipped, no task {}", task.id());
                false
            }
        };

        self.save()?;
        Ok(found)
    }

    /// Remove the task with `id`. Returns false if there is none.
    pub fn delete(&mut self, id: TaskId) -> Result<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != id);
        let removed = self.tasks.len() != before;

        self.save()?;
        Ok(removed)
    }

    /// Remove every task whose id is in `ids` and save once.
    /// Unknown ids are ignored. Returns the number removed.
    pub fn delete_many(&mut self, ids: impl IntoIterator<Item = TaskId>) -> Result<usize> {
        let ids: HashSet<TaskId> = ids.into_iter().collect();
        let before = self.tasks.len();
        self.tasks.retain(|t| !ids.contains(&t.id()));
        let removed = before - self.tasks.len();

        self.save()?;
        Ok(removed)
    }

    /// Remove tasks by position in insertion order.
    ///
    /// Positions refer to `tasks()`, never to a filtered view. Out-of-range
    /// and repeated positions are ignored. Returns the number removed.
    pub fn delete_at(&mut self, positions: impl IntoIterator<Item = usize>) -> Result<usize> {
        let positions: BTreeSet<usize> = positions
            .into_iter()
            .filter(|&i| i < self.tasks.len())
            .collect();

        for &i in positions.iter().rev() {
            self.tasks.remove(i);
        }

        self.save()?;
        Ok(positions.len())
    }

    /// Flip completion. Returns the new state, or None if there is no such task.
    pub fn toggle_completion(&mut self, id: TaskId) -> Result<Option<bool>> {
        let state = self.tasks.iter_mut().find(|t| t.id() == id).map(|t| {
            t.is_completed = !t.is_completed;
            t.is_completed
        });

        self.save()?;
        Ok(state)
    }

    /// Mark one task complete. Returns false if there is none.
    pub fn mark_completed(&mut self, id: TaskId) -> Result<bool> {
        let found = match self.tasks.iter_mut().find(|t| t.id() == id) {
            Some(task) => {
                task.mark_completed();
                true
            }
            None => false,
        };

        self.save()?;
        Ok(found)
    }

    /// Mark every task complete, saving once. Returns how many changed.
    pub fn mark_all_complete(&mut self) -> Result<usize> {
        let mut changed = 0;
        for task in self.tasks.iter_mut().filter(|t| !t.is_completed) {
            task.mark_completed();
            changed += 1;
        }

        self.save()?;
        Ok(changed)
    }

    /// Remove every completed task. Returns how many were removed.
    pub fn clear_completed(&mut self) -> Result<usize> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.is_completed);
        let removed = before - self.tasks.len();

        self.save()?;
        Ok(removed)
    }

    pub fn pending(&self, category: Category) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| !t.is_completed && t.category == category)
            .collect()
    }

    pub fn completed(&self, category: Category) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_completed && t.category == category)
            .collect()
    }

    pub fn overdue(&self) -> Vec<&Task> {
        self.overdue_on(Local::now().date_naive())
    }

    pub fn overdue_on(&self, today: NaiveDate) -> Vec<&Task> {
        self.tasks
            .iter()
            .filter(|t| t.is_overdue_on(today))
            .collect()
    }

    /// Non-empty categories in display order
    pub fn sections(&self) -> Vec<CategorySection<'_>> {
        Category::ALL
            .iter()
            .map(|&category| CategorySection {
                category,
                pending: self.pending(category),
                completed: self.completed(category),
            })
            .filter(|s| !s.pending.is_empty() || !s.completed.is_empty())
            .collect()
    }
}

fn validate_title(title: &str) -> std::result::Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(())
}

fn corrupt_key(key: &str) -> String {
    format!("{}.corrupt", key)
}

fn load_tasks<S: Settings>(settings: &mut S, key: &str) -> Vec<Task> {
    let Some(value) = settings.get(key).cloned() else {
        debug!("No saved tasks under '{}'", key);
        return Vec::new();
    };

    match serde_json::from_value::<Vec<Task>>(value.clone()) {
        Ok(tasks) => {
            debug!("Loaded {} tasks from '{}'", tasks.len(), key);
            tasks
        }
        Err(e) => {
            let backup = corrupt_key(key);
            warn!(
                "Saved tasks under '{}' could not be decoded ({}), starting empty; raw value kept under '{}'",
                key, e, backup
            );
            if let Err(e) = settings.set(&backup, value) {
                warn!("Failed to back up undecodable tasks: {}", e);
            }
            Vec::new()
        }
    }
}
