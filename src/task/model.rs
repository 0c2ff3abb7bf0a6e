//! Task data model

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use super::error::ValidationError;

/// Opaque task identifier, assigned once by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(Uuid);

impl TaskId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a full hyphenated or simple UUID
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    /// First eight hex digits, enough to tell tasks apart in listings
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed set of task categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(alias = "personal")]
    Personal,
    #[serde(alias = "work")]
    Work,
    #[serde(alias = "shopping")]
    Shopping,
    #[serde(alias = "fitness")]
    Fitness,
    #[serde(alias = "study")]
    Study,
    #[serde(alias = "finance")]
    Finance,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Self::Personal,
        Self::Work,
        Self::Shopping,
        Self::Fitness,
        Self::Study,
        Self::Finance,
    ];

    /// Parse category from text, case-insensitive
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "personal" => Some(Self::Personal),
            "work" => Some(Self::Work),
            "shopping" | "shop" => Some(Self::Shopping),
            "fitness" => Some(Self::Fitness),
            "study" => Some(Self::Study),
            "finance" => Some(Self::Finance),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Personal => "Personal",
            Self::Work => "Work",
            Self::Shopping => "Shopping",
            Self::Fitness => "Fitness",
            Self::Study => "Study",
            Self::Finance => "Finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown category '{0}' (expected one of: personal, work, shopping, fitness, study, finance)")]
pub struct ParseCategoryError(String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Extra fields that only make sense for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TaskDetails {
    #[serde(rename_all = "camelCase")]
    Personal { notes: Option<String> },
    #[serde(rename_all = "camelCase")]
    Work { project: Option<String> },
    #[serde(rename_all = "camelCase")]
    Shopping { store_name: Option<String> },
}

impl TaskDetails {
    /// The category this payload belongs to
    pub fn category(&self) -> Category {
        match self {
            Self::Personal { .. } => Category::Personal,
            Self::Work { .. } => Category::Work,
            Self::Shopping { .. } => Category::Shopping,
        }
    }

    /// Label and value for display, if the payload holds anything
    pub fn summary(&self) -> Option<(&'static str, &str)> {
        match self {
            Self::Personal { notes } => notes.as_deref().map(|n| ("Notes", n)),
            Self::Work { project } => project.as_deref().map(|p| ("Project", p)),
            Self::Shopping { store_name } => store_name.as_deref().map(|s| ("Store", s)),
        }
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,

    pub title: String,

    pub due_date: NaiveDate,

    #[serde(default)]
    pub is_completed: bool,

    pub category: Category,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    details: Option<TaskDetails>,
}

impl Task {
    pub(crate) fn new(title: impl Into<String>, due_date: NaiveDate, category: Category) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            due_date,
            is_completed: false,
            category,
            details: None,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn details(&self) -> Option<&TaskDetails> {
        self.details.as_ref()
    }

    /// Attach category-specific details. The payload must match the task's category.
    pub fn set_details(&mut self, details: Option<TaskDetails>) -> Result<(), ValidationError> {
        if let Some(d) = &details {
            if d.category() != self.category {
                return Err(ValidationError::DetailsMismatch {
                    details: d.category(),
                    category: self.category,
                });
            }
        }
        self.details = details;
        Ok(())
    }

    /// Drop details left over from a previous category
    pub(crate) fn normalize_details(&mut self) {
        if self
            .details
            .as_ref()
            .is_some_and(|d| d.category() != self.category)
        {
            self.details = None;
        }
    }

    /// Check if the task is overdue as of today
    pub fn is_overdue(&self) -> bool {
        self.is_overdue_on(Local::now().date_naive())
    }

    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        !self.is_completed && self.due_date < today
    }

    pub fn mark_completed(&mut self) {
        self.is_completed = true;
    }
}
