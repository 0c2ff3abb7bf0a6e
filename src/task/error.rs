use thiserror::Error;

use super::model::Category;
use crate::settings::SettingsError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task title cannot be empty.")]
    EmptyTitle,

    #[error("{details} details cannot be attached to a {category} task.")]
    DetailsMismatch {
        details: Category,
        category: Category,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to encode tasks: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Failed to save tasks: {0}")]
    Settings(#[from] SettingsError),
}

impl StoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, StoreError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
