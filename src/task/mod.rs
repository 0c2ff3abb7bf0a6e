//! Task model and store
//!
//! - Task fields, categories and the overdue predicate
//! - Ordered task list with add / update / delete / bulk operations
//! - Save-on-mutate persistence into a settings slot

pub mod error;
pub mod model;
pub mod store;

pub use error::{StoreError, ValidationError};
pub use model::{Category, ParseCategoryError, Task, TaskDetails, TaskId};
pub use store::{CategorySection, TaskStore, DEFAULT_SLOT};
