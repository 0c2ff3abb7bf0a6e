//! Errand library - task model, task store and settings persistence
//!
//! The CLI in `main.rs` is a thin layer over [`task::TaskStore`].

pub mod cli;
pub mod config;
pub mod settings;
pub mod task;
