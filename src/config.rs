//! User configuration management

use anyhow::{Context, Result};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::settings::{get_app_dir, DEFAULT_PROFILE};
use crate::task::{Category, DEFAULT_SLOT};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_profile")]
    pub default_profile: String,

    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub defaults: DefaultsConfig,

    #[serde(default)]
    pub display: DisplayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: default_profile(),
            store: StoreConfig::default(),
            defaults: DefaultsConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

fn default_profile() -> String {
    DEFAULT_PROFILE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Settings key the task list is written under
    #[serde(default = "default_store_key")]
    pub key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key: default_store_key(),
        }
    }
}

fn default_store_key() -> String {
    DEFAULT_SLOT.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub category: Category,

    /// Days from today used when `add` gets no due date
    #[serde(default)]
    pub due_in_days: i64,
}

impl DefaultsConfig {
    pub fn due_date(&self, today: NaiveDate) -> NaiveDate {
        Duration::try_days(self.due_in_days)
            .and_then(|offset| today.checked_add_signed(offset))
            .unwrap_or(today)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_date_format")]
    pub date_format: String,

    #[serde(default = "default_true")]
    pub show_completed: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: default_date_format(),
            show_completed: true,
        }
    }
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_true() -> bool {
    true
}

pub fn config_path() -> Result<PathBuf> {
    Ok(get_app_dir()?.join("config.toml"))
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(load_config()?.unwrap_or_default())
    }
}

pub fn load_config() -> Result<Option<Config>> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let config: Config =
        toml::from_str(&content).with_context(|| format!("Invalid config at {:?}", path))?;
    Ok(Some(config))
}

pub fn save_config(config: &Config) -> Result<()> {
    let path = config_path()?;
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}
