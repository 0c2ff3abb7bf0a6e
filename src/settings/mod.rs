//! Local key-value settings and app directory layout
//!
//! Tasks are persisted as one JSON value under a fixed key, so the store only
//! needs a small dictionary interface from its backend.

mod error;
mod file;
mod memory;

pub use error::{Result, SettingsError};
pub use file::FileSettings;
pub use memory::MemorySettings;

use anyhow::bail;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_PROFILE: &str = "default";

const APP_DIR_NAME: &str = "errand";
const PROFILES_DIR: &str = "profiles";
const SETTINGS_FILE: &str = "settings.json";

/// Dictionary-like settings storage. Writes are synchronous and overwrite.
pub trait Settings {
    fn get(&self, key: &str) -> Option<&Value>;

    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Returns whether the key was present
    fn remove(&mut self, key: &str) -> Result<bool>;

    fn keys(&self) -> Vec<String>;
}

/// Root directory for config and profiles, created on first use.
pub fn get_app_dir() -> anyhow::Result<PathBuf> {
    #[cfg(target_os = "linux")]
    let dir = dirs::config_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find config directory"))?
        .join(APP_DIR_NAME);

    #[cfg(not(target_os = "linux"))]
    let dir = dirs::home_dir()
        .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
        .join(format!(".{}", APP_DIR_NAME));

    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn get_profile_dir(profile: &str) -> anyhow::Result<PathBuf> {
    validate_profile_name(profile)?;
    let dir = get_app_dir()?.join(PROFILES_DIR).join(profile);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn get_settings_path(profile: &str) -> anyhow::Result<PathBuf> {
    Ok(get_profile_dir(profile)?.join(SETTINGS_FILE))
}

pub fn list_profiles() -> anyhow::Result<Vec<String>> {
    let dir = get_app_dir()?.join(PROFILES_DIR);
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&dir)? {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            if let Some(name) = entry.file_name().to_str() {
                profiles.push(name.to_string());
            }
        }
    }
    profiles.sort();
    Ok(profiles)
}

fn validate_profile_name(profile: &str) -> anyhow::Result<()> {
    if profile.is_empty()
        || profile == "."
        || profile == ".."
        || profile.contains(['/', '\\'])
    {
        bail!("Invalid profile name: '{}'", profile);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    fn set_temp_home(path: &std::path::Path) {
        std::env::set_var("HOME", path);
        std::env::remove_var("XDG_CONFIG_HOME");
    }

    #[test]
    fn test_validate_profile_name() {
        assert!(validate_profile_name("work").is_ok());
        assert!(validate_profile_name("my-profile_2").is_ok());
        assert!(validate_profile_name("").is_err());
        assert!(validate_profile_name("..").is_err());
        assert!(validate_profile_name("a/b").is_err());
        assert!(validate_profile_name("a\\b").is_err());
    }

    #[test]
    #[serial]
    fn test_profile_dirs_are_isolated() -> anyhow::Result<()> {
        let temp = tempdir()?;
        set_temp_home(temp.path());

        let a = get_settings_path("alpha")?;
        let b = get_settings_path("beta")?;
        assert_ne!(a, b);
        assert!(a.starts_with(temp.path()));
        assert!(a.parent().unwrap().exists());
        Ok(())
    }

    #[test]
    #[serial]
    fn test_list_profiles() -> anyhow::Result<()> {
        let temp = tempdir()?;
        set_temp_home(temp.path());

        assert!(list_profiles()?.is_empty());

        get_profile_dir("work")?;
        get_profile_dir(DEFAULT_PROFILE)?;
        assert_eq!(list_profiles()?, vec!["default", "work"]);
        Ok(())
    }
}
