//! Integration tests for config and profile wiring
//!
//! These tests verify that config.toml settings reach the store the CLI
//! opens: the profile directory, and the settings key tasks are saved under.

use chrono::NaiveDate;
use errand::cli::open_store;
use errand::config::{load_config, save_config, Config};
use errand::settings::{get_settings_path, list_profiles, FileSettings, Settings};
use errand::task::Category;
use serial_test::serial;

fn setup_temp_home() -> tempfile::TempDir {
    let temp = tempfile::TempDir::new().unwrap();
    std::env::set_var("HOME", temp.path());
    std::env::remove_var("XDG_CONFIG_HOME");
    temp
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
#[serial]
fn test_missing_config_loads_defaults() {
    let _temp = setup_temp_home();

    assert!(load_config().unwrap().is_none());
    let config = Config::load().unwrap();
    assert_eq!(config.default_profile, "default");
    assert_eq!(config.store.key, "savedTasks");
}

#[test]
#[serial]
fn test_saved_config_roundtrips() {
    let _temp = setup_temp_home();

    let mut config = Config::default();
    config.default_profile = "home".to_string();
    config.defaults.category = Category::Study;
    save_config(&config).unwrap();

    let loaded = load_config().unwrap().unwrap();
    assert_eq!(loaded.default_profile, "home");
    assert_eq!(loaded.defaults.category, Category::Study);
}

#[test]
#[serial]
fn test_store_key_from_config_is_used() {
    let _temp = setup_temp_home();

    let mut config = Config::default();
    config.store.key = "tasksV2".to_string();

    {
        let mut store = open_store("work", &config).unwrap();
        store
            .add("Quarterly review", date(2025, 3, 31), Category::Work)
            .unwrap();
    }

    let settings = FileSettings::open(get_settings_path("work").unwrap()).unwrap();
    assert!(settings.get("tasksV2").is_some());
    assert!(settings.get("savedTasks").is_none());
}

#[test]
#[serial]
fn test_profiles_do_not_share_tasks() {
    let _temp = setup_temp_home();
    let config = Config::default();

    {
        let mut home = open_store("home", &config).unwrap();
        home.add("Water plants", date(2025, 1, 1), Category::Personal)
            .unwrap();
    }

    let work = open_store("work", &config).unwrap();
    assert!(work.is_empty());
    drop(work);

    let home = open_store("home", &config).unwrap();
    assert_eq!(home.len(), 1);
    drop(home);

    assert_eq!(list_profiles().unwrap(), vec!["home", "work"]);
}

#[test]
#[serial]
fn test_invalid_profile_name_is_rejected() {
    let _temp = setup_temp_home();
    assert!(open_store("../escape", &Config::default()).is_err());
}
