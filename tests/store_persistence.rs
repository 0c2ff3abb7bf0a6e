//! Integration tests for the task store on top of file-backed settings
//!
//! Each test reopens the settings file the way a fresh process would, so the
//! store has to survive a full save / load cycle.

use chrono::NaiveDate;
use errand::settings::{FileSettings, Settings, SettingsError};
use errand::task::{Category, TaskDetails, TaskStore, DEFAULT_SLOT};
use std::fs;
use std::path::Path;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn open(path: &Path) -> TaskStore<FileSettings> {
    TaskStore::open(FileSettings::open(path).unwrap())
}

#[test]
fn test_reload_reproduces_tasks_in_order() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    let expected = {
        let mut store = open(&path);
        store
            .add("Buy Milk", date(2025, 1, 1), Category::Shopping)
            .unwrap();
        let report = store
            .add("Finish Report", date(2025, 1, 3), Category::Work)
            .unwrap();
        store
            .add("Pay Bills", date(2025, 1, 2), Category::Finance)
            .unwrap();
        store.toggle_completion(report.id()).unwrap();
        store.tasks().to_vec()
    };

    let store = open(&path);
    assert_eq!(store.tasks(), expected.as_slice());
    assert_eq!(
        store.completed(Category::Work)[0].title,
        "Finish Report"
    );
}

#[test]
fn test_details_survive_reload() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    let id = {
        let mut store = open(&path);
        store
            .add_with_details(
                "Groceries",
                date(2025, 2, 1),
                Category::Shopping,
                Some(TaskDetails::Shopping {
                    store_name: Some("Farmers market".to_string()),
                }),
            )
            .unwrap()
            .id()
    };

    let store = open(&path);
    let task = store.get(id).unwrap();
    assert_eq!(
        task.details(),
        Some(&TaskDetails::Shopping {
            store_name: Some("Farmers market".to_string())
        })
    );
}

#[test]
fn test_snapshot_layout_on_disk() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    {
        let mut store = open(&path);
        store
            .add("Run 5k", date(2025, 4, 1), Category::Fitness)
            .unwrap();
    }

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let records = raw[DEFAULT_SLOT].as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["title"], "Run 5k");
    assert_eq!(records[0]["dueDate"], "2025-04-01");
    assert_eq!(records[0]["isCompleted"], false);
    assert_eq!(records[0]["category"], "Fitness");
    assert!(records[0]["id"].as_str().unwrap().len() == 36);
    assert!(records[0].get("details").is_none());
}

#[test]
fn test_undecodable_slot_starts_empty_and_is_kept() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");
    fs::write(
        &path,
        r#"{ "savedTasks": [{ "title": "missing everything else" }], "theme": "dark" }"#,
    )
    .unwrap();

    {
        let mut store = open(&path);
        assert!(store.is_empty());
        store
            .add("Fresh start", date(2025, 1, 1), Category::Personal)
            .unwrap();
    }

    let settings = FileSettings::open(&path).unwrap();
    assert_eq!(
        settings.get("savedTasks.corrupt").unwrap()[0]["title"],
        "missing everything else"
    );
    // unrelated keys are untouched
    assert_eq!(settings.get("theme").unwrap(), "dark");

    let store = TaskStore::open(settings);
    assert_eq!(store.len(), 1);
    assert_eq!(store.tasks()[0].title, "Fresh start");
}

#[test]
fn test_custom_slot_is_independent() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    {
        let mut home = open(&path);
        home.add("Home task", date(2025, 1, 1), Category::Personal)
            .unwrap();
        let mut work = TaskStore::open_with_key(home.into_settings(), "workTasks");
        assert!(work.is_empty());
        work.add("Work task", date(2025, 1, 1), Category::Work)
            .unwrap();
    }

    let settings = FileSettings::open(&path).unwrap();
    let home = TaskStore::open_with_key(settings, DEFAULT_SLOT);
    assert_eq!(home.tasks()[0].title, "Home task");
    let work = TaskStore::open_with_key(home.into_settings(), "workTasks");
    assert_eq!(work.tasks()[0].title, "Work task");
}

#[test]
fn test_second_store_on_same_file_is_locked_out() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    let store = open(&path);
    assert!(matches!(
        FileSettings::open(&path),
        Err(SettingsError::Locked(_))
    ));
    drop(store);
    assert!(FileSettings::open(&path).is_ok());
}

#[test]
fn test_mark_all_then_clear_persists_empty_list() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    {
        let mut store = open(&path);
        store.add("Read", date(2025, 1, 1), Category::Study).unwrap();
        store.add("Gym", date(2025, 1, 1), Category::Fitness).unwrap();
        store.mark_all_complete().unwrap();
        store.clear_completed().unwrap();
        assert!(store.is_empty());
    }

    let store = open(&path);
    assert!(store.is_empty());
    assert_eq!(
        store.settings().get(DEFAULT_SLOT),
        Some(&serde_json::json!([]))
    );
}

#[test]
fn test_delete_many_keeps_pre_delete_backup() {
    let temp = tempfile::TempDir::new().unwrap();
    let path = temp.path().join("settings.json");

    let mut store = open(&path);
    let a = store.add("a", date(2025, 1, 1), Category::Work).unwrap();
    store.add("b", date(2025, 1, 2), Category::Work).unwrap();
    let c = store.add("c", date(2025, 1, 3), Category::Work).unwrap();
    let before = fs::read_to_string(&path).unwrap();

    assert_eq!(store.delete_many([a.id(), c.id()]).unwrap(), 2);
    drop(store);

    // one rewrite, so the backup still holds all three tasks
    let backup = fs::read_to_string(path.with_extension("json.bak")).unwrap();
    assert_eq!(backup, before);

    let store = open(&path);
    let titles: Vec<&str> = store.tasks().iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["b"]);
}
