//! Settings backed by a single JSON object file
//!
//! The whole map is rewritten on every `set`. Writes go through a temp file in
//! the same directory and are renamed into place, so a crash mid-write leaves
//! the previous contents. The prior file is also kept as `<name>.bak`.
//!
//! An exclusive lock on `<name>.lock` is held for as long as the handle lives,
//! which serializes read-modify-write across errand processes.

use fs2::FileExt;
use serde_json::{Map, Value};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{Result, Settings, SettingsError};

pub struct FileSettings {
    path: PathBuf,
    values: Map<String, Value>,
    _lock: File,
}

impl FileSettings {
    /// Open (or create) the settings file at `path`.
    ///
    /// An unreadable file is moved aside to `<name>.corrupt` and the settings
    /// start empty, so the next write cannot clobber it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let lock = acquire_lock(&path)?;
        let values = read_values(&path)?;
        debug!("Opened settings {} ({} keys)", path.display(), values.len());

        Ok(Self {
            path,
            values,
            _lock: lock,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if self.path.exists() {
            let backup_path = self.path.with_extension("json.bak");
            if let Err(e) = fs::copy(&self.path, &backup_path) {
                warn!("Failed to create backup: {}", e);
            }
        }

        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let content = serde_json::to_string_pretty(&self.values)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!("Wrote settings {}", self.path.display());
        Ok(())
    }
}

impl Settings for FileSettings {
    fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        self.flush()
    }

    fn remove(&mut self, key: &str) -> Result<bool> {
        if self.values.remove(key).is_none() {
            return Ok(false);
        }
        self.flush()?;
        Ok(true)
    }

    fn keys(&self) -> Vec<String> {
        self.values.keys().cloned().collect()
    }
}

fn acquire_lock(path: &Path) -> Result<File> {
    let lock_path = path.with_extension("lock");
    let file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(&lock_path)?;

    match file.try_lock_exclusive() {
        Ok(()) => Ok(file),
        Err(e) if e.raw_os_error() == fs2::lock_contended_error().raw_os_error() => {
            Err(SettingsError::Locked(path.to_path_buf()))
        }
        Err(e) => Err(e.into()),
    }
}

fn read_values(path: &Path) -> Result<Map<String, Value>> {
    if !path.exists() {
        return Ok(Map::new());
    }

    // Raw bytes, so invalid UTF-8 takes the corrupt-file path too
    let content = fs::read(path)?;
    if content.iter().all(u8::is_ascii_whitespace) {
        return Ok(Map::new());
    }

    match serde_json::from_slice::<Value>(&content) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) | Err(_) => {
            let corrupt_path = path.with_extension("json.corrupt");
            warn!(
                "Settings file {} is unreadable, moving it to {}",
                path.display(),
                corrupt_path.display()
            );
            fs::rename(path, &corrupt_path)?;
            Ok(Map::new())
        }
    }
}
