//! File-backed [`KeyValueStore`].

use super::atomic_json::{AtomicJsonError, AtomicJsonFile};
use crate::paths::AdminPaths;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tutoradmin_core::error::{AdminError, Result};
use tutoradmin_core::storage::KeyValueStore;

type Entries = BTreeMap<String, String>;

/// Key-value entries kept in one JSON object on disk.
///
/// Every mutation is a locked read-modify-write of the whole file, so two
/// processes sharing the config directory never interleave partial writes.
/// Reads surface a corrupt file as an error; writes replace it.
pub struct FileKeyValueStore {
    file: AtomicJsonFile<Entries>,
}

impl FileKeyValueStore {
    /// Opens the default session file (`<config_dir>/session.json`).
    pub fn open(paths: &AdminPaths) -> Result<Self> {
        let path = paths
            .session_file()
            .map_err(|e| AdminError::config(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Opens a store at a custom path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path).private(),
        }
    }

    fn load_entries(&self) -> Result<Entries> {
        Ok(self.file.load().map_err(into_admin_error)?.unwrap_or_default())
    }
}

fn into_admin_error(err: AtomicJsonError) -> AdminError {
    match err {
        AtomicJsonError::JsonError(e) => e.into(),
        AtomicJsonError::IoError(e) => e.into(),
        AtomicJsonError::LockError(message) => AdminError::storage(message),
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load_entries()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.file
            .update(Entries::new(), |current| {
                for (key, value) in entries {
                    current.insert((*key).to_string(), (*value).to_string());
                }
                Ok(())
            })
            .map_err(into_admin_error)
    }

    fn remove(&self, keys: &[&str]) -> Result<()> {
        if !self.file.path().exists() {
            return Ok(());
        }
        self.file
            .update(Entries::new(), |current| {
                for key in keys {
                    current.remove(*key);
                }
                Ok(())
            })
            .map_err(into_admin_error)
    }
}
