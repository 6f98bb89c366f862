//! Key-value store implementations
//!
//! - [`MemoryStore`] keeps everything in a `HashMap`; used by tests and as a
//!   scratch store.
//! - [`FileStore`] keeps one file per key inside a data directory, the
//!   on-disk counterpart of browser local storage.
//!
//! # File layout
//!
//! A key maps to a file of the same name directly under the data directory.
//! Keys are restricted to ASCII letters, digits, `.`, `_` and `-` (and may not
//! start with a dot) so they can never escape the directory. Writes go to a
//! sibling temporary file first and are renamed into place.

use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::traits::KeyValueStore;
use crate::types::TrackerError;

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), TrackerError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Directory-backed store
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`
    ///
    /// The directory is created lazily on the first write, so opening a store
    /// over a missing directory and only reading from it leaves no trace.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        FileStore { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, TrackerError> {
        let valid = !key.is_empty()
            && !key.starts_with('.')
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(TrackerError::invalid_key(key));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, TrackerError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), TrackerError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.root)?;

        let tmp = self.root.join(format!(".{}.tmp", key));
        if let Err(err) = fs::write(&tmp, value).and_then(|()| fs::rename(&tmp, &path)) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                tracing::debug!(path = %tmp.display(), error = %cleanup, "could not remove temp file");
            }
            return Err(err.into());
        }
        tracing::debug!(key, path = %path.display(), bytes = value.len(), "wrote key");
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<(), TrackerError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.delete("k").unwrap();
        store.delete("k").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("data"));

        assert_eq!(store.get("barberflow-theme").unwrap(), None);

        store.set("barberflow-theme", "dark").unwrap();
        assert_eq!(
            store.get("barberflow-theme").unwrap().as_deref(),
            Some("dark")
        );
        assert!(dir.path().join("data").join("barberflow-theme").exists());
        assert!(!dir.path().join("data").join(".barberflow-theme.tmp").exists());

        store.delete("barberflow-theme").unwrap();
        assert_eq!(store.get("barberflow-theme").unwrap(), None);
    }

    #[test]
    fn test_failed_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        // A non-empty directory where the key's file should go makes the rename fail
        let blocker = dir.path().join("barberflow-theme");
        fs::create_dir(&blocker).unwrap();
        fs::write(blocker.join("keep"), "x").unwrap();

        let result = store.set("barberflow-theme", "dark");

        assert!(matches!(result, Err(TrackerError::Storage { .. })));
        assert!(!dir.path().join(".barberflow-theme.tmp").exists());
        assert!(blocker.join("keep").exists());
    }

    #[test]
    fn test_file_store_reads_do_not_create_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("never-written");
        let store = FileStore::new(&root);

        assert_eq!(store.get("anything").unwrap(), None);
        assert!(!root.exists());
    }

    #[test]
    fn test_file_store_delete_missing_key() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());
        assert!(store.delete("missing").is_ok());
    }

    #[rstest]
    #[case::parent("../escape")]
    #[case::nested("a/b")]
    #[case::hidden(".hidden")]
    #[case::empty("")]
    #[case::space("two words")]
    fn test_file_store_rejects_unsafe_keys(#[case] key: &str) {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(matches!(
            store.get(key),
            Err(TrackerError::InvalidKey { .. })
        ));
        assert!(matches!(
            store.set(key, "x"),
            Err(TrackerError::InvalidKey { .. })
        ));
    }
}
