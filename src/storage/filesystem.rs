//! Filesystem-backed slot storage.
//!
//! One JSON file per slot under a base directory, the durable counterpart
//! of the in-memory record store.

use crate::storage::{Slot, SlotStore};
use crate::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Filesystem-backed slot storage.
pub struct FilesystemStore {
    /// Base directory holding the slot files.
    base_dir: PathBuf,
}

impl FilesystemStore {
    /// Creates a store rooted at `base_dir` without touching the
    /// filesystem. The directory is created lazily on the first write.
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Creates a store rooted at `base_dir` with checked directory creation.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn with_create(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir).map_err(|e| Error::OperationFailed {
            operation: "create_data_dir".to_string(),
            cause: e.to_string(),
        })?;
        Ok(Self { base_dir })
    }

    /// Returns the base directory.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn slot_path(&self, slot: Slot) -> PathBuf {
        self.base_dir.join(slot.file_name())
    }
}

impl SlotStore for FilesystemStore {
    fn read(&self, slot: Slot) -> Option<String> {
        fs::read_to_string(self.slot_path(slot)).ok()
    }

    fn write(&self, slot: Slot, payload: &str) -> Result<()> {
        // Ensure the directory exists before writing
        let _ = fs::create_dir_all(&self.base_dir);

        fs::write(self.slot_path(slot), payload).map_err(|e| Error::SlotWrite {
            slot,
            cause: e.to_string(),
        })
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        match fs::remove_file(self.slot_path(slot)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::SlotWrite {
                slot,
                cause: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_absent_slot() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(dir.path());
        assert!(store.read(Slot::Customers).is_none());
    }

    #[test]
    fn test_write_and_read() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(dir.path());

        store.write(Slot::Customers, "[]").unwrap();
        assert_eq!(store.read(Slot::Customers).as_deref(), Some("[]"));
        assert!(dir.path().join("customers.json").exists());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let store = FilesystemStore::new(dir.path());

        store.write(Slot::Sales, "[]").unwrap();
        store.remove(Slot::Sales).unwrap();
        assert!(store.read(Slot::Sales).is_none());

        // Removing an absent slot is not an error
        store.remove(Slot::Sales).unwrap();
    }

    #[test]
    fn test_with_create_makes_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("tintbook");

        let store = FilesystemStore::with_create(&nested).unwrap();
        assert!(nested.exists());
        assert_eq!(store.base_dir(), nested.as_path());
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("lazy");
        let store = FilesystemStore::new(&nested);

        store.write(Slot::Settings, "{}").unwrap();
        assert_eq!(store.read(Slot::Settings).as_deref(), Some("{}"));
    }
}
