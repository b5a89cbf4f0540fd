//! In-memory slot storage.
//!
//! Backend for tests and ephemeral sessions. Writes can be made to fail so
//! the surfaced persistence-error path can be exercised.

use crate::storage::{Slot, SlotStore};
use crate::{Error, Result};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// In-memory slot storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<HashMap<Slot, String>>,
    fail_writes: bool,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store whose writes and removals all fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            fail_writes: true,
        }
    }

    fn guard(&self) -> std::sync::MutexGuard<'_, HashMap<Slot, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, slot: Slot) -> Option<String> {
        self.guard().get(&slot).cloned()
    }

    fn write(&self, slot: Slot, payload: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::SlotWrite {
                slot,
                cause: "simulated write failure".to_string(),
            });
        }
        self.guard().insert(slot, payload.to_string());
        Ok(())
    }

    fn remove(&self, slot: Slot) -> Result<()> {
        if self.fail_writes {
            return Err(Error::SlotWrite {
                slot,
                cause: "simulated write failure".to_string(),
            });
        }
        self.guard().remove(&slot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_read_remove() {
        let store = MemoryStore::new();
        assert!(store.read(Slot::Customers).is_none());

        store.write(Slot::Customers, "[]").unwrap();
        assert_eq!(store.read(Slot::Customers).as_deref(), Some("[]"));

        store.remove(Slot::Customers).unwrap();
        assert!(store.read(Slot::Customers).is_none());
        store.remove(Slot::Customers).unwrap();
    }

    #[test]
    fn test_failing_store_surfaces_write_errors() {
        let store = MemoryStore::failing();
        let err = store.write(Slot::Sales, "[]").unwrap_err();
        assert!(matches!(err, Error::SlotWrite { slot: Slot::Sales, .. }));
        assert!(store.read(Slot::Sales).is_none());
    }
}
