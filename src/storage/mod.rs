//! Slot storage.
//!
//! Four named slots hold the durable copies of the record collections and
//! the settings singleton. Backends implement [`SlotStore`]; the lenient
//! typed loaders live here so every backend degrades absent or corrupt data
//! the same way.

mod filesystem;
mod memory;

pub use filesystem::FilesystemStore;
pub use memory::MemoryStore;

use crate::{Error, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// One named durable-storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// The customers collection.
    Customers,
    /// The appointments collection.
    Appointments,
    /// The sales collection.
    Sales,
    /// The settings singleton.
    Settings,
}

impl Slot {
    /// Returns all slots.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Customers, Self::Appointments, Self::Sales, Self::Settings]
    }

    /// Returns the slot name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customers => "customers",
            Self::Appointments => "appointments",
            Self::Sales => "sales",
            Self::Settings => "settings",
        }
    }

    /// Returns the file name backing this slot.
    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Customers => "customers.json",
            Self::Appointments => "appointments.json",
            Self::Sales => "sales.json",
            Self::Settings => "settings.json",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Trait for slot storage backends.
///
/// Backends own only the durable copies they are told to write; session
/// state belongs to the in-memory record store. Loads never raise: absent,
/// unparsable, or wrong-shaped data degrades to the slot's default. Writes
/// surface their failures so callers can warn that the durable copy is
/// stale.
pub trait SlotStore: Send + Sync {
    /// Reads a slot's raw payload. `None` when the slot is absent or
    /// unreadable.
    fn read(&self, slot: Slot) -> Option<String>;

    /// Writes a slot's raw payload.
    fn write(&self, slot: Slot, payload: &str) -> Result<()>;

    /// Removes a slot's durable copy. Absence is not an error.
    fn remove(&self, slot: Slot) -> Result<()>;

    /// Loads a collection slot, substituting an empty sequence for absent
    /// or corrupt data.
    fn load_collection<T: DeserializeOwned>(&self, slot: Slot) -> Vec<T>
    where
        Self: Sized,
    {
        let Some(raw) = self.read(slot) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(e) => {
                tracing::warn!(slot = %slot, error = %e, "corrupt collection slot, substituting empty");
                Vec::new()
            },
        }
    }

    /// Loads a singleton slot, substituting the default for absent or
    /// corrupt data.
    fn load_singleton<T: DeserializeOwned + Default>(&self, slot: Slot) -> T
    where
        Self: Sized,
    {
        let Some(raw) = self.read(slot) else {
            return T::default();
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(slot = %slot, error = %e, "corrupt singleton slot, substituting default");
                T::default()
            },
        }
    }

    /// Serializes `value` and writes it to `slot`.
    fn save<T: Serialize>(&self, slot: Slot, value: &T) -> Result<()>
    where
        Self: Sized,
    {
        let payload =
            serde_json::to_string_pretty(value).map_err(|e| Error::OperationFailed {
                operation: "serialize_slot".to_string(),
                cause: e.to_string(),
            })?;
        tracing::debug!(slot = %slot, bytes = payload.len(), "saving slot");
        self.write(slot, &payload)
    }
}
