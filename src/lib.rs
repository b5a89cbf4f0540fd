//! # Tintbook
//!
//! Record keeping for a small vehicle tinting and detailing shop.
//!
//! Tintbook tracks customers, appointments, and sales in four durable JSON
//! slots under a local data directory, with summary metrics and JSON
//! backup/restore. There is no server; a [`Workspace`] is the single editor
//! session and the only way state is mutated.
//!
//! ## Example
//!
//! ```rust,ignore
//! use tintbook::{CustomerForm, MemoryStore, Workspace};
//!
//! let mut workspace = Workspace::open(MemoryStore::new());
//! let outcome = workspace.submit_customer(&CustomerForm {
//!     name: "Jane Doe".to_string(),
//!     ..CustomerForm::default()
//! })?;
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

use thiserror::Error as ThisError;

// Module declarations
pub mod config;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;
pub mod workspace;

// Re-exports for convenience
pub use config::TintbookConfig;
pub use models::{
    Appointment, AppointmentForm, Customer, CustomerForm, Entity, EntityKind, IdGenerator,
    RecordId, Sale, SaleForm, Settings, SettingsForm, StatusClass,
};
pub use services::{BackupDocument, ImportSummary, KpiSummary, Submitted};
pub use storage::{FilesystemStore, MemoryStore, Slot, SlotStore};
pub use store::RecordStore;
pub use workspace::Workspace;

/// Error type for tintbook operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidField` | A submitted form fails required-field or numeric validation |
/// | `SlotWrite` | A durable slot cannot be written or removed |
/// | `MalformedDocument` | An import payload does not parse as a JSON object |
/// | `OperationFailed` | Residual I/O or serialization failures |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A submitted field failed validation.
    ///
    /// Carries the offending field name so callers can focus the matching
    /// input. The operation that raised it mutated nothing and persisted
    /// nothing.
    #[error("invalid {field}: {message}")]
    InvalidField {
        /// The field that failed validation.
        field: &'static str,
        /// Why the field was rejected.
        message: String,
    },

    /// A durable slot could not be written or removed.
    ///
    /// Raised when the filesystem rejects a write (permissions, disk full).
    /// The in-memory state already holds the newer value; the durable copy
    /// is stale until the next successful save.
    #[error("failed to persist slot '{slot}': {cause}")]
    SlotWrite {
        /// The slot whose write failed.
        slot: storage::Slot,
        /// The underlying cause.
        cause: String,
    },

    /// An import payload was not a JSON object.
    ///
    /// No state is mutated when this is raised.
    #[error("malformed backup document: {0}")]
    MalformedDocument(String),

    /// An operation failed.
    ///
    /// Raised when:
    /// - Filesystem I/O errors occur outside slot writes
    /// - Serialization of an export document fails
    /// - A configuration file cannot be read or parsed
    #[error("operation '{operation}' failed: {cause}")]
    OperationFailed {
        /// The operation that failed.
        operation: String,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for tintbook operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidField {
            field: "name",
            message: "name is required".to_string(),
        };
        assert_eq!(err.to_string(), "invalid name: name is required");

        let err = Error::SlotWrite {
            slot: storage::Slot::Customers,
            cause: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to persist slot 'customers': disk full"
        );

        let err = Error::MalformedDocument("not an object".to_string());
        assert_eq!(err.to_string(), "malformed backup document: not an object");
    }
}
