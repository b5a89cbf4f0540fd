//! Services operating on the record store.

pub mod backup;
pub mod crud;
pub mod kpi;
pub mod query;

pub use backup::{BackupDocument, BackupMeta, ImportSummary};
pub use crud::Submitted;
pub use kpi::KpiSummary;
