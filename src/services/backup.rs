//! Backup and restore.
//!
//! Serializes the full store to a portable document and ingests such
//! documents back. Restore is deliberately lenient below the top level: a
//! collection with the wrong shape degrades to empty instead of blocking
//! the rest of the document, and individual undecodable records are
//! skipped and counted.

use crate::models::{Appointment, Customer, Sale, Settings};
use crate::store::RecordStore;
use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Format name stamped into every export.
pub const FORMAT_NAME: &str = "tintbook-backup";

/// Schema version stamped into every export. Not yet enforced on import.
pub const SCHEMA_VERSION: u32 = 1;

/// Metadata block of an export document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupMeta {
    /// Format name.
    pub name: String,
    /// Schema version.
    pub version: u32,
    /// Export timestamp, RFC 3339.
    pub exported_at: String,
}

/// A full portable copy of the four slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackupDocument {
    /// Metadata block.
    pub meta: BackupMeta,
    /// The customers collection.
    pub customers: Vec<Customer>,
    /// The appointments collection.
    pub appointments: Vec<Appointment>,
    /// The sales collection.
    pub sales: Vec<Sale>,
    /// The settings singleton.
    pub settings: Settings,
}

/// Result of an import operation.
#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    /// Customers restored.
    pub customers: usize,
    /// Appointments restored.
    pub appointments: usize,
    /// Sales restored.
    pub sales: usize,
    /// Records skipped because they could not be decoded.
    pub skipped: usize,
    /// Non-blocking warnings about degraded slots and skipped records.
    pub warnings: Vec<String>,
}

/// Slot contents recovered from an import payload.
#[derive(Debug, Clone)]
pub(crate) struct RestoredSlots {
    pub(crate) customers: Vec<Customer>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) settings: Settings,
    pub(crate) summary: ImportSummary,
}

/// Builds an export document from the store's current state. Never mutates
/// the store.
#[must_use]
pub fn export(store: &RecordStore, now: DateTime<Utc>) -> BackupDocument {
    BackupDocument {
        meta: BackupMeta {
            name: FORMAT_NAME.to_string(),
            version: SCHEMA_VERSION,
            exported_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
        },
        customers: store.customers().to_vec(),
        appointments: store.appointments().to_vec(),
        sales: store.sales().to_vec(),
        settings: store.settings().clone(),
    }
}

/// Suggested file name for an export, with characters unfriendly to
/// filesystems replaced.
#[must_use]
pub fn file_name(now: DateTime<Utc>) -> String {
    let stamp: String = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .chars()
        .map(|c| if c == ':' || c == '.' { '-' } else { c })
        .collect();
    format!("tintbook-data-{stamp}.json")
}

/// Parses an import payload into slot contents.
///
/// # Errors
///
/// Returns [`Error::MalformedDocument`] when the payload is not a JSON
/// object. Anything wrong below the top level degrades instead of failing.
pub(crate) fn parse_document(text: &str) -> Result<RestoredSlots> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| Error::MalformedDocument(e.to_string()))?;
    let serde_json::Value::Object(mut doc) = value else {
        return Err(Error::MalformedDocument(
            "expected a JSON object".to_string(),
        ));
    };

    let mut summary = ImportSummary::default();
    let customers: Vec<Customer> =
        restore_collection(doc.remove("customers"), "customers", &mut summary);
    let appointments: Vec<Appointment> =
        restore_collection(doc.remove("appointments"), "appointments", &mut summary);
    let sales: Vec<Sale> = restore_collection(doc.remove("sales"), "sales", &mut summary);
    let settings = restore_settings(doc.remove("settings"), &mut summary);

    summary.customers = customers.len();
    summary.appointments = appointments.len();
    summary.sales = sales.len();

    for warning in &summary.warnings {
        tracing::warn!("{warning}");
    }

    Ok(RestoredSlots {
        customers,
        appointments,
        sales,
        settings,
        summary,
    })
}

/// Accepts a collection if it is a sequence, skipping undecodable elements;
/// anything else degrades to empty.
fn restore_collection<T: DeserializeOwned>(
    value: Option<serde_json::Value>,
    slot_name: &str,
    summary: &mut ImportSummary,
) -> Vec<T> {
    match value {
        Some(serde_json::Value::Array(items)) => {
            let mut records = Vec::with_capacity(items.len());
            for item in items {
                match serde_json::from_value(item) {
                    Ok(record) => records.push(record),
                    Err(e) => {
                        summary.skipped += 1;
                        summary
                            .warnings
                            .push(format!("skipped an undecodable {slot_name} record: {e}"));
                    },
                }
            }
            records
        },
        Some(_) => {
            summary
                .warnings
                .push(format!("{slot_name} slot is not a sequence, substituting empty"));
            Vec::new()
        },
        None => Vec::new(),
    }
}

/// Accepts settings if it is an object; anything else degrades to defaults.
fn restore_settings(
    value: Option<serde_json::Value>,
    summary: &mut ImportSummary,
) -> Settings {
    match value {
        Some(object @ serde_json::Value::Object(_)) => match serde_json::from_value(object) {
            Ok(settings) => settings,
            Err(e) => {
                summary
                    .warnings
                    .push(format!("settings slot could not be decoded ({e}), substituting defaults"));
                Settings::default()
            },
        },
        Some(_) => {
            summary
                .warnings
                .push("settings slot is not an object, substituting defaults".to_string());
            Settings::default()
        },
        None => Settings::default(),
    }
}
