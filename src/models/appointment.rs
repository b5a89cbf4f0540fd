//! Appointment records.

use crate::models::money::{coerce_amount, format_amount};
use crate::models::{Entity, EntityKind, RecordId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Status assigned to newly scheduled appointments.
pub const DEFAULT_STATUS: &str = "Scheduled";

/// A scheduled appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Unique identifier, assigned at creation and never changed.
    pub id: RecordId,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Time of day.
    #[serde(default)]
    pub time: String,
    /// Customer name, free text.
    #[serde(default)]
    pub customer: String,
    /// Vehicle description.
    #[serde(default)]
    pub vehicle: String,
    /// Service being performed.
    #[serde(default)]
    pub service: String,
    /// Quoted price. Never negative or non-finite.
    #[serde(default)]
    pub price: f64,
    /// Open status text; see [`StatusClass`] for the recognized values.
    #[serde(default = "default_status")]
    pub status: String,
}

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

/// Raw field set submitted for an appointment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentForm {
    /// Calendar date (required).
    pub date: String,
    /// Time of day (required).
    pub time: String,
    /// Customer name (required).
    pub customer: String,
    /// Vehicle description.
    pub vehicle: String,
    /// Service being performed.
    pub service: String,
    /// Quoted price, free-form text coerced to a number.
    pub price: String,
    /// Status text; empty falls back to [`DEFAULT_STATUS`].
    pub status: String,
}

/// Recognized appointment status classes.
///
/// Status is stored as open text; only these two values carry meaning for
/// the dashboard metrics and badges. Everything else classifies as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// The work is done.
    Completed,
    /// The appointment was called off.
    Cancelled,
    /// Any other status text, including the default.
    Other,
}

impl StatusClass {
    /// Classifies a raw status string, case-insensitively.
    #[must_use]
    pub fn classify(status: &str) -> Self {
        match status.trim().to_lowercase().as_str() {
            "completed" => Self::Completed,
            "cancelled" => Self::Cancelled,
            _ => Self::Other,
        }
    }
}

impl Entity for Appointment {
    const KIND: EntityKind = EntityKind::Appointment;
    type Form = AppointmentForm;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(form: &AppointmentForm) -> Result<()> {
        if form.date.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "date",
                message: "appointment date is required".to_string(),
            });
        }
        if form.time.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "time",
                message: "appointment time is required".to_string(),
            });
        }
        if form.customer.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "customer",
                message: "appointment customer is required".to_string(),
            });
        }
        Ok(())
    }

    fn create(id: RecordId, form: &AppointmentForm) -> Self {
        Self {
            id,
            date: form.date.trim().to_string(),
            time: form.time.trim().to_string(),
            customer: form.customer.trim().to_string(),
            vehicle: form.vehicle.trim().to_string(),
            service: form.service.trim().to_string(),
            price: coerce_amount(&form.price).max(0.0),
            status: status_or_default(&form.status),
        }
    }

    fn apply(&mut self, form: &AppointmentForm) {
        self.date = form.date.trim().to_string();
        self.time = form.time.trim().to_string();
        self.customer = form.customer.trim().to_string();
        self.vehicle = form.vehicle.trim().to_string();
        self.service = form.service.trim().to_string();
        self.price = coerce_amount(&form.price).max(0.0);
        self.status = status_or_default(&form.status);
    }

    fn to_form(&self) -> AppointmentForm {
        AppointmentForm {
            date: self.date.clone(),
            time: self.time.clone(),
            customer: self.customer.clone(),
            vehicle: self.vehicle.clone(),
            service: self.service.clone(),
            price: format_amount(self.price),
            status: self.status.clone(),
        }
    }
}

fn status_or_default(status: &str) -> String {
    let trimmed = status.trim();
    if trimmed.is_empty() {
        DEFAULT_STATUS.to_string()
    } else {
        trimmed.to_string()
    }
}
