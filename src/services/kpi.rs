//! Derived summary metrics.
//!
//! Computed from the current collections on demand and never persisted.

use crate::models::StatusClass;
use crate::store::RecordStore;
use chrono::{Datelike, NaiveDate};

/// Dashboard metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct KpiSummary {
    /// Total customers on file.
    pub customers: usize,
    /// Appointments dated today or later that are not cancelled.
    pub upcoming_appointments: usize,
    /// Revenue from sales dated in the current month.
    pub monthly_revenue: f64,
}

/// Computes the dashboard metrics as of `today`.
///
/// Records whose dates do not parse are excluded rather than guessed at.
#[must_use]
pub fn summarize(store: &RecordStore, today: NaiveDate) -> KpiSummary {
    let upcoming_appointments = store
        .appointments()
        .iter()
        .filter(|a| StatusClass::classify(&a.status) != StatusClass::Cancelled)
        .filter(|a| parse_date(&a.date).is_some_and(|d| d >= today))
        .count();

    let monthly_revenue = store
        .sales()
        .iter()
        .filter(|s| {
            parse_date(&s.date)
                .is_some_and(|d| d.year() == today.year() && d.month() == today.month())
        })
        .map(|s| s.amount)
        .sum();

    KpiSummary {
        customers: store.customers().len(),
        upcoming_appointments,
        monthly_revenue,
    }
}

/// Parses the `YYYY-MM-DD` dates the forms produce.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}
