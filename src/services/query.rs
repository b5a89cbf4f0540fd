//! Listing filters and orderings.
//!
//! Search filters match case-insensitively across the same fields the
//! tables display; orderings match the table defaults (customers by name,
//! appointments chronologically, sales newest first).

use crate::models::{Appointment, Customer, Sale};

/// Customers whose name, phone, email, or vehicle contains `query`,
/// ordered by name.
#[must_use]
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<&Customer> = customers
        .iter()
        .filter(|c| {
            matches(
                &needle,
                &[c.name.as_str(), c.phone.as_str(), c.email.as_str(), c.vehicle.as_str()],
            )
        })
        .collect();
    rows.sort_by_key(|c| c.name.to_lowercase());
    rows
}

/// Appointments matching `query` across their displayed fields, ordered by
/// date then time.
#[must_use]
pub fn filter_appointments<'a>(
    appointments: &'a [Appointment],
    query: &str,
) -> Vec<&'a Appointment> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<&Appointment> = appointments
        .iter()
        .filter(|a| {
            matches(
                &needle,
                &[
                    a.date.as_str(),
                    a.time.as_str(),
                    a.customer.as_str(),
                    a.vehicle.as_str(),
                    a.service.as_str(),
                    a.status.as_str(),
                ],
            )
        })
        .collect();
    rows.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.time.cmp(&b.time)));
    rows
}

/// Sales matching `query` across their displayed fields, newest first.
#[must_use]
pub fn filter_sales<'a>(sales: &'a [Sale], query: &str) -> Vec<&'a Sale> {
    let needle = query.trim().to_lowercase();
    let mut rows: Vec<&Sale> = sales
        .iter()
        .filter(|s| {
            matches(
                &needle,
                &[
                    s.date.as_str(),
                    s.customer.as_str(),
                    s.item.as_str(),
                    s.payment.as_str(),
                    s.notes.as_str(),
                ],
            )
        })
        .collect();
    rows.sort_by(|a, b| b.date.cmp(&a.date));
    rows
}

fn matches(needle: &str, haystacks: &[&str]) -> bool {
    needle.is_empty() || haystacks.iter().any(|h| h.to_lowercase().contains(needle))
}
