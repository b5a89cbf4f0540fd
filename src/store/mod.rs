//! The in-memory record store.
//!
//! Single source of truth for a session: the three record collections, the
//! settings singleton, and the transient editing pointers. Loaded once at
//! startup; mutated only through the [`Workspace`](crate::Workspace)
//! controllers and the backup service, never by presentation code.

use crate::models::{Appointment, Customer, RecordId, Sale, Settings};
use crate::storage::{Slot, SlotStore};

/// Editing pointers, one per entity kind.
///
/// At most one record per kind is being edited at a time; `None` means the
/// kind is in creation mode. Beginning a new edit replaces the pointer
/// without touching the previously pointed-at record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditingState {
    pub(crate) customer: Option<RecordId>,
    pub(crate) appointment: Option<RecordId>,
    pub(crate) sale: Option<RecordId>,
}

/// In-memory state for one editor session.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    pub(crate) customers: Vec<Customer>,
    pub(crate) appointments: Vec<Appointment>,
    pub(crate) sales: Vec<Sale>,
    pub(crate) settings: Settings,
    pub(crate) editing: EditingState,
}

impl RecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads all four slots from the adapter, substituting defaults for
    /// absent or corrupt data.
    pub fn load(slots: &impl SlotStore) -> Self {
        Self {
            customers: slots.load_collection(Slot::Customers),
            appointments: slots.load_collection(Slot::Appointments),
            sales: slots.load_collection(Slot::Sales),
            settings: slots.load_singleton(Slot::Settings),
            editing: EditingState::default(),
        }
    }

    /// Current customers.
    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Current appointments.
    #[must_use]
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Current sales.
    #[must_use]
    pub fn sales(&self) -> &[Sale] {
        &self.sales
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The customer currently open for edit, if any.
    #[must_use]
    pub fn editing_customer(&self) -> Option<&RecordId> {
        self.editing.customer.as_ref()
    }

    /// The appointment currently open for edit, if any.
    #[must_use]
    pub fn editing_appointment(&self) -> Option<&RecordId> {
        self.editing.appointment.as_ref()
    }

    /// The sale currently open for edit, if any.
    #[must_use]
    pub fn editing_sale(&self) -> Option<&RecordId> {
        self.editing.sale.as_ref()
    }
}
