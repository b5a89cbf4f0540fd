//! The editor session context.
//!
//! A [`Workspace`] owns the in-memory record store, the slot backend, and
//! the id generator for one session. Every mutation flows through its
//! methods so the in-memory and durable copies converge after each
//! operation: state is updated first, then the affected slot is saved, and
//! a failed save surfaces as [`Error::SlotWrite`](crate::Error::SlotWrite)
//! while memory keeps the newer value.

use crate::models::{
    AppointmentForm, CustomerForm, IdGenerator, RecordId, SaleForm, Settings, SettingsForm,
};
use crate::services::{BackupDocument, ImportSummary, KpiSummary, Submitted, backup, crud, kpi};
use crate::storage::{Slot, SlotStore};
use crate::store::{EditingState, RecordStore};
use crate::{Error, Result};
use chrono::{NaiveDate, Utc};

/// One editor session over a slot backend.
pub struct Workspace<S: SlotStore> {
    store: RecordStore,
    slots: S,
    ids: IdGenerator,
}

impl<S: SlotStore> Workspace<S> {
    /// Opens a session, loading all four slots from the backend.
    pub fn open(slots: S) -> Self {
        Self {
            store: RecordStore::load(&slots),
            slots,
            ids: IdGenerator::new(),
        }
    }

    /// Read access to the session state.
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    // ----- Customers -----

    /// Creates or updates a customer from a submitted form.
    pub fn submit_customer(&mut self, form: &CustomerForm) -> Result<Submitted> {
        let outcome = crud::submit(
            &mut self.store.customers,
            &mut self.store.editing.customer,
            &self.ids,
            form,
        )?;
        self.persist_customers()?;
        Ok(outcome)
    }

    /// Begins editing a customer, returning its current field values.
    pub fn begin_customer_edit(&mut self, id: &RecordId) -> Option<CustomerForm> {
        crud::begin_edit(&self.store.customers, &mut self.store.editing.customer, id)
    }

    /// Abandons the in-progress customer edit, if any.
    pub fn cancel_customer_edit(&mut self) {
        self.store.editing.customer = None;
    }

    /// Deletes a customer. Returns whether a record was removed.
    pub fn delete_customer(&mut self, id: &RecordId) -> Result<bool> {
        let removed = crud::delete(
            &mut self.store.customers,
            &mut self.store.editing.customer,
            id,
        );
        self.persist_customers()?;
        Ok(removed)
    }

    // ----- Appointments -----

    /// Creates or updates an appointment from a submitted form.
    pub fn submit_appointment(&mut self, form: &AppointmentForm) -> Result<Submitted> {
        let outcome = crud::submit(
            &mut self.store.appointments,
            &mut self.store.editing.appointment,
            &self.ids,
            form,
        )?;
        self.persist_appointments()?;
        Ok(outcome)
    }

    /// Begins editing an appointment, returning its current field values.
    pub fn begin_appointment_edit(&mut self, id: &RecordId) -> Option<AppointmentForm> {
        crud::begin_edit(
            &self.store.appointments,
            &mut self.store.editing.appointment,
            id,
        )
    }

    /// Abandons the in-progress appointment edit, if any.
    pub fn cancel_appointment_edit(&mut self) {
        self.store.editing.appointment = None;
    }

    /// Deletes an appointment. Returns whether a record was removed.
    pub fn delete_appointment(&mut self, id: &RecordId) -> Result<bool> {
        let removed = crud::delete(
            &mut self.store.appointments,
            &mut self.store.editing.appointment,
            id,
        );
        self.persist_appointments()?;
        Ok(removed)
    }

    // ----- Sales -----

    /// Creates or updates a sale from a submitted form.
    pub fn submit_sale(&mut self, form: &SaleForm) -> Result<Submitted> {
        let outcome = crud::submit(
            &mut self.store.sales,
            &mut self.store.editing.sale,
            &self.ids,
            form,
        )?;
        self.persist_sales()?;
        Ok(outcome)
    }

    /// Begins editing a sale, returning its current field values.
    pub fn begin_sale_edit(&mut self, id: &RecordId) -> Option<SaleForm> {
        crud::begin_edit(&self.store.sales, &mut self.store.editing.sale, id)
    }

    /// Abandons the in-progress sale edit, if any.
    pub fn cancel_sale_edit(&mut self) {
        self.store.editing.sale = None;
    }

    /// Deletes a sale. Returns whether a record was removed.
    pub fn delete_sale(&mut self, id: &RecordId) -> Result<bool> {
        let removed = crud::delete(&mut self.store.sales, &mut self.store.editing.sale, id);
        self.persist_sales()?;
        Ok(removed)
    }

    // ----- Settings -----

    /// Coerces and persists the settings singleton.
    pub fn save_settings(&mut self, form: &SettingsForm) -> Result<()> {
        self.store.settings = Settings::from_form(form);
        self.persist_settings()
    }

    // ----- Backup / restore -----

    /// Builds an export document from the current state. Never mutates.
    #[must_use]
    pub fn export(&self) -> BackupDocument {
        backup::export(&self.store, Utc::now())
    }

    /// Serializes an export document to pretty JSON.
    pub fn export_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.export()).map_err(|e| Error::OperationFailed {
            operation: "serialize_backup".to_string(),
            cause: e.to_string(),
        })
    }

    /// Replaces all four slots from a backup document payload.
    ///
    /// Destructive: prior data is overwritten with no merge. Callers must
    /// obtain explicit confirmation before invoking this; the only way back
    /// is re-importing an earlier export. All editing pointers are cleared,
    /// since the records they referenced may not have survived the import.
    pub fn import_json(&mut self, text: &str) -> Result<ImportSummary> {
        let restored = backup::parse_document(text)?;

        self.store.customers = restored.customers;
        self.store.appointments = restored.appointments;
        self.store.sales = restored.sales;
        self.store.settings = restored.settings;
        self.store.editing = EditingState::default();

        let results = [
            self.persist_customers(),
            self.persist_appointments(),
            self.persist_sales(),
            self.persist_settings(),
        ];
        if let Some(err) = results.into_iter().find_map(Result::err) {
            return Err(err);
        }
        Ok(restored.summary)
    }

    /// Clears all four slots in memory and removes their durable copies.
    ///
    /// Irreversible; callers must obtain explicit confirmation first.
    pub fn reset_all(&mut self) -> Result<()> {
        self.store = RecordStore::empty();

        let results: Vec<Result<()>> = Slot::all()
            .iter()
            .map(|slot| self.slots.remove(*slot))
            .collect();
        results.into_iter().find_map(Result::err).map_or(Ok(()), Err)
    }

    // ----- Metrics -----

    /// Computes the dashboard metrics as of today.
    #[must_use]
    pub fn kpis(&self) -> KpiSummary {
        kpi::summarize(&self.store, Utc::now().date_naive())
    }

    /// Computes the dashboard metrics as of `today`.
    #[must_use]
    pub fn kpis_as_of(&self, today: NaiveDate) -> KpiSummary {
        kpi::summarize(&self.store, today)
    }

    // ----- Persistence -----

    fn persist_customers(&self) -> Result<()> {
        self.slots.save(Slot::Customers, &self.store.customers)
    }

    fn persist_appointments(&self) -> Result<()> {
        self.slots.save(Slot::Appointments, &self.store.appointments)
    }

    fn persist_sales(&self) -> Result<()> {
        self.slots.save(Slot::Sales, &self.store.sales)
    }

    fn persist_settings(&self) -> Result<()> {
        self.slots.save(Slot::Settings, &self.store.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn customer_form(name: &str) -> CustomerForm {
        CustomerForm {
            name: name.to_string(),
            ..CustomerForm::default()
        }
    }

    #[test]
    fn test_submit_customer_updates_memory_and_slot() {
        let mut workspace = Workspace::open(MemoryStore::new());
        workspace.submit_customer(&customer_form("Jane Doe")).unwrap();

        assert_eq!(workspace.store().customers().len(), 1);
        let raw = workspace.slots.read(Slot::Customers).unwrap();
        assert!(raw.contains("Jane Doe"));
    }

    #[test]
    fn test_write_failure_is_surfaced_and_memory_keeps_newer_value() {
        let mut workspace = Workspace::open(MemoryStore::failing());
        let err = workspace
            .submit_customer(&customer_form("Jane Doe"))
            .unwrap_err();

        assert!(matches!(err, Error::SlotWrite { slot: Slot::Customers, .. }));
        // The in-memory store holds the record; only the durable copy is stale
        assert_eq!(workspace.store().customers().len(), 1);
    }

    #[test]
    fn test_cancel_edit_clears_pointer_without_mutation() {
        let mut workspace = Workspace::open(MemoryStore::new());
        workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
        let id = workspace.store().customers()[0].id.clone();

        workspace.begin_customer_edit(&id).unwrap();
        assert_eq!(workspace.store().editing_customer(), Some(&id));

        workspace.cancel_customer_edit();
        assert!(workspace.store().editing_customer().is_none());
        assert_eq!(workspace.store().customers()[0].name, "Jane Doe");
    }

    #[test]
    fn test_import_clears_editing_pointers() {
        let mut workspace = Workspace::open(MemoryStore::new());
        let mut form = customer_form("Jane Doe");
        workspace.submit_customer(&form).unwrap();
        let id = workspace.store().customers()[0].id.clone();
        workspace.begin_customer_edit(&id).unwrap();

        // The import drops the record the open form was editing
        workspace.import_json("{}").unwrap();
        assert!(workspace.store().customers().is_empty());
        assert!(workspace.store().editing_customer().is_none());

        // The next submit starts from creation mode, not a stale edit
        form.name = "Jane Smith".to_string();
        let outcome = workspace.submit_customer(&form).unwrap();
        assert!(matches!(outcome, Submitted::Created(_)));
        assert_eq!(workspace.store().customers().len(), 1);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut workspace = Workspace::open(MemoryStore::new());
        workspace
            .save_settings(&SettingsForm {
                business_name: "Tints & Audio".to_string(),
                tax_rate: "7.5".to_string(),
                ..SettingsForm::default()
            })
            .unwrap();

        assert_eq!(workspace.store().settings().business_name, "Tints & Audio");
        let raw = workspace.slots.read(Slot::Settings).unwrap();
        assert!(raw.contains("businessName"));
    }
}
