//! End-to-end tests for the editor session lifecycle.
//!
//! Exercises the full path through the workspace: form submission,
//! edit/delete interleavings, backup round-trips, and recovery from corrupt
//! durable data, all against a real filesystem backend.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tempfile::TempDir;
use tintbook::{
    AppointmentForm, CustomerForm, Error, FilesystemStore, MemoryStore, SaleForm, Slot, Submitted,
    Workspace,
};

fn open(dir: &TempDir) -> Workspace<FilesystemStore> {
    Workspace::open(FilesystemStore::with_create(dir.path()).unwrap())
}

fn customer_form(name: &str) -> CustomerForm {
    CustomerForm {
        name: name.to_string(),
        ..CustomerForm::default()
    }
}

fn sale_form(item: &str, amount: &str) -> SaleForm {
    SaleForm {
        date: "2026-08-04".to_string(),
        item: item.to_string(),
        amount: amount.to_string(),
        ..SaleForm::default()
    }
}

#[test]
fn test_created_customer_survives_reopening() {
    let dir = TempDir::new().unwrap();

    let mut workspace = open(&dir);
    let outcome = workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
    let id = outcome.id().unwrap().clone();
    assert!(!id.as_str().is_empty());

    // A fresh session over the same directory sees the same single record
    let reopened = open(&dir);
    assert_eq!(reopened.store().customers().len(), 1);
    assert_eq!(reopened.store().customers()[0].name, "Jane Doe");
    assert_eq!(reopened.store().customers()[0].id, id);
}

#[test]
fn test_appointment_missing_time_is_rejected_and_not_persisted() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    let err = workspace
        .submit_appointment(&AppointmentForm {
            date: "2026-08-10".to_string(),
            customer: "Jane Doe".to_string(),
            ..AppointmentForm::default()
        })
        .unwrap_err();

    assert!(matches!(err, Error::InvalidField { field: "time", .. }));
    assert!(workspace.store().appointments().is_empty());
    assert!(open(&dir).store().appointments().is_empty());
}

#[test]
fn test_sale_with_unparsable_amount_is_rejected() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    let err = workspace.submit_sale(&sale_form("Tint film", "abc")).unwrap_err();
    assert!(matches!(err, Error::InvalidField { field: "amount", .. }));
    assert!(workspace.store().sales().is_empty());
    assert!(open(&dir).store().sales().is_empty());
}

#[test]
fn test_appointment_price_is_coerced() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    workspace
        .submit_appointment(&AppointmentForm {
            date: "2026-08-10".to_string(),
            time: "09:30".to_string(),
            customer: "Jane Doe".to_string(),
            price: "$45.00 deposit".to_string(),
            ..AppointmentForm::default()
        })
        .unwrap();

    assert!((workspace.store().appointments()[0].price - 45.0).abs() < f64::EPSILON);
}

#[test]
fn test_delete_during_edit_skips_update_and_clears_pointer() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    workspace.submit_sale(&sale_form("Tint film", "100")).unwrap();
    let id = workspace.store().sales()[0].id.clone();

    let mut form = workspace.begin_sale_edit(&id).unwrap();
    form.amount = "200".to_string();

    assert!(workspace.delete_sale(&id).unwrap());
    assert!(workspace.store().editing_sale().is_none());

    let outcome = workspace.submit_sale(&form).unwrap();
    assert_eq!(outcome, Submitted::Skipped);
    assert!(workspace.store().sales().is_empty());
    assert!(open(&dir).store().sales().is_empty());
}

#[test]
fn test_delete_twice_matches_delete_once() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
    let id = workspace.store().customers()[0].id.clone();

    assert!(workspace.delete_customer(&id).unwrap());
    assert!(!workspace.delete_customer(&id).unwrap());
    assert!(workspace.store().customers().is_empty());
}

#[test]
fn test_export_import_round_trips_all_slots() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
    workspace
        .submit_appointment(&AppointmentForm {
            date: "2026-08-10".to_string(),
            time: "09:30".to_string(),
            customer: "Jane Doe".to_string(),
            price: "120".to_string(),
            status: "Completed".to_string(),
            ..AppointmentForm::default()
        })
        .unwrap();
    workspace.submit_sale(&sale_form("Ceramic tint", "349.99")).unwrap();
    workspace
        .save_settings(&tintbook::SettingsForm {
            business_name: "Tints & Audio".to_string(),
            tax_rate: "7.5".to_string(),
            ..tintbook::SettingsForm::default()
        })
        .unwrap();

    let customers = workspace.store().customers().to_vec();
    let appointments = workspace.store().appointments().to_vec();
    let sales = workspace.store().sales().to_vec();
    let settings = workspace.store().settings().clone();

    let json = workspace.export_json().unwrap();

    let import_dir = TempDir::new().unwrap();
    let mut imported = open(&import_dir);
    imported.import_json(&json).unwrap();

    assert_eq!(imported.store().customers(), customers.as_slice());
    assert_eq!(imported.store().appointments(), appointments.as_slice());
    assert_eq!(imported.store().sales(), sales.as_slice());
    assert_eq!(imported.store().settings(), &settings);

    // The durable copies converge too
    let reopened = open(&import_dir);
    assert_eq!(reopened.store().customers(), customers.as_slice());
}

#[test]
fn test_import_with_corrupt_collection_degrades_only_that_slot() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    let summary = workspace
        .import_json(
            r#"{
                "customers": [
                    {"id":"c_1","name":"Jane Doe"},
                    {"id":"c_2","name":"John Roe"}
                ],
                "appointments": "oops"
            }"#,
        )
        .unwrap();

    assert_eq!(summary.customers, 2);
    assert_eq!(summary.appointments, 0);
    assert_eq!(workspace.store().customers().len(), 2);
    assert!(workspace.store().appointments().is_empty());
}

#[test]
fn test_import_rejects_non_object_without_mutation() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);
    workspace.submit_customer(&customer_form("Jane Doe")).unwrap();

    let err = workspace.import_json("\"oops\"").unwrap_err();
    assert!(matches!(err, Error::MalformedDocument(_)));
    assert_eq!(workspace.store().customers().len(), 1);
}

#[test]
fn test_reset_all_empties_memory_and_disk() {
    let dir = TempDir::new().unwrap();
    let mut workspace = open(&dir);

    workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
    workspace
        .submit_appointment(&AppointmentForm {
            date: "2026-08-10".to_string(),
            time: "09:30".to_string(),
            customer: "Jane Doe".to_string(),
            ..AppointmentForm::default()
        })
        .unwrap();
    workspace.submit_sale(&sale_form("Tint film", "80")).unwrap();
    workspace
        .save_settings(&tintbook::SettingsForm {
            business_name: "Tints & Audio".to_string(),
            ..tintbook::SettingsForm::default()
        })
        .unwrap();

    workspace.reset_all().unwrap();

    assert!(workspace.store().customers().is_empty());
    assert!(workspace.store().appointments().is_empty());
    assert!(workspace.store().sales().is_empty());
    assert_eq!(workspace.store().settings(), &tintbook::Settings::default());

    for file in ["customers.json", "appointments.json", "sales.json", "settings.json"] {
        assert!(!dir.path().join(file).exists());
    }
}

#[test]
fn test_corrupt_slot_file_degrades_to_empty_on_load() {
    let dir = TempDir::new().unwrap();
    {
        let mut workspace = open(&dir);
        workspace.submit_customer(&customer_form("Jane Doe")).unwrap();
    }

    std::fs::write(dir.path().join("customers.json"), "{{{{ not json").unwrap();
    std::fs::write(dir.path().join("settings.json"), "[]").unwrap();

    let workspace = open(&dir);
    assert!(workspace.store().customers().is_empty());
    assert_eq!(workspace.store().settings(), &tintbook::Settings::default());
}

#[test]
fn test_write_failure_surfaces_but_does_not_lose_session_state() {
    let mut workspace = Workspace::open(MemoryStore::failing());

    let err = workspace.submit_customer(&customer_form("Jane Doe")).unwrap_err();
    assert!(matches!(err, Error::SlotWrite { slot: Slot::Customers, .. }));
    assert_eq!(workspace.store().customers().len(), 1);
}
