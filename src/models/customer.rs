//! Customer records.

use crate::models::{Entity, EntityKind, RecordId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A customer on file.
///
/// The `vehicle` here is free text describing what the customer drives; it
/// has no link to appointment or sale records, which carry their own
/// free-text customer fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier, assigned at creation and never changed.
    pub id: RecordId,
    /// Customer name.
    #[serde(default)]
    pub name: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Contact email address.
    #[serde(default)]
    pub email: String,
    /// Vehicle description.
    #[serde(default)]
    pub vehicle: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// Raw field set submitted for a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerForm {
    /// Customer name (required).
    pub name: String,
    /// Contact phone number.
    pub phone: String,
    /// Contact email address.
    pub email: String,
    /// Vehicle description.
    pub vehicle: String,
    /// Free-form notes.
    pub notes: String,
}

impl Entity for Customer {
    const KIND: EntityKind = EntityKind::Customer;
    type Form = CustomerForm;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(form: &CustomerForm) -> Result<()> {
        if form.name.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "name",
                message: "customer name is required".to_string(),
            });
        }
        Ok(())
    }

    fn create(id: RecordId, form: &CustomerForm) -> Self {
        Self {
            id,
            name: form.name.trim().to_string(),
            phone: form.phone.trim().to_string(),
            email: form.email.trim().to_string(),
            vehicle: form.vehicle.trim().to_string(),
            notes: form.notes.trim().to_string(),
        }
    }

    fn apply(&mut self, form: &CustomerForm) {
        self.name = form.name.trim().to_string();
        self.phone = form.phone.trim().to_string();
        self.email = form.email.trim().to_string();
        self.vehicle = form.vehicle.trim().to_string();
        self.notes = form.notes.trim().to_string();
    }

    fn to_form(&self) -> CustomerForm {
        CustomerForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
            vehicle: self.vehicle.clone(),
            notes: self.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_name() {
        let form = CustomerForm {
            name: "   ".to_string(),
            ..CustomerForm::default()
        };
        let err = Customer::validate(&form).unwrap_err();
        assert!(matches!(err, Error::InvalidField { field: "name", .. }));
    }

    #[test]
    fn test_create_trims_fields() {
        let form = CustomerForm {
            name: "  Jane Doe  ".to_string(),
            phone: " 555-0100 ".to_string(),
            ..CustomerForm::default()
        };
        let customer = Customer::create(RecordId::new("c_1"), &form);
        assert_eq!(customer.name, "Jane Doe");
        assert_eq!(customer.phone, "555-0100");
        assert_eq!(customer.email, "");
    }

    #[test]
    fn test_apply_preserves_id() {
        let mut customer = Customer::create(
            RecordId::new("c_1"),
            &CustomerForm {
                name: "Jane Doe".to_string(),
                ..CustomerForm::default()
            },
        );
        customer.apply(&CustomerForm {
            name: "Jane Smith".to_string(),
            ..CustomerForm::default()
        });
        assert_eq!(customer.id.as_str(), "c_1");
        assert_eq!(customer.name, "Jane Smith");
    }

    #[test]
    fn test_form_round_trip() {
        let form = CustomerForm {
            name: "Jane Doe".to_string(),
            vehicle: "2021 Accord".to_string(),
            ..CustomerForm::default()
        };
        let customer = Customer::create(RecordId::new("c_1"), &form);
        assert_eq!(customer.to_form(), form);
    }

    #[test]
    fn test_deserialize_with_missing_optional_fields() {
        let customer: Customer =
            serde_json::from_str(r#"{"id":"c_1","name":"Jane Doe"}"#).unwrap();
        assert_eq!(customer.name, "Jane Doe");
        assert_eq!(customer.notes, "");
    }
}
