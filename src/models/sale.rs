//! Sale records.

use crate::models::money::{coerce_amount, format_amount, parse_amount};
use crate::models::{Entity, EntityKind, RecordId};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// A recorded sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sale {
    /// Unique identifier, assigned at creation and never changed.
    pub id: RecordId,
    /// Calendar date, `YYYY-MM-DD`.
    #[serde(default)]
    pub date: String,
    /// Customer name, free text.
    #[serde(default)]
    pub customer: String,
    /// What was sold.
    #[serde(default)]
    pub item: String,
    /// Amount charged. Always finite.
    #[serde(default)]
    pub amount: f64,
    /// Payment method, free text.
    #[serde(default)]
    pub payment: String,
    /// Free-form notes.
    #[serde(default)]
    pub notes: String,
}

/// Raw field set submitted for a sale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaleForm {
    /// Calendar date (required).
    pub date: String,
    /// Customer name.
    pub customer: String,
    /// What was sold (required).
    pub item: String,
    /// Amount charged (required; must contain a parseable number).
    pub amount: String,
    /// Payment method.
    pub payment: String,
    /// Free-form notes.
    pub notes: String,
}

impl Entity for Sale {
    const KIND: EntityKind = EntityKind::Sale;
    type Form = SaleForm;

    fn id(&self) -> &RecordId {
        &self.id
    }

    fn validate(form: &SaleForm) -> Result<()> {
        if form.date.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "date",
                message: "sale date is required".to_string(),
            });
        }
        if form.item.trim().is_empty() {
            return Err(Error::InvalidField {
                field: "item",
                message: "sale item is required".to_string(),
            });
        }
        if parse_amount(&form.amount).is_none() {
            return Err(Error::InvalidField {
                field: "amount",
                message: "sale amount must be a number".to_string(),
            });
        }
        Ok(())
    }

    fn create(id: RecordId, form: &SaleForm) -> Self {
        Self {
            id,
            date: form.date.trim().to_string(),
            customer: form.customer.trim().to_string(),
            item: form.item.trim().to_string(),
            amount: coerce_amount(&form.amount),
            payment: form.payment.clone(),
            notes: form.notes.trim().to_string(),
        }
    }

    fn apply(&mut self, form: &SaleForm) {
        self.date = form.date.trim().to_string();
        self.customer = form.customer.trim().to_string();
        self.item = form.item.trim().to_string();
        self.amount = coerce_amount(&form.amount);
        self.payment = form.payment.clone();
        self.notes = form.notes.trim().to_string();
    }

    fn to_form(&self) -> SaleForm {
        SaleForm {
            date: self.date.clone(),
            customer: self.customer.clone(),
            item: self.item.clone(),
            amount: format_amount(self.amount),
            payment: self.payment.clone(),
            notes: self.notes.clone(),
        }
    }
}
