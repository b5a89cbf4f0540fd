//! Entity kinds and the descriptor trait shared by the CRUD controller.

use crate::Result;
use crate::models::RecordId;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

/// The three record kinds the store manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A customer on file.
    Customer,
    /// A scheduled appointment.
    Appointment,
    /// A recorded sale.
    Sale,
}

impl EntityKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Appointment => "appointment",
            Self::Sale => "sale",
        }
    }

    /// Returns the id prefix for this kind. Debuggability only.
    #[must_use]
    pub const fn id_prefix(&self) -> &'static str {
        match self {
            Self::Customer => "c",
            Self::Appointment => "a",
            Self::Sale => "s",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Descriptor trait for record types managed by the shared CRUD lifecycle.
///
/// Each entity declares its kind tag, its raw form input, and how forms are
/// validated, merged onto the default shape at creation, applied over an
/// existing record, and extracted back out to pre-populate an edit form.
pub trait Entity: Clone + Serialize + DeserializeOwned {
    /// The kind tag for this entity.
    const KIND: EntityKind;

    /// The raw field set submitted from a form.
    type Form: Clone;

    /// Returns the record's identifier.
    fn id(&self) -> &RecordId;

    /// Checks required fields, reporting the first offending field via
    /// [`Error::InvalidField`](crate::Error::InvalidField).
    fn validate(form: &Self::Form) -> Result<()>;

    /// Builds a new record from the default shape merged with the form.
    fn create(id: RecordId, form: &Self::Form) -> Self;

    /// Applies form fields over an existing record, preserving the id.
    fn apply(&mut self, form: &Self::Form);

    /// Extracts the current field values for pre-populating an edit form.
    fn to_form(&self) -> Self::Form;
}
