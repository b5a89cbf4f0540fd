//! The shared create/update/delete lifecycle.
//!
//! One generic implementation drives all three record kinds; the per-kind
//! [`Workspace`](crate::Workspace) methods hand it the matching collection
//! and editing pointer. A kind is in creation mode while its pointer is
//! `None` and in editing mode while the pointer holds a target id.

use crate::Result;
use crate::models::{Entity, IdGenerator, RecordId};

/// Outcome of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submitted {
    /// A new record was appended.
    Created(RecordId),
    /// An existing record was overwritten in place.
    Updated(RecordId),
    /// The editing pointer was stale; nothing was written.
    Skipped,
}

impl Submitted {
    /// Returns the id of the affected record, if one was written.
    #[must_use]
    pub const fn id(&self) -> Option<&RecordId> {
        match self {
            Self::Created(id) | Self::Updated(id) => Some(id),
            Self::Skipped => None,
        }
    }
}

/// Validates and applies a submitted form.
///
/// In creation mode appends a new record; in editing mode overwrites the
/// pointer's target, or skips when the target has vanished. Validation
/// failures leave both the collection and the pointer untouched. The
/// pointer is cleared on every path that passes validation.
pub(crate) fn submit<E: Entity>(
    records: &mut Vec<E>,
    editing: &mut Option<RecordId>,
    ids: &IdGenerator,
    form: &E::Form,
) -> Result<Submitted> {
    E::validate(form)?;

    if let Some(target) = editing.take() {
        let Some(record) = records.iter_mut().find(|r| *r.id() == target) else {
            tracing::debug!(
                kind = E::KIND.as_str(),
                id = %target,
                "editing pointer is stale, skipping update"
            );
            return Ok(Submitted::Skipped);
        };
        record.apply(form);
        tracing::debug!(kind = E::KIND.as_str(), id = %target, "record updated");
        return Ok(Submitted::Updated(target));
    }

    let id = ids.generate(E::KIND.id_prefix());
    records.push(E::create(id.clone(), form));
    tracing::debug!(kind = E::KIND.as_str(), id = %id, "record created");
    Ok(Submitted::Created(id))
}

/// Starts editing `id`, returning its current field values for
/// pre-populating an edit form. When the record does not exist this is a
/// no-op returning `None` and the pointer is left untouched.
pub(crate) fn begin_edit<E: Entity>(
    records: &[E],
    editing: &mut Option<RecordId>,
    id: &RecordId,
) -> Option<E::Form> {
    let record = records.iter().find(|r| r.id() == id)?;
    *editing = Some(id.clone());
    Some(record.to_form())
}

/// Removes `id` from the collection, clearing the editing pointer when it
/// referenced the deleted record. Returns whether a record was removed;
/// deleting an absent id is a no-op.
pub(crate) fn delete<E: Entity>(
    records: &mut Vec<E>,
    editing: &mut Option<RecordId>,
    id: &RecordId,
) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);

    if editing.as_ref() == Some(id) {
        *editing = None;
    }
    records.len() != before
}
