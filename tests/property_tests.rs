//! Property-based tests for identifiers, numeric coercion, and backup
//! round-trips.
//!
//! Uses proptest to verify invariants across random inputs:
//! - Generated ids are pairwise distinct within a session
//! - Coerced amounts are always finite
//! - Record ids preserve their input string
//! - Customer collections survive an export/import round-trip

// Property tests use expect/unwrap for simplicity - panics are acceptable in tests
#![allow(clippy::expect_used, clippy::unwrap_used)]

use proptest::prelude::*;
use std::collections::HashSet;
use tintbook::models::money::{coerce_amount, parse_amount};
use tintbook::{CustomerForm, IdGenerator, MemoryStore, RecordId, Workspace};

proptest! {
    /// Property: ids generated within one session never collide.
    #[test]
    fn prop_generated_ids_are_pairwise_distinct(count in 1usize..300, prefix in "[a-z]{1,3}") {
        let ids = IdGenerator::new();
        let generated: HashSet<RecordId> = (0..count).map(|_| ids.generate(&prefix)).collect();
        prop_assert_eq!(generated.len(), count);
    }

    /// Property: coercion never yields NaN or an infinity.
    #[test]
    fn prop_coerced_amounts_are_finite(raw in ".{0,40}") {
        prop_assert!(coerce_amount(&raw).is_finite());
    }

    /// Property: when parsing succeeds, coercion agrees with it.
    #[test]
    fn prop_coerce_agrees_with_parse(raw in ".{0,40}") {
        if let Some(n) = parse_amount(&raw) {
            prop_assert_eq!(coerce_amount(&raw), n);
        } else {
            prop_assert_eq!(coerce_amount(&raw), 0.0);
        }
    }

    /// Property: `RecordId` preserves its input string exactly.
    #[test]
    fn prop_record_id_preserves_string(s in "[a-zA-Z0-9_-]{1,100}") {
        let id = RecordId::new(&s);
        prop_assert_eq!(id.as_str(), s.as_str());
        prop_assert_eq!(id.to_string(), s);
    }

    /// Property: customer collections survive an export/import round-trip.
    #[test]
    fn prop_customers_round_trip_through_backup(names in prop::collection::vec("[A-Za-z][A-Za-z ]{0,20}", 0..8)) {
        let mut source = Workspace::open(MemoryStore::new());
        for name in &names {
            source.submit_customer(&CustomerForm {
                name: name.clone(),
                ..CustomerForm::default()
            }).unwrap();
        }

        let json = source.export_json().unwrap();
        let mut target = Workspace::open(MemoryStore::new());
        target.import_json(&json).unwrap();

        prop_assert_eq!(target.store().customers(), source.store().customers());
    }
}
