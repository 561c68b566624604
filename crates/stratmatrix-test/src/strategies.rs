//! `proptest` strategies for ratings and records.

use proptest::prelude::*;
use stratmatrix_core::{Rating, Record, RecordSet};

pub fn arb_rating() -> impl Strategy<Value = Rating> {
    prop_oneof![Just(Rating::Low), Just(Rating::Medium), Just(Rating::High)]
}

pub fn arb_record() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z][A-Za-z ]{0,30}",
        arb_rating(),
        arb_rating(),
        arb_rating(),
    )
        .prop_map(|(name, a, f, bv)| Record::new(name, a, f, bv))
}

pub fn arb_record_set(max_len: usize) -> impl Strategy<Value = RecordSet> {
    prop::collection::vec(arb_record(), 0..=max_len).prop_map(RecordSet::from)
}
