//! Integration tests for working memory
//!
//! Tests append order, lookup by name, and snapshot independence.

use prodsys_foundation::{Fact, WorkingMemory};
use proptest::prelude::*;

#[test]
fn find_returns_first_fact_with_name() {
    let memory: WorkingMemory = [
        Fact::new("Alert", "Low"),
        Fact::new("Temp", "3"),
        Fact::new("Alert", "High"),
    ]
    .into_iter()
    .collect();

    assert_eq!(memory.find("Alert"), Some(&Fact::new("Alert", "Low")));
    assert_eq!(memory.named("Alert").count(), 2);
    assert!(memory.find("Sky").is_none());
}

#[test]
fn snapshots_do_not_see_later_pushes() {
    let mut memory = WorkingMemory::new();
    memory.push(Fact::new("A", "1"));
    let snapshot = memory.snapshot();
    memory.push(Fact::new("B", "2"));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(memory.len(), 2);
    assert_eq!(memory.to_string(), "[A=1][B=2]");
}

proptest! {
    #[test]
    fn push_preserves_order(values in proptest::collection::vec("[a-z]{1,4}", 0..50)) {
        let mut memory = WorkingMemory::new();
        for (i, v) in values.iter().enumerate() {
            memory.push(Fact::new(format!("F{i}"), v.clone()));
        }

        prop_assert_eq!(memory.len(), values.len());
        for (i, fact) in memory.iter().enumerate() {
            prop_assert_eq!(&fact.value, &values[i]);
        }
    }
}
