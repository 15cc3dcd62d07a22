//! Integration tests for batch evaluation
//!
//! Tests that parallel runs agree with sequential ones.

use prodsys_engine::{BatchRunner, InferenceDriver};
use prodsys_foundation::{Configuration, Fact, KnowledgeBase, RuleDraft};

fn fixture() -> (KnowledgeBase, Configuration) {
    let config = Configuration::builder()
        .numeric("Temp")
        .nominal("Alert")
        .nominal("Fan")
        .goal("Fan")
        .priorities([1, 3, 2])
        .build()
        .unwrap();
    let kb = KnowledgeBase::build(
        "climate",
        vec![
            RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">", "30"),
            RuleDraft::new("R2", Fact::new("Alert", "Mild"))
                .with_condition("Temp", ">=", "20")
                .with_condition("Temp", "<=", "30"),
            RuleDraft::new("R3", Fact::new("Fan", "on")).with_condition("Alert", "=", "High"),
        ],
        &config,
    )
    .unwrap();
    (kb, config)
}

#[test]
fn batch_matches_sequential_runs() {
    let (kb, config) = fixture();
    let sets: Vec<Vec<Fact>> = (0..60)
        .map(|t| vec![Fact::new("Temp", t.to_string())])
        .collect();

    let batch = BatchRunner::new(&kb, &config).run_all(&sets);

    for (facts, result) in sets.iter().zip(&batch) {
        let parallel = result.as_ref().unwrap();
        let sequential = InferenceDriver::new(&kb, &config, facts.iter().cloned())
            .run()
            .unwrap();

        assert_eq!(parallel.status, sequential.status);
        assert_eq!(parallel.fired, sequential.fired);
        assert_eq!(parallel.summary, sequential.summary);
    }
}

#[test]
fn empty_batch() {
    let (kb, config) = fixture();
    assert!(BatchRunner::new(&kb, &config).run_all(&[]).is_empty());
}
