//! Property tests for inference invariants
//!
//! Random knowledge bases over a small attribute vocabulary, checked for
//! monotonic memory, refractoriness, termination, and determinism.

use std::collections::HashSet;

use prodsys_debug::TracerConfig;
use prodsys_engine::{InferenceDriver, InferenceOutcome, RunStatus};
use prodsys_foundation::{
    Condition, Configuration, Fact, KnowledgeBase, Operator, Rule, RuleId,
};
use proptest::prelude::*;

const OPERATORS: [Operator; 5] = [
    Operator::Eq,
    Operator::Ge,
    Operator::Le,
    Operator::Lt,
    Operator::Gt,
];

fn label(flag: bool) -> &'static str {
    if flag { "a" } else { "b" }
}

fn condition() -> impl Strategy<Value = Condition> {
    prop_oneof![
        (0..3usize, 0..OPERATORS.len(), -5i64..5).prop_map(|(attr, op, threshold)| {
            Condition::numeric(format!("N{attr}"), OPERATORS[op], threshold)
        }),
        (0..4usize, any::<bool>())
            .prop_map(|(attr, flag)| Condition::nominal(format!("L{attr}"), label(flag))),
    ]
}

fn rule() -> impl Strategy<Value = Rule> {
    (
        proptest::collection::vec(condition(), 0..3),
        0..5usize,
        any::<bool>(),
        -3i64..3,
    )
        .prop_map(|(conditions, target, flag, priority)| {
            let fact = if target == 4 {
                Fact::new("G", label(flag))
            } else {
                Fact::new(format!("L{target}"), label(flag))
            };
            conditions.into_iter().fold(
                Rule::new(RuleId(0), "R", fact).with_priority(priority),
                Rule::with_condition,
            )
        })
}

fn knowledge_base() -> impl Strategy<Value = KnowledgeBase> {
    proptest::collection::vec(rule(), 0..12).prop_map(|rules| {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.name = format!("R{}", i % 4);
                r
            })
            .collect();
        KnowledgeBase::from_rules("random", rules)
    })
}

fn initial_facts() -> impl Strategy<Value = Vec<Fact>> {
    proptest::collection::vec(
        (0..3usize, -5i64..5).prop_map(|(attr, v)| Fact::new(format!("N{attr}"), v.to_string())),
        0..5,
    )
}

fn config() -> Configuration {
    Configuration::builder().goal("G").build().unwrap()
}

fn run(kb: &KnowledgeBase, facts: &[Fact]) -> InferenceOutcome {
    InferenceDriver::with_tracer(
        kb,
        &config(),
        facts.iter().cloned(),
        TracerConfig::new().disabled(),
    )
    .run()
    .unwrap()
}

proptest! {
    #[test]
    fn memory_is_initial_facts_then_fired_consequents(kb in knowledge_base(), facts in initial_facts()) {
        let outcome = run(&kb, &facts);

        let memory: Vec<_> = outcome.memory.iter().cloned().collect();
        prop_assert_eq!(&memory[..facts.len()], &facts[..]);

        let derived: Vec<_> = outcome
            .fired
            .iter()
            .map(|r| kb.get(r.id).unwrap().consequent.clone())
            .collect();
        prop_assert_eq!(&memory[facts.len()..], &derived[..]);
    }

    #[test]
    fn no_rule_fires_twice(kb in knowledge_base(), facts in initial_facts()) {
        let outcome = run(&kb, &facts);
        let unique: HashSet<_> = outcome.fired.iter().map(|r| r.id).collect();
        prop_assert_eq!(unique.len(), outcome.fired.len());
    }

    #[test]
    fn runs_terminate_within_rule_count(kb in knowledge_base(), facts in initial_facts()) {
        let outcome = run(&kb, &facts);
        prop_assert!(outcome.fired.len() <= kb.len());
        prop_assert!(outcome.cycles <= kb.len() as u64 + 1);
        prop_assert!(outcome.status != RunStatus::Running);
    }

    #[test]
    fn status_agrees_with_memory(kb in knowledge_base(), facts in initial_facts()) {
        let outcome = run(&kb, &facts);
        let known = outcome.memory.find("G").is_some();
        prop_assert_eq!(outcome.status == RunStatus::GoalReached, known);
        prop_assert_eq!(outcome.summary.is_reached(), known);
    }

    #[test]
    fn runs_are_deterministic(kb in knowledge_base(), facts in initial_facts()) {
        let first = run(&kb, &facts);
        let second = run(&kb, &facts);
        prop_assert_eq!(first.fired, second.fired);
        prop_assert_eq!(first.cycles, second.cycles);
    }
}
