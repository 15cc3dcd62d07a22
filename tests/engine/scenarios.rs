//! Integration tests for complete inference runs
//!
//! Tests goal resolution, stalling, conflict resolution, and chaining.

use prodsys_engine::{InferenceDriver, RunStatus};
use prodsys_foundation::{
    Condition, Configuration, Fact, KnowledgeBase, Operator, Rule, RuleDraft, RuleId,
};

fn config(goal: &str, priorities: &[i64]) -> Configuration {
    Configuration::builder()
        .numeric("Temp")
        .nominal("Sky")
        .nominal("Alert")
        .nominal("Fan")
        .goal(goal)
        .priorities(priorities.iter().copied())
        .build()
        .unwrap()
}

// =============================================================================
// Single Rule
// =============================================================================

#[test]
fn hot_day_raises_alert() {
    let config = config("Alert", &[1]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "25")],
        &config,
    )
    .unwrap();

    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "30")])
        .run()
        .unwrap();

    assert_eq!(outcome.status, RunStatus::GoalReached);
    assert_eq!(outcome.goal, Some(Fact::new("Alert", "High")));
    assert_eq!(outcome.summary.chain().len(), 1);
    assert_eq!(outcome.summary.chain()[0].name, "R1");
    assert_eq!(outcome.summary.chain()[0].priority, 1);
}

#[test]
fn cold_day_stalls() {
    let config = config("Alert", &[1]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "25")],
        &config,
    )
    .unwrap();

    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "10")])
        .run()
        .unwrap();

    assert_eq!(outcome.status, RunStatus::Stalled);
    assert!(outcome.fired.is_empty());
    assert_eq!(
        outcome.summary.to_string(),
        "Domain: weather\n\nThe goal Alert could not be reached\n"
    );
}

// =============================================================================
// Conflict Resolution
// =============================================================================

#[test]
fn higher_priority_rule_fires_first() {
    let config = config("Alert", &[2, 5]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "25"),
            RuleDraft::new("R2", Fact::new("Alert", "Low")).with_condition("Temp", ">=", "20"),
        ],
        &config,
    )
    .unwrap();

    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "30")])
        .run()
        .unwrap();

    assert_eq!(outcome.status, RunStatus::GoalReached);
    assert_eq!(outcome.fired.len(), 1);
    assert_eq!(outcome.fired[0].name, "R2");
    assert_eq!(outcome.goal, Some(Fact::new("Alert", "Low")));
    assert!(
        outcome
            .summary
            .to_string()
            .ends_with("Applied reasoning:\n\tRule [R2] with priority 5\n")
    );
}

#[test]
fn equal_priorities_fire_in_knowledge_base_order() {
    let config = config("Fan", &[4, 4, 4]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            RuleDraft::new("A", Fact::new("Sky", "clear")),
            RuleDraft::new("B", Fact::new("Alert", "Low")),
            RuleDraft::new("C", Fact::new("Fan", "on")),
        ],
        &config,
    )
    .unwrap();

    let outcome = InferenceDriver::new(&kb, &config, Vec::new()).run().unwrap();

    let names: Vec<_> = outcome.fired.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    assert_eq!(outcome.cycles, 3);
}

// =============================================================================
// Chaining
// =============================================================================

#[test]
fn derived_facts_enable_later_rules() {
    let config = config("Fan", &[1, 9]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">", "28"),
            RuleDraft::new("R2", Fact::new("Fan", "on"))
                .with_condition("Alert", "=", "High")
                .with_condition("Sky", "=", "clear"),
        ],
        &config,
    )
    .unwrap();

    let facts = [Fact::new("Temp", "29"), Fact::new("Sky", "clear")];
    let outcome = InferenceDriver::new(&kb, &config, facts).run().unwrap();

    let names: Vec<_> = outcome.fired.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["R1", "R2"]);
    assert_eq!(
        outcome.memory.to_string(),
        "[Temp=29][Sky=clear][Alert=High][Fan=on]"
    );
}

#[test]
fn stalls_after_exhausting_rules() {
    let config = config("Fan", &[1]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "0")],
        &config,
    )
    .unwrap();

    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "5")])
        .run()
        .unwrap();

    assert_eq!(outcome.status, RunStatus::Stalled);
    assert_eq!(outcome.fired.len(), 1);
    assert_eq!(outcome.cycles, 2);
    assert_eq!(outcome.trace_buffer().by_event_type("rule-refracted").len(), 1);
}

#[test]
fn goal_already_known() {
    let config = config("Sky", &[1]);
    let kb = KnowledgeBase::from_rules(
        "weather",
        vec![
            Rule::new(RuleId(0), "R1", Fact::new("Alert", "High"))
                .with_condition(Condition::numeric("Temp", Operator::Ge, 0))
                .with_priority(1),
        ],
    );

    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Sky", "clear")])
        .run()
        .unwrap();

    assert_eq!(outcome.status, RunStatus::GoalReached);
    assert_eq!(outcome.cycles, 0);
    assert!(outcome.summary.chain().is_empty());
}

#[test]
fn step_by_step() {
    let config = config("Fan", &[1, 2]);
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "25"),
            RuleDraft::new("R2", Fact::new("Fan", "on")).with_condition("Alert", "=", "High"),
        ],
        &config,
    )
    .unwrap();

    let mut driver = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "25")]);
    assert_eq!(driver.status(), RunStatus::Running);

    assert_eq!(driver.step().unwrap(), RunStatus::Running);
    assert_eq!(driver.memory().len(), 2);
    assert!(driver.fired().contains(RuleId(0)));

    assert_eq!(driver.step().unwrap(), RunStatus::GoalReached);
    assert_eq!(driver.cycle(), 2);
}
