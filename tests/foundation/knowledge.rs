//! Integration tests for knowledge-base validation
//!
//! Tests attribute resolution, operator checks, and priority assignment.

use prodsys_foundation::{
    AttributeDecl, Configuration, ErrorKind, Fact, KnowledgeBase, Literal, NumericPolicy,
    Operator, RuleDraft, RuleId,
};

fn config(priorities: &[i64]) -> Configuration {
    Configuration::builder()
        .numeric("Temp")
        .attribute(AttributeDecl::nominal(
            "Sky",
            vec!["clear".into(), "cloudy".into()],
        ))
        .nominal("Alert")
        .goal("Alert")
        .priorities(priorities.iter().copied())
        .build()
        .unwrap()
}

fn draft(name: &str) -> RuleDraft {
    RuleDraft::new(name, Fact::new("Alert", "High"))
}

// =============================================================================
// Successful Builds
// =============================================================================

#[test]
fn priorities_are_positional() {
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            draft("R1").with_condition("Temp", ">=", "25"),
            draft("R2").with_condition("Sky", "=", "clear"),
        ],
        &config(&[3, -1]),
    )
    .unwrap();

    assert_eq!(kb.domain(), "weather");
    assert_eq!(kb.len(), 2);
    assert_eq!(kb.get(RuleId(0)).unwrap().priority, 3);
    assert_eq!(kb.get(RuleId(1)).unwrap().priority, -1);
    assert!(kb.get(RuleId(2)).is_none());
}

#[test]
fn conditions_are_typed_by_attribute_kind() {
    let kb = KnowledgeBase::build(
        "weather",
        vec![
            draft("R1")
                .with_condition("Temp", "<", "-5")
                .with_condition("Sky", "=", "cloudy"),
        ],
        &config(&[1]),
    )
    .unwrap();

    let rule = &kb.rules()[0];
    assert_eq!(rule.conditions[0].operator, Operator::Lt);
    assert_eq!(rule.conditions[0].literal, Literal::Int(-5));
    assert_eq!(rule.conditions[1].literal, Literal::Label("cloudy".into()));
}

#[test]
fn undeclared_label_is_accepted() {
    let kb = KnowledgeBase::build(
        "weather",
        vec![draft("R1").with_condition("Sky", "=", "stormy")],
        &config(&[1]),
    );
    assert!(kb.is_ok());
}

#[test]
fn duplicate_rule_names_get_distinct_ids() {
    let kb = KnowledgeBase::build("d", vec![draft("R1"), draft("R1")], &config(&[1, 1])).unwrap();
    assert_ne!(kb.rules()[0].id, kb.rules()[1].id);
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn unknown_attribute() {
    let err = KnowledgeBase::build(
        "d",
        vec![draft("R9").with_condition("Wind", "=", "strong")],
        &config(&[1]),
    )
    .unwrap_err();

    match &err.kind {
        ErrorKind::UnknownAttribute { attribute, rule } => {
            assert_eq!(attribute, "Wind");
            assert_eq!(rule, "R9");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(err.context.unwrap().stack, vec!["R9".to_string()]);
}

#[test]
fn ordering_operator_on_nominal_attribute() {
    let err = KnowledgeBase::build(
        "d",
        vec![draft("R1").with_condition("Sky", ">=", "clear")],
        &config(&[1]),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOperator { .. }));
}

#[test]
fn unknown_operator() {
    let err = KnowledgeBase::build(
        "d",
        vec![draft("R1").with_condition("Temp", "=>", "3")],
        &config(&[1]),
    )
    .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidOperator { .. }));
}

#[test]
fn non_integer_numeric_literal() {
    let drafts = vec![draft("R1").with_condition("Temp", ">=", "hot")];

    let err = KnowledgeBase::build("d", drafts.clone(), &config(&[1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NonNumericValue { .. }));

    let lenient = config(&[1]).with_numeric_policy(NumericPolicy::ZeroFallback);
    let kb = KnowledgeBase::build("d", drafts, &lenient).unwrap();
    assert_eq!(kb.rules()[0].conditions[0].literal, Literal::Int(0));
}

#[test]
fn priority_count_mismatch() {
    let err = KnowledgeBase::build("d", vec![draft("R1")], &config(&[1, 2])).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::PriorityMismatch {
            rules: 1,
            priorities: 2
        }
    ));
}

#[test]
fn nameless_rule() {
    let err = KnowledgeBase::build("d", vec![draft("")], &config(&[1])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MalformedRule { .. }));
}
