//! The rendered step trace of complete runs.

use prodsys_debug::TracerConfig;
use prodsys_engine::InferenceDriver;
use prodsys_foundation::{Configuration, Fact, KnowledgeBase, RuleDraft};

fn fixture() -> (KnowledgeBase, Configuration) {
    let config = Configuration::builder()
        .numeric("Temp")
        .nominal("Alert")
        .goal("Alert")
        .priorities([1])
        .build()
        .unwrap();
    let kb = KnowledgeBase::build(
        "Weather",
        vec![RuleDraft::new("R1", Fact::new("Alert", "High")).with_condition("Temp", ">=", "25")],
        &config,
    )
    .unwrap();
    (kb, config)
}

#[test]
fn human_trace_of_a_single_firing() {
    let (kb, config) = fixture();
    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "30")])
        .run()
        .unwrap();

    let expected = "Initial facts: [Temp=30]\n\
        \n\
        Iteration 1:\n\
        \tConflict set at start: {  }\n\
        \t\tInserted [R1] into the conflict set\n\
        \tConflict set to resolve: { [R1] }\n\
        \tResolved with R1 (priority 1) the conflict set: { [R1] }\n\
        \n\
        \tObtained new fact Alert=High\n\
        \n\
        Updated working memory: [Temp=30][Alert=High]\n\
        \n\
        Goal reached: Alert=High";
    assert_eq!(outcome.render_trace(), expected);
}

#[test]
fn human_trace_of_a_stall_after_refraction() {
    let (kb, _) = fixture();
    let config = Configuration::builder()
        .numeric("Temp")
        .goal("Fan")
        .priorities([1])
        .build()
        .unwrap();
    let outcome = InferenceDriver::new(&kb, &config, [Fact::new("Temp", "30")])
        .run()
        .unwrap();

    let trace = outcome.render_trace();
    assert!(trace.contains("Iteration 2:\n\tConflict set at start: { [R1] }"));
    assert!(trace.contains("\t\tLeft [R1] out of the conflict set: it has already been applied"));
    assert!(trace.ends_with("\nThe goal Fan could not be reached"));
}

#[test]
fn json_trace_is_one_object_per_line() {
    let (kb, config) = fixture();
    let outcome = InferenceDriver::with_tracer(
        &kb,
        &config,
        [Fact::new("Temp", "30")],
        TracerConfig::new().json(),
    )
    .run()
    .unwrap();

    let events: Vec<String> = outcome
        .render_trace()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            value["event"].as_str().unwrap().to_string()
        })
        .collect();
    assert_eq!(events.first().map(String::as_str), Some("initial-facts"));
    assert_eq!(events.last().map(String::as_str), Some("goal-reached"));
    assert_eq!(events.len(), outcome.trace_buffer().len());
}
