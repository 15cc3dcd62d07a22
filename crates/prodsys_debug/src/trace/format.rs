//! Trace output formatters.
//!
//! Provides human-readable and JSON formatters for trace records.

use std::fmt::Write;

use super::record::{RuleRef, TraceEvent, TraceRecord};

// =============================================================================
// Trace Formatter Trait
// =============================================================================

/// Trait for formatting trace records.
pub trait TraceFormatter {
    /// Formats a single trace record to a string.
    fn format(&self, record: &TraceRecord) -> String;

    /// Formats multiple records, one per line.
    fn format_many(&self, records: &[TraceRecord]) -> String {
        records
            .iter()
            .map(|r| self.format(r))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

// =============================================================================
// Human-Readable Formatter
// =============================================================================

/// Formats trace records as the indented, step-by-step reasoning log.
#[derive(Clone, Copy, Debug, Default)]
pub struct HumanFormatter;

impl HumanFormatter {
    /// Creates a new human formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn rule_set(rules: &[RuleRef]) -> String {
        let mut out = String::from("{ ");
        for rule in rules {
            let _ = write!(out, "{rule}");
        }
        out.push_str(" }");
        out
    }
}

impl TraceFormatter for HumanFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        match &record.event {
            TraceEvent::InitialFacts { facts } => format!("Initial facts: {facts}\n"),
            TraceEvent::CycleStart { cycle, carried } => format!(
                "Iteration {cycle}:\n\tConflict set at start: {}",
                Self::rule_set(carried)
            ),
            TraceEvent::RuleInserted { rule } => {
                format!("\t\tInserted {rule} into the conflict set")
            }
            TraceEvent::RuleRefracted { rule } => format!(
                "\t\tLeft {rule} out of the conflict set: it has already been applied"
            ),
            TraceEvent::ConflictSet { rules } => {
                format!("\tConflict set to resolve: {}", Self::rule_set(rules))
            }
            TraceEvent::Resolved { rule, conflict_set } => format!(
                "\tResolved with {} (priority {}) the conflict set: {}",
                rule.name,
                rule.priority,
                Self::rule_set(conflict_set)
            ),
            TraceEvent::FactDerived { fact, .. } => format!("\n\tObtained new fact {fact}"),
            TraceEvent::MemoryUpdated { facts } => {
                format!("\nUpdated working memory: {facts}\n")
            }
            TraceEvent::GoalReached { fact } => format!("Goal reached: {fact}"),
            TraceEvent::GoalNotReached { goal } => {
                format!("\nThe goal {goal} could not be reached")
            }
        }
    }
}

// =============================================================================
// JSON Formatter
// =============================================================================

/// Formats trace records as compact JSON, one object per record, so
/// [`TraceFormatter::format_many`] yields JSON lines.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TraceFormatter for JsonFormatter {
    fn format(&self, record: &TraceRecord) -> String {
        serde_json::to_string(record).unwrap_or_else(|e| {
            serde_json::json!({ "id": record.id, "error": e.to_string() }).to_string()
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
