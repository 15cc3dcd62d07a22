//! Trace event and record types.
//!
//! This module defines the events recorded while an inference run executes.

use std::fmt;

use prodsys_foundation::{Fact, Rule, RuleId, WorkingMemory};
use serde::Serialize;

// =============================================================================
// Rule Reference
// =============================================================================

/// Identifies a rule inside a trace: id, name, and priority.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RuleRef {
    /// Position in the knowledge base.
    pub id: RuleId,
    /// Rule name.
    pub name: String,
    /// Rule priority.
    pub priority: i64,
}

impl From<&Rule> for RuleRef {
    fn from(rule: &Rule) -> Self {
        Self {
            id: rule.id,
            name: rule.name.clone(),
            priority: rule.priority,
        }
    }
}

impl fmt::Display for RuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.name)
    }
}

// =============================================================================
// Trace Event
// =============================================================================

/// Events recorded during an inference run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum TraceEvent {
    /// The facts working memory starts from.
    InitialFacts {
        /// Initial working memory.
        facts: WorkingMemory,
    },

    /// A cycle has started.
    CycleStart {
        /// Cycle number, starting at 1.
        cycle: u64,
        /// The conflict set left over from the previous cycle.
        carried: Vec<RuleRef>,
    },

    /// A rule was inserted into the conflict set.
    RuleInserted {
        /// The inserted rule.
        rule: RuleRef,
    },

    /// A rule matched but was left out because it has already fired.
    RuleRefracted {
        /// The excluded rule.
        rule: RuleRef,
    },

    /// The conflict set about to be resolved.
    ConflictSet {
        /// Eligible rules in knowledge-base order.
        rules: Vec<RuleRef>,
    },

    /// A rule was selected to fire.
    Resolved {
        /// The selected rule.
        rule: RuleRef,
        /// The conflict set it was selected from.
        conflict_set: Vec<RuleRef>,
    },

    /// Firing a rule produced a fact.
    FactDerived {
        /// The rule that fired.
        rule: RuleRef,
        /// The produced fact.
        fact: Fact,
    },

    /// Working memory after a firing.
    MemoryUpdated {
        /// Snapshot of working memory.
        facts: WorkingMemory,
    },

    /// The goal is present in working memory.
    GoalReached {
        /// The first fact carrying the goal name.
        fact: Fact,
    },

    /// No rule can fire and the goal is absent.
    GoalNotReached {
        /// The goal name.
        goal: String,
    },
}

impl TraceEvent {
    /// Returns a short name for the event type.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::InitialFacts { .. } => "initial-facts",
            Self::CycleStart { .. } => "cycle-start",
            Self::RuleInserted { .. } => "rule-inserted",
            Self::RuleRefracted { .. } => "rule-refracted",
            Self::ConflictSet { .. } => "conflict-set",
            Self::Resolved { .. } => "resolved",
            Self::FactDerived { .. } => "fact-derived",
            Self::MemoryUpdated { .. } => "memory-updated",
            Self::GoalReached { .. } => "goal-reached",
            Self::GoalNotReached { .. } => "goal-not-reached",
        }
    }

    /// Returns true if this event ends a run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::GoalReached { .. } | Self::GoalNotReached { .. })
    }

    /// Returns true if this is a conflict-set construction or resolution event.
    #[must_use]
    pub fn is_conflict_event(&self) -> bool {
        matches!(
            self,
            Self::RuleInserted { .. }
                | Self::RuleRefracted { .. }
                | Self::ConflictSet { .. }
                | Self::Resolved { .. }
        )
    }
}

// =============================================================================
// Trace Record
// =============================================================================

/// A numbered trace record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TraceRecord {
    /// Record ID, increasing within a run.
    pub id: u64,
    /// The cycle in which this event occurred (0 = before the first cycle).
    pub cycle: u64,
    /// The trace event.
    #[serde(flatten)]
    pub event: TraceEvent,
}

impl TraceRecord {
    /// Creates a new trace record.
    #[must_use]
    pub fn new(id: u64, cycle: u64, event: TraceEvent) -> Self {
        Self { id, cycle, event }
    }

    /// Returns the event type name.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        self.event.event_type()
    }
}

// =============================================================================
// Tests
// =============================================================================
