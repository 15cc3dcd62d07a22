//! Step tracing for inference runs.
//!
//! Every conflict-set insertion, resolution decision, derived fact, and
//! working-memory snapshot is recorded in order. The trace belongs to the run
//! that produced it; nothing here is global.
//!
//! # Example
//!
//! ```text
//! Initial facts: [Temp=30]
//!
//! Iteration 1:
//!     Conflict set at start: {  }
//!         Inserted [R1] into the conflict set
//!     Conflict set to resolve: { [R1] }
//!     Resolved with R1 (priority 1) the conflict set: { [R1] }
//!
//!     Obtained new fact Alert=High
//!
//! Updated working memory: [Temp=30][Alert=High]
//!
//! Goal reached: Alert=High
//! ```

pub mod buffer;
pub mod format;
pub mod record;

pub use buffer::TraceBuffer;
pub use format::{HumanFormatter, JsonFormatter, TraceFormatter};
pub use record::{RuleRef, TraceEvent, TraceRecord};

use prodsys_foundation::{Fact, WorkingMemory};

// =============================================================================
// Tracer Configuration
// =============================================================================

/// Configuration for the tracer.
#[derive(Clone, Debug)]
pub struct TracerConfig {
    /// Whether events are recorded.
    pub enabled: bool,
    /// Whether [`Tracer::render`] produces JSON lines.
    pub json_format: bool,
}

impl Default for TracerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            json_format: false,
        }
    }
}

impl TracerConfig {
    /// Creates a new tracer configuration (enabled, human-readable).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to turn recording off.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Builder method to use JSON format.
    #[must_use]
    pub fn json(mut self) -> Self {
        self.json_format = true;
        self
    }
}

// =============================================================================
// Tracer
// =============================================================================

/// Records the events of one inference run.
///
/// When disabled, `record` returns immediately, which keeps batch runs cheap.
#[derive(Clone, Debug)]
pub struct Tracer {
    config: TracerConfig,
    buffer: TraceBuffer,
    current_cycle: u64,
}

impl Tracer {
    /// Creates a new tracer with the given configuration.
    #[must_use]
    pub fn new(config: TracerConfig) -> Self {
        Self {
            config,
            buffer: TraceBuffer::new(),
            current_cycle: 0,
        }
    }

    /// Creates a tracer that records nothing.
    #[must_use]
    pub fn disabled() -> Self {
        Self::new(TracerConfig::new().disabled())
    }

    /// Returns whether tracing is enabled.
    #[must_use]
    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Records a trace event in the current cycle.
    #[inline]
    pub fn record(&mut self, event: TraceEvent) {
        if !self.config.enabled {
            return;
        }
        self.buffer.push(self.current_cycle, event);
    }

    /// Returns the trace buffer.
    #[must_use]
    pub fn buffer(&self) -> &TraceBuffer {
        &self.buffer
    }

    /// Renders the whole trace in the configured format.
    #[must_use]
    pub fn render(&self) -> String {
        if self.config.json_format {
            JsonFormatter::new().format_many(self.buffer.records())
        } else {
            HumanFormatter::new().format_many(self.buffer.records())
        }
    }

    // -------------------------------------------------------------------------
    // Convenience methods for common events
    // -------------------------------------------------------------------------

    /// Records the initial working memory.
    #[inline]
    pub fn initial_facts(&mut self, facts: &WorkingMemory) {
        self.record(TraceEvent::InitialFacts {
            facts: facts.snapshot(),
        });
    }

    /// Starts a new cycle, recording the conflict set carried into it.
    #[inline]
    pub fn cycle_start(&mut self, cycle: u64, carried: &[RuleRef]) {
        self.current_cycle = cycle;
        self.record(TraceEvent::CycleStart {
            cycle,
            carried: carried.to_vec(),
        });
    }

    /// Records a conflict-set insertion.
    #[inline]
    pub fn rule_inserted(&mut self, rule: RuleRef) {
        self.record(TraceEvent::RuleInserted { rule });
    }

    /// Records a rule excluded by refractoriness.
    #[inline]
    pub fn rule_refracted(&mut self, rule: RuleRef) {
        self.record(TraceEvent::RuleRefracted { rule });
    }

    /// Records the conflict set about to be resolved.
    #[inline]
    pub fn conflict_set(&mut self, rules: &[RuleRef]) {
        self.record(TraceEvent::ConflictSet {
            rules: rules.to_vec(),
        });
    }

    /// Records a resolution decision.
    #[inline]
    pub fn resolved(&mut self, rule: RuleRef, conflict_set: &[RuleRef]) {
        self.record(TraceEvent::Resolved {
            rule,
            conflict_set: conflict_set.to_vec(),
        });
    }

    /// Records a derived fact.
    #[inline]
    pub fn fact_derived(&mut self, rule: RuleRef, fact: Fact) {
        self.record(TraceEvent::FactDerived { rule, fact });
    }

    /// Records a working-memory snapshot.
    #[inline]
    pub fn memory_updated(&mut self, facts: &WorkingMemory) {
        self.record(TraceEvent::MemoryUpdated {
            facts: facts.snapshot(),
        });
    }

    /// Records that the goal is known.
    #[inline]
    pub fn goal_reached(&mut self, fact: Fact) {
        self.record(TraceEvent::GoalReached { fact });
    }

    /// Records that the run stalled.
    #[inline]
    pub fn goal_not_reached(&mut self, goal: impl Into<String>) {
        self.record(TraceEvent::GoalNotReached { goal: goal.into() });
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new(TracerConfig::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
