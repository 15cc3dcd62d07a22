//! The forward-chaining inference loop.
//!
//! Each cycle:
//! 1. Builds the conflict set over current working memory, minus fired rules
//! 2. If it is non-empty, resolves it to one rule, fires it, and appends the
//!    consequent to working memory
//! 3. Stops with [`RunStatus::GoalReached`] if a fact named like the goal is
//!    now known
//! 4. Stops with [`RunStatus::Stalled`] if the conflict set was empty
//!
//! The goal is also tested once against the initial facts, before any rule
//! fires. A rule fires at most once per run and every non-terminal cycle
//! fires a rule, so a run ends after at most `rules + 1` cycles.

use std::fmt;

use prodsys_debug::{ResolutionSummary, RuleRef, TraceBuffer, Tracer, TracerConfig};
use prodsys_foundation::{Configuration, Fact, KnowledgeBase, Result, WorkingMemory};

use crate::conflict::{ConflictSetBuilder, FiredRules};
use crate::matcher::AttributeMatcher;
use crate::resolver::ConflictResolver;

// =============================================================================
// Run Status
// =============================================================================

/// State of an inference run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    /// More cycles may run.
    Running,
    /// The goal fact is in working memory.
    GoalReached,
    /// No rule can fire and the goal is unknown.
    Stalled,
}

impl RunStatus {
    /// Returns true for `GoalReached` and `Stalled`.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Running)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::GoalReached => write!(f, "goal reached"),
            Self::Stalled => write!(f, "stalled"),
        }
    }
}

// =============================================================================
// Outcome
// =============================================================================

/// Everything a finished run produced.
#[derive(Clone, Debug)]
pub struct InferenceOutcome {
    /// Terminal status.
    pub status: RunStatus,
    /// The goal fact, when reached.
    pub goal: Option<Fact>,
    /// Fired rules in firing order.
    pub fired: Vec<RuleRef>,
    /// Final working memory.
    pub memory: WorkingMemory,
    /// Number of cycles run.
    pub cycles: u64,
    /// The step trace.
    pub trace: Tracer,
    /// The resolution summary.
    pub summary: ResolutionSummary,
}

impl InferenceOutcome {
    /// Returns true if the goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.status == RunStatus::GoalReached
    }

    /// Returns the trace records.
    #[must_use]
    pub fn trace_buffer(&self) -> &TraceBuffer {
        self.trace.buffer()
    }

    /// Renders the step trace in the tracer's configured format.
    #[must_use]
    pub fn render_trace(&self) -> String {
        self.trace.render()
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Runs forward chaining over one set of initial facts.
///
/// The driver owns working memory, the fired-rule record, and the trace for
/// exactly one run. The knowledge base and configuration are only borrowed
/// and may be shared by many drivers at once.
pub struct InferenceDriver<'a> {
    kb: &'a KnowledgeBase,
    config: &'a Configuration,
    builder: ConflictSetBuilder<'a>,
    memory: WorkingMemory,
    fired: FiredRules,
    tracer: Tracer,
    status: RunStatus,
    cycle: u64,
    carried: Vec<RuleRef>,
    goal: Option<Fact>,
}

impl<'a> InferenceDriver<'a> {
    /// Starts a run with the default (enabled, human-readable) tracer.
    #[must_use]
    pub fn new(
        kb: &'a KnowledgeBase,
        config: &'a Configuration,
        initial: impl IntoIterator<Item = Fact>,
    ) -> Self {
        Self::with_tracer(kb, config, initial, TracerConfig::default())
    }

    /// Starts a run with a specific tracer configuration.
    ///
    /// Records the initial facts and tests the goal against them.
    #[must_use]
    pub fn with_tracer(
        kb: &'a KnowledgeBase,
        config: &'a Configuration,
        initial: impl IntoIterator<Item = Fact>,
        tracer_config: TracerConfig,
    ) -> Self {
        let memory: WorkingMemory = initial.into_iter().collect();
        let mut tracer = Tracer::new(tracer_config);
        tracer.initial_facts(&memory);

        let mut driver = Self {
            kb,
            config,
            builder: ConflictSetBuilder::new(kb, AttributeMatcher::new(config.numeric_policy())),
            memory,
            fired: FiredRules::new(),
            tracer,
            status: RunStatus::Running,
            cycle: 0,
            carried: Vec::new(),
            goal: None,
        };
        driver.check_goal();
        driver
    }

    /// Returns the current status.
    #[must_use]
    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// Returns the number of cycles run so far.
    #[must_use]
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Returns current working memory.
    #[must_use]
    pub fn memory(&self) -> &WorkingMemory {
        &self.memory
    }

    /// Returns the rules fired so far.
    #[must_use]
    pub fn fired(&self) -> &FiredRules {
        &self.fired
    }

    /// Returns the tracer.
    #[must_use]
    pub fn tracer(&self) -> &Tracer {
        &self.tracer
    }

    /// Runs one cycle. Does nothing once the run is terminal.
    ///
    /// # Errors
    /// Propagates matching errors (non-numeric values under the strict
    /// policy). The run must then be abandoned.
    pub fn step(&mut self) -> Result<RunStatus> {
        if self.status.is_terminal() {
            return Ok(self.status);
        }

        self.cycle += 1;
        self.tracer.cycle_start(self.cycle, &self.carried);

        let set = self
            .builder
            .build(&self.memory, &self.fired, &mut self.tracer)?;

        let fired_now = if set.is_empty() {
            false
        } else if let Some(rule) = ConflictResolver::resolve(&set, &mut self.tracer) {
            let fact = rule.consequent.clone();
            self.fired.record(rule.id);
            self.memory.push(fact.clone());
            self.tracer.fact_derived(RuleRef::from(rule), fact);
            self.tracer.memory_updated(&self.memory);
            tracing::debug!(
                cycle = self.cycle,
                rule = %rule.name,
                facts = self.memory.len(),
                "rule fired"
            );
            true
        } else {
            false
        };

        self.carried = set.refs();
        self.check_goal();

        if self.status == RunStatus::Running && !fired_now {
            self.status = RunStatus::Stalled;
            self.tracer.goal_not_reached(self.config.goal());
            tracing::info!(cycle = self.cycle, goal = self.config.goal(), "inference stalled");
        }

        Ok(self.status)
    }

    /// Runs cycles until the goal is reached or nothing can fire.
    ///
    /// # Errors
    /// See [`Self::step`].
    pub fn run(mut self) -> Result<InferenceOutcome> {
        while !self.step()?.is_terminal() {}
        Ok(self.into_outcome())
    }

    fn check_goal(&mut self) {
        if let Some(fact) = self.memory.find(self.config.goal()) {
            let fact = fact.clone();
            self.tracer.goal_reached(fact.clone());
            tracing::info!(cycle = self.cycle, goal = %fact, fired = self.fired.len(), "goal reached");
            self.goal = Some(fact);
            self.status = RunStatus::GoalReached;
        }
    }

    fn chain(&self) -> Vec<RuleRef> {
        self.fired
            .iter()
            .filter_map(|id| self.kb.get(id))
            .map(RuleRef::from)
            .collect()
    }

    fn into_outcome(self) -> InferenceOutcome {
        let fired = self.chain();
        let summary = match &self.goal {
            Some(fact) => ResolutionSummary::reached(
                self.kb.domain(),
                self.config.goal(),
                fact.clone(),
                fired.clone(),
            ),
            None => ResolutionSummary::not_reached(self.kb.domain(), self.config.goal()),
        };

        InferenceOutcome {
            status: self.status,
            goal: self.goal,
            fired,
            memory: self.memory,
            cycles: self.cycle,
            trace: self.tracer,
            summary,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
