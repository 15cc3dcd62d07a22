//! Goal-resolution summaries.

use std::fmt;

use prodsys_foundation::Fact;
use serde::Serialize;

use crate::trace::RuleRef;

/// How a run ended, as far as the goal is concerned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "kebab-case")]
pub enum Resolution {
    /// The goal is known.
    Reached {
        /// The first fact carrying the goal name.
        fact: Fact,
        /// Rules fired, in firing order.
        chain: Vec<RuleRef>,
    },
    /// No rule could fire and the goal is unknown.
    NotReached,
}

/// The concise result of a run: domain, goal, and the rule chain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolutionSummary {
    /// Knowledge-base domain label.
    pub domain: String,
    /// Goal fact name.
    pub goal: String,
    /// Whether and how the goal was reached.
    pub resolution: Resolution,
}

impl ResolutionSummary {
    /// Creates a summary for a run that reached its goal.
    #[must_use]
    pub fn reached(
        domain: impl Into<String>,
        goal: impl Into<String>,
        fact: Fact,
        chain: Vec<RuleRef>,
    ) -> Self {
        Self {
            domain: domain.into(),
            goal: goal.into(),
            resolution: Resolution::Reached { fact, chain },
        }
    }

    /// Creates a summary for a run that stalled.
    #[must_use]
    pub fn not_reached(domain: impl Into<String>, goal: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            goal: goal.into(),
            resolution: Resolution::NotReached,
        }
    }

    /// Returns true if the goal was reached.
    #[must_use]
    pub fn is_reached(&self) -> bool {
        matches!(self.resolution, Resolution::Reached { .. })
    }

    /// Returns the fired chain; empty when the goal was not reached.
    #[must_use]
    pub fn chain(&self) -> &[RuleRef] {
        match &self.resolution {
            Resolution::Reached { chain, .. } => chain,
            Resolution::NotReached => &[],
        }
    }
}

impl fmt::Display for ResolutionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Domain: {}", self.domain)?;
        writeln!(f)?;
        match &self.resolution {
            Resolution::Reached { fact, chain } => {
                writeln!(f, "Goal: {fact}")?;
                writeln!(f)?;
                write!(f, "Applied reasoning:")?;
                for rule in chain {
                    write!(f, "\n\tRule {} with priority {}", rule, rule.priority)?;
                }
                writeln!(f)
            }
            Resolution::NotReached => writeln!(f, "The goal {} could not be reached", self.goal),
        }
    }
}
