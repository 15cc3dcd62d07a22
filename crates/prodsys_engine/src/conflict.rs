//! Conflict-set construction and refractoriness.
//!
//! The conflict set of a cycle is every rule whose conditions all hold in the
//! current working memory and which has not fired yet, in knowledge-base
//! order. Refractoriness is keyed by [`RuleId`], so two rules that happen to
//! share a name are still tracked separately.

use std::collections::HashSet;

use prodsys_debug::{RuleRef, Tracer};
use prodsys_foundation::{KnowledgeBase, Result, Rule, RuleId, WorkingMemory};

use crate::matcher::AttributeMatcher;

// =============================================================================
// Fired Rules
// =============================================================================

/// Rules fired so far in a run, in firing order.
#[derive(Clone, Debug, Default)]
pub struct FiredRules {
    order: Vec<RuleId>,
    seen: HashSet<RuleId>,
}

impl FiredRules {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a firing. Returns false if the rule had already fired.
    pub fn record(&mut self, id: RuleId) -> bool {
        if !self.seen.insert(id) {
            return false;
        }
        self.order.push(id);
        true
    }

    /// Returns true if the rule has fired.
    #[must_use]
    pub fn contains(&self, id: RuleId) -> bool {
        self.seen.contains(&id)
    }

    /// Returns the number of rules fired.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing has fired.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the fired ids in firing order.
    pub fn iter(&self) -> impl Iterator<Item = RuleId> + '_ {
        self.order.iter().copied()
    }
}

// =============================================================================
// Conflict Set
// =============================================================================

/// Rules eligible to fire in one cycle, in knowledge-base order.
#[derive(Clone, Debug, Default)]
pub struct ConflictSet<'kb> {
    rules: Vec<&'kb Rule>,
}

impl<'kb> ConflictSet<'kb> {
    /// Creates a conflict set from rules already in knowledge-base order.
    #[must_use]
    pub fn from_rules(rules: Vec<&'kb Rule>) -> Self {
        Self { rules }
    }

    /// Returns true if no rule is eligible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the number of eligible rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns the eligible rules.
    #[must_use]
    pub fn rules(&self) -> &[&'kb Rule] {
        &self.rules
    }

    /// Returns an iterator over the eligible rules.
    pub fn iter(&self) -> impl Iterator<Item = &'kb Rule> + '_ {
        self.rules.iter().copied()
    }

    /// Returns true if the rule is in the set.
    #[must_use]
    pub fn contains(&self, id: RuleId) -> bool {
        self.rules.iter().any(|r| r.id == id)
    }

    /// Returns trace references for the rules in the set.
    #[must_use]
    pub fn refs(&self) -> Vec<RuleRef> {
        self.rules.iter().map(|r| RuleRef::from(*r)).collect()
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builds the conflict set of a cycle.
#[derive(Clone, Copy, Debug)]
pub struct ConflictSetBuilder<'kb> {
    kb: &'kb KnowledgeBase,
    matcher: AttributeMatcher,
}

impl<'kb> ConflictSetBuilder<'kb> {
    /// Creates a builder over a knowledge base.
    #[must_use]
    pub fn new(kb: &'kb KnowledgeBase, matcher: AttributeMatcher) -> Self {
        Self { kb, matcher }
    }

    /// Returns the matcher in use.
    #[must_use]
    pub fn matcher(&self) -> AttributeMatcher {
        self.matcher
    }

    /// Collects every matching, not-yet-fired rule.
    ///
    /// Records a `rule-inserted` trace event per eligible rule and a
    /// `rule-refracted` event per matching rule left out because it fired.
    ///
    /// # Errors
    /// Propagates matcher errors for rules that have not fired.
    pub fn build(
        &self,
        memory: &WorkingMemory,
        fired: &FiredRules,
        tracer: &mut Tracer,
    ) -> Result<ConflictSet<'kb>> {
        let mut rules = Vec::new();

        for rule in self.kb.rules() {
            if fired.contains(rule.id) {
                if tracer.is_enabled() && matches!(self.matcher.rule_matches(rule, memory), Ok(true))
                {
                    tracer.rule_refracted(RuleRef::from(rule));
                }
                continue;
            }

            if self.matcher.rule_matches(rule, memory)? {
                tracing::debug!(rule = %rule.name, priority = rule.priority, "rule inserted into conflict set");
                tracer.rule_inserted(RuleRef::from(rule));
                rules.push(rule);
            }
        }

        Ok(ConflictSet { rules })
    }
}

// =============================================================================
// Tests
// =============================================================================
