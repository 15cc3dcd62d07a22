//! Priority-based conflict resolution.

use prodsys_debug::{RuleRef, Tracer};
use prodsys_foundation::Rule;

use crate::conflict::ConflictSet;

/// Picks the rule to fire from a conflict set.
///
/// The rule with the strictly greatest priority wins. Among rules sharing the
/// maximum priority, the earliest in conflict-set order (which is
/// knowledge-base order) wins: a later rule never displaces an earlier one of
/// equal priority.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConflictResolver;

impl ConflictResolver {
    /// Selects a rule without tracing. Returns `None` for an empty set.
    #[must_use]
    pub fn select<'kb>(set: &ConflictSet<'kb>) -> Option<&'kb Rule> {
        let mut best: Option<&'kb Rule> = None;
        for rule in set.iter() {
            if best.is_none_or(|b| rule.priority > b.priority) {
                best = Some(rule);
            }
        }
        best
    }

    /// Selects a rule, recording the full set and the decision.
    ///
    /// Callers are expected to check for an empty set first; an empty set
    /// records nothing and yields `None`.
    pub fn resolve<'kb>(set: &ConflictSet<'kb>, tracer: &mut Tracer) -> Option<&'kb Rule> {
        let chosen = Self::select(set)?;
        let refs = set.refs();
        tracer.conflict_set(&refs);
        tracer.resolved(RuleRef::from(chosen), &refs);
        tracing::debug!(rule = %chosen.name, priority = chosen.priority, candidates = refs.len(), "conflict resolved");
        Some(chosen)
    }
}
