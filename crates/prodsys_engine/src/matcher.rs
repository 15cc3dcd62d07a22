//! Attribute matching against working memory.
//!
//! A condition holds when at least one fact with the same name satisfies it.
//! Nominal conditions compare labels exactly; numeric conditions parse the
//! fact value as an integer and apply the operator with the fact on the left.

use prodsys_foundation::attribute::parse_numeric;
use prodsys_foundation::{Condition, Fact, Literal, NumericPolicy, Result, Rule, WorkingMemory};

/// Evaluates conditions against working memory.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeMatcher {
    policy: NumericPolicy,
}

impl AttributeMatcher {
    /// Creates a matcher using the given numeric policy for fact values.
    #[must_use]
    pub fn new(policy: NumericPolicy) -> Self {
        Self { policy }
    }

    /// Returns the numeric policy.
    #[must_use]
    pub fn policy(&self) -> NumericPolicy {
        self.policy
    }

    /// Checks one fact against one condition.
    ///
    /// Facts with a different name never satisfy the condition.
    ///
    /// # Errors
    /// Returns `NonNumericValue` if the condition is numeric, the fact value
    /// is not an integer, and the policy is strict.
    pub fn fact_satisfies(&self, condition: &Condition, fact: &Fact) -> Result<bool> {
        if fact.name != condition.attribute {
            return Ok(false);
        }
        match &condition.literal {
            Literal::Label(label) => Ok(fact.value == *label),
            Literal::Int(threshold) => {
                let value = parse_numeric(&fact.name, &fact.value, self.policy)?;
                Ok(condition.operator.holds(value, *threshold))
            }
        }
    }

    /// Returns true if some fact in memory satisfies the condition.
    ///
    /// A condition with no same-named fact does not match. Every same-named
    /// fact is checked, so a non-integer value fails a strict match wherever
    /// it sits in memory.
    ///
    /// # Errors
    /// See [`Self::fact_satisfies`].
    pub fn matches(&self, condition: &Condition, memory: &WorkingMemory) -> Result<bool> {
        let mut matched = false;
        for fact in memory.named(&condition.attribute) {
            matched |= self.fact_satisfies(condition, fact)?;
        }
        Ok(matched)
    }

    /// Returns true if every condition of the rule matches.
    ///
    /// A rule without conditions always matches.
    ///
    /// # Errors
    /// See [`Self::fact_satisfies`].
    pub fn rule_matches(&self, rule: &Rule, memory: &WorkingMemory) -> Result<bool> {
        for condition in &rule.conditions {
            if !self.matches(condition, memory)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
