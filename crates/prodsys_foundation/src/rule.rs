//! Production rules, before and after validation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::Condition;
use crate::fact::Fact;

/// Stable identifier of a rule: its position in the knowledge base.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RuleId(pub usize);

impl RuleId {
    /// Returns the knowledge-base index.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// Drafts
// =============================================================================

/// A condition as written in a knowledge-base file, not yet typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConditionDraft {
    /// Attribute name.
    pub attribute: String,
    /// Operator text.
    pub operator: String,
    /// Literal text.
    pub value: String,
}

impl ConditionDraft {
    /// Creates a condition draft.
    #[must_use]
    pub fn new(
        attribute: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            attribute: attribute.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }
}

/// A rule as read from a knowledge-base file.
///
/// Drafts carry no priority and untyped conditions; see
/// [`KnowledgeBase::build`](crate::KnowledgeBase::build).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleDraft {
    /// Rule name, e.g. `R1`.
    pub name: String,
    /// Conditions in source order.
    pub conditions: Vec<ConditionDraft>,
    /// The fact produced when the rule fires.
    pub consequent: Fact,
}

impl RuleDraft {
    /// Creates a draft with no conditions.
    #[must_use]
    pub fn new(name: impl Into<String>, consequent: Fact) -> Self {
        Self {
            name: name.into(),
            conditions: Vec::new(),
            consequent,
        }
    }

    /// Appends a condition.
    #[must_use]
    pub fn with_condition(
        mut self,
        attribute: impl Into<String>,
        operator: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.conditions
            .push(ConditionDraft::new(attribute, operator, value));
        self
    }
}

// =============================================================================
// Rule
// =============================================================================

/// A validated production rule.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rule {
    /// Position in the knowledge base.
    pub id: RuleId,
    /// Rule name. Not required to be unique.
    pub name: String,
    /// Conditions, all of which must hold.
    pub conditions: Vec<Condition>,
    /// The fact produced when the rule fires.
    pub consequent: Fact,
    /// Priority (higher fires first).
    pub priority: i64,
}

impl Rule {
    /// Creates a rule with priority 0 and no conditions.
    #[must_use]
    pub fn new(id: RuleId, name: impl Into<String>, consequent: Fact) -> Self {
        Self {
            id,
            name: name.into(),
            conditions: Vec::new(),
            consequent,
            priority: 0,
        }
    }

    /// Sets the priority.
    #[must_use]
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Appends a condition.
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: Si ", self.name)?;
        for (i, condition) in self.conditions.iter().enumerate() {
            if i > 0 {
                write!(f, " y ")?;
            }
            write!(f, "{condition}")?;
        }
        write!(
            f,
            " Entonces {} {} {}",
            self.consequent.name, self.consequent.operator, self.consequent.value
        )
    }
}
