//! Validated knowledge bases.
//!
//! A [`KnowledgeBase`] is built once from [`RuleDraft`]s and a
//! [`Configuration`]. Building is where every structural check happens:
//! attribute names must resolve in the registry, operators must suit the
//! attribute kind, numeric literals must parse, and there must be exactly one
//! priority per rule. Once built, the knowledge base is read-only.

use crate::attribute::{AttributeKind, Condition, Literal, Operator, parse_numeric};
use crate::config::Configuration;
use crate::error::{Error, ErrorContext, Result};
use crate::rule::{ConditionDraft, Rule, RuleDraft, RuleId};

/// A domain label plus an ordered collection of rules.
///
/// Rule order defines both the scan order and the tie-break precedence used
/// during conflict resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KnowledgeBase {
    domain: String,
    rules: Vec<Rule>,
}

impl KnowledgeBase {
    /// Validates drafts against the configuration and assigns priorities.
    ///
    /// Priority `i` of the configuration goes to draft `i`.
    ///
    /// # Errors
    /// - `PriorityMismatch` if the priority and rule counts differ
    /// - `MalformedRule` if a rule has an empty name
    /// - `UnknownAttribute` if a condition names an undeclared attribute
    /// - `InvalidOperator` for unknown operators or non-`=` nominal tests
    /// - `NonNumericValue` for non-integer numeric literals (strict policy)
    pub fn build(
        domain: impl Into<String>,
        drafts: Vec<RuleDraft>,
        config: &Configuration,
    ) -> Result<Self> {
        let priorities = config.priorities();
        if priorities.len() != drafts.len() {
            return Err(Error::priority_mismatch(drafts.len(), priorities.len()));
        }

        let mut rules = Vec::with_capacity(drafts.len());
        for (index, (draft, &priority)) in drafts.into_iter().zip(priorities).enumerate() {
            if draft.name.is_empty() {
                return Err(Error::malformed_rule(
                    format!("#{}", index + 1),
                    "rule has no name",
                ));
            }

            let mut conditions = Vec::with_capacity(draft.conditions.len());
            for cond in &draft.conditions {
                let condition = Self::resolve_condition(&draft.name, cond, config)
                    .map_err(|e| e.with_context(ErrorContext::new().with_frame(&draft.name)))?;
                conditions.push(condition);
            }

            rules.push(Rule {
                id: RuleId(index),
                name: draft.name,
                conditions,
                consequent: draft.consequent,
                priority,
            });
        }

        tracing::debug!(rules = rules.len(), "knowledge base built");
        Ok(Self {
            domain: domain.into(),
            rules,
        })
    }

    /// Wraps already-typed rules, renumbering their ids by position.
    #[must_use]
    pub fn from_rules(domain: impl Into<String>, rules: Vec<Rule>) -> Self {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(i, mut r)| {
                r.id = RuleId(i);
                r
            })
            .collect();
        Self {
            domain: domain.into(),
            rules,
        }
    }

    fn resolve_condition(
        rule: &str,
        draft: &ConditionDraft,
        config: &Configuration,
    ) -> Result<Condition> {
        let decl = config
            .attribute(&draft.attribute)
            .ok_or_else(|| Error::unknown_attribute(&draft.attribute, rule))?;

        let operator: Operator = draft
            .operator
            .parse()
            .map_err(|()| Error::invalid_operator(&draft.attribute, &draft.operator))?;

        let literal = match decl.kind {
            AttributeKind::Nominal => {
                if operator != Operator::Eq {
                    return Err(Error::invalid_operator(&draft.attribute, &draft.operator));
                }
                if !decl.allows_label(&draft.value) {
                    tracing::warn!(
                        rule,
                        attribute = %draft.attribute,
                        label = %draft.value,
                        "label is not among the declared values"
                    );
                }
                Literal::Label(draft.value.clone())
            }
            AttributeKind::Numeric => Literal::Int(parse_numeric(
                &draft.attribute,
                &draft.value,
                config.numeric_policy(),
            )?),
        };

        Ok(Condition {
            attribute: draft.attribute.clone(),
            operator,
            literal,
        })
    }

    /// Returns the domain label.
    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Returns the rules in knowledge-base order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Gets a rule by id.
    #[must_use]
    pub fn get(&self, id: RuleId) -> Option<&Rule> {
        self.rules.get(id.index())
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
