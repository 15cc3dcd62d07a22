//! Inference configuration: attribute registry, goal, and rule priorities.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeDecl, AttributeKind};
use crate::error::{Error, ErrorKind, Result};

/// What to do with text that should be an integer but is not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NumericPolicy {
    /// Reject the value with a `NonNumericValue` error.
    #[default]
    Strict,
    /// Treat the value as `0` and log a warning.
    ZeroFallback,
}

/// Read-only configuration for one or more inference runs.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Configuration {
    attributes: Vec<AttributeDecl>,
    goal: String,
    priorities: Vec<i64>,
    numeric_policy: NumericPolicy,
}

impl Configuration {
    /// Starts building a configuration.
    #[must_use]
    pub fn builder() -> ConfigurationBuilder {
        ConfigurationBuilder::default()
    }

    /// Looks up an attribute declaration. The first declaration wins.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&AttributeDecl> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up the kind of an attribute.
    #[must_use]
    pub fn kind_of(&self, name: &str) -> Option<AttributeKind> {
        self.attribute(name).map(|a| a.kind)
    }

    /// Returns all attribute declarations in declaration order.
    #[must_use]
    pub fn attributes(&self) -> &[AttributeDecl] {
        &self.attributes
    }

    /// Returns the goal fact name.
    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    /// Returns the priority list; entry `i` belongs to rule `i`.
    #[must_use]
    pub fn priorities(&self) -> &[i64] {
        &self.priorities
    }

    /// Returns the numeric parsing policy.
    #[must_use]
    pub fn numeric_policy(&self) -> NumericPolicy {
        self.numeric_policy
    }

    /// Returns a copy with a different numeric policy.
    #[must_use]
    pub fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }
}

/// Builder for [`Configuration`].
#[derive(Clone, Debug, Default)]
pub struct ConfigurationBuilder {
    attributes: Vec<AttributeDecl>,
    goal: Option<String>,
    priorities: Vec<i64>,
    numeric_policy: NumericPolicy,
}

impl ConfigurationBuilder {
    /// Declares an attribute.
    #[must_use]
    pub fn attribute(mut self, decl: AttributeDecl) -> Self {
        self.attributes.push(decl);
        self
    }

    /// Declares a numeric attribute.
    #[must_use]
    pub fn numeric(self, name: impl Into<String>) -> Self {
        self.attribute(AttributeDecl::numeric(name))
    }

    /// Declares a nominal attribute with no label restriction.
    #[must_use]
    pub fn nominal(self, name: impl Into<String>) -> Self {
        self.attribute(AttributeDecl::nominal(name, Vec::new()))
    }

    /// Sets the goal fact name.
    #[must_use]
    pub fn goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = Some(goal.into());
        self
    }

    /// Sets the positional priority list.
    #[must_use]
    pub fn priorities(mut self, priorities: impl IntoIterator<Item = i64>) -> Self {
        self.priorities = priorities.into_iter().collect();
        self
    }

    /// Sets the numeric parsing policy.
    #[must_use]
    pub fn numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    /// Returns `MissingGoal` if no non-empty goal was set.
    pub fn build(self) -> Result<Configuration> {
        let goal = self
            .goal
            .filter(|g| !g.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::MissingGoal))?;
        Ok(Configuration {
            attributes: self.attributes,
            goal,
            priorities: self.priorities,
            numeric_policy: self.numeric_policy,
        })
    }
}
