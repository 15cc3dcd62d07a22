//! Facts held in working memory.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::attribute::Operator;

/// A named datum in working memory.
///
/// The operator is always [`Operator::Eq`]; it is kept so facts print the
/// same way they are written in facts files and rule consequents.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fact {
    /// Fact name.
    pub name: String,
    /// Always `=`.
    pub operator: Operator,
    /// Fact value. Numeric facts are compared as integers.
    pub value: String,
}

impl Fact {
    /// Creates a fact `name=value`.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            operator: Operator::Eq,
            value: value.into(),
        }
    }
}

impl fmt::Display for Fact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.operator, self.value)
    }
}
