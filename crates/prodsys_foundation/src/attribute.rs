//! Attribute kinds, comparison operators, and rule conditions.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::NumericPolicy;
use crate::error::{Error, Result};

/// How an attribute's values are compared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AttributeKind {
    /// Compared by exact label equality.
    Nominal,
    /// Compared as integers with an ordering operator.
    Numeric,
}

impl AttributeKind {
    /// Returns the keyword used for this kind in configuration files.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Self::Nominal => "Nom",
            Self::Numeric => "NU",
        }
    }
}

impl FromStr for AttributeKind {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "Nom" => Ok(Self::Nominal),
            "NU" => Ok(Self::Numeric),
            _ => Err(()),
        }
    }
}

impl fmt::Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nominal => write!(f, "nominal"),
            Self::Numeric => write!(f, "numeric"),
        }
    }
}

/// An entry of the attribute registry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributeDecl {
    /// Attribute name.
    pub name: String,
    /// Attribute kind.
    pub kind: AttributeKind,
    /// Allowed labels for nominal attributes (empty = unrestricted).
    pub labels: Vec<String>,
}

impl AttributeDecl {
    /// Declares a nominal attribute with its allowed labels.
    #[must_use]
    pub fn nominal(name: impl Into<String>, labels: Vec<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Nominal,
            labels,
        }
    }

    /// Declares a numeric attribute.
    #[must_use]
    pub fn numeric(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AttributeKind::Numeric,
            labels: Vec::new(),
        }
    }

    /// Returns true if `label` is acceptable for this attribute.
    ///
    /// Numeric attributes and nominal attributes without a declared label set
    /// accept anything.
    #[must_use]
    pub fn allows_label(&self, label: &str) -> bool {
        self.labels.is_empty() || self.labels.iter().any(|l| l == label)
    }
}

/// Comparison operator of a condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operator {
    /// `=`
    Eq,
    /// `>=`
    Ge,
    /// `<=`
    Le,
    /// `<`
    Lt,
    /// `>`
    Gt,
}

impl Operator {
    /// Returns the operator's source text.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Ge => ">=",
            Self::Le => "<=",
            Self::Lt => "<",
            Self::Gt => ">",
        }
    }

    /// Applies the operator with `lhs` on the left: `lhs op rhs`.
    #[must_use]
    pub fn holds(self, lhs: i64, rhs: i64) -> bool {
        match self {
            Self::Eq => lhs == rhs,
            Self::Ge => lhs >= rhs,
            Self::Le => lhs <= rhs,
            Self::Lt => lhs < rhs,
            Self::Gt => lhs > rhs,
        }
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "=" => Ok(Self::Eq),
            ">=" => Ok(Self::Ge),
            "<=" => Ok(Self::Le),
            "<" => Ok(Self::Lt),
            ">" => Ok(Self::Gt),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The right-hand side of a condition, typed by the attribute kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A nominal label.
    Label(String),
    /// A numeric threshold.
    Int(i64),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

/// A typed attribute constraint inside a rule.
///
/// Kind and literal are resolved against the attribute registry when the
/// knowledge base is built, so a `Condition` is always well-typed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Condition {
    /// Attribute name, matched against fact names.
    pub attribute: String,
    /// Comparison operator.
    pub operator: Operator,
    /// Value compared against.
    pub literal: Literal,
}

impl Condition {
    /// Creates a nominal equality condition.
    #[must_use]
    pub fn nominal(attribute: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            operator: Operator::Eq,
            literal: Literal::Label(label.into()),
        }
    }

    /// Creates a numeric condition.
    #[must_use]
    pub fn numeric(attribute: impl Into<String>, operator: Operator, threshold: i64) -> Self {
        Self {
            attribute: attribute.into(),
            operator,
            literal: Literal::Int(threshold),
        }
    }

    /// Returns the attribute kind implied by the literal.
    #[must_use]
    pub fn kind(&self) -> AttributeKind {
        match self.literal {
            Literal::Label(_) => AttributeKind::Nominal,
            Literal::Int(_) => AttributeKind::Numeric,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.attribute, self.operator, self.literal)
    }
}

/// Parses an integer value for a numeric attribute under `policy`.
///
/// # Errors
/// Returns `NonNumericValue` under [`NumericPolicy::Strict`] when `text` is
/// not an integer.
pub fn parse_numeric(attribute: &str, text: &str, policy: NumericPolicy) -> Result<i64> {
    match text.parse::<i64>() {
        Ok(n) => Ok(n),
        Err(_) => match policy {
            NumericPolicy::Strict => Err(Error::non_numeric(attribute, text)),
            NumericPolicy::ZeroFallback => {
                tracing::warn!(attribute, value = text, "non-numeric value treated as 0");
                Ok(0)
            }
        },
    }
}
