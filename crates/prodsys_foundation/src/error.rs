//! Error types for prodsys.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every error is fatal to the run that raised it; reaching no goal is an
//! outcome, not an error.

use std::fmt;

use thiserror::Error;

/// Result type alias using the prodsys [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for prodsys operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a parse error at the given position.
    #[must_use]
    pub fn parse(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self::new(ErrorKind::ParseError {
            message: message.into(),
            line,
            column,
        })
    }

    /// Creates a malformed rule error.
    #[must_use]
    pub fn malformed_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedRule {
            rule: rule.into(),
            message: message.into(),
        })
    }

    /// Creates an unknown attribute error.
    #[must_use]
    pub fn unknown_attribute(attribute: impl Into<String>, rule: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownAttribute {
            attribute: attribute.into(),
            rule: rule.into(),
        })
    }

    /// Creates an invalid operator error.
    #[must_use]
    pub fn invalid_operator(attribute: impl Into<String>, operator: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidOperator {
            attribute: attribute.into(),
            operator: operator.into(),
        })
    }

    /// Creates a non-numeric value error.
    #[must_use]
    pub fn non_numeric(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(ErrorKind::NonNumericValue {
            attribute: attribute.into(),
            value: value.into(),
        })
    }

    /// Creates a priority/rule count mismatch error.
    #[must_use]
    pub fn priority_mismatch(rules: usize, priorities: usize) -> Self {
        Self::new(ErrorKind::PriorityMismatch { rules, priorities })
    }

    /// Names the source of this error unless its context already does.
    #[must_use]
    pub fn in_source(self, source: impl Into<String>) -> Self {
        let Self { kind, context } = self;
        let mut context = context.unwrap_or_default();
        if context.source.is_none() {
            context.source = Some(source.into());
        }
        Self::new(kind).with_context(context)
    }

    /// Renders the error together with its context, for reporting to users.
    ///
    /// `Display` shows only the kind; this adds the source file, position,
    /// and enclosing frames when they are known.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = self.kind.to_string();
        if let Some(context) = &self.context {
            let context = context.to_string();
            let context = context.trim();
            if !context.is_empty() {
                out.push_str("\n  ");
                out.push_str(context);
            }
        }
        out
    }

    /// Returns true if this error came from reading malformed input.
    #[must_use]
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ParseError { .. } | ErrorKind::MalformedRule { .. }
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Input text did not have the expected structure.
    #[error("parse error at {line}:{column}: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
        /// Line number (1-indexed).
        line: usize,
        /// Column number (1-indexed).
        column: usize,
    },

    /// A rule is structurally invalid.
    #[error("malformed rule {rule}: {message}")]
    MalformedRule {
        /// The rule name.
        rule: String,
        /// What is wrong with it.
        message: String,
    },

    /// A rule condition references an attribute missing from the registry.
    #[error("unknown attribute {attribute} in rule {rule}")]
    UnknownAttribute {
        /// The attribute name.
        attribute: String,
        /// The rule referencing it.
        rule: String,
    },

    /// Operator token not recognized, or not valid for the attribute kind.
    #[error("invalid operator '{operator}' for attribute {attribute}")]
    InvalidOperator {
        /// The attribute the operator was applied to.
        attribute: String,
        /// The offending operator text.
        operator: String,
    },

    /// An integer was required but the text does not parse as one.
    #[error("attribute {attribute} expects an integer, got '{value}'")]
    NonNumericValue {
        /// The numeric attribute.
        attribute: String,
        /// The unparseable text.
        value: String,
    },

    /// Priority list and rule list have different lengths.
    #[error("priority list has {priorities} entries but the knowledge base has {rules} rules")]
    PriorityMismatch {
        /// Number of rules.
        rules: usize,
        /// Number of priorities.
        priorities: usize,
    },

    /// Configuration does not name a goal.
    #[error("configuration does not declare a goal")]
    MissingGoal,

    /// I/O failure in the runtime shell.
    #[error("i/o error: {0}")]
    IoError(String),

    /// Serialization failure in the runtime shell.
    #[error("serialization error: {0}")]
    SerializationError(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source file or rule name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
    /// Enclosing sections, outermost first.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
            if let (Some(line), Some(col)) = (self.line, self.column) {
                write!(f, ":{line}:{col}")?;
            }
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
