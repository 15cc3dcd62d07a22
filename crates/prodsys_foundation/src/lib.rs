//! Facts, rules, knowledge bases, configuration, and errors for prodsys.
//!
//! This crate provides:
//! - [`Fact`] - A named datum held in working memory
//! - [`Condition`] - A typed attribute constraint inside a rule
//! - [`Rule`] and [`KnowledgeBase`] - Validated, prioritized production rules
//! - [`Configuration`] - Attribute registry, goal, and rule priorities
//! - [`WorkingMemory`] - Append-only persistent fact store
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod config;
pub mod error;
pub mod fact;
pub mod knowledge;
pub mod memory;
pub mod rule;

pub use attribute::{AttributeDecl, AttributeKind, Condition, Literal, Operator};
pub use config::{Configuration, ConfigurationBuilder, NumericPolicy};
pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use fact::Fact;
pub use knowledge::KnowledgeBase;
pub use memory::WorkingMemory;
pub use rule::{ConditionDraft, Rule, RuleDraft, RuleId};
