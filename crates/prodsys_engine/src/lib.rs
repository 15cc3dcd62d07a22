//! Conflict-set construction, resolution, and the forward-chaining loop.
//!
//! This crate provides:
//! - [`AttributeMatcher`] - Condition evaluation against working memory
//! - [`ConflictSetBuilder`] - Per-cycle conflict sets with refractoriness
//! - [`ConflictResolver`] - Priority-based selection of the rule to fire
//! - [`InferenceDriver`] - The cycle loop and its termination rules
//! - [`BatchRunner`] - Parallel runs over many fact sets

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod conflict;
pub mod driver;
pub mod matcher;
pub mod resolver;

pub use batch::BatchRunner;
pub use conflict::{ConflictSet, ConflictSetBuilder, FiredRules};
pub use driver::{InferenceDriver, InferenceOutcome, RunStatus};
pub use matcher::AttributeMatcher;
pub use resolver::ConflictResolver;
