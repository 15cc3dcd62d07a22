//! Reasoning traces and resolution summaries for prodsys.
//!
//! This crate provides:
//! - [`Tracer`] - Records the step-by-step account of an inference run
//! - [`TraceFormatter`] - Human-readable and JSON renderings of that account
//! - [`ResolutionSummary`] - The goal and the chain of rules that reached it

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod summary;
pub mod trace;

pub use summary::{Resolution, ResolutionSummary};
pub use trace::{
    HumanFormatter, JsonFormatter, RuleRef, TraceBuffer, TraceEvent, TraceFormatter,
    TraceRecord, Tracer, TracerConfig,
};
