//! Run reports as JSON.
//!
//! A report bundles everything a finished run produced: status, the goal
//! fact, the fired chain, final working memory, the resolution summary, and
//! the full trace.

use std::path::Path;

use prodsys_debug::{ResolutionSummary, RuleRef, TraceRecord};
use prodsys_engine::{InferenceOutcome, RunStatus};
use prodsys_foundation::{Error, ErrorKind, Fact, Result, WorkingMemory};
use serde::Serialize;

use crate::output::write_text;

/// Serializable view of an [`InferenceOutcome`].
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Terminal status.
    pub status: RunStatus,
    /// Number of cycles run.
    pub cycles: u64,
    /// The goal fact, when reached.
    pub goal: Option<&'a Fact>,
    /// Fired rules in firing order.
    pub fired: &'a [RuleRef],
    /// Final working memory.
    pub memory: &'a WorkingMemory,
    /// The resolution summary.
    pub summary: &'a ResolutionSummary,
    /// Every trace record.
    pub trace: &'a [TraceRecord],
}

impl<'a> From<&'a InferenceOutcome> for RunReport<'a> {
    fn from(outcome: &'a InferenceOutcome) -> Self {
        Self {
            status: outcome.status,
            cycles: outcome.cycles,
            goal: outcome.goal.as_ref(),
            fired: &outcome.fired,
            memory: &outcome.memory,
            summary: &outcome.summary,
            trace: outcome.trace_buffer().records(),
        }
    }
}

/// Serializes a run report to pretty-printed JSON.
///
/// # Errors
/// Returns `SerializationError` if serialization fails.
pub fn to_json(outcome: &InferenceOutcome) -> Result<String> {
    serde_json::to_string_pretty(&RunReport::from(outcome))
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Writes a run report to a file.
///
/// # Errors
/// Returns `SerializationError` or `IoError`.
pub fn save_report(outcome: &InferenceOutcome, path: &Path) -> Result<()> {
    let mut json = to_json(outcome)?;
    json.push('\n');
    write_text(path, &json)
}
