//! Independent runs over many fact sets.
//!
//! Every run borrows the same knowledge base and configuration read-only and
//! owns its own working memory and trace, so runs share nothing mutable and
//! are spread across the rayon thread pool.

use prodsys_debug::TracerConfig;
use prodsys_foundation::{Configuration, Fact, KnowledgeBase, Result};
use rayon::prelude::*;

use crate::driver::{InferenceDriver, InferenceOutcome};

/// Runs one inference per fact set in parallel.
#[derive(Clone, Debug)]
pub struct BatchRunner<'a> {
    kb: &'a KnowledgeBase,
    config: &'a Configuration,
    tracer: TracerConfig,
}

impl<'a> BatchRunner<'a> {
    /// Creates a runner with tracing disabled.
    #[must_use]
    pub fn new(kb: &'a KnowledgeBase, config: &'a Configuration) -> Self {
        Self {
            kb,
            config,
            tracer: TracerConfig::new().disabled(),
        }
    }

    /// Sets the tracer configuration used for every run.
    #[must_use]
    pub fn with_tracer(mut self, tracer: TracerConfig) -> Self {
        self.tracer = tracer;
        self
    }

    /// Runs a single fact set.
    ///
    /// # Errors
    /// See [`InferenceDriver::step`].
    pub fn run_one(&self, facts: &[Fact]) -> Result<InferenceOutcome> {
        InferenceDriver::with_tracer(
            self.kb,
            self.config,
            facts.iter().cloned(),
            self.tracer.clone(),
        )
        .run()
    }

    /// Runs every fact set. Results are in input order; a failing run does
    /// not affect the others.
    #[must_use]
    pub fn run_all(&self, fact_sets: &[Vec<Fact>]) -> Vec<Result<InferenceOutcome>> {
        tracing::debug!(runs = fact_sets.len(), rules = self.kb.len(), "starting batch");
        fact_sets
            .par_iter()
            .map(|facts| self.run_one(facts))
            .collect()
    }
}
