//! Loading inputs, running inference, and writing results.

use std::path::{Path, PathBuf};

use prodsys_debug::TracerConfig;
use prodsys_engine::{InferenceDriver, InferenceOutcome};
use prodsys_foundation::{Configuration, Fact, KnowledgeBase, NumericPolicy, Result};

use crate::output::{OutputPaths, write_outputs};
use crate::reader::{read_configuration, read_facts, read_knowledge_base};
use crate::serialize::save_report;

// =============================================================================
// Run Options
// =============================================================================

/// Input paths and output choices for one run.
#[derive(Clone, Debug)]
pub struct RunOptions {
    /// Configuration file.
    pub config_path: PathBuf,
    /// Facts file.
    pub facts_path: PathBuf,
    /// Knowledge-base file.
    pub kb_path: PathBuf,
    /// Directory receiving the trace and summary files.
    pub out_dir: PathBuf,
    /// Write the step trace as JSON lines instead of text.
    pub json_trace: bool,
    /// Also write a JSON report of the whole outcome here.
    pub report: Option<PathBuf>,
    /// How non-integer numeric values are handled.
    pub numeric_policy: NumericPolicy,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::new(),
            facts_path: PathBuf::new(),
            kb_path: PathBuf::new(),
            out_dir: PathBuf::from("."),
            json_trace: false,
            report: None,
            numeric_policy: NumericPolicy::Strict,
        }
    }
}

impl RunOptions {
    /// Creates options for the three input files with default outputs.
    #[must_use]
    pub fn new(
        config_path: impl Into<PathBuf>,
        facts_path: impl Into<PathBuf>,
        kb_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            config_path: config_path.into(),
            facts_path: facts_path.into(),
            kb_path: kb_path.into(),
            ..Self::default()
        }
    }

    /// Sets the output directory.
    #[must_use]
    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Selects the JSON trace format.
    #[must_use]
    pub fn with_json_trace(mut self, json: bool) -> Self {
        self.json_trace = json;
        self
    }

    /// Requests a JSON report.
    #[must_use]
    pub fn with_report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report = Some(path.into());
        self
    }

    /// Sets the numeric policy.
    #[must_use]
    pub fn with_numeric_policy(mut self, policy: NumericPolicy) -> Self {
        self.numeric_policy = policy;
        self
    }

    /// Returns the trace and summary paths for these options.
    ///
    /// # Errors
    /// Returns `IoError` if the facts path has no file name.
    pub fn output_paths(&self) -> Result<OutputPaths> {
        OutputPaths::for_facts(&self.facts_path, &self.out_dir)
    }

    fn tracer_config(&self) -> TracerConfig {
        if self.json_trace {
            TracerConfig::new().json()
        } else {
            TracerConfig::new()
        }
    }
}

// =============================================================================
// Session
// =============================================================================

/// Validated inputs ready to run.
#[derive(Clone, Debug)]
pub struct Session {
    options: RunOptions,
    config: Configuration,
    kb: KnowledgeBase,
    facts: Vec<Fact>,
}

impl Session {
    /// Reads and validates the three input files.
    ///
    /// The configuration is read first since the knowledge base is checked
    /// against it.
    ///
    /// # Errors
    /// Returns the first reader or validation error.
    pub fn load(options: RunOptions) -> Result<Self> {
        let config = read_configuration(&options.config_path)?
            .numeric_policy(options.numeric_policy)
            .build()
            .map_err(|e| e.in_source(options.config_path.display().to_string()))?;
        let kb = read_knowledge_base(&options.kb_path, &config)?;
        let facts = read_facts(&options.facts_path)?;

        tracing::info!(
            domain = kb.domain(),
            rules = kb.len(),
            facts = facts.len(),
            goal = config.goal(),
            "session loaded"
        );

        Ok(Self {
            options,
            config,
            kb,
            facts,
        })
    }

    /// Assembles a session from inputs already in memory.
    #[must_use]
    pub fn from_parts(
        options: RunOptions,
        config: Configuration,
        kb: KnowledgeBase,
        facts: Vec<Fact>,
    ) -> Self {
        Self {
            options,
            config,
            kb,
            facts,
        }
    }

    /// Returns the options.
    #[must_use]
    pub fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Returns the knowledge base.
    #[must_use]
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// Returns the initial facts.
    #[must_use]
    pub fn facts(&self) -> &[Fact] {
        &self.facts
    }

    /// Runs inference without writing anything.
    ///
    /// # Errors
    /// Propagates inference errors.
    pub fn run(&self) -> Result<InferenceOutcome> {
        InferenceDriver::with_tracer(
            &self.kb,
            &self.config,
            self.facts.iter().cloned(),
            self.options.tracer_config(),
        )
        .run()
    }

    /// Runs inference and writes the trace, the summary, and the optional
    /// report.
    ///
    /// # Errors
    /// Propagates inference and output errors. Nothing is written if
    /// inference fails.
    pub fn execute(&self) -> Result<InferenceOutcome> {
        let paths = self.options.output_paths()?;
        let outcome = self.run()?;
        write_outputs(&outcome, &paths)?;
        if let Some(report) = &self.options.report {
            save_report(&outcome, report)?;
        }
        Ok(outcome)
    }
}

/// Convenience for `Session::load(options)?.execute()`.
///
/// # Errors
/// See [`Session::load`] and [`Session::execute`].
pub fn run_files(options: RunOptions) -> Result<InferenceOutcome> {
    Session::load(options)?.execute()
}

/// Returns the output directory, defaulting to the current directory.
#[must_use]
pub fn out_dir_or_default(dir: Option<&Path>) -> PathBuf {
    dir.map_or_else(|| PathBuf::from("."), Path::to_path_buf)
}
