//! Output artifacts of a run.
//!
//! Every run writes two text files next to each other: the step trace
//! (`Salida1-<facts file name>`) and the resolution summary
//! (`Salida2-<facts file name>`).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use prodsys_engine::InferenceOutcome;
use prodsys_foundation::{Error, ErrorKind, Result};

const TRACE_PREFIX: &str = "Salida1-";
const SUMMARY_PREFIX: &str = "Salida2-";

/// Where the two text artifacts of a run go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPaths {
    /// Step trace file.
    pub trace: PathBuf,
    /// Resolution summary file.
    pub summary: PathBuf,
}

impl OutputPaths {
    /// Derives both paths from the facts file name.
    ///
    /// # Errors
    /// Returns `IoError` if the facts path has no file name.
    pub fn for_facts(facts: &Path, out_dir: &Path) -> Result<Self> {
        let name = facts.file_name().ok_or_else(|| {
            Error::new(ErrorKind::IoError(format!(
                "facts path '{}' has no file name",
                facts.display()
            )))
        })?;
        let name = name.to_string_lossy();

        Ok(Self {
            trace: out_dir.join(format!("{TRACE_PREFIX}{name}")),
            summary: out_dir.join(format!("{SUMMARY_PREFIX}{name}")),
        })
    }
}

/// Writes text to a file, creating or truncating it.
///
/// # Errors
/// Returns `IoError` if the file cannot be created or written.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    let io_error = |action: &str, e: std::io::Error| {
        Error::new(ErrorKind::IoError(format!(
            "failed to {action} file '{}': {e}",
            path.display()
        )))
    };

    let file = File::create(path).map_err(|e| io_error("create", e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(contents.as_bytes())
        .map_err(|e| io_error("write to", e))?;
    writer.flush().map_err(|e| io_error("flush", e))?;
    Ok(())
}

/// Writes the step trace and the resolution summary of a run.
///
/// # Errors
/// Returns `IoError` if either file cannot be written.
pub fn write_outputs(outcome: &InferenceOutcome, paths: &OutputPaths) -> Result<()> {
    let mut trace = outcome.render_trace();
    if !trace.ends_with('\n') {
        trace.push('\n');
    }
    write_text(&paths.trace, &trace)?;
    write_text(&paths.summary, &outcome.summary.to_string())?;
    tracing::debug!(
        trace = %paths.trace.display(),
        summary = %paths.summary.display(),
        "wrote run outputs"
    );
    Ok(())
}
