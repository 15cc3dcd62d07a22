//! Readers for the configuration, knowledge-base, and facts files.
//!
//! Each reader comes in two forms: `parse_*` works on text already in
//! memory, and `read_*` loads a file first and names it in error contexts.

mod config;
mod facts;
mod knowledge;

use std::fs;
use std::path::Path;

use prodsys_foundation::{Error, ErrorKind, Result};

pub use config::{parse_configuration, read_configuration};
pub use facts::{parse_facts, read_facts};
pub use knowledge::{parse_knowledge_base, parse_rule_drafts, read_knowledge_base};

/// Reads a whole file as UTF-8 text.
///
/// # Errors
/// Returns `IoError` if the file cannot be read.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })
}
