//! Configuration file reader.
//!
//! ```text
//! ATRIBUTOS 2
//! Temp NU
//! Sky Nom {clear,cloudy}
//! OBJETIVO Alert
//! PRIORIDADES-REGLAS 2
//! 1 5
//! ```
//!
//! Sections must appear in this order but each may be omitted. A missing
//! goal surfaces as `MissingGoal` when the returned builder is built.

use std::path::Path;

use prodsys_foundation::{AttributeDecl, AttributeKind, Configuration, ConfigurationBuilder, Result};

use super::read_source;
use crate::tokenizer::Tokenizer;

const ATTRIBUTES: &str = "ATRIBUTOS";
const GOAL: &str = "OBJETIVO";
const PRIORITIES: &str = "PRIORIDADES-REGLAS";

/// Parses configuration text into a builder.
///
/// The numeric policy is left at its default so the caller can override it
/// before building.
///
/// # Errors
/// Returns `ParseError` for unknown section keywords, unknown attribute
/// kinds, bad counts, non-integer priorities, or truncated input.
pub fn parse_configuration(source: &str) -> Result<ConfigurationBuilder> {
    parse(&mut Tokenizer::new(source))
}

/// Reads and parses a configuration file.
///
/// # Errors
/// Returns `IoError` if the file cannot be read, otherwise as
/// [`parse_configuration`].
pub fn read_configuration(path: &Path) -> Result<ConfigurationBuilder> {
    let source = read_source(path)?;
    parse(&mut Tokenizer::new(&source).with_origin(path.display().to_string()))
}

fn parse(tokens: &mut Tokenizer<'_>) -> Result<ConfigurationBuilder> {
    let mut builder = Configuration::builder();
    let mut section = tokens.next_token();

    if let Some(token) = section.filter(|t| t.text == ATTRIBUTES) {
        let count = tokens.expect_count("attribute count")?;
        for _ in 0..count {
            builder = builder.attribute(parse_attribute(tokens)?);
        }
        tracing::debug!(attributes = count, line = token.line, "read attribute registry");
        section = tokens.next_token();
    }

    if section.is_some_and(|t| t.text == GOAL) {
        let goal = tokens.expect("goal name")?;
        builder = builder.goal(goal.text);
        section = tokens.next_token();
    }

    if section.is_some_and(|t| t.text == PRIORITIES) {
        let count = tokens.expect_count("priority count")?;
        let mut priorities = Vec::new();
        for _ in 0..count {
            priorities.push(tokens.expect_int("rule priority")?);
        }
        builder = builder.priorities(priorities);
        section = tokens.next_token();
    }

    match section {
        None => Ok(builder),
        Some(token) => Err(tokens.error(
            format!("unexpected '{}' in configuration", token.text),
            token,
        )),
    }
}

fn parse_attribute(tokens: &mut Tokenizer<'_>) -> Result<AttributeDecl> {
    let name = tokens.expect("attribute name")?;
    let kind_token = tokens.expect("attribute kind")?;
    let kind: AttributeKind = kind_token.text.parse().map_err(|()| {
        tokens.error(
            format!(
                "unknown kind '{}' for attribute {}, expected 'Nom' or 'NU'",
                kind_token.text, name.text
            ),
            kind_token,
        )
    })?;

    match kind {
        AttributeKind::Numeric => Ok(AttributeDecl::numeric(name.text)),
        AttributeKind::Nominal => {
            let labels = tokens.expect("label set")?;
            Ok(AttributeDecl::nominal(name.text, split_labels(labels.text)))
        }
    }
}

/// Splits a `{a,b,c}` label set into its labels.
fn split_labels(text: &str) -> Vec<String> {
    text.trim_start_matches('{')
        .trim_end_matches('}')
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(String::from)
        .collect()
}
