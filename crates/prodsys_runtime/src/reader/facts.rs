//! Facts file reader.
//!
//! ```text
//! 2
//! Temp = 30
//! Sky = clear
//! ```

use std::path::Path;

use prodsys_foundation::{Fact, Result};

use super::read_source;
use crate::tokenizer::Tokenizer;

/// Parses facts text into the initial facts, in file order.
///
/// # Errors
/// Returns `ParseError` for a bad count, a fact not written `name = value`,
/// or truncated input.
pub fn parse_facts(source: &str) -> Result<Vec<Fact>> {
    parse(&mut Tokenizer::new(source))
}

/// Reads and parses a facts file.
///
/// # Errors
/// Returns `IoError` if the file cannot be read, otherwise as
/// [`parse_facts`].
pub fn read_facts(path: &Path) -> Result<Vec<Fact>> {
    let source = read_source(path)?;
    parse(&mut Tokenizer::new(&source).with_origin(path.display().to_string()))
}

fn parse(tokens: &mut Tokenizer<'_>) -> Result<Vec<Fact>> {
    let count = tokens.expect_count("fact count")?;
    let mut facts = Vec::new();

    for _ in 0..count {
        let name = tokens.expect("fact name")?;
        let equals = tokens.expect("'='")?;
        if equals.text != "=" {
            return Err(tokens.error(
                format!("fact {} must use '=', found '{}'", name.text, equals.text),
                equals,
            ));
        }
        let value = tokens.expect("fact value")?;
        facts.push(Fact::new(name.text, value.text));
    }

    if let Some(token) = tokens.next_token() {
        return Err(tokens.error(
            format!("expected {count} facts, found more starting at '{}'", token.text),
            token,
        ));
    }

    Ok(facts)
}
